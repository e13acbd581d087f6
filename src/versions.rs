use anyhow::{anyhow, bail, Context, Result};

/// Every known version, oldest first.
///
/// Match files only exist for adjacent entries of this list; any other pair of
/// versions is reached by chaining over the entries in between.
const VERSIONS: [&str; 16] = [
	"1.12",
	"1.12.1",
	"1.12.2",
	"1.13",
	"1.13.1",
	"1.13.2",
	"1.14",
	"1.14.1",
	"1.14.2",
	"1.14.3",
	"1.14.4",
	"1.15",
	"1.15.1",
	"1.15.2",
	"1.16",
	"1.16.1",
];

/// The fixed total order over versions.
///
/// Constructed once per run and passed by reference to everything that needs
/// to compare versions or enumerate adjacent pairs.
#[derive(Debug, Clone)]
pub(crate) struct VersionOrder {
	versions: Vec<String>,
}

impl Default for VersionOrder {
	fn default() -> VersionOrder {
		VersionOrder {
			versions: VERSIONS.iter().map(|x| (*x).to_owned()).collect(),
		}
	}
}

impl VersionOrder {
	fn index_of(&self, version: &str) -> Result<usize> {
		self.versions.iter().position(|x| x == version)
			.with_context(|| anyhow!("unknown version {version:?}"))
	}

	/// Returns the contiguous run of versions from `from` to `to`, both inclusive.
	///
	/// Fails if either version is unknown, or if `from` isn't strictly before
	/// `to` in the order.
	pub(crate) fn range(&self, from: &str, to: &str) -> Result<&[String]> {
		let from_index = self.index_of(from)?;
		let to_index = self.index_of(to)?;

		if from_index >= to_index {
			bail!("{from:?} is not strictly before {to:?} in the version order");
		}

		Ok(&self.versions[from_index..=to_index])
	}
}

#[cfg(test)]
mod testing {
	use super::*;

	#[test]
	fn range() -> Result<()> {
		let order = VersionOrder::default();

		let range = order.range("1.14.4", "1.15.1")?;
		assert_eq!(range, ["1.14.4", "1.15", "1.15.1"]);

		Ok(())
	}

	#[test]
	fn range_rejects_wrong_direction() {
		let order = VersionOrder::default();

		assert!(order.range("1.15.1", "1.14.4").is_err());
		assert!(order.range("1.14.4", "1.14.4").is_err());
	}

	#[test]
	fn range_rejects_unknown_versions() {
		let order = VersionOrder::default();

		assert!(order.range("0.0.0", "1.14.4").is_err());
		assert!(order.range("1.14.4", "0.0.0").is_err());
	}
}
