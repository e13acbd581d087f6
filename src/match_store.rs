use std::path::PathBuf;
use anyhow::{anyhow, bail, Context, Result};
use weft::tree::matches::Matches;
use crate::versions::VersionOrder;

/// The file extensions a match between two versions may be stored under.
const MATCH_EXTENSIONS: [&str; 2] = ["match", "csrg"];

/// A layered set of match store directories.
///
/// Lookups try every store in order; the first directory holding a match file
/// for the requested version pair wins. Match files are named
/// `<from>-<to>.match` (or `.csrg`).
#[derive(Debug, Clone)]
pub(crate) struct MatchStores {
	stores: Vec<PathBuf>,
}

impl Default for MatchStores {
	fn default() -> MatchStores {
		MatchStores::new(vec![
			PathBuf::from("mappings/matches"),
			PathBuf::from("mappings/legacy-intermediary/matches"),
			PathBuf::from("mappings/modern-intermediary/matches"),
		])
	}
}

impl MatchStores {
	pub(crate) fn new(stores: Vec<PathBuf>) -> MatchStores {
		MatchStores { stores }
	}

	fn find_match_file(&self, from: &str, to: &str) -> Option<PathBuf> {
		for store in &self.stores {
			for extension in MATCH_EXTENSIONS {
				let path = store.join(format!("{from}-{to}.{extension}"));
				if path.is_file() {
					return Some(path);
				}
			}
		}
		None
	}

	/// Reads the match between two adjacent versions, if any store has one.
	pub(crate) fn get_match(&self, from: &str, to: &str) -> Result<Option<Matches>> {
		self.find_match_file(from, to)
			.map(weft::match_file::read_file)
			.transpose()
	}

	/// Chains the matches of every adjacent version pair between `from` and
	/// `to` into a single match of `from` against `to`.
	///
	/// Fails if `from` isn't strictly before `to` in the given order, or if
	/// any adjacent pair in between has no match in any store. No partial
	/// chain is ever returned.
	pub(crate) fn chain_matches(&self, order: &VersionOrder, from: &str, to: &str) -> Result<Matches> {
		let versions: Vec<&str> = order.range(from, to)?
			.iter()
			.map(|x| x.as_str())
			.collect();
		self.chain_versions(&versions)
	}

	/// Like [`MatchStores::chain_matches`], but over an explicitly given
	/// version sequence.
	pub(crate) fn chain_versions(&self, versions: &[&str]) -> Result<Matches> {
		if versions.len() < 2 {
			bail!("chaining needs at least two versions, got {versions:?}");
		}

		let mut chained: Option<Matches> = None;

		for pair in versions.windows(2) {
			let (from, to) = (pair[0], pair[1]);
			log::info!("using match {from} -> {to}");

			let matches = self.get_match(from, to)?
				.with_context(|| anyhow!("can't find a match from {from:?} to {to:?} in any store"))?;

			chained = Some(match chained {
				None => matches,
				Some(chained) => {
					let chained = chained.chain(&matches);
					log::info!("found {} class matches", chained.classes.len());
					chained
				},
			});
		}

		chained.context("no matches were chained")
	}
}
