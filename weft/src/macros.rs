/// Creates a newtype wrapping a [String], for the various kinds of names and
/// descriptors appearing in mapping trees and matches.
///
/// No validity checking is done on the contents; the formats we read treat
/// every non-tab sequence as a name.
macro_rules! make_name_type {
	(
		$( #[$doc:meta] )*
		$vis:vis $name:ident
	) => {
		$( #[$doc] )*
		#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
		$vis struct $name(String);

		impl $name {
			pub fn as_str(&self) -> &str {
				&self.0
			}

			pub fn into_inner(self) -> String {
				self.0
			}
		}

		impl From<String> for $name {
			fn from(value: String) -> Self {
				$name(value)
			}
		}

		impl From<&str> for $name {
			fn from(value: &str) -> Self {
				$name(value.to_owned())
			}
		}

		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				std::fmt::Display::fmt(&self.0, f)
			}
		}
	}
}

pub(crate) use make_name_type;
