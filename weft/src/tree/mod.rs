pub mod mappings;
pub mod matches;

pub mod names {
	use anyhow::{bail, Error, Result};
	use crate::macros::make_name_type;

	make_name_type!(
		/// A fully qualified class name in binary form, like `a/b/C`.
		///
		/// Inner classes are separated from their declaring class with `$`.
		pub ClassName
	);
	make_name_type!(pub FieldName);
	make_name_type!(pub MethodName);
	make_name_type!(
		/// A field descriptor, like `I` or `La/b/C;`.
		pub FieldDescriptor
	);
	make_name_type!(
		/// A method descriptor including the return type, like `(JLa/b/C;)V`.
		pub MethodDescriptor
	);

	impl ClassName {
		/// Returns the name of the declaring class, if this names an inner class.
		pub fn declaring_class(&self) -> Option<&str> {
			self.as_str().rsplit_once('$').map(|(declaring, _)| declaring)
		}
	}

	/// The names of the two namespaces of a mapping tree, source namespace first.
	///
	/// By convention the source namespace holds the obfuscated names and the
	/// target namespace holds the deobfuscated ones.
	#[derive(Debug, Clone, PartialEq)]
	pub struct Namespaces {
		pub(crate) names: [String; 2],
	}

	impl Namespaces {
		pub fn names(&self) -> &[String; 2] {
			&self.names
		}

		/// Returns an error if the names of `self` aren't the names given in the argument.
		/// This can be used to check that after reading mappings, you have the correct namespaces in them.
		pub fn check_that(&self, names: [&str; 2]) -> Result<()> {
			if self.names != names {
				bail!("expected namespaces {names:?}, got {self:?}");
			}
			Ok(())
		}

		pub(crate) fn swap(&self) -> Namespaces {
			let [a, b] = self.names.clone();
			Namespaces { names: [b, a] }
		}
	}

	impl TryFrom<[String; 2]> for Namespaces {
		type Error = Error;

		fn try_from(value: [String; 2]) -> Result<Self> {
			if value.iter().any(|i| i.is_empty()) {
				bail!("found empty namespace name in {value:?}, every namespace name must be non-empty");
			}

			Ok(Namespaces { names: value })
		}
	}

	impl From<Namespaces> for [String; 2] {
		fn from(value: Namespaces) -> Self {
			value.names
		}
	}
}
