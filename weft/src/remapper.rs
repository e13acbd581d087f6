//! Remapping of field and method descriptors between the two namespaces of a
//! mapping tree.
//!
//! Descriptors in a [`Mappings`][crate::tree::mappings::Mappings] tree are
//! stored in the obfuscated namespace. Whenever the deobfuscated descriptor of
//! a member is needed, for example when joining methods of two trees by their
//! deobfuscated identity, the `L...;` segments of the stored descriptor have
//! to be rewritten through the class name table of the tree. That's what a
//! [`DescRemapper`] does; create one with
//! [`Mappings::remapper`][crate::tree::mappings::Mappings::remapper].

use anyhow::{bail, Result};
use indexmap::IndexMap;
use crate::tree::names::{FieldDescriptor, MethodDescriptor};

/// Maps class names, and with that descriptors, from one namespace of a
/// mapping tree into the other.
///
/// Class names with no entry in the tree are copied over unchanged.
#[derive(Debug)]
pub struct DescRemapper<'a> {
	classes: IndexMap<&'a str, &'a str>,
}

impl<'a> DescRemapper<'a> {
	pub(crate) fn new(classes: IndexMap<&'a str, &'a str>) -> DescRemapper<'a> {
		DescRemapper { classes }
	}

	/// Maps a class name to the other namespace, returning it unchanged if the
	/// tree has no entry for it.
	pub fn map_class<'b>(&'b self, class: &'b str) -> &'b str {
		self.classes.get(class).copied().unwrap_or(class)
	}

	fn map_desc(&self, desc: &str) -> Result<String> {
		let mut s = String::new();

		let mut iter = desc.chars();

		while let Some(ch) = iter.next() {
			s.push(ch);

			if ch == 'L' {
				let mut class_name = String::new();
				for ch in iter.by_ref() {
					class_name.push(ch);
					if ch == ';' {
						break;
					}
				}
				if class_name.pop() != Some(';') {
					bail!("descriptor {desc:?} has a missing semicolon somewhere");
				}

				s.push_str(self.map_class(&class_name));
				s.push(';');
			}
		}

		Ok(s)
	}

	/// Maps a field descriptor to the other namespace.
	pub fn map_field_desc(&self, desc: &FieldDescriptor) -> Result<FieldDescriptor> {
		self.map_desc(desc.as_str()).map(FieldDescriptor::from)
	}

	/// Maps a method descriptor to the other namespace.
	pub fn map_method_desc(&self, desc: &MethodDescriptor) -> Result<MethodDescriptor> {
		self.map_desc(desc.as_str()).map(MethodDescriptor::from)
	}
}
