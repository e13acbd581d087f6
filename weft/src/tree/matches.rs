use crate::tree::names::{ClassName, FieldDescriptor, FieldName, MethodDescriptor, MethodName};

/// A correspondence between two obfuscated naming schemes, usually those of
/// two adjacent versions of the same obfuscated jar.
///
/// The "old" side of every entry names a class, field or method in the older
/// version, the "new" side names its counterpart in the newer version. Both
/// sides are obfuscated names; matches say nothing about deobfuscated names.
///
/// Matches are built once, by one of
/// - reading a match file, see [`crate::match_file`],
/// - diffing two mapping trees, see [`Matches::diff`],
/// - chaining two matches, see [`Matches::chain`],
/// - reversing a match, see [`Matches::reverse`],
///
/// and are not modified afterwards.
///
/// Class matches are stored in the order they were encountered. Old names are
/// not required to be unique; every join over matches takes the first one
/// found, so the earliest entry for a name is the authoritative one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matches {
	pub classes: Vec<ClassMatch>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMatch {
	pub old: ClassName,
	pub new: ClassName,
	pub fields: Vec<FieldMatch>,
	pub methods: Vec<MethodMatch>,
}

impl ClassMatch {
	pub fn new(old: ClassName, new: ClassName) -> ClassMatch {
		ClassMatch {
			old,
			new,
			fields: Vec::new(),
			methods: Vec::new(),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
	pub old: FieldName,
	pub old_desc: FieldDescriptor,
	pub new: FieldName,
	pub new_desc: FieldDescriptor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodMatch {
	pub old: MethodName,
	pub old_desc: MethodDescriptor,
	pub new: MethodName,
	pub new_desc: MethodDescriptor,
}
