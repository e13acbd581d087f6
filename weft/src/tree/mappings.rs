use anyhow::{bail, Result};
use indexmap::IndexMap;
use indexmap::map::Entry;
use crate::remapper::DescRemapper;
use crate::tree::names::{ClassName, FieldDescriptor, FieldName, MethodDescriptor, MethodName, Namespaces};

/// A mapping tree with exactly two namespaces: obfuscated names on the left,
/// deobfuscated names on the right.
///
/// Top level classes are keyed by their obfuscated full name, in insertion
/// order. Inner classes hang off their declaring class, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Mappings {
	pub info: MappingInfo,
	pub classes: IndexMap<ClassName, ClassMapping>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MappingInfo {
	pub namespaces: Namespaces,
}

impl Mappings {
	pub fn new(info: MappingInfo) -> Mappings {
		Mappings {
			info,
			classes: IndexMap::new(),
		}
	}

	pub(crate) fn add_class(&mut self, child: ClassMapping) -> Result<&mut ClassMapping> {
		match self.classes.entry(child.obf.clone()) {
			Entry::Occupied(e) => {
				bail!("cannot add class {child:?} for key {:?}, as there's already one: {:?}", e.key(), e.get());
			},
			Entry::Vacant(e) => {
				Ok(e.insert(child))
			},
		}
	}

	/// Looks up a top level class by its obfuscated full name.
	pub fn class(&self, obf: &ClassName) -> Option<&ClassMapping> {
		self.classes.get(obf)
	}

	/// Looks up a top level class by its deobfuscated full name.
	///
	/// The first class with that name wins.
	pub fn class_by_deobf(&self, deobf: &str) -> Option<&ClassMapping> {
		self.classes.values().find(|class| class.deobf.as_str() == deobf)
	}

	/// Creates a [`DescRemapper`] that maps descriptors from the obfuscated
	/// namespace into the deobfuscated one, using every class of this tree,
	/// inner classes included.
	pub fn remapper(&self) -> DescRemapper<'_> {
		fn walk<'a>(classes: &mut IndexMap<&'a str, &'a str>, class: &'a ClassMapping) {
			classes.insert(class.obf.as_str(), class.deobf.as_str());
			for inner in &class.inner {
				walk(classes, inner);
			}
		}

		let mut classes = IndexMap::new();
		for class in self.classes.values() {
			walk(&mut classes, class);
		}
		DescRemapper::new(classes)
	}

	/// Swaps the two namespaces throughout the whole tree, producing a new tree.
	///
	/// The new tree is keyed by the deobfuscated names, and all descriptors are
	/// remapped into the deobfuscated namespace.
	///
	/// This fails if swapping produces a duplicate key, i.e. if two classes of
	/// a level share a deobfuscated name, or two members of a class do.
	pub fn reverse(&self) -> Result<Mappings> {
		let remapper = self.remapper();

		let mut reversed = Mappings::new(MappingInfo {
			namespaces: self.info.namespaces.swap(),
		});
		for class in self.classes.values() {
			reversed.add_class(class.reverse(&remapper)?)?;
		}
		Ok(reversed)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMapping {
	pub obf: ClassName,
	pub deobf: ClassName,
	pub fields: IndexMap<FieldName, FieldMapping>,
	pub methods: IndexMap<MethodKey, MethodMapping>,
	pub inner: Vec<ClassMapping>,
}

impl ClassMapping {
	pub fn new(obf: ClassName, deobf: ClassName) -> ClassMapping {
		ClassMapping {
			obf,
			deobf,
			fields: IndexMap::new(),
			methods: IndexMap::new(),
			inner: Vec::new(),
		}
	}

	pub(crate) fn add_field(&mut self, child: FieldMapping) -> Result<&mut FieldMapping> {
		match self.fields.entry(child.obf.clone()) {
			Entry::Occupied(e) => {
				bail!("cannot add field {child:?} for key {:?}, as there's already one: {:?}", e.key(), e.get());
			},
			Entry::Vacant(e) => {
				Ok(e.insert(child))
			},
		}
	}

	pub(crate) fn add_method(&mut self, child: MethodMapping) -> Result<&mut MethodMapping> {
		let key = MethodKey {
			name: child.obf.clone(),
			desc: child.desc.clone(),
		};
		match self.methods.entry(key) {
			Entry::Occupied(e) => {
				bail!("cannot add method {child:?} for key {:?}, as there's already one: {:?}", e.key(), e.get());
			},
			Entry::Vacant(e) => {
				Ok(e.insert(child))
			},
		}
	}

	/// Looks up a field by its obfuscated name.
	///
	/// No descriptor is needed here: unlike methods, fields of a class cannot
	/// share a name.
	pub fn field(&self, obf: &FieldName) -> Option<&FieldMapping> {
		self.fields.get(obf)
	}

	/// Looks up a field by its deobfuscated name, first match wins.
	pub fn field_by_deobf(&self, deobf: &str) -> Option<&FieldMapping> {
		self.fields.values().find(|field| field.deobf.as_str() == deobf)
	}

	/// Looks up a method by its obfuscated name and obfuscated descriptor.
	pub fn method(&self, obf: &MethodName, desc: &MethodDescriptor) -> Option<&MethodMapping> {
		let key = MethodKey {
			name: obf.clone(),
			desc: desc.clone(),
		};
		self.methods.get(&key)
	}

	/// Looks up a method by its deobfuscated name and deobfuscated descriptor,
	/// first match wins.
	///
	/// Since descriptors are stored in the obfuscated namespace, the remapper
	/// of the owning tree is needed to compute each candidate's deobfuscated
	/// descriptor.
	pub fn method_by_deobf(&self, remapper: &DescRemapper<'_>, deobf: &str, deobf_desc: &MethodDescriptor)
			-> Result<Option<&MethodMapping>> {
		for method in self.methods.values() {
			if method.deobf.as_str() == deobf && &remapper.map_method_desc(&method.desc)? == deobf_desc {
				return Ok(Some(method));
			}
		}
		Ok(None)
	}

	fn reverse(&self, remapper: &DescRemapper<'_>) -> Result<ClassMapping> {
		let mut class = ClassMapping::new(self.deobf.clone(), self.obf.clone());
		for field in self.fields.values() {
			class.add_field(FieldMapping {
				obf: field.deobf.clone(),
				desc: remapper.map_field_desc(&field.desc)?,
				deobf: field.obf.clone(),
			})?;
		}
		for method in self.methods.values() {
			class.add_method(MethodMapping {
				obf: method.deobf.clone(),
				desc: remapper.map_method_desc(&method.desc)?,
				deobf: method.obf.clone(),
			})?;
		}
		for inner in &self.inner {
			class.inner.push(inner.reverse(remapper)?);
		}
		Ok(class)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodKey {
	pub name: MethodName,
	pub desc: MethodDescriptor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldMapping {
	pub obf: FieldName,
	pub desc: FieldDescriptor,
	pub deobf: FieldName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodMapping {
	pub obf: MethodName,
	pub desc: MethodDescriptor,
	pub deobf: MethodName,
}
