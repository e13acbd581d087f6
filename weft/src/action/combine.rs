use anyhow::Result;
use crate::tree::mappings::{ClassMapping, FieldMapping, MappingInfo, Mappings, MethodMapping};
use crate::tree::matches::Matches;
use crate::tree::names::Namespaces;

impl Matches {
	/// Combines two mapping trees using this match.
	///
	/// `old` must map the obfuscated names of the old version to deobfuscated
	/// ones, and `new` the obfuscated names of the new version. The result
	/// maps the old deobfuscated names to the new deobfuscated ones, which is
	/// what a migration mapping between the two versions looks like.
	///
	/// Every entry of the result comes from a match entry that resolved in
	/// both trees. A class that's missing from either tree is skipped with all
	/// its members; a field or method pair that doesn't resolve on both sides
	/// is skipped on its own. These skips only shrink coverage and are logged
	/// at debug level. Where the match holds duplicate entries for a name, the
	/// first one wins.
	///
	/// Fields resolve by name alone, since fields of a class cannot share a
	/// name; methods resolve by name and descriptor.
	pub fn combine(&self, old: &Mappings, new: &Mappings) -> Result<Mappings> {
		let old_remapper = old.remapper();

		let namespaces = Namespaces::try_from([
			old.info.namespaces.names()[1].clone(),
			new.info.namespaces.names()[1].clone(),
		])?;
		let mut combined = Mappings::new(MappingInfo { namespaces });

		for class_match in &self.classes {
			let Some(old_class) = old.class(&class_match.old) else {
				log::debug!("no class {:?} in the old mappings, skipping it and its members", class_match.old);
				continue;
			};
			let Some(new_class) = new.class(&class_match.new) else {
				log::debug!("no class {:?} in the new mappings, skipping it and its members", class_match.new);
				continue;
			};

			if combined.class(&old_class.deobf).is_some() {
				log::debug!("already emitted a class for {:?}, skipping duplicate match entry", old_class.deobf);
				continue;
			}

			let mut class = ClassMapping::new(old_class.deobf.clone(), new_class.deobf.clone());

			for field_match in &class_match.fields {
				let (Some(old_field), Some(new_field)) = (
					old_class.field(&field_match.old),
					new_class.field(&field_match.new),
				) else {
					log::debug!("field pair {:?} -> {:?} doesn't resolve in both mappings, skipping",
						field_match.old, field_match.new);
					continue;
				};

				if class.field(&old_field.deobf).is_some() {
					continue;
				}
				class.add_field(FieldMapping {
					obf: old_field.deobf.clone(),
					desc: old_remapper.map_field_desc(&old_field.desc)?,
					deobf: new_field.deobf.clone(),
				})?;
			}

			for method_match in &class_match.methods {
				let (Some(old_method), Some(new_method)) = (
					old_class.method(&method_match.old, &method_match.old_desc),
					new_class.method(&method_match.new, &method_match.new_desc),
				) else {
					log::debug!("method pair {:?}{:?} -> {:?}{:?} doesn't resolve in both mappings, skipping",
						method_match.old, method_match.old_desc, method_match.new, method_match.new_desc);
					continue;
				};

				let deobf_desc = old_remapper.map_method_desc(&old_method.desc)?;
				if class.method(&old_method.deobf, &deobf_desc).is_some() {
					continue;
				}
				class.add_method(MethodMapping {
					obf: old_method.deobf.clone(),
					desc: deobf_desc,
					deobf: new_method.deobf.clone(),
				})?;
			}

			combined.add_class(class)?;
		}

		Ok(combined)
	}
}
