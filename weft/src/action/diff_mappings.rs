use anyhow::Result;
use crate::remapper::DescRemapper;
use crate::tree::mappings::{ClassMapping, Mappings};
use crate::tree::matches::{ClassMatch, FieldMatch, Matches, MethodMatch};

impl Matches {
	/// Derives a match between the obfuscated naming schemes of two mapping
	/// trees that share their deobfuscated names.
	///
	/// Top level classes are joined by deobfuscated full name, fields by
	/// deobfuscated name, methods by deobfuscated name and deobfuscated
	/// descriptor; the first entry with an equal name wins in each case. Old
	/// classes with no equally named counterpart are logged and left out of
	/// the result, as are members that don't join.
	///
	/// Inner classes pair up by declaration position: the n-th inner class of
	/// an old class against the n-th inner class of its counterpart, without
	/// comparing names. Old inner classes with no positional counterpart are
	/// dropped.
	pub fn diff(old: &Mappings, new: &Mappings) -> Result<Matches> {
		let old_remapper = old.remapper();
		let new_remapper = new.remapper();

		let mut matches = Matches::default();

		for old_class in old.classes.values() {
			let Some(new_class) = new.class_by_deobf(old_class.deobf.as_str()) else {
				log::warn!("no class named {:?} in the new mappings", old_class.deobf);
				continue;
			};

			diff_class(&mut matches, &old_remapper, &new_remapper, old_class, new_class)?;
		}

		Ok(matches)
	}
}

fn diff_class(
	matches: &mut Matches,
	old_remapper: &DescRemapper<'_>,
	new_remapper: &DescRemapper<'_>,
	old_class: &ClassMapping,
	new_class: &ClassMapping,
) -> Result<()> {
	let mut class_match = ClassMatch::new(old_class.obf.clone(), new_class.obf.clone());

	for old_field in old_class.fields.values() {
		if let Some(new_field) = new_class.field_by_deobf(old_field.deobf.as_str()) {
			class_match.fields.push(FieldMatch {
				old: old_field.obf.clone(),
				old_desc: old_field.desc.clone(),
				new: new_field.obf.clone(),
				new_desc: new_field.desc.clone(),
			});
		}
	}

	for old_method in old_class.methods.values() {
		let deobf_desc = old_remapper.map_method_desc(&old_method.desc)?;

		if let Some(new_method) = new_class.method_by_deobf(new_remapper, old_method.deobf.as_str(), &deobf_desc)? {
			class_match.methods.push(MethodMatch {
				old: old_method.obf.clone(),
				old_desc: old_method.desc.clone(),
				new: new_method.obf.clone(),
				new_desc: new_method.desc.clone(),
			});
		}
	}

	matches.classes.push(class_match);

	// inner classes pair up by position, not by name
	for (old_inner, new_inner) in old_class.inner.iter().zip(&new_class.inner) {
		diff_class(matches, old_remapper, new_remapper, old_inner, new_inner)?;
	}

	Ok(())
}
