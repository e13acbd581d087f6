use indexmap::IndexMap;
use crate::tree::matches::{ClassMatch, FieldMatch, Matches, MethodMatch};

impl Matches {
	/// Chains two matches together.
	///
	/// If `self` matches version A against version B,
	/// and `other` matches version B against version C,
	/// this method returns a match of A against C.
	///
	/// Entries only survive when both `self`'s new side and `other`'s old side
	/// name them; everything else is dropped, so coverage can only shrink over
	/// a chain. Where a name appears more than once on `other`'s old side, the
	/// first entry wins.
	///
	/// Classes join on the class name, fields on the field name, methods on
	/// name plus descriptor, since overloaded methods share a name.
	pub fn chain(&self, other: &Matches) -> Matches {
		// index the join keys up front, first entry winning, instead of
		// rescanning `other` for every entry of `self`
		let mut other_classes: IndexMap<&str, &ClassMatch> = IndexMap::new();
		for other_class in &other.classes {
			other_classes.entry(other_class.old.as_str()).or_insert(other_class);
		}

		let mut chained = Matches::default();

		for class in &self.classes {
			let Some(other_class) = other_classes.get(class.new.as_str()) else {
				continue;
			};

			let mut chained_class = ClassMatch::new(class.old.clone(), other_class.new.clone());

			let mut other_fields: IndexMap<&str, &FieldMatch> = IndexMap::new();
			for other_field in &other_class.fields {
				other_fields.entry(other_field.old.as_str()).or_insert(other_field);
			}
			for field in &class.fields {
				if let Some(other_field) = other_fields.get(field.new.as_str()) {
					chained_class.fields.push(FieldMatch {
						old: field.old.clone(),
						old_desc: field.old_desc.clone(),
						new: other_field.new.clone(),
						new_desc: other_field.new_desc.clone(),
					});
				}
			}

			let mut other_methods: IndexMap<(&str, &str), &MethodMatch> = IndexMap::new();
			for other_method in &other_class.methods {
				other_methods.entry((other_method.old.as_str(), other_method.old_desc.as_str()))
					.or_insert(other_method);
			}
			for method in &class.methods {
				if let Some(other_method) = other_methods.get(&(method.new.as_str(), method.new_desc.as_str())) {
					chained_class.methods.push(MethodMatch {
						old: method.old.clone(),
						old_desc: method.old_desc.clone(),
						new: other_method.new.clone(),
						new_desc: other_method.new_desc.clone(),
					});
				}
			}

			chained.classes.push(chained_class);
		}

		chained
	}

	/// Produces the inverse correspondence: the old and new side of every
	/// class, field and method entry swap places, descriptors included.
	///
	/// Reversing twice gives back a structurally equal match.
	pub fn reverse(&self) -> Matches {
		Matches {
			classes: self.classes.iter()
				.map(|class| ClassMatch {
					old: class.new.clone(),
					new: class.old.clone(),
					fields: class.fields.iter()
						.map(|field| FieldMatch {
							old: field.new.clone(),
							old_desc: field.new_desc.clone(),
							new: field.old.clone(),
							new_desc: field.old_desc.clone(),
						})
						.collect(),
					methods: class.methods.iter()
						.map(|method| MethodMatch {
							old: method.new.clone(),
							old_desc: method.new_desc.clone(),
							new: method.old.clone(),
							new_desc: method.old_desc.clone(),
						})
						.collect(),
				})
				.collect(),
		}
	}
}
