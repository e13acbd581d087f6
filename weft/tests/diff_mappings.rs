use anyhow::Result;
use pretty_assertions::assert_eq;
use weft::tree::matches::Matches;

#[test]
fn diff() -> Result<()> {
	let old = include_str!("diff_input_old.tiny");
	let new = include_str!("diff_input_new.tiny");
	let expected = include_str!("diff_output.match");

	let old = weft::tiny_v2::read(old.as_bytes())?;
	let new = weft::tiny_v2::read(new.as_bytes())?;

	let output = Matches::diff(&old, &new)?;

	let actual = weft::match_file::write_string(&output)?;

	assert_eq!(actual, expected, "left: actual, right: expected");

	Ok(())
}

#[test]
fn diff_of_a_tree_against_itself_is_the_identity() -> Result<()> {
	let input = include_str!("diff_input_old.tiny");

	let mappings = weft::tiny_v2::read(input.as_bytes())?;

	let output = Matches::diff(&mappings, &mappings)?;

	assert!(!output.classes.is_empty());
	for class in &output.classes {
		assert_eq!(class.old, class.new);
		for field in &class.fields {
			assert_eq!(field.old, field.new);
			assert_eq!(field.old_desc, field.new_desc);
		}
		for method in &class.methods {
			assert_eq!(method.old, method.new);
			assert_eq!(method.old_desc, method.new_desc);
		}
	}

	Ok(())
}

#[test]
fn unmatched_classes_are_left_out() -> Result<()> {
	let old = include_str!("diff_input_old.tiny");
	let new = include_str!("diff_input_new.tiny");

	let old = weft::tiny_v2::read(old.as_bytes())?;
	let new = weft::tiny_v2::read(new.as_bytes())?;

	let output = Matches::diff(&old, &new)?;

	// com/example/Gone has no counterpart in the new mappings
	assert!(output.classes.iter().all(|class| class.old.as_str() != "q"));

	Ok(())
}

#[test]
fn inner_classes_pair_by_position() -> Result<()> {
	let old = include_str!("diff_input_old.tiny");
	let new = include_str!("diff_input_new.tiny");

	let old = weft::tiny_v2::read(old.as_bytes())?;
	let new = weft::tiny_v2::read(new.as_bytes())?;

	let output = Matches::diff(&old, &new)?;

	// a$b is named Main$One, e$f is named Main$Two: they still pair up,
	// because inner classes pair by declaration position, not by name
	let inner = output.classes.iter()
		.find(|class| class.old.as_str() == "a$b")
		.expect("the first inner class is matched");
	assert_eq!(inner.new.as_str(), "e$f");

	Ok(())
}
