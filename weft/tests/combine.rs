use anyhow::Result;
use pretty_assertions::assert_eq;

#[test]
fn combine() -> Result<()> {
	let matches = include_str!("combine_input.match");
	let old = include_str!("combine_old.tiny");
	let new = include_str!("combine_new.tiny");
	let expected = include_str!("combine_output.tiny");

	let matches = weft::match_file::read(matches.as_bytes())?;
	let old = weft::tiny_v2::read(old.as_bytes())?;
	let new = weft::tiny_v2::read(new.as_bytes())?;

	let output = matches.combine(&old, &new)?;

	let actual = weft::tiny_v2::write_string(&output)?;

	assert_eq!(actual, expected, "left: actual, right: expected");

	Ok(())
}

#[test]
fn unresolved_classes_take_their_members_with_them() -> Result<()> {
	let old = include_str!("combine_old.tiny");
	let new = include_str!("combine_new.tiny");

	// the class resolves in the old mappings only, its field in both
	let matches = "c\tq\tmissing\n\tf\tu;;I\tf;;I\n";

	let matches = weft::match_file::read(matches.as_bytes())?;
	let old = weft::tiny_v2::read(old.as_bytes())?;
	let new = weft::tiny_v2::read(new.as_bytes())?;

	let output = matches.combine(&old, &new)?;

	assert_eq!(output.classes.len(), 0);

	Ok(())
}

#[test]
fn fields_resolve_by_name_alone() -> Result<()> {
	let old = include_str!("combine_old.tiny");
	let new = include_str!("combine_new.tiny");

	// the descriptors in the match don't matter for resolution
	let matches = "c\ta\te\n\tf\tb;;WRONG\tf;;WRONG\n";

	let matches = weft::match_file::read(matches.as_bytes())?;
	let old = weft::tiny_v2::read(old.as_bytes())?;
	let new = weft::tiny_v2::read(new.as_bytes())?;

	let output = matches.combine(&old, &new)?;

	let class = output.class(&"com/example/Main".into())
		.expect("the class resolves in both mappings");
	assert_eq!(class.fields.len(), 1);

	Ok(())
}

#[test]
fn methods_need_the_matching_descriptor_to_resolve() -> Result<()> {
	let old = include_str!("combine_old.tiny");
	let new = include_str!("combine_new.tiny");

	// c exists in the old mappings, but as c()V, not c(I)V
	let matches = "c\ta\te\n\tm\tc(I)V\tg()V\n";

	let matches = weft::match_file::read(matches.as_bytes())?;
	let old = weft::tiny_v2::read(old.as_bytes())?;
	let new = weft::tiny_v2::read(new.as_bytes())?;

	let output = matches.combine(&old, &new)?;

	let class = output.class(&"com/example/Main".into())
		.expect("the class resolves in both mappings");
	assert_eq!(class.methods.len(), 0);

	Ok(())
}
