use anyhow::Result;
use pretty_assertions::assert_eq;

#[test]
fn map_class_maps_known_names_and_keeps_unknown_ones() -> Result<()> {
	let input = include_str!("combine_old.tiny");

	let mappings = weft::tiny_v2::read(input.as_bytes())?;
	let remapper = mappings.remapper();

	assert_eq!(remapper.map_class("a"), "com/example/Main");
	assert_eq!(remapper.map_class("q"), "com/example/Gone");
	assert_eq!(remapper.map_class("not/in/the/Tree"), "not/in/the/Tree");

	Ok(())
}

#[test]
fn unknown_names_borrow_from_the_input() -> Result<()> {
	let input = include_str!("combine_old.tiny");

	let mappings = weft::tiny_v2::read(input.as_bytes())?;
	let remapper = mappings.remapper();

	let name = String::from("not/in/the/Tree");
	let mapped = remapper.map_class(&name);

	assert_eq!(mapped, name);

	Ok(())
}
