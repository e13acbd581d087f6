use anyhow::Result;
use pretty_assertions::assert_eq;
use weft::tree::matches::{ClassMatch, FieldMatch, Matches, MethodMatch};

#[test]
fn read() -> Result<()> {
	let input = "c\tAold\tAnew\n\tm\tfoo()V\tbar()V\n\tf\tx;;I\ty;;I\n";

	let matches = weft::match_file::read(input.as_bytes())?;

	let expected = Matches {
		classes: vec![
			ClassMatch {
				old: "Aold".into(),
				new: "Anew".into(),
				fields: vec![
					FieldMatch {
						old: "x".into(),
						old_desc: "I".into(),
						new: "y".into(),
						new_desc: "I".into(),
					},
				],
				methods: vec![
					MethodMatch {
						old: "foo".into(),
						old_desc: "()V".into(),
						new: "bar".into(),
						new_desc: "()V".into(),
					},
				],
			},
		],
	};

	assert_eq!(matches, expected);

	Ok(())
}

#[test]
fn write_round_trip() -> Result<()> {
	let input = "c\tAold\tAnew\n\tm\tfoo()V\tbar()V\n\tf\tx;;I\ty;;I\n";

	let matches = weft::match_file::read(input.as_bytes())?;
	let written = weft::match_file::write_string(&matches)?;

	assert_eq!(written, input);

	Ok(())
}

#[test]
fn lines_without_tabs_are_ignored() -> Result<()> {
	let input = "some comment\n\nc\ta\tb\nanother comment\n\tf\tx;;I\ty;;I\n";

	let matches = weft::match_file::read(input.as_bytes())?;

	assert_eq!(matches.classes.len(), 1);
	assert_eq!(matches.classes[0].fields.len(), 1);

	Ok(())
}

#[test]
fn member_lines_before_any_class_line_are_dropped() -> Result<()> {
	let input = "\tm\tfoo()V\tbar()V\n\tf\tx;;I\ty;;I\nc\ta\tb\n";

	let matches = weft::match_file::read(input.as_bytes())?;

	assert_eq!(matches.classes.len(), 1);
	assert_eq!(matches.classes[0].fields.len(), 0);
	assert_eq!(matches.classes[0].methods.len(), 0);

	Ok(())
}

#[test]
fn object_wrapping_is_stripped_off_class_names() -> Result<()> {
	let input = "c\tLa/b;\tLc/d;\n";

	let matches = weft::match_file::read(input.as_bytes())?;

	assert_eq!(matches.classes[0].old.as_str(), "a/b");
	assert_eq!(matches.classes[0].new.as_str(), "c/d");

	Ok(())
}

#[test]
fn malformed_member_lines_are_skipped() -> Result<()> {
	// a method compound without parentheses, a field compound without `;;`
	let input = "c\ta\tb\n\tm\tfoo\tbar\n\tf\tx I\ty I\n\tf\tx;;I\ty;;I\n";

	let matches = weft::match_file::read(input.as_bytes())?;

	assert_eq!(matches.classes[0].methods.len(), 0);
	assert_eq!(matches.classes[0].fields.len(), 1);

	Ok(())
}
