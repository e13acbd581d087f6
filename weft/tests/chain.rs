use anyhow::Result;
use pretty_assertions::assert_eq;
use weft::tree::matches::Matches;

#[test]
fn chain() -> Result<()> {
	let input_a = include_str!("chain_input_a.match");
	let input_b = include_str!("chain_input_b.match");
	let expected = include_str!("chain_output.match");

	let input_a = weft::match_file::read(input_a.as_bytes())?;
	let input_b = weft::match_file::read(input_b.as_bytes())?;

	let output = input_a.chain(&input_b);

	let actual = weft::match_file::write_string(&output)?;

	assert_eq!(actual, expected, "left: actual, right: expected");

	Ok(())
}

#[test]
fn chain_takes_the_first_entry_for_a_name() -> Result<()> {
	let input_a = "c\ta\tb\n";
	let input_b = "c\tb\tfirst\nc\tb\tsecond\n";

	let input_a = weft::match_file::read(input_a.as_bytes())?;
	let input_b = weft::match_file::read(input_b.as_bytes())?;

	let output = input_a.chain(&input_b);

	assert_eq!(output.classes.len(), 1);
	assert_eq!(output.classes[0].old.as_str(), "a");
	assert_eq!(output.classes[0].new.as_str(), "first");

	Ok(())
}

#[test]
fn chain_of_disjoint_matches_is_empty() -> Result<()> {
	let input_a = "c\ta\tb\n\tf\tx;;I\ty;;I\n";
	let input_b = "c\tunrelated\tz\n";

	let input_a = weft::match_file::read(input_a.as_bytes())?;
	let input_b = weft::match_file::read(input_b.as_bytes())?;

	let output = input_a.chain(&input_b);

	assert_eq!(output, Matches::default());

	Ok(())
}

#[test]
fn chain_joins_methods_on_name_and_descriptor() -> Result<()> {
	// g exists on both sides, but with different descriptors
	let input_a = "c\ta\tb\n\tm\tf(I)V\tg(I)V\n";
	let input_b = "c\tb\tz\n\tm\tg(J)V\th(J)V\n";

	let input_a = weft::match_file::read(input_a.as_bytes())?;
	let input_b = weft::match_file::read(input_b.as_bytes())?;

	let output = input_a.chain(&input_b);

	assert_eq!(output.classes.len(), 1);
	assert_eq!(output.classes[0].methods, vec![]);

	Ok(())
}
