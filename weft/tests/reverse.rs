use anyhow::Result;
use pretty_assertions::assert_eq;

#[test]
fn reverse_swaps_both_sides() -> Result<()> {
	let input = "c\ta\tb\n\tm\tf(La;)V\tg(Lb;)V\n\tf\tx;;La;\ty;;Lb;\n";

	let matches = weft::match_file::read(input.as_bytes())?;
	let reversed = matches.reverse();

	let class = &reversed.classes[0];
	assert_eq!(class.old.as_str(), "b");
	assert_eq!(class.new.as_str(), "a");

	let method = &class.methods[0];
	assert_eq!(method.old.as_str(), "g");
	assert_eq!(method.old_desc.as_str(), "(Lb;)V");
	assert_eq!(method.new.as_str(), "f");
	assert_eq!(method.new_desc.as_str(), "(La;)V");

	let field = &class.fields[0];
	assert_eq!(field.old.as_str(), "y");
	assert_eq!(field.old_desc.as_str(), "Lb;");
	assert_eq!(field.new.as_str(), "x");
	assert_eq!(field.new_desc.as_str(), "La;");

	Ok(())
}

#[test]
fn reverse_twice_is_the_identity() -> Result<()> {
	let input_a = include_str!("chain_input_a.match");

	let matches = weft::match_file::read(input_a.as_bytes())?;

	assert_eq!(matches.reverse().reverse(), matches);

	Ok(())
}

#[test]
fn reverse_of_mappings_twice_is_the_identity() -> Result<()> {
	let input = include_str!("combine_old.tiny");

	let mappings = weft::tiny_v2::read(input.as_bytes())?;

	assert_eq!(mappings.reverse()?.reverse()?, mappings);

	Ok(())
}

#[test]
fn reverse_of_mappings_remaps_descriptors() -> Result<()> {
	let input = include_str!("combine_old.tiny");

	let mappings = weft::tiny_v2::read(input.as_bytes())?;
	let reversed = mappings.reverse()?;

	reversed.info.namespaces.check_that(["named", "official"])?;

	let class = reversed.class(&"com/example/Main".into())
		.expect("reversed mappings are keyed by the deobfuscated names");
	assert_eq!(class.deobf.as_str(), "a");

	let method = class.method(&"accept".into(), &"(Lcom/example/Main;)V".into())
		.expect("method descriptors are remapped into the named namespace");
	assert_eq!(method.deobf.as_str(), "d");

	Ok(())
}
