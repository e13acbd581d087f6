//! Functions to read and write matches in their line based textual format.
//!
//! The format is tab separated. A class line opens a class entry, and every
//! indented member line after it belongs to that class entry:
//!
//! ```text
//! c	<oldClassName>	<newClassName>
//! 	m	<oldName>(<oldArgs>)<oldRet>	<newName>(<newArgs>)<newRet>
//! 	f	<oldName>;;<oldType>	<newName>;;<newType>
//! ```
//!
//! Lines containing no tab at all are ignored, which covers blank lines and
//! comments. Member lines appearing before the first class line are dropped.
//! Lines that don't fit any of the shapes above are skipped with a warning;
//! a single bad line never fails the whole read.
//!
//! Some tools write class names wrapped in object descriptor form, `La/b/C;`.
//! That wrapping is stripped on read when a name carries it on both ends.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use crate::tree::matches::{ClassMatch, FieldMatch, Matches, MethodMatch};

/// Reads a match file, by opening the file given by the path.
pub fn read_file(path: impl AsRef<Path>) -> Result<Matches> {
	read(File::open(&path)?)
		.with_context(|| anyhow!("failed to read match file {:?}", path.as_ref()))
}

/// Reads a match from the given reader.
///
/// ```
/// let string = "c\tAold\tAnew\n\tm\tfoo()V\tbar()V\n\tf\tx;;I\ty;;I\n";
///
/// let matches = weft::match_file::read(string.as_bytes()).unwrap();
///
/// assert_eq!(matches.classes.len(), 1);
/// assert_eq!(matches.classes[0].methods.len(), 1);
/// assert_eq!(matches.classes[0].fields.len(), 1);
/// ```
pub fn read(reader: impl Read) -> Result<Matches> {
	let mut matches = Matches::default();

	for (line_number, line) in BufReader::new(reader).lines().enumerate() {
		let line = line?;
		let line_number = line_number + 1;

		if !line.contains('\t') {
			// blank lines and comments
			continue;
		}

		if line.starts_with("c\t") {
			match line.split('\t').collect::<Vec<_>>().as_slice() {
				["c", old, new] => {
					let old = strip_object_wrapper(old);
					let new = strip_object_wrapper(new);
					matches.classes.push(ClassMatch::new(old.into(), new.into()));
				},
				_ => log::warn!("skipping malformed class line {line_number}: {line:?}"),
			}
		} else if line.starts_with("\tm\t") {
			let Some(class) = matches.classes.last_mut() else {
				log::warn!("dropping method line {line_number} before any class line: {line:?}");
				continue;
			};

			match line.split('\t').collect::<Vec<_>>().as_slice() {
				["", "m", old, new] => {
					match (split_method(old), split_method(new)) {
						(Some((old_name, old_desc)), Some((new_name, new_desc))) => {
							class.methods.push(MethodMatch {
								old: old_name.into(),
								old_desc: old_desc.into(),
								new: new_name.into(),
								new_desc: new_desc.into(),
							});
						},
						_ => log::warn!("skipping malformed method line {line_number}: {line:?}"),
					}
				},
				_ => log::warn!("skipping malformed method line {line_number}: {line:?}"),
			}
		} else if line.starts_with("\tf\t") {
			let Some(class) = matches.classes.last_mut() else {
				log::warn!("dropping field line {line_number} before any class line: {line:?}");
				continue;
			};

			match line.split('\t').collect::<Vec<_>>().as_slice() {
				["", "f", old, new] => {
					match (old.split_once(";;"), new.split_once(";;")) {
						(Some((old_name, old_desc)), Some((new_name, new_desc))) => {
							class.fields.push(FieldMatch {
								old: old_name.into(),
								old_desc: old_desc.into(),
								new: new_name.into(),
								new_desc: new_desc.into(),
							});
						},
						_ => log::warn!("skipping malformed field line {line_number}: {line:?}"),
					}
				},
				_ => log::warn!("skipping malformed field line {line_number}: {line:?}"),
			}
		} else {
			log::warn!("skipping unrecognized line {line_number}: {line:?}");
		}
	}

	Ok(matches)
}

/// Strips the object descriptor wrapping, `La/b/C;`, off a class name, if the
/// name carries it on both ends.
fn strip_object_wrapper(name: &str) -> &str {
	name.strip_prefix('L')
		.and_then(|name| name.strip_suffix(';'))
		.unwrap_or(name)
}

/// Splits a `name(args)ret` compound into the name and the descriptor.
///
/// The name is everything before the first `(`, the descriptor is the rest.
fn split_method(compound: &str) -> Option<(&str, &str)> {
	compound.find('(').map(|pos| compound.split_at(pos))
}

/// Writes the given match into a `String`.
///
/// This is equivalent to first calling [`write_vec`] and then [`String::from_utf8`].
///
/// This method is of most use in test cases, where you also use the `pretty_assertions` crate for viewing string diffs.
pub fn write_string(matches: &Matches) -> Result<String> {
	let vec = write_vec(matches)?;
	String::from_utf8(vec).context("failed to convert written match to utf8")
}

/// Writes the given match into a `Vec<u8>`.
pub fn write_vec(matches: &Matches) -> Result<Vec<u8>> {
	let mut vec = Vec::new();
	write(matches, &mut vec)?;
	Ok(vec)
}

/// Writes the given match to the given writer.
///
/// Class names are written plain, without the object descriptor wrapping.
pub fn write(matches: &Matches, w: &mut impl Write) -> Result<()> {
	// the buffering makes it much faster
	let mut w = BufWriter::new(w);
	let w = &mut w;

	for class in &matches.classes {
		writeln!(w, "c\t{}\t{}", class.old, class.new)?;

		for method in &class.methods {
			writeln!(w, "\tm\t{}{}\t{}{}", method.old, method.old_desc, method.new, method.new_desc)?;
		}

		for field in &class.fields {
			writeln!(w, "\tf\t{};;{}\t{};;{}", field.old, field.old_desc, field.new, field.new_desc)?;
		}
	}

	Ok(())
}
