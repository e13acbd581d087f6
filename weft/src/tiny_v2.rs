//! Functions to read and write mapping trees in the "Tiny v2" format,
//! restricted to exactly two namespaces.
//!
//! # Reading
//! You can read a `.tiny` file using the [`read_file`] method, by passing a path.
//! If you already have a [`Read`]er, you can use the [`read`] method.
//!
//! It's recommended to check that the namespaces are indeed the ones expected.
//! See [`Namespaces::check_that`] for more info.
//!
//! A class whose obfuscated name contains a `$` is nested under its declaring
//! class, provided that class appeared earlier in the file. File order is
//! taken as declaration order. A class whose declaring class never appeared
//! stays at the top level.
//!
//! # Writing
//! For writing `.tiny` files, there are the [`write`][fn@write] as well as the
//! [`write_vec`] and [`write_string`] methods.
//!
//! Writing walks the tree depth first, in insertion order; nothing is sorted.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use anyhow::{anyhow, bail, Context, Result};
use indexmap::IndexMap;
use crate::lines::tiny_line::TinyLine;
use crate::lines::WithMoreIdentIter;
use crate::tree::mappings::{ClassMapping, FieldMapping, MappingInfo, Mappings, MethodMapping};
use crate::tree::names::{ClassName, Namespaces};

/// Reads a `.tiny` file (tiny v2, two namespaces), by opening the file given by the path.
///
/// It's recommended to check that the namespaces are indeed the ones expected.
/// See [`Namespaces::check_that`] for more info.
pub fn read_file(path: impl AsRef<Path>) -> Result<Mappings> {
	read(File::open(&path)?)
		.with_context(|| anyhow!("failed to read mappings file {:?} as tiny v2 file", path.as_ref()))
}

/// Reads the tiny v2 format, from the given reader.
///
/// It's recommended to check that the namespaces are indeed the ones expected.
/// See [`Namespaces::check_that`] for more info.
///
/// ```
/// # use pretty_assertions::assert_eq;
/// let string = "\
/// tiny\t2\t0\tofficial\tnamed
/// c\ta\tcom/example/Main
/// \tf\tI\tb\tcount
/// \tm\t()V\tc\trun
/// c\ta$d\tcom/example/Main$Inner
/// ";
///
/// let reader = &mut string.as_bytes();
/// let mappings = weft::tiny_v2::read(reader).unwrap();
///
/// mappings.info.namespaces.check_that(["official", "named"]).unwrap();
/// assert_eq!(mappings.classes.len(), 1);
/// assert_eq!(mappings.classes[0].inner.len(), 1);
/// ```
pub fn read(reader: impl Read) -> Result<Mappings> {
	let mut lines = BufReader::new(reader)
		.lines()
		.enumerate()
		.map(|(line_number, line)| -> Result<TinyLine> {
			TinyLine::new(line_number + 1, &line?)
		})
		.peekable();

	let mut header = lines.next().context("no header line")??;

	if header.first_field != "tiny" || header.next()? != "2" || header.next()? != "0" {
		bail!("header version isn't tiny v2.0, in line {header:?}");
	}

	let (namespace_a, namespace_b) = header.pair()?;
	let namespaces = Namespaces::try_from([namespace_a, namespace_b])?;

	let mut mappings = Mappings::new(MappingInfo { namespaces });

	WithMoreIdentIter::new(&mut lines).on_every_line(|iter, line| {
		if line.first_field == "c" {
			let (obf, deobf) = line.pair()?;
			let mut class = ClassMapping::new(obf.into(), deobf.into());

			iter.next_level().on_every_line(|_, mut line| {
				if line.first_field == "f" {
					let desc = line.next()?.into();
					let (obf, deobf) = line.pair()?;
					class.add_field(FieldMapping {
						obf: obf.into(),
						desc,
						deobf: deobf.into(),
					})?;
					Ok(())
				} else if line.first_field == "m" {
					let desc = line.next()?.into();
					let (obf, deobf) = line.pair()?;
					class.add_method(MethodMapping {
						obf: obf.into(),
						desc,
						deobf: deobf.into(),
					})?;
					Ok(())
				} else {
					Ok(())
				}
			}).context("reading class sub-sections")?;

			nest_or_add(&mut mappings, class)
		} else {
			Ok(())
		}
	}).context("reading lines")?;

	if let Some(line) = lines.next() {
		bail!("expected end of input, got: {line:?}");
	}

	Ok(mappings)
}

/// Hangs the class under its declaring class when that was already read,
/// otherwise adds it at the top level.
fn nest_or_add(mappings: &mut Mappings, class: ClassMapping) -> Result<()> {
	let declaring = class.obf.declaring_class()
		.filter(|declaring| find_class(&mappings.classes, declaring).is_some())
		.map(str::to_owned);

	if let Some(declaring) = declaring {
		let parent = find_class_mut(&mut mappings.classes, &declaring)
			.with_context(|| anyhow!("no class {declaring:?}"))?;
		if parent.inner.iter().any(|inner| inner.obf == class.obf) {
			bail!("inner class {:?} already nested under {declaring:?}", class.obf);
		}
		parent.inner.push(class);
	} else {
		mappings.add_class(class)?;
	}

	Ok(())
}

fn find_class<'a>(classes: &'a IndexMap<ClassName, ClassMapping>, name: &str) -> Option<&'a ClassMapping> {
	fn walk<'a>(class: &'a ClassMapping, name: &str) -> Option<&'a ClassMapping> {
		if class.obf.as_str() == name {
			return Some(class);
		}
		class.inner.iter().find_map(|inner| walk(inner, name))
	}

	classes.values().find_map(|class| walk(class, name))
}

fn find_class_mut<'a>(classes: &'a mut IndexMap<ClassName, ClassMapping>, name: &str) -> Option<&'a mut ClassMapping> {
	fn walk<'a>(class: &'a mut ClassMapping, name: &str) -> Option<&'a mut ClassMapping> {
		if class.obf.as_str() == name {
			return Some(class);
		}
		class.inner.iter_mut().find_map(|inner| walk(inner, name))
	}

	classes.values_mut().find_map(|class| walk(class, name))
}

/// Writes the given mappings into a `String`, in the tiny v2 format.
///
/// If the mapping somehow produces invalid UTF-8, then this method fails.
///
/// This is equivalent to first calling [`write_vec`] and then [`String::from_utf8`].
///
/// This method is of most use in test cases, where you also use the `pretty_assertions` crate for viewing string diffs.
pub fn write_string(mappings: &Mappings) -> Result<String> {
	let vec = write_vec(mappings)?;
	String::from_utf8(vec).context("failed to convert written mappings to utf8")
}

/// Writes the given mappings into a `Vec<u8>`, in the tiny v2 format.
///
/// This is equivalent to letting [`write`][fn@write] write into a `Vec<u8>`.
pub fn write_vec(mappings: &Mappings) -> Result<Vec<u8>> {
	let mut vec = Vec::new();
	write(mappings, &mut vec)?;
	Ok(vec)
}

/// Writes the given mappings to the given writer, in the tiny v2 format.
///
/// Classes come out in insertion order, each directly followed by its fields,
/// methods and then its inner classes, depth first in declaration order.
pub fn write(mappings: &Mappings, w: &mut impl Write) -> Result<()> {
	// the buffering makes it much faster
	let mut w = BufWriter::new(w);
	let w = &mut w;

	write!(w, "tiny\t2\t0")?;
	for namespace in mappings.info.namespaces.names() {
		write!(w, "\t{namespace}")?;
	}
	writeln!(w)?;

	for class in mappings.classes.values() {
		write_class(w, class)?;
	}

	Ok(())
}

fn write_class(w: &mut impl Write, class: &ClassMapping) -> Result<()> {
	writeln!(w, "c\t{}\t{}", class.obf, class.deobf)?;

	for field in class.fields.values() {
		writeln!(w, "\tf\t{}\t{}\t{}", field.desc, field.obf, field.deobf)?;
	}

	for method in class.methods.values() {
		writeln!(w, "\tm\t{}\t{}\t{}", method.desc, method.obf, method.deobf)?;
	}

	for inner in &class.inner {
		write_class(w, inner)?;
	}

	Ok(())
}
