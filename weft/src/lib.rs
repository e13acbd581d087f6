//! Crate for working with matches between the obfuscated naming schemes of
//! two versions of an obfuscated jar, and for combining such matches with
//! mapping trees.
//!
//! A match (see [`tree::matches::Matches`]) records, per class, which
//! obfuscated name of the older version corresponds to which obfuscated name
//! of the newer version, down to fields and methods. Matches for adjacent
//! versions can be chained into a match spanning a version range, reversed,
//! and combined with two mapping trees (see [`tree::mappings::Mappings`])
//! into a mapping tree translating the old deobfuscated names into the new
//! ones.
//!
//! Matches are read and written in a line based format, see the [`match_file`]
//! module. Mapping trees are read and written as two namespace Tiny v2
//! (`.tiny`) files, see the [`tiny_v2`] module.

mod lines;
mod macros;

pub mod match_file;
pub mod tiny_v2;

pub mod tree;
mod action;

pub mod remapper;
