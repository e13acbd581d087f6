use std::fs::File;
use std::path::{Path, PathBuf};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use weft::tree::matches::Matches;
use crate::match_store::MatchStores;
use crate::versions::VersionOrder;

mod match_store;
mod versions;

fn main() -> Result<()> {
	let cli: Cli = Cli::parse();

	init_logger(cli.verbose)?;

	match cli.command {
		Command::Chain { from, to, store, output } => {
			let order = VersionOrder::default();
			let stores = match_stores(store);

			let matches = stores.chain_matches(&order, &from, &to)?;

			write_match_file(&matches, &output)?;
			log::info!("wrote {} class matches to {output:?}", matches.classes.len());
		},
		Command::Migrate { from, to, old_mappings, new_mappings, store, output } => {
			let order = VersionOrder::default();
			let stores = match_stores(store);

			let matches = stores.chain_matches(&order, &from, &to)?;

			let old = weft::tiny_v2::read_file(&old_mappings)?;
			let new = weft::tiny_v2::read_file(&new_mappings)?;

			let combined = matches.combine(&old, &new)?;

			write_tiny_file(&combined, &output)?;
			log::info!("wrote migration mappings for {} classes to {output:?}", combined.classes.len());
		},
		Command::Diff { old, new, output } => {
			let old = weft::tiny_v2::read_file(&old)?;
			let new = weft::tiny_v2::read_file(&new)?;

			let matches = Matches::diff(&old, &new)?;

			write_match_file(&matches, &output)?;
			log::info!("wrote {} class matches to {output:?}", matches.classes.len());
		},
		Command::Reverse { input, output } => {
			let matches = weft::match_file::read_file(&input)?;

			write_match_file(&matches.reverse(), &output)?;
		},
	}

	Ok(())
}

fn match_stores(store: Vec<PathBuf>) -> MatchStores {
	if store.is_empty() {
		MatchStores::default()
	} else {
		MatchStores::new(store)
	}
}

fn write_match_file(matches: &Matches, path: &Path) -> Result<()> {
	let mut file = File::create(path)
		.with_context(|| anyhow!("failed to create match file {path:?}"))?;
	weft::match_file::write(matches, &mut file)
		.with_context(|| anyhow!("failed to write match file {path:?}"))
}

fn write_tiny_file(mappings: &weft::tree::mappings::Mappings, path: &Path) -> Result<()> {
	let mut file = File::create(path)
		.with_context(|| anyhow!("failed to create mappings file {path:?}"))?;
	weft::tiny_v2::write(mappings, &mut file)
		.with_context(|| anyhow!("failed to write mappings file {path:?}"))
}

fn init_logger(verbose: bool) -> Result<()> {
	let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };

	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!("[{}] {}", record.level(), message))
		})
		.level(level)
		.chain(std::io::stderr())
		.apply()
		.context("failed to initialize the logger")
}

#[derive(Debug, Parser)]
struct Cli {
	/// Be verbose.
	#[arg(short = 'v', long = "verbose")]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Chains the matches between two versions into one match file.
	///
	/// Every adjacent version pair between the two versions needs a match file
	/// in one of the stores; if one is missing, the whole chain fails.
	Chain {
		/// The older version.
		#[arg(long)]
		from: String,

		/// The newer version.
		#[arg(long)]
		to: String,

		/// A match store directory. May be given multiple times; stores are
		/// tried in the given order.
		#[arg(long = "store")]
		store: Vec<PathBuf>,

		#[arg(short = 'o', long)]
		output: PathBuf,
	},
	/// Creates migration mappings between two versions: named names of the old
	/// version on the left, named names of the new version on the right.
	Migrate {
		/// The older version.
		#[arg(long)]
		from: String,

		/// The newer version.
		#[arg(long)]
		to: String,

		/// Mappings of the old version, obfuscated to named, as a tiny v2 file.
		#[arg(long)]
		old_mappings: PathBuf,

		/// Mappings of the new version, obfuscated to named, as a tiny v2 file.
		#[arg(long)]
		new_mappings: PathBuf,

		/// A match store directory. May be given multiple times; stores are
		/// tried in the given order.
		#[arg(long = "store")]
		store: Vec<PathBuf>,

		#[arg(short = 'o', long)]
		output: PathBuf,
	},
	/// Derives a match from two tiny v2 files that share their named names.
	Diff {
		/// Mappings of the old version, obfuscated to named.
		#[arg(long)]
		old: PathBuf,

		/// Mappings of the new version, obfuscated to named.
		#[arg(long)]
		new: PathBuf,

		#[arg(short = 'o', long)]
		output: PathBuf,
	},
	/// Reverses the direction of a match file.
	Reverse {
		#[arg(short = 'i', long)]
		input: PathBuf,

		#[arg(short = 'o', long)]
		output: PathBuf,
	},
}
