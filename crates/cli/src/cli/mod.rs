//! CLI schema for the kiln binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "kiln")]
#[command(about = "Resolve named service arguments against class signatures")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Service definition file (TOML)
	#[arg(short, long, value_name = "PATH")]
	pub services: PathBuf,

	/// Signature manifest file, or a directory with one manifest per class.
	/// May be given several times; earlier sources win.
	#[arg(long = "signatures", value_name = "PATH")]
	pub signatures: Vec<PathBuf>,

	/// Record every reflected class as a build resource
	#[arg(long)]
	pub track_resources: bool,

	/// Output format of the compiled registry
	#[arg(long, value_enum, default_value_t = Format::Json)]
	pub format: Format,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
	Json,
	Toml,
}
