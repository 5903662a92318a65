use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while looking up a class signature.
#[derive(Debug, Error)]
pub enum ReflectError {
	#[error("class \"{class}\" does not exist")]
	ClassNotFound { class: String },

	/// The provider could not answer, e.g. its backing manifest is broken.
	#[error("signature of class \"{class}\" is unavailable")]
	Unavailable {
		class: String,
		#[source]
		source: Box<ManifestError>,
	},
}

/// Errors raised while reading a signature manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
	#[error("I/O error reading {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid signature manifest{}", .path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
	Parse {
		path: Option<PathBuf>,
		#[source]
		source: toml::de::Error,
	},

	#[error("class \"{class}\" is declared more than once")]
	DuplicateClass { class: String },

	#[error("method \"{class}::{method}\" is declared more than once")]
	DuplicateMethod { class: String, method: String },

	#[error("parameter \"${parameter}\" of \"{class}::{method}\" is declared more than once")]
	DuplicateParameter { class: String, method: String, parameter: String },

	#[error("manifest entry has an empty class name")]
	EmptyClassName,

	#[error("manifest {path} does not declare class \"{class}\"")]
	MissingClass { path: PathBuf, class: String },
}
