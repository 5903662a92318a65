//! TOML signature manifests.
//!
//! ```toml
//! [[class]]
//! name = "App\\Mailer"
//! source = "src/Mailer.php"
//!
//! [[class.method]]
//! name = "__construct"
//! parameters = ["transport", { name = "sender", optional = true }]
//!
//! [[class.method]]
//! name = "configure"
//! visibility = "protected"
//! parameters = ["options"]
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::{ClassSignature, ManifestError, MethodSignature, ParameterInfo, ReflectError, SignatureProvider, Visibility, class_key, normalize_class};


#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
	#[serde(default, rename = "class")]
	classes: Vec<ClassEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassEntry {
	name: String,
	#[serde(default)]
	source: Option<PathBuf>,
	#[serde(default, rename = "method")]
	methods: Vec<MethodEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MethodEntry {
	name: String,
	#[serde(default)]
	visibility: Visibility,
	#[serde(default)]
	parameters: Vec<ParameterEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ParameterEntry {
	Name(String),
	Detailed {
		name: String,
		#[serde(default)]
		optional: bool,
	},
}

impl ParameterEntry {
	fn into_info(self, position: usize) -> ParameterInfo {
		let (name, optional) = match self {
			Self::Name(name) => (name, false),
			Self::Detailed { name, optional } => (name, optional),
		};
		ParameterInfo { name, position, optional }
	}
}

/// Parses manifest content into class signatures.
///
/// `path` is used for diagnostics and to resolve relative `source` paths.
pub(crate) fn parse_manifest(content: &str, path: Option<&Path>) -> Result<Vec<ClassSignature>, ManifestError> {
	let file: ManifestFile = toml::from_str(content).map_err(|source| ManifestError::Parse {
		path: path.map(Path::to_path_buf),
		source,
	})?;
	let base = path.and_then(Path::parent);

	let mut seen = std::collections::HashSet::new();
	let mut classes = Vec::with_capacity(file.classes.len());
	for entry in file.classes {
		let name = normalize_class(entry.name.trim());
		if name.is_empty() {
			return Err(ManifestError::EmptyClassName);
		}
		if !seen.insert(class_key(name)) {
			return Err(ManifestError::DuplicateClass { class: name.to_string() });
		}

		let mut class = ClassSignature::new(name);
		if let Some(source) = entry.source {
			class = class.with_source(match base {
				Some(base) if source.is_relative() => base.join(source),
				_ => source,
			});
		}

		for method in entry.methods {
			let mut params = Vec::with_capacity(method.parameters.len());
			for (position, param) in method.parameters.into_iter().enumerate() {
				let info = param.into_info(position);
				if params.iter().any(|p: &ParameterInfo| p.name == info.name) {
					return Err(ManifestError::DuplicateParameter {
						class: class.name().to_string(),
						method: method.name,
						parameter: info.name,
					});
				}
				params.push(info);
			}

			let method_name = method.name.clone();
			if !class.insert_method(MethodSignature::from_parts(method.name, method.visibility, params)) {
				return Err(ManifestError::DuplicateMethod {
					class: class.name().to_string(),
					method: method_name,
				});
			}
		}
		classes.push(class);
	}
	Ok(classes)
}

/// Lazily loads one manifest per class from a directory tree.
///
/// `App\Mail\Mailer` is read from `<root>/App/Mail/Mailer.toml`, which must
/// declare that class. A missing file means the class does not exist.
#[derive(Debug, Clone)]
pub struct ManifestDirectory {
	root: PathBuf,
}

impl ManifestDirectory {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Manifest path for a class name, or `None` if the name cannot map to a file.
	pub fn path_for(&self, class: &str) -> Option<PathBuf> {
		let class = normalize_class(class);
		let mut path = self.root.clone();
		for segment in class.split('\\') {
			if segment.is_empty() || segment.contains(['.', '/', '\0']) {
				return None;
			}
			path.push(segment);
		}
		path.set_extension("toml");
		Some(path)
	}

	fn read(&self, class: &str, path: &Path) -> Result<Option<ClassSignature>, ManifestError> {
		let content = match std::fs::read_to_string(path) {
			Ok(content) => content,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
			Err(source) => {
				return Err(ManifestError::Io {
					path: path.to_path_buf(),
					source,
				});
			}
		};

		let key = class_key(class);
		let found = parse_manifest(&content, Some(path))?.into_iter().find(|c| class_key(c.name()) == key);
		match found {
			Some(signature) => Ok(Some(signature)),
			None => Err(ManifestError::MissingClass {
				path: path.to_path_buf(),
				class: normalize_class(class).to_string(),
			}),
		}
	}
}

impl SignatureProvider for ManifestDirectory {
	fn find(&self, class: &str) -> Result<Option<Arc<ClassSignature>>, ReflectError> {
		let Some(path) = self.path_for(class) else {
			return Ok(None);
		};
		match self.read(class, &path) {
			Ok(signature) => Ok(signature.map(Arc::new)),
			Err(source) => Err(ReflectError::Unavailable {
				class: normalize_class(class).to_string(),
				source: Box::new(source),
			}),
		}
	}
}
