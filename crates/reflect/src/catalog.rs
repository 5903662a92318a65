use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::manifest::parse_manifest;
use crate::{ClassSignature, ManifestError, ReflectError, SignatureProvider, class_key};

#[cfg(test)]
mod tests;

/// In-memory signature provider.
#[derive(Debug, Clone, Default)]
pub struct SignatureCatalog {
	classes: IndexMap<String, Arc<ClassSignature>>,
}

impl SignatureCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a manifest held in memory. Relative `source` paths are kept as written.
	pub fn from_toml_str(content: &str) -> Result<Self, ManifestError> {
		let mut catalog = Self::new();
		catalog.extend_from_toml_str(content, None)?;
		Ok(catalog)
	}

	/// Reads a manifest file. Relative `source` paths resolve against its directory.
	pub fn load_manifest(path: &Path) -> Result<Self, ManifestError> {
		let mut catalog = Self::new();
		catalog.extend_from_manifest(path)?;
		Ok(catalog)
	}

	/// Adds every class of another manifest file.
	///
	/// Nothing is added when any of its classes is already present.
	pub fn extend_from_manifest(&mut self, path: &Path) -> Result<usize, ManifestError> {
		let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		self.extend_from_toml_str(&content, Some(path))
	}

	fn extend_from_toml_str(&mut self, content: &str, path: Option<&Path>) -> Result<usize, ManifestError> {
		let classes = parse_manifest(content, path)?;
		if let Some(existing) = classes.iter().find(|c| self.contains(c.name())) {
			return Err(ManifestError::DuplicateClass {
				class: existing.name().to_string(),
			});
		}
		let count = classes.len();
		for class in classes {
			self.insert(class);
		}
		Ok(count)
	}

	/// Inserts a class, replacing any class of the same name.
	pub fn insert(&mut self, class: ClassSignature) -> Option<Arc<ClassSignature>> {
		self.classes.insert(class_key(class.name()), Arc::new(class))
	}

	pub fn with_class(mut self, class: ClassSignature) -> Self {
		self.insert(class);
		self
	}

	pub fn contains(&self, class: &str) -> bool {
		self.classes.contains_key(&class_key(class))
	}

	pub fn get(&self, class: &str) -> Option<&Arc<ClassSignature>> {
		self.classes.get(&class_key(class))
	}

	pub fn len(&self) -> usize {
		self.classes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.classes.is_empty()
	}

	pub fn classes(&self) -> impl Iterator<Item = &ClassSignature> {
		self.classes.values().map(Arc::as_ref)
	}
}

impl SignatureProvider for SignatureCatalog {
	fn find(&self, class: &str) -> Result<Option<Arc<ClassSignature>>, ReflectError> {
		Ok(self.get(class).cloned())
	}
}
