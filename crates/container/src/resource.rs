use std::path::PathBuf;

use indexmap::IndexSet;

/// A build dependency whose change invalidates compiled output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
	/// A class whose signature was inspected during compilation.
	Class { class: String, source: Option<PathBuf> },
}

/// Ordered, de-duplicated set of resources, recorded only while tracking is on.
#[derive(Debug, Clone, Default)]
pub struct ResourceTracker {
	enabled: bool,
	resources: IndexSet<Resource>,
}

impl ResourceTracker {
	pub fn new(enabled: bool) -> Self {
		Self {
			enabled,
			resources: IndexSet::new(),
		}
	}

	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	pub fn set_enabled(&mut self, enabled: bool) {
		self.enabled = enabled;
	}

	/// Records a resource. Returns false when tracking is off or it was already known.
	pub fn add(&mut self, resource: Resource) -> bool {
		self.enabled && self.resources.insert(resource)
	}

	pub fn resources(&self) -> &IndexSet<Resource> {
		&self.resources
	}
}
