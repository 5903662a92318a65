use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{Service, ServiceLocator};

#[cfg(test)]
mod tests;

/// In-memory [`ServiceLocator`] keyed by service id.
#[derive(Default, Clone)]
pub struct ServiceMap {
	inner: HashMap<String, Service>,
}

impl ServiceMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a service, replacing any previous one with the same id.
	pub fn insert<T: Any + Send + Sync>(&mut self, id: impl Into<String>, service: T) -> Option<Service> {
		self.insert_shared(id, Arc::new(service))
	}

	pub fn insert_shared(&mut self, id: impl Into<String>, service: Service) -> Option<Service> {
		self.inner.insert(id.into(), service)
	}

	pub fn with<T: Any + Send + Sync>(mut self, id: impl Into<String>, service: T) -> Self {
		self.insert(id, service);
		self
	}

	pub fn remove(&mut self, id: &str) -> Option<Service> {
		self.inner.remove(id)
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl std::fmt::Debug for ServiceMap {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut ids: Vec<&str> = self.inner.keys().map(String::as_str).collect();
		ids.sort_unstable();
		f.debug_struct("ServiceMap").field("ids", &ids).finish()
	}
}

impl ServiceLocator for ServiceMap {
	fn has(&self, id: &str) -> bool {
		self.inner.contains_key(id)
	}

	fn get(&self, id: &str) -> Option<Service> {
		self.inner.get(id).cloned()
	}
}
