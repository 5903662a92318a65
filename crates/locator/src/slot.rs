use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use crate::{LocatorError, Result, ServiceLocator};


/// One collaborator of a helper, with the service id used as its fallback.
pub struct Slot<T> {
	service_id: &'static str,
	value: Option<Arc<T>>,
}

impl<T: Any + Send + Sync> Slot<T> {
	pub const fn new(service_id: &'static str) -> Self {
		Self { service_id, value: None }
	}

	pub fn service_id(&self) -> &'static str {
		self.service_id
	}

	/// Sets the collaborator directly. It takes precedence over any lookup.
	pub fn inject(&mut self, value: Arc<T>) -> Option<Arc<T>> {
		self.value.replace(value)
	}

	pub fn get(&self) -> Option<&Arc<T>> {
		self.value.as_ref()
	}

	pub fn is_set(&self) -> bool {
		self.value.is_some()
	}

	/// Returns the collaborator `caller` needs.
	///
	/// # Errors
	///
	/// [`LocatorError::MissingCollaborator`] when nothing was injected and the
	/// locator is absent or has no such service, [`LocatorError::TypeMismatch`]
	/// when the located service has another type.
	pub fn resolve(&mut self, locator: Option<&dyn ServiceLocator>, caller: &str) -> Result<Arc<T>> {
		self.try_resolve(locator)?.ok_or_else(|| LocatorError::MissingCollaborator {
			service_id: self.service_id.to_string(),
			caller: caller.to_string(),
		})
	}

	/// Like [`resolve`](Self::resolve), but a missing collaborator is `None`.
	///
	/// A located service is kept in the slot, so later calls skip the lookup.
	pub fn try_resolve(&mut self, locator: Option<&dyn ServiceLocator>) -> Result<Option<Arc<T>>> {
		if let Some(value) = &self.value {
			return Ok(Some(Arc::clone(value)));
		}
		let Some(service) = locator.and_then(|l| l.get(self.service_id)) else {
			return Ok(None);
		};

		let value = service.downcast::<T>().map_err(|_| LocatorError::TypeMismatch {
			service_id: self.service_id.to_string(),
			expected: type_name::<T>(),
		})?;
		tracing::trace!(service = self.service_id, "collaborator resolved from locator");
		self.value = Some(Arc::clone(&value));
		Ok(Some(value))
	}
}

impl<T> Clone for Slot<T> {
	fn clone(&self) -> Self {
		Self {
			service_id: self.service_id,
			value: self.value.clone(),
		}
	}
}

impl<T> fmt::Debug for Slot<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Slot")
			.field("service_id", &self.service_id)
			.field("set", &self.value.is_some())
			.finish()
	}
}
