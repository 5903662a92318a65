//! Collaborator slots for helpers that may be wired directly or looked up.
//!
//! A [`Slot`] holds one collaborator. An injected value always wins; without
//! one the slot asks a [`ServiceLocator`] for its fallback service id and
//! keeps the result. When neither source has it, resolution fails with
//! [`LocatorError::MissingCollaborator`] naming the operation that needed it.

mod error;
mod map;
mod slot;

use std::any::Any;
use std::sync::Arc;

pub use error::{LocatorError, Result};
pub use map::ServiceMap;
pub use slot::Slot;

/// Type-erased service handle returned by a [`ServiceLocator`].
pub type Service = Arc<dyn Any + Send + Sync>;

/// Lookup of services by id.
pub trait ServiceLocator {
	fn has(&self, id: &str) -> bool;

	fn get(&self, id: &str) -> Option<Service>;
}

impl<L: ServiceLocator + ?Sized> ServiceLocator for &L {
	fn has(&self, id: &str) -> bool {
		(**self).has(id)
	}

	fn get(&self, id: &str) -> Option<Service> {
		(**self).get(id)
	}
}

impl<L: ServiceLocator + ?Sized> ServiceLocator for Arc<L> {
	fn has(&self, id: &str) -> bool {
		(**self).has(id)
	}

	fn get(&self, id: &str) -> Option<Service> {
		(**self).get(id)
	}
}
