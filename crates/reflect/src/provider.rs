use std::sync::Arc;

use crate::{ClassSignature, ReflectError, normalize_class};

#[cfg(test)]
mod tests;

/// What a lookup does when the class does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingClass {
	/// Report [`ReflectError::ClassNotFound`].
	#[default]
	Fail,
	/// Report `Ok(None)`.
	Ignore,
}

/// Source of class signatures.
pub trait SignatureProvider {
	/// Looks up a class. `Ok(None)` means the class does not exist.
	fn find(&self, class: &str) -> Result<Option<Arc<ClassSignature>>, ReflectError>;

	/// Looks up a class, applying the given missing-class strategy.
	fn load(&self, class: &str, missing: MissingClass) -> Result<Option<Arc<ClassSignature>>, ReflectError> {
		match self.find(class)? {
			Some(signature) => Ok(Some(signature)),
			None => match missing {
				MissingClass::Fail => Err(ReflectError::ClassNotFound {
					class: normalize_class(class).to_string(),
				}),
				MissingClass::Ignore => Ok(None),
			},
		}
	}
}

impl<P: SignatureProvider + ?Sized> SignatureProvider for &P {
	fn find(&self, class: &str) -> Result<Option<Arc<ClassSignature>>, ReflectError> {
		(**self).find(class)
	}
}

impl<P: SignatureProvider + ?Sized> SignatureProvider for Box<P> {
	fn find(&self, class: &str) -> Result<Option<Arc<ClassSignature>>, ReflectError> {
		(**self).find(class)
	}
}

impl<P: SignatureProvider + ?Sized> SignatureProvider for Arc<P> {
	fn find(&self, class: &str) -> Result<Option<Arc<ClassSignature>>, ReflectError> {
		(**self).find(class)
	}
}

/// Asks each provider in turn. The first one that knows the class answers.
#[derive(Default)]
pub struct ProviderChain {
	providers: Vec<Box<dyn SignatureProvider>>,
}

impl ProviderChain {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, provider: impl SignatureProvider + 'static) {
		self.providers.push(Box::new(provider));
	}

	pub fn with(mut self, provider: impl SignatureProvider + 'static) -> Self {
		self.push(provider);
		self
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}
}

impl SignatureProvider for ProviderChain {
	fn find(&self, class: &str) -> Result<Option<Arc<ClassSignature>>, ReflectError> {
		for provider in &self.providers {
			if let Some(signature) = provider.find(class)? {
				return Ok(Some(signature));
			}
		}
		Ok(None)
	}
}
