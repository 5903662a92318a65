use std::sync::Arc;

use kiln_container::{Resource, VisitContext};
use kiln_reflect::{ClassSignature, MissingClass, ParameterInfo, ReflectError, SignatureProvider, class_key};
use rustc_hash::FxHashMap as HashMap;

use crate::ResolveError;

#[cfg(test)]
mod tests;

/// Class signatures memoised by one pass, keyed by normalised class name.
#[derive(Debug, Default)]
pub struct ClassCache {
	classes: HashMap<String, Arc<ClassSignature>>,
}

impl ClassCache {
	pub fn len(&self) -> usize {
		self.classes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.classes.is_empty()
	}

	pub fn contains(&self, class: &str) -> bool {
		self.classes.contains_key(&class_key(class))
	}

	pub fn clear(&mut self) {
		self.classes.clear();
	}
}

/// Scoped access to a [`ClassCache`] for one pass run.
///
/// Missing classes are always reported as errors while a session is open.
/// Dropping the session empties the cache, whether the run succeeded, failed
/// or unwound.
pub struct ReflectionSession<'a> {
	cache: &'a mut ClassCache,
	provider: &'a dyn SignatureProvider,
	missing: MissingClass,
	reflected: usize,
}

impl<'a> ReflectionSession<'a> {
	pub fn begin(cache: &'a mut ClassCache, provider: &'a dyn SignatureProvider) -> Self {
		cache.clear();
		Self {
			cache,
			provider,
			missing: MissingClass::Fail,
			reflected: 0,
		}
	}

	/// Number of classes loaded from the provider (cache misses) so far.
	pub fn reflected(&self) -> usize {
		self.reflected
	}

	pub fn cached_classes(&self) -> usize {
		self.cache.len()
	}

	/// Returns the parameters of a public method.
	///
	/// Errors name the class and method as the caller spelled them, matching
	/// the errors raised while rewriting a call.
	///
	/// The first successful load of a class is recorded as a build resource
	/// when the registry tracks resources.
	pub fn parameters(&mut self, cx: &mut VisitContext<'_>, class: Option<&str>, method: &str) -> Result<Vec<ParameterInfo>, ResolveError> {
		let service_id = cx.current_id();
		let Some(class) = class.filter(|c| !c.is_empty()) else {
			return Err(ResolveError::UnresolvableClass {
				service_id: service_id.to_string(),
				class: None,
			});
		};

		let signature = self.class(cx, class)?;
		let Some(target) = signature.method(method) else {
			return Err(ResolveError::UnresolvableMethod {
				service_id: service_id.to_string(),
				class: class.to_string(),
				method: method.to_string(),
			});
		};
		if !target.is_public() {
			return Err(ResolveError::NonPublicMethod {
				service_id: service_id.to_string(),
				class: class.to_string(),
				method: method.to_string(),
				visibility: target.visibility(),
			});
		}
		Ok(target.parameters().to_vec())
	}

	fn class(&mut self, cx: &mut VisitContext<'_>, class: &str) -> Result<Arc<ClassSignature>, ResolveError> {
		let key = class_key(class);
		if let Some(signature) = self.cache.classes.get(&key) {
			return Ok(Arc::clone(signature));
		}

		let unresolvable = || ResolveError::UnresolvableClass {
			service_id: cx.current_id().to_string(),
			class: Some(class.to_string()),
		};
		let signature = match self.provider.load(class, self.missing) {
			Ok(Some(signature)) => signature,
			Ok(None) | Err(ReflectError::ClassNotFound { .. }) => return Err(unresolvable()),
			Err(source) => {
				return Err(ResolveError::Provider {
					service_id: cx.current_id().to_string(),
					source,
				});
			}
		};

		self.reflected += 1;
		tracing::trace!(class = signature.name(), "reflected class");
		if cx.is_tracking_resources() {
			cx.add_resource(Resource::Class {
				class: signature.name().to_string(),
				source: signature.source().map(Into::into),
			});
		}
		self.cache.classes.insert(key, Arc::clone(&signature));
		Ok(signature)
	}
}

impl Drop for ReflectionSession<'_> {
	fn drop(&mut self) {
		self.cache.clear();
	}
}
