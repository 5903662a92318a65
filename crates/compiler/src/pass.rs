use kiln_container::ContainerBuilder;
use thiserror::Error;

use crate::ResolveError;

/// A single transformation applied to every definition of a registry.
pub trait CompilerPass {
	/// Stable name used in diagnostics.
	fn name(&self) -> &'static str;

	/// Runs the pass to completion, or stops at the first error.
	fn process(&mut self, container: &mut ContainerBuilder) -> Result<(), CompileError>;
}

#[derive(Debug, Error)]
#[error("compiler pass \"{pass}\" failed")]
pub struct CompileError {
	pub pass: &'static str,
	#[source]
	pub source: ResolveError,
}

impl CompileError {
	pub fn new(pass: &'static str, source: ResolveError) -> Self {
		Self { pass, source }
	}
}
