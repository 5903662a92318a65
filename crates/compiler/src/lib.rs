//! Compiler passes over a [`ContainerBuilder`](kiln_container::ContainerBuilder).
//!
//! [`ResolveNamedArgumentsPass`] rewrites `$name` argument keys into positions
//! by consulting class signatures, so later stages only ever see positional
//! argument lists.

mod error;
mod named_arguments;
mod pass;
mod reflector;
mod rewrite;

pub use error::ResolveError;
pub use named_arguments::{ResolveNamedArgumentsPass, RunStats};
pub use pass::{CompileError, CompilerPass};
pub use reflector::{ClassCache, ReflectionSession};
pub use rewrite::rewrite_call;
