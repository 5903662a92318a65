//! Service definition registry.
//!
//! A [`ContainerBuilder`] owns an ordered set of [`Definition`]s keyed by
//! service id, the [`ParameterBag`] used to expand `%placeholder%` values, and
//! a [`ResourceTracker`] recording build dependencies. Compiler passes walk the
//! registry through the [`ValueVisitor`] traversal in [`visit`].

mod arguments;
mod builder;
mod definition;
pub mod parameters;
mod resource;
mod serialize;
mod value;
pub mod visit;

pub use arguments::{ArgKey, Arguments, KeyKind};
pub use builder::ContainerBuilder;
pub use definition::{CONSTRUCTOR, Definition, MethodCall};
pub use parameters::{ParameterBag, ParameterError};
pub use resource::{Resource, ResourceTracker};
pub use serialize::INLINE_TAG;
pub use value::Value;
pub use visit::{ValueVisitor, VisitContext, visit_container, walk_definition, walk_value};
