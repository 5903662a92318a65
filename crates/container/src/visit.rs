//! Recursive traversal of every value reachable from a registry.
//!
//! Passes implement [`ValueVisitor`] and override
//! [`visit_definition`](ValueVisitor::visit_definition); calling
//! [`walk_definition`] from the override continues into nested values,
//! including inline definitions.

use crate::{ContainerBuilder, Definition, ParameterBag, Resource, ResourceTracker, Value};


/// Registry state visible to a visitor while it handles one root definition.
pub struct VisitContext<'a> {
	current_id: &'a str,
	parameters: &'a ParameterBag,
	resources: &'a mut ResourceTracker,
}

impl<'a> VisitContext<'a> {
	pub fn new(current_id: &'a str, parameters: &'a ParameterBag, resources: &'a mut ResourceTracker) -> Self {
		Self {
			current_id,
			parameters,
			resources,
		}
	}

	/// Id of the root service being visited. Inline definitions report their owner.
	pub fn current_id(&self) -> &'a str {
		self.current_id
	}

	pub fn parameters(&self) -> &'a ParameterBag {
		self.parameters
	}

	pub fn is_tracking_resources(&self) -> bool {
		self.resources.is_enabled()
	}

	pub fn add_resource(&mut self, resource: Resource) -> bool {
		self.resources.add(resource)
	}
}

pub trait ValueVisitor {
	type Error;

	/// Called for every definition, root or nested.
	fn visit_definition(&mut self, cx: &mut VisitContext<'_>, definition: &mut Definition, is_root: bool) -> Result<(), Self::Error> {
		let _ = is_root;
		walk_definition(self, cx, definition)
	}
}

/// Visits every root definition in registration order. Stops at the first error.
pub fn visit_container<V: ValueVisitor + ?Sized>(visitor: &mut V, container: &mut ContainerBuilder) -> Result<(), V::Error> {
	let ContainerBuilder {
		definitions,
		parameters,
		resources,
	} = container;

	for (id, definition) in definitions.iter_mut() {
		let mut cx = VisitContext::new(id, parameters, resources);
		visitor.visit_definition(&mut cx, definition, true)?;
	}
	Ok(())
}

/// Visits the constructor arguments, method-call arguments and properties of a definition.
pub fn walk_definition<V: ValueVisitor + ?Sized>(visitor: &mut V, cx: &mut VisitContext<'_>, definition: &mut Definition) -> Result<(), V::Error> {
	for value in definition.values_mut() {
		walk_value(visitor, cx, value)?;
	}
	Ok(())
}

pub fn walk_value<V: ValueVisitor + ?Sized>(visitor: &mut V, cx: &mut VisitContext<'_>, value: &mut Value) -> Result<(), V::Error> {
	match value {
		Value::List(items) => {
			for item in items {
				walk_value(visitor, cx, item)?;
			}
		}
		Value::Map(entries) => {
			for item in entries.values_mut() {
				walk_value(visitor, cx, item)?;
			}
		}
		Value::Inline(definition) => visitor.visit_definition(cx, definition, false)?,
		_ => {}
	}
	Ok(())
}
