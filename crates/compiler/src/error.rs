use kiln_container::ParameterError;
use kiln_reflect::{ReflectError, Visibility};
use thiserror::Error;

/// Why a service definition's arguments could not be resolved.
///
/// All variants are configuration errors that abort compilation.
#[derive(Debug, Error)]
pub enum ResolveError {
	#[error("unable to resolve service \"{service_id}\": {}", missing_class(.class))]
	UnresolvableClass { service_id: String, class: Option<String> },

	#[error("unable to resolve service \"{service_id}\": method \"{class}::{method}\" does not exist")]
	UnresolvableMethod { service_id: String, class: String, method: String },

	#[error("unable to resolve service \"{service_id}\": method \"{class}::{method}\" must be public, it is {visibility}")]
	NonPublicMethod {
		service_id: String,
		class: String,
		method: String,
		visibility: Visibility,
	},

	#[error(
		"unable to resolve service \"{service_id}\": invalid argument key \"{key}\" for method \"{}::{method}\", expected a position or a \"$name\" reference",
		.class.as_deref().unwrap_or("?")
	)]
	InvalidArgumentKey {
		service_id: String,
		class: Option<String>,
		method: String,
		key: String,
	},

	#[error("unable to resolve service \"{service_id}\": method \"{class}::{method}\" has no \"{key}\" argument")]
	UnknownNamedArgument {
		service_id: String,
		class: String,
		method: String,
		key: String,
	},

	#[error("unable to resolve service \"{service_id}\": argument \"{key}\" of method \"{class}::{method}\" resolves to position {position}, which is already set")]
	ConflictingArgument {
		service_id: String,
		class: String,
		method: String,
		key: String,
		position: usize,
	},

	#[error("unable to resolve service \"{service_id}\": parameter expansion failed")]
	Parameter {
		service_id: String,
		#[source]
		source: ParameterError,
	},

	#[error("unable to resolve service \"{service_id}\": signature lookup failed")]
	Provider {
		service_id: String,
		#[source]
		source: ReflectError,
	},
}

impl ResolveError {
	/// Id of the service whose definition failed.
	pub fn service_id(&self) -> &str {
		match self {
			Self::UnresolvableClass { service_id, .. }
			| Self::UnresolvableMethod { service_id, .. }
			| Self::NonPublicMethod { service_id, .. }
			| Self::InvalidArgumentKey { service_id, .. }
			| Self::UnknownNamedArgument { service_id, .. }
			| Self::ConflictingArgument { service_id, .. }
			| Self::Parameter { service_id, .. }
			| Self::Provider { service_id, .. } => service_id,
		}
	}
}

fn missing_class(class: &Option<String>) -> String {
	match class {
		Some(class) => format!("class \"{class}\" does not exist"),
		None => "the class is not set".to_string(),
	}
}
