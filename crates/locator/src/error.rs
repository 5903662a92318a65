use thiserror::Error;

pub type Result<T, E = LocatorError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocatorError {
	/// Nothing was injected and the locator is absent or lacks the service.
	#[error("cannot use \"{caller}\": no collaborator was injected and the \"{service_id}\" service is not available")]
	MissingCollaborator { service_id: String, caller: String },

	/// The locator returned a service of another type.
	#[error("service \"{service_id}\" is not a {expected}")]
	TypeMismatch { service_id: String, expected: &'static str },
}
