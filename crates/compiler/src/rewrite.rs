use kiln_container::{ArgKey, KeyKind, MethodCall, VisitContext};
use kiln_reflect::ParameterInfo;

use crate::{ReflectionSession, ResolveError};


/// Rewrites the `$name` keys of one call into positions.
///
/// Returns the call and whether its arguments changed. Calls without string
/// keys are returned untouched without consulting the session. String keys
/// are validated before any reflection happens; the method's parameters are
/// then loaded at most once. The result is sorted by position.
pub fn rewrite_call(session: &mut ReflectionSession<'_>, cx: &mut VisitContext<'_>, class: Option<&str>, call: MethodCall) -> Result<(MethodCall, bool), ResolveError> {
	if call.arguments.is_positional() {
		return Ok((call, false));
	}

	let service_id = cx.current_id();
	let mut named = Vec::new();
	for key in call.arguments.keys() {
		match key.kind() {
			KeyKind::Position(_) => {}
			KeyKind::Parameter(name) => named.push((key.clone(), name.to_string())),
			KeyKind::Malformed(raw) => {
				return Err(ResolveError::InvalidArgumentKey {
					service_id: service_id.to_string(),
					class: class.map(str::to_string),
					method: call.method.clone(),
					key: raw.to_string(),
				});
			}
		}
	}

	let method = cx.parameters().resolve_to_string(&call.method).map_err(|source| ResolveError::Parameter {
		service_id: service_id.to_string(),
		source,
	})?;

	let mut parameters: Option<Vec<ParameterInfo>> = None;
	let mut arguments = call.arguments.clone();
	for (key, name) in named {
		if parameters.is_none() {
			parameters = Some(session.parameters(cx, class, &method)?);
		}
		let params = parameters.as_deref().unwrap_or_default();

		let Some(param) = params.iter().find(|p| p.name == name) else {
			return Err(ResolveError::UnknownNamedArgument {
				service_id: service_id.to_string(),
				class: class.unwrap_or_default().to_string(),
				method,
				key: key.to_string(),
			});
		};

		let position = ArgKey::Index(param.position);
		if arguments.contains_key(&position) {
			return Err(ResolveError::ConflictingArgument {
				service_id: service_id.to_string(),
				class: class.unwrap_or_default().to_string(),
				method,
				key: key.to_string(),
				position: param.position,
			});
		}
		if let Some(value) = arguments.remove(&key) {
			arguments.insert(position, value);
		}
	}

	arguments.sort_by_key();
	let changed = arguments != call.arguments;
	tracing::trace!(service = service_id, method = %method, changed, "rewrote call");
	Ok((
		MethodCall {
			method: call.method,
			arguments,
		},
		changed,
	))
}
