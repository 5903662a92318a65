use kiln_container::{CONSTRUCTOR, ContainerBuilder, Definition, MethodCall, ValueVisitor, VisitContext, visit_container, walk_definition};
use kiln_reflect::SignatureProvider;

use crate::{ClassCache, CompileError, CompilerPass, ReflectionSession, ResolveError, rewrite_call};

/// Counters from the most recent run of a [`ResolveNamedArgumentsPass`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
	/// Definitions visited, nested ones included.
	pub definitions: usize,
	/// Definitions whose arguments or method calls were committed.
	pub changed: usize,
	/// Classes loaded from the signature provider.
	pub classes_reflected: usize,
}

/// Resolves `$name` argument keys of every definition into positions.
///
/// Constructor arguments and every method call are rewritten against the
/// signature of the definition's class. The first failure aborts the pass.
/// The class cache lives for one [`process`](CompilerPass::process) call.
pub struct ResolveNamedArgumentsPass<P> {
	provider: P,
	cache: ClassCache,
	last_run: Option<RunStats>,
}

impl<P: SignatureProvider> ResolveNamedArgumentsPass<P> {
	pub fn new(provider: P) -> Self {
		Self {
			provider,
			cache: ClassCache::default(),
			last_run: None,
		}
	}

	pub fn provider(&self) -> &P {
		&self.provider
	}

	/// Number of classes currently memoised. Zero outside of a run.
	pub fn cached_classes(&self) -> usize {
		self.cache.len()
	}

	/// Counters of the last run, successful or not.
	pub fn last_run(&self) -> Option<RunStats> {
		self.last_run
	}
}

impl<P: SignatureProvider> CompilerPass for ResolveNamedArgumentsPass<P> {
	fn name(&self) -> &'static str {
		"resolve-named-arguments"
	}

	fn process(&mut self, container: &mut ContainerBuilder) -> Result<(), CompileError> {
		let mut resolver = Resolver {
			session: ReflectionSession::begin(&mut self.cache, &self.provider),
			stats: RunStats::default(),
		};
		let result = visit_container(&mut resolver, container);
		let stats = resolver.finish();
		self.last_run = Some(stats);

		tracing::debug!(
			definitions = stats.definitions,
			changed = stats.changed,
			classes_reflected = stats.classes_reflected,
			ok = result.is_ok(),
			"named argument resolution finished",
		);
		result.map_err(|source| CompileError::new(self.name(), source))
	}
}

struct Resolver<'a> {
	session: ReflectionSession<'a>,
	stats: RunStats,
}

impl Resolver<'_> {
	fn finish(self) -> RunStats {
		let Self { session, mut stats } = self;
		stats.classes_reflected = session.reflected();
		stats
	}

	fn resolve_definition(&mut self, cx: &mut VisitContext<'_>, definition: &mut Definition) -> Result<bool, ResolveError> {
		let class = match definition.class() {
			Some(class) => Some(cx.parameters().resolve_to_string(class).map_err(|source| ResolveError::Parameter {
				service_id: cx.current_id().to_string(),
				source,
			})?),
			None => None,
		};

		let needs_rewrite = definition.arguments().has_named_keys() || definition.method_calls().iter().any(|c| c.arguments.has_named_keys());
		if !needs_rewrite {
			return Ok(false);
		}

		let mut calls = definition.method_calls().to_vec();
		calls.push(MethodCall::new(CONSTRUCTOR, definition.arguments().clone()));

		let mut rewritten = Vec::with_capacity(calls.len());
		for call in calls {
			let (call, _) = rewrite_call(&mut self.session, cx, class.as_deref(), call)?;
			rewritten.push(call);
		}

		let mut changed = false;
		if let Some(constructor) = rewritten.pop()
			&& constructor.arguments != *definition.arguments()
		{
			definition.set_arguments(constructor.arguments);
			changed = true;
		}
		if rewritten.as_slice() != definition.method_calls() {
			definition.set_method_calls(rewritten);
			changed = true;
		}
		Ok(changed)
	}
}

impl ValueVisitor for Resolver<'_> {
	type Error = ResolveError;

	fn visit_definition(&mut self, cx: &mut VisitContext<'_>, definition: &mut Definition, _is_root: bool) -> Result<(), ResolveError> {
		self.stats.definitions += 1;
		if self.resolve_definition(cx, definition)? {
			self.stats.changed += 1;
			tracing::debug!(service = cx.current_id(), class = definition.class(), "resolved named arguments");
		}
		walk_definition(self, cx, definition)
	}
}
