//! kiln: compiles a TOML service file, resolving `$name` arguments into positions.

mod cli;
mod config;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use kiln_compiler::{CompilerPass, ResolveNamedArgumentsPass};
use kiln_reflect::{ManifestDirectory, ProviderChain, SignatureCatalog};
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_max_level(if cli.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let output = run(&cli)?;
	println!("{output}");
	Ok(())
}

/// Loads, compiles and renders the registry described by `cli`.
fn run(cli: &Cli) -> anyhow::Result<String> {
	let mut container = config::load_services(&cli.services).with_context(|| format!("failed to load services from {}", cli.services.display()))?;
	container.set_resource_tracking(cli.track_resources);

	let provider = signatures(&cli.signatures)?;
	info!(services = container.len(), sources = provider.len(), "compiling service definitions");

	let mut pass = ResolveNamedArgumentsPass::new(provider);
	pass.process(&mut container).context("service compilation failed")?;
	if let Some(stats) = pass.last_run() {
		info!(
			definitions = stats.definitions,
			changed = stats.changed,
			classes_reflected = stats.classes_reflected,
			"compiled service definitions"
		);
	}

	report::render(&container, cli.format)
}

/// Manifest files are merged into one catalog consulted first; directories follow in order.
fn signatures(paths: &[PathBuf]) -> anyhow::Result<ProviderChain> {
	let mut catalog = SignatureCatalog::new();
	let mut directories = Vec::new();
	for path in paths {
		if path.is_dir() {
			debug!(path = %path.display(), "using signature directory");
			directories.push(ManifestDirectory::new(path));
		} else {
			let added = catalog
				.extend_from_manifest(path)
				.with_context(|| format!("failed to load signatures from {}", path.display()))?;
			debug!(path = %path.display(), classes = added, "loaded signature manifest");
		}
	}

	let mut chain = ProviderChain::new().with(catalog);
	for directory in directories {
		chain.push(directory);
	}
	Ok(chain)
}
