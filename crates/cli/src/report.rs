use kiln_container::{ContainerBuilder, Resource};
use serde::Serialize;

use crate::cli::Format;

/// Compiled registry as printed by the binary.
#[derive(Serialize)]
struct Report<'a> {
	#[serde(flatten)]
	container: &'a ContainerBuilder,
	resources: Vec<&'a Resource>,
}

pub fn render(container: &ContainerBuilder, format: Format) -> anyhow::Result<String> {
	let report = Report {
		container,
		resources: container.resources().collect(),
	};
	Ok(match format {
		Format::Json => serde_json::to_string_pretty(&report)?,
		Format::Toml => toml::to_string_pretty(&report)?,
	})
}
