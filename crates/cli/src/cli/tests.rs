use super::*;

#[test]
fn signatures_are_repeatable() {
	let cli = Cli::try_parse_from(["kiln", "-s", "services.toml", "--signatures", "a.toml", "--signatures", "sigs/"]).unwrap();
	assert_eq!(cli.services, PathBuf::from("services.toml"));
	assert_eq!(cli.signatures, vec![PathBuf::from("a.toml"), PathBuf::from("sigs/")]);
	assert_eq!(cli.format, Format::Json);
	assert!(!cli.track_resources);
	assert!(!cli.verbose);
}

#[test]
fn format_and_flags() {
	let cli = Cli::try_parse_from(["kiln", "--services", "s.toml", "--format", "toml", "--track-resources", "-v"]).unwrap();
	assert_eq!(cli.format, Format::Toml);
	assert!(cli.track_resources);
	assert!(cli.verbose);
}

#[test]
fn services_are_required() {
	assert!(Cli::try_parse_from(["kiln"]).is_err());
	assert!(Cli::try_parse_from(["kiln", "-s", "s.toml", "--format", "yaml"]).is_err());
}
