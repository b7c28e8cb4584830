use crate::application::Environment;
use crate::backup::ResolvedLocation;
use crate::cli::Cli;

/// Fully-resolved configuration consumed by the traversal core.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Locations to look up, in input order, already absolute.
    pub locations: Vec<ResolvedLocation>,
    pub computer_name: String,
    pub forced_disk_name: Option<String>,
    pub include_hidden: bool,
    pub verbose: bool,
    /// Output width in columns; 0 means one entry per line.
    pub columns: usize,
}

impl RuntimeConfig {
    pub fn resolve(cli: Cli, environment: Environment) -> Self {
        let locations = if cli.locations.is_empty() {
            vec![ResolvedLocation::from(environment.working_directory.clone())]
        } else {
            cli.locations
                .iter()
                .map(|raw| ResolvedLocation::resolve(raw, &environment.working_directory))
                .collect()
        };

        Self {
            locations,
            computer_name: cli.computer.unwrap_or(environment.host_name),
            forced_disk_name: cli.disk,
            include_hidden: cli.all,
            verbose: cli.verbose,
            columns: if cli.single_column {
                0
            } else {
                environment.terminal_columns
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;
    use std::path::{Path, PathBuf};

    fn environment() -> Environment {
        Environment {
            working_directory: PathBuf::from("/Users/me"),
            host_name: "mac".to_string(),
            terminal_columns: 120,
        }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("tmls").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_come_from_the_environment() {
        let config = RuntimeConfig::resolve(parse(&[]), environment());

        assert_eq!(
            config.locations,
            vec![ResolvedLocation::from(PathBuf::from("/Users/me"))]
        );
        assert_eq!(config.computer_name, "mac");
        assert_eq!(config.forced_disk_name, None);
        assert!(!config.include_hidden);
        assert!(!config.verbose);
        assert_eq!(config.columns, 120);
    }

    #[test]
    fn locations_are_resolved_in_input_order() {
        let config = RuntimeConfig::resolve(parse(&["doc", "/etc", "notes"]), environment());

        let paths: Vec<_> = config
            .locations
            .iter()
            .map(|location| location.as_path().to_path_buf())
            .collect();
        assert_eq!(
            paths,
            vec![
                Path::new("/Users/me/doc"),
                Path::new("/etc"),
                Path::new("/Users/me/notes"),
            ]
        );
    }

    #[test]
    fn flags_override_the_environment() {
        let config = RuntimeConfig::resolve(
            parse(&["-a", "-v", "--computer", "Other", "--disk", "Macintosh HD"]),
            environment(),
        );

        assert_eq!(config.computer_name, "Other");
        assert_eq!(config.forced_disk_name.as_deref(), Some("Macintosh HD"));
        assert!(config.include_hidden);
        assert!(config.verbose);
    }

    #[test]
    fn single_column_mode_zeroes_the_width() {
        let config = RuntimeConfig::resolve(parse(&["-l"]), environment());
        assert_eq!(config.columns, 0);
    }
}
