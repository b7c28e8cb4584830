use std::env;
use std::path::PathBuf;

use console::Term;
use snafu::{ResultExt, Snafu};
use tracing::debug;

/// Process-wide lookups, captured once at startup.
///
/// The traversal core never reads the environment itself; everything it
/// needs is resolved here and injected through the runtime configuration.
#[derive(Debug, Clone)]
pub struct Environment {
    pub working_directory: PathBuf,
    pub host_name: String,
    pub terminal_columns: usize,
}

impl Environment {
    pub fn capture() -> Result<Self, EnvironmentCaptureError> {
        let working_directory = env::current_dir().context(WorkingDirectorySnafu)?;
        let environment = Self {
            working_directory,
            host_name: short_host_name(),
            terminal_columns: terminal_columns(),
        };
        debug!("Captured environment: {environment:?}");
        Ok(environment)
    }
}

/// The local host's short name: everything before the first domain dot.
/// Failure to retrieve a host name degrades to an empty string.
fn short_host_name() -> String {
    hostname::get()
        .map(|name| {
            let name = name.to_string_lossy();
            name.split('.').next().unwrap_or_default().to_string()
        })
        .unwrap_or_default()
}

/// Width of the controlling terminal, or 0 when stdout is redirected or
/// the size cannot be read. A width of 0 yields single-column output.
fn terminal_columns() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_rows, columns)| columns as usize)
        .unwrap_or(0)
}

#[derive(Debug, Snafu)]
pub enum EnvironmentCaptureError {
    #[snafu(display("Failed to determine the current working directory"))]
    WorkingDirectoryError { source: std::io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_yields_an_absolute_working_directory() {
        let environment = Environment::capture().expect("Capture should succeed");
        assert!(environment.working_directory.is_absolute());
    }

    #[test]
    fn short_host_name_has_no_domain_part() {
        assert!(!short_host_name().contains('.'));
    }
}
