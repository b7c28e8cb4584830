use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::{Environment, EnvironmentCaptureError, RuntimeConfig};
use crate::backup::{SnapshotWalker, WalkError};
use crate::cli::Cli;
use crate::filesystem::OsFileSystem;
use crate::report::ReportPrinter;

pub struct Application;

impl Application {
    pub fn run(cli: Cli) -> Result<(), ApplicationError> {
        let environment = Environment::capture().context(EnvironmentSnafu)?;
        let config = RuntimeConfig::resolve(cli, environment);
        debug!("Resolved runtime configuration: {config:?}");

        let mut printer = ReportPrinter::new(&config);
        if config.verbose {
            printer.computer_name(&config.computer_name);
        }

        let fs = OsFileSystem;
        let mut walker = SnapshotWalker::new(&fs, &config);
        let print_location_headers = config.locations.len() > 1;
        for location in &config.locations {
            if print_location_headers {
                printer.location_header(location);
            }
            walker.walk(location, &mut printer).context(BackupWalkSnafu)?;
        }

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while capturing the environment"))]
    EnvironmentError { source: EnvironmentCaptureError },
    #[snafu(display("Critical failure encountered while walking the backup volumes"))]
    BackupWalkError { source: WalkError },
}
