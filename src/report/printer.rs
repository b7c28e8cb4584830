use std::path::Path;

use colored::Colorize;

use crate::application::RuntimeConfig;
use crate::backup::{ListingSink, ResolvedLocation};
use crate::report::layout_columns;

/// Renders the walker's findings as the plain-text report on stdout.
///
/// Layout width comes from the resolved configuration; this type never
/// queries the terminal itself. Headers are colored only when stdout is a
/// supporting terminal.
pub struct ReportPrinter {
    columns: usize,
    verbose: bool,
    colorize: bool,
}

impl ReportPrinter {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            columns: config.columns,
            verbose: config.verbose,
            colorize: supports_color::on(supports_color::Stream::Stdout).is_some(),
        }
    }

    pub fn computer_name(&mut self, computer_name: &str) {
        println!("Computer Name: {computer_name}");
    }

    /// Header printed before each location when more than one was requested.
    pub fn location_header(&mut self, location: &ResolvedLocation) {
        let header = format!("{location}:");
        if self.colorize {
            println!("{}", header.as_str().bold());
        } else {
            println!("{header}");
        }
    }
}

impl ListingSink for ReportPrinter {
    fn volume_found(&mut self, volume: &str) {
        let header = format!("> {volume}");
        if self.colorize {
            println!("{}", header.as_str().cyan().bold());
        } else {
            println!("{header}");
        }
    }

    fn disk_selected(&mut self, disk_name: &str) {
        if self.verbose {
            println!("Disk Name: {disk_name}");
        }
    }

    fn listing(&mut self, path: &Path, entries: &[String]) {
        println!("{}", path.display());
        for line in layout_columns(entries, self.columns) {
            println!("{line}");
        }
        println!();
    }

    fn listing_failed(&mut self, path: &Path, error: &std::io::Error) {
        println!("An error occurred while reading {}: {error}", path.display());
    }
}
