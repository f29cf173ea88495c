// crates/split_blocks/src/config.rs

use std::path::PathBuf;

use block_selector::Filter;
use clap::ArgMatches;

/// Runtime configuration composed from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub phase: String,
    pub identifier: String,
    pub input: Option<PathBuf>,  // None == stdin
    pub output: Option<PathBuf>, // None == stdout
    pub verbosity: u8,
}

impl AppConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        AppConfig {
            phase: matches.get_one::<String>("phase").cloned().unwrap_or_default(),
            identifier: matches.get_one::<String>("func").cloned().unwrap_or_default(),
            input: matches.get_one::<PathBuf>("input").cloned(),
            output: matches.get_one::<PathBuf>("output").cloned(),
            verbosity: matches.get_one::<u8>("verbose").copied().unwrap_or(0),
        }
    }

    pub fn filter(&self) -> Filter {
        Filter::new(&self.phase, &self.identifier)
    }
}
