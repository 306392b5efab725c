//! ArgMatches → CliConfig conversion.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::format::OutputMode;

/// Settings collected from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Command file; stdin when `None`
    pub input: Option<PathBuf>,
    /// How responses are printed
    pub output_mode: OutputMode,
    /// Store capacity hint
    pub capacity: Option<usize>,
    /// Log filter directive
    pub log_level: Option<String>,
}

/// Convert clap ArgMatches into a CliConfig.
pub fn matches_to_config(matches: &ArgMatches) -> CliConfig {
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    CliConfig {
        input: matches.get_one::<String>("input").map(PathBuf::from),
        output_mode,
        capacity: matches.get_one::<usize>("capacity").copied(),
        log_level: matches.get_one::<String>("log-level").cloned(),
    }
}
