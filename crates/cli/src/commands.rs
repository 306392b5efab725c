//! clap command definition.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the top-level command line parser.
pub fn build_cli() -> Command {
    Command::new("nestkv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("In-memory key-value store with nested transactions")
        .long_about(
            "Reads commands one per line and prints responses.\n\n\
             Commands: SET k v, GET k, UNSET k, NUMEQUALTO v, BEGIN, ROLLBACK, COMMIT, END\n\n\
             Reads from --input if given, otherwise from stdin. An interactive\n\
             prompt is shown when stdin is a terminal.",
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read commands from FILE instead of stdin"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print one JSON object per response"),
        )
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Pre-size the store for about N keys"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log filter written to stderr (overrides NESTKV_LOG)"),
        )
}
