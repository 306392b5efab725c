//! nestkv CLI: line-oriented interpreter for the nestkv engine.
//!
//! Three modes:
//! - **File mode**: `nestkv --input cmds.txt`: run a command file
//! - **Pipe mode**: `printf 'SET a 1\nGET a\n' | nestkv`: line-by-line from stdin
//! - **REPL mode**: `nestkv`: interactive prompt (if stdin is TTY)
//!
//! Processing stops at `END` or at end of input. Logs go to stderr.
//!
//! # Exit codes
//!
//! - `0`: input ended, either by `END` or by end of input. `END` is a normal
//!   shutdown, not a failure.
//! - `1`: the input file could not be opened, or reading input or writing
//!   output failed.
//!
//! Interpreter errors such as `NO TRANSACTION` are part of the transcript
//! and never change the exit code.

mod commands;
mod format;
mod parse;
mod repl;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::process;

use nestkv_executor::{Database, Executor};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use parse::{matches_to_config, CliConfig};

const LOG_ENV: &str = "NESTKV_LOG";

fn main() {
    let matches = build_cli().get_matches();
    let config = matches_to_config(&matches);

    init_logging(config.log_level.as_deref());

    let mut executor = Executor::new(open_database(&config));

    let exit_code = if let Some(path) = &config.input {
        // File mode
        match File::open(path) {
            Ok(file) => run_file(&mut executor, file, &config),
            Err(e) => {
                eprintln!("(error) cannot open {}: {}", path.display(), e);
                1
            }
        }
    } else if io::stdin().is_terminal() {
        // REPL mode
        repl::run_repl(&mut executor, config.output_mode)
    } else {
        // Pipe mode
        repl::run_pipe(&mut executor, config.output_mode)
    };

    process::exit(exit_code);
}

fn open_database(config: &CliConfig) -> Database {
    let builder = Database::builder();
    match config.capacity {
        Some(capacity) => builder.capacity(capacity).build(),
        None => builder.build(),
    }
}

fn run_file(executor: &mut Executor, file: File, config: &CliConfig) -> i32 {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match repl::run_lines(executor, BufReader::new(file), &mut out, config.output_mode) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}

/// Install the stderr log subscriber.
///
/// `--log-level` wins over `NESTKV_LOG`; an unparsable or missing filter
/// falls back to `warn`.
fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_env(LOG_ENV).ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
