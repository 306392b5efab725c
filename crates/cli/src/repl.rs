//! Input loops: pipe/file mode and the interactive REPL.

use std::io::{self, BufRead, Write};

use nestkv_executor::{Executor, Output};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::format::{format_error, format_output, OutputMode};

const PROMPT: &str = "nestkv> ";

/// Whether the input loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Execute one line and write its response, if any.
pub fn process_line<W: Write>(
    executor: &mut Executor,
    line: &str,
    out: &mut W,
    mode: OutputMode,
) -> io::Result<Flow> {
    match executor.execute_line(line) {
        Ok(Output::End) => Ok(Flow::Stop),
        Ok(output) => {
            if let Some(text) = format_output(&output, mode) {
                writeln!(out, "{}", text)?;
            }
            Ok(Flow::Continue)
        }
        Err(e) => {
            writeln!(out, "{}", format_error(&e, mode))?;
            Ok(Flow::Continue)
        }
    }
}

/// Run every line of `input` until END or end of input.
///
/// Lines after END are never read. Input is taken as raw bytes; invalid
/// UTF-8 is replaced with U+FFFD rather than ending the run.
pub fn run_lines<R: BufRead, W: Write>(
    executor: &mut Executor,
    mut input: R,
    out: &mut W,
    mode: OutputMode,
) -> io::Result<()> {
    let mut buf = Vec::new();
    let mut count = 0usize;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        count += 1;
        let line = String::from_utf8_lossy(strip_newline(&buf));
        if process_line(executor, &line, out, mode)? == Flow::Stop {
            debug!(lines = count, "END received");
            break;
        }
    }
    out.flush()
}

fn strip_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Run pipe mode over stdin. Returns the process exit code.
pub fn run_pipe(executor: &mut Executor, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match run_lines(executor, stdin.lock(), &mut out, mode) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}

/// Run the interactive prompt until END, Ctrl-D or Ctrl-C.
pub fn run_repl(executor: &mut Executor, mode: OutputMode) -> i32 {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) failed to start line editor: {}", e);
            return 1;
        }
    };

    let stdout = io::stdout();
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                let mut out = stdout.lock();
                match process_line(executor, &line, &mut out, mode) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Stop) => break,
                    Err(e) => {
                        eprintln!("(error) {}", e);
                        return 1;
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                warn!(error = %e, "readline failed");
                eprintln!("(error) {}", e);
                return 1;
            }
        }
    }
    0
}
