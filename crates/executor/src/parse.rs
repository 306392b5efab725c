//! Line → Command conversion.
//!
//! A line is split on whitespace into `VERB [arg1 [arg2]]`. Verbs are
//! case-sensitive. Tokens past the ones a verb needs are ignored.

use std::str::SplitWhitespace;

use nestkv_core::{Key, Value};
use tracing::debug;

use crate::{Command, Error, Result};

/// Parse one input line into a [`Command`]
///
/// # Errors
///
/// - [`Error::EmptyCommand`] for a blank line
/// - [`Error::UnknownCommand`] for an unrecognized verb
/// - [`Error::MissingArgument`] when a verb lacks its key or value
///
/// # Example
///
/// ```
/// use nestkv_executor::{parse_line, Command};
///
/// let cmd = parse_line("SET a 10").unwrap();
/// assert_eq!(cmd, Command::Set { key: "a".into(), value: "10".into() });
/// ```
pub fn parse_line(line: &str) -> Result<Command> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next().ok_or(Error::EmptyCommand)?;

    let cmd = match verb {
        "SET" => {
            let key = key_arg(&mut tokens, "SET")?;
            let value = value_arg(&mut tokens, "SET")?;
            Command::Set { key, value }
        }
        "GET" => Command::Get {
            key: key_arg(&mut tokens, "GET")?,
        },
        "UNSET" => Command::Unset {
            key: key_arg(&mut tokens, "UNSET")?,
        },
        "NUMEQUALTO" => Command::NumEqualTo {
            value: value_arg(&mut tokens, "NUMEQUALTO")?,
        },
        "BEGIN" => Command::Begin,
        "ROLLBACK" => Command::Rollback,
        "COMMIT" => Command::Commit,
        "END" => Command::End,
        other => {
            debug!(verb = other, "unknown command");
            return Err(Error::UnknownCommand(other.to_string()));
        }
    };

    Ok(cmd)
}

fn key_arg(tokens: &mut SplitWhitespace<'_>, command: &'static str) -> Result<Key> {
    tokens.next().map(Key::from).ok_or(Error::MissingArgument {
        command,
        argument: "key",
    })
}

fn value_arg(tokens: &mut SplitWhitespace<'_>, command: &'static str) -> Result<Value> {
    tokens.next().map(Value::from).ok_or(Error::MissingArgument {
        command,
        argument: "value",
    })
}
