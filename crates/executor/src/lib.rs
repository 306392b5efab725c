//! Command execution layer for nestkv
//!
//! Turns textual commands into engine calls:
//! - [`parse_line`]: one input line → [`Command`]
//! - [`Executor`]: runs a [`Command`] against an owned [`Database`] and
//!   returns an [`Output`]
//!
//! Formatting outputs for humans or machines is left to the caller.
//!
//! # Example
//!
//! ```
//! use nestkv_executor::{Executor, Output};
//!
//! let mut executor = Executor::default();
//! executor.execute_line("SET a 10").unwrap();
//! let out = executor.execute_line("NUMEQUALTO 10").unwrap();
//! assert_eq!(out, Output::Count(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod error;
mod executor;
mod handlers;
mod output;
mod parse;


pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;
pub use parse::parse_line;

pub use nestkv_core::{Key, Value};
pub use nestkv_engine::Database;
