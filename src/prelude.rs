//! Convenient imports for nestkv.
//!
//! ```
//! use nestkv::prelude::*;
//!
//! let mut executor = Executor::new(Database::new());
//! assert_eq!(executor.execute_line("GET a").unwrap(), Output::Maybe(None));
//! ```

// Engine
pub use crate::{Database, DatabaseBuilder};

// Command layer
pub use crate::{parse_line, Command, Executor, Output};

// Error handling
pub use crate::{Error, Result};

// Core types
pub use crate::{Key, PriorState, Value};
