//! A declarative, table-driven parser for command-line arguments.
//!
//! Options, flags and positional arguments are described once in a [`Table`].
//! Parsing decodes the raw argument vector into the typed [`Value`]s held by
//! that table and reports the first error encountered.
//!
//! ```
//! use argtable::{Descriptor, Error, Table, Type, Value};
//!
//! let mut table = Table::new()
//!     .with(Descriptor::option(Value::Int(0)).short("-i").long("--int"))
//!     .with(Descriptor::flag().short("-q"))
//!     .with(Descriptor::positional(Value::Float(0.0)));
//!
//! let mut arguments = ["prog", "3.5", "-q", "-i", "42"];
//! table.parse(&mut arguments)?;
//! assert_eq!(table.get("--int"), Some(&Value::Int(42)));
//! assert_eq!(table.get("-q"), Some(&Value::Flag(true)));
//! assert_eq!(table.positional(0), Some(&Value::Float(3.5)));
//!
//! let mut arguments = ["prog", "-i", "abc"];
//! let error = table.parse(&mut arguments).unwrap_err();
//! assert_eq!(error, Error::DecodeFailure(Type::Int, "-i".into()));
//! assert_eq!(error.to_string(), "integer value required for -i");
//! # Ok::<(), Error>(())
//! ```

mod decode;
mod define;
mod error;
mod parse;
pub mod shift;
mod table;

pub use crate::{
    decode::{Type, Value},
    error::Error,
    parse::{arguments, parse},
    table::{Descriptor, Kind, Table},
};

/// The number of leading bytes compared when matching option names.
pub const MAXIMUM: usize = 64;
