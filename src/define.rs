//! Descriptors from compact textual definitions.
//!
//! A definition is a comma-separated list of fields: a short name (`-i`), a
//! long name (`--int`) and a type name (`int`), each at most once and in any
//! order. Names without a type define a flag, names with a type define an
//! option and a lone type defines a positional argument.
//!
//! ```
//! use argtable::{Table, Value};
//!
//! let mut table = Table::define(["-i,--int,int", "-q", "double"]).unwrap();
//! let mut arguments = ["prog", "2.5", "-q", "--int", "42"];
//! table.parse(&mut arguments).unwrap();
//! assert_eq!(table.get("-i"), Some(&Value::Int(42)));
//! assert_eq!(table.get("-q"), Some(&Value::Flag(true)));
//! assert_eq!(table.positional(0), Some(&Value::Double(2.5)));
//! ```

use crate::{
    decode::Type,
    error::Error,
    table::{Descriptor, Table},
};
use std::str::FromStr;

impl<'a> FromStr for Descriptor<'a> {
    type Err = Error;

    fn from_str(definition: &str) -> Result<Self, Self::Err> {
        let invalid =
            |reason: &'static str| Error::InvalidDefinition(definition.into(), reason.into());
        let mut short = None;
        let mut long = None;
        let mut kind = None;
        for field in definition.split(',') {
            if field.is_empty() {
                return Err(invalid("empty field"));
            } else if let Some(name) = field.strip_prefix("--") {
                if name.is_empty() {
                    return Err(invalid("missing long name"));
                } else if long.replace(field).is_some() {
                    return Err(invalid("only one long name allowed"));
                }
            } else if let Some(name) = field.strip_prefix('-') {
                if name.is_empty() {
                    return Err(invalid("missing short name"));
                } else if short.replace(field).is_some() {
                    return Err(invalid("only one short name allowed"));
                }
            } else if kind.replace(field.parse::<Type>()?).is_some() {
                return Err(invalid("only one type allowed"));
            }
        }

        let descriptor = match (short.is_some() || long.is_some(), kind) {
            (false, Some(kind)) => return Ok(Descriptor::positional(kind.value())),
            (false, None) => return Err(invalid("missing type for positional argument")),
            (true, Some(kind)) => Descriptor::option(kind.value()),
            (true, None) => Descriptor::flag(),
        };
        let descriptor = match short {
            Some(name) => descriptor.short(name.to_owned()),
            None => descriptor,
        };
        Ok(match long {
            Some(name) => descriptor.long(name.to_owned()),
            None => descriptor,
        })
    }
}

impl<'a> Table<'a> {
    /// Builds and verifies a table from one definition per descriptor.
    pub fn define(
        definitions: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, Error> {
        let table = definitions
            .into_iter()
            .map(|definition| definition.as_ref().parse())
            .collect::<Result<Table, _>>()?;
        table.verify()?;
        Ok(table)
    }
}
