use crate::{
    decode::Value,
    error::Error,
    shift::reposition,
    table::{Kind, Table, POSITIONAL},
};
use std::{borrow::Cow, env};
use tracing::{debug, trace};

/// Parses `arguments` into `table`. See [`Table::parse`].
pub fn parse<'a>(arguments: &mut [&'a str], table: &mut Table<'a>) -> Result<(), Error> {
    table.parse(arguments)
}

/// Collects the process arguments, program name included.
pub fn arguments() -> Result<Vec<String>, Error> {
    env::args_os()
        .enumerate()
        .map(|(index, argument)| {
            argument
                .into_string()
                .map_err(|_| Error::InvalidInvocation(index))
        })
        .collect()
}

impl<'a> Table<'a> {
    /// Decodes `arguments` into the values of this table.
    ///
    /// `arguments[0]` is the program name and is skipped. Free-standing values
    /// are first moved behind all options, in place, so that options and
    /// positional values may be freely interleaved on the command line.
    ///
    /// When there is nothing beyond the program name, the table is left
    /// exactly as it was, defaults included, and required positionals are not
    /// enforced. Otherwise every flag is reset and every descriptor forgets
    /// what it saw during a previous call.
    ///
    /// The first error aborts the parse; values decoded before it keep their
    /// new contents.
    pub fn parse(&mut self, arguments: &mut [&'a str]) -> Result<(), Error> {
        if arguments.len() <= 1 {
            debug!("no arguments to parse");
            return Ok(());
        }

        debug!(count = arguments.len() - 1, "parsing arguments");
        self.reset();
        reposition(arguments, self);
        let result = self.scan(arguments).and_then(|_| self.require());
        if let Err(error) = &result {
            debug!(%error, "failed to parse arguments");
        }
        result
    }

    fn reset(&mut self) {
        for descriptor in &mut self.descriptors {
            descriptor.seen = false;
            if descriptor.kind == Kind::Flag {
                descriptor.value = Value::Flag(false);
            }
        }
    }

    fn scan(&mut self, arguments: &[&'a str]) -> Result<(), Error> {
        let maximum = self.count(Kind::Positional);
        let mut positionals = 0;
        let mut index = 1;
        while index < arguments.len() {
            let token = arguments[index];
            if token.len() > 1 && token.starts_with('-') {
                index += self.option(token, arguments.get(index + 1).copied())?;
            } else {
                if positionals >= maximum {
                    return Err(Error::TooManyPositionals);
                }
                self.assign(token)?;
                positionals += 1;
                index += 1;
            }
        }
        Ok(())
    }

    /// Returns the number of tokens consumed.
    fn option(&mut self, token: &'a str, next: Option<&'a str>) -> Result<usize, Error> {
        let Some(found) = self.find(token) else {
            return Err(Error::UnknownOption(token.into()));
        };
        let descriptor = &mut self.descriptors[found];
        if descriptor.seen {
            return Err(Error::DuplicateOption(token.into()));
        }

        match (descriptor.kind, descriptor.value.type_of()) {
            (Kind::Flag, _) => {
                trace!(token, "flag");
                descriptor.seen = true;
                descriptor.value = Value::Flag(true);
                Ok(1)
            }
            (Kind::Option, Some(kind)) => {
                let Some(next) = next else {
                    return Err(Error::MissingOptionValue(token.into()));
                };
                trace!(token, value = next, "option");
                descriptor
                    .value
                    .decode(next)
                    .ok_or_else(|| Error::DecodeFailure(kind, Cow::Owned(token.into())))?;
                descriptor.seen = true;
                Ok(2)
            }
            // An option without a decodable type, or a positional with a name.
            (Kind::Option, None) | (Kind::Positional, _) => {
                Err(Error::ConfigurationFault(descriptor.label()))
            }
        }
    }

    fn assign(&mut self, token: &'a str) -> Result<(), Error> {
        let Some(descriptor) = self
            .descriptors
            .iter_mut()
            .find(|descriptor| descriptor.kind == Kind::Positional && !descriptor.seen)
        else {
            return Ok(());
        };
        let Some(kind) = descriptor.value.type_of() else {
            return Err(Error::ConfigurationFault(descriptor.label()));
        };

        trace!(token, "positional");
        descriptor.seen = true;
        descriptor
            .value
            .decode(token)
            .ok_or(Error::DecodeFailure(kind, Cow::Borrowed(POSITIONAL)))
    }

    fn require(&self) -> Result<(), Error> {
        if self
            .descriptors
            .iter()
            .any(|descriptor| descriptor.kind == Kind::Positional && !descriptor.seen)
        {
            Err(Error::MissingRequiredPositionals)
        } else {
            Ok(())
        }
    }
}
