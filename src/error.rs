use crate::decode::Type;
use core::fmt;
use std::{borrow::Cow, error};

#[derive(Clone, PartialEq)]
pub enum Error {
    InvalidInvocation(usize),
    UnknownOption(String),
    DuplicateOption(String),
    MissingOptionValue(String),
    DecodeFailure(Type, Cow<'static, str>),
    TooManyPositionals,
    MissingRequiredPositionals,
    ConfigurationFault(Cow<'static, str>),

    DuplicateName(String),
    InvalidDefinition(String, Cow<'static, str>),
    UnknownType(String),
}

impl error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInvocation(index) => {
                write!(f, "invalid invocation: argument {index} is not valid unicode")
            }
            Error::UnknownOption(option) => write!(f, "unknown option '{option}'"),
            Error::DuplicateOption(option) => {
                write!(f, "option '{option}' is set more than once")
            }
            Error::MissingOptionValue(option) => {
                write!(f, "option '{option}' requires an argument")
            }
            Error::DecodeFailure(type_name, label) => {
                write!(f, "{type_name} value required for {label}")
            }
            Error::TooManyPositionals => write!(f, "too many positional arguments"),
            Error::MissingRequiredPositionals => {
                write!(f, "missing required positional arguments")
            }
            // A table construction defect; reported like any other internal failure.
            Error::ConfigurationFault(_) => write!(f, "error parsing arguments"),
            Error::DuplicateName(name) => write!(f, "flag in use for multiple options: {name}"),
            Error::InvalidDefinition(definition, reason) => {
                write!(f, "invalid definition '{definition}': {reason}")
            }
            Error::UnknownType(name) => write!(f, "unknown argument type: {name}"),
        }
    }
}
