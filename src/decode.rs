//! Typed values and the decoders that turn argument text into them.

use crate::error::Error;
use core::{fmt, str::FromStr};

/// The type tag of a decodable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Long,
    UInt,
    ULong,
    Float,
    Double,
    String,
    Hex,
}

/// The storage of a descriptor. The variant selects the decoder used to fill it.
///
/// Strings are borrowed from the argument vector and never copied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Int(i32),
    Long(i64),
    UInt(u32),
    ULong(u64),
    Float(f32),
    Double(f64),
    String(Option<&'a str>),
    Hex(i64),
    Flag(bool),
}

impl Type {
    pub const ALL: [Type; 8] = [
        Type::Int,
        Type::Long,
        Type::UInt,
        Type::ULong,
        Type::Float,
        Type::Double,
        Type::String,
        Type::Hex,
    ];

    /// The name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Int => "integer",
            Type::Long => "long integer",
            Type::UInt => "unsigned integer",
            Type::ULong => "unsigned long integer",
            Type::Float | Type::Double => "floating point",
            Type::String => "string",
            Type::Hex => "hexadecimal",
        }
    }

    /// The zero value of this type.
    pub const fn value(self) -> Value<'static> {
        match self {
            Type::Int => Value::Int(0),
            Type::Long => Value::Long(0),
            Type::UInt => Value::UInt(0),
            Type::ULong => Value::ULong(0),
            Type::Float => Value::Float(0.0),
            Type::Double => Value::Double(0.0),
            Type::String => Value::String(None),
            Type::Hex => Value::Hex(0),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Type::Int),
            "long" => Ok(Type::Long),
            "uint" => Ok(Type::UInt),
            "ulong" => Ok(Type::ULong),
            "float" => Ok(Type::Float),
            "double" => Ok(Type::Double),
            "string" => Ok(Type::String),
            "hex" => Ok(Type::Hex),
            _ => Err(Error::UnknownType(s.into())),
        }
    }
}

impl<'a> Value<'a> {
    /// `None` for flags, which carry no decodable value.
    pub const fn type_of(&self) -> Option<Type> {
        match self {
            Value::Int(_) => Some(Type::Int),
            Value::Long(_) => Some(Type::Long),
            Value::UInt(_) => Some(Type::UInt),
            Value::ULong(_) => Some(Type::ULong),
            Value::Float(_) => Some(Type::Float),
            Value::Double(_) => Some(Type::Double),
            Value::String(_) => Some(Type::String),
            Value::Hex(_) => Some(Type::Hex),
            Value::Flag(_) => None,
        }
    }

    pub fn type_name(&self) -> Option<&'static str> {
        self.type_of().map(Type::name)
    }

    /// Replaces the value with `token` decoded as the current type.
    /// On failure the value is left untouched.
    pub(crate) fn decode(&mut self, token: &'a str) -> Option<()> {
        *self = match *self {
            Value::Int(_) => Value::Int(signed(token, 10)?),
            Value::Long(_) => Value::Long(signed(token, 10)?),
            Value::UInt(_) => Value::UInt(match unsigned(token)? {
                // Negative input wraps, as `strtoul` does.
                (true, magnitude) => (magnitude as u32).wrapping_neg(),
                (false, magnitude) => u32::try_from(magnitude).ok()?,
            }),
            Value::ULong(_) => Value::ULong(match unsigned(token)? {
                (true, magnitude) => magnitude.wrapping_neg(),
                (false, magnitude) => magnitude,
            }),
            Value::Float(_) => Value::Float(trim(token).parse().ok()?),
            Value::Double(_) => Value::Double(trim(token).parse().ok()?),
            Value::String(_) => Value::String(Some(token)),
            Value::Hex(_) => Value::Hex(signed(token, 16)?),
            Value::Flag(_) => return None,
        };
        Some(())
    }

    pub const fn as_int(&self) -> Option<i32> {
        match *self {
            Value::Int(value) => Some(value),
            _ => None,
        }
    }

    pub const fn as_long(&self) -> Option<i64> {
        match *self {
            Value::Long(value) => Some(value),
            _ => None,
        }
    }

    pub const fn as_uint(&self) -> Option<u32> {
        match *self {
            Value::UInt(value) => Some(value),
            _ => None,
        }
    }

    pub const fn as_ulong(&self) -> Option<u64> {
        match *self {
            Value::ULong(value) => Some(value),
            _ => None,
        }
    }

    pub const fn as_float(&self) -> Option<f32> {
        match *self {
            Value::Float(value) => Some(value),
            _ => None,
        }
    }

    pub const fn as_double(&self) -> Option<f64> {
        match *self {
            Value::Double(value) => Some(value),
            _ => None,
        }
    }

    /// `None` both for non-strings and for strings that were never set.
    pub const fn as_str(&self) -> Option<&'a str> {
        match *self {
            Value::String(value) => value,
            _ => None,
        }
    }

    pub const fn as_hex(&self) -> Option<i64> {
        match *self {
            Value::Hex(value) => Some(value),
            _ => None,
        }
    }

    pub const fn as_flag(&self) -> Option<bool> {
        match *self {
            Value::Flag(value) => Some(value),
            _ => None,
        }
    }
}

fn trim(token: &str) -> &str {
    token.trim_start_matches(|letter: char| letter.is_ascii_whitespace())
}

/// Splits the sign off and, in base 16, an optional `0x` prefix.
fn split(token: &str, radix: u32) -> Option<(bool, &str)> {
    let token = trim(token);
    let (negative, digits) = match token.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let digits = match radix {
        16 => digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits),
        _ => digits,
    };
    // `from_str_radix` would accept a second sign.
    if digits.is_empty() || digits.starts_with(|letter: char| letter == '+' || letter == '-') {
        None
    } else {
        Some((negative, digits))
    }
}

fn signed<T: TryFrom<i128>>(token: &str, radix: u32) -> Option<T> {
    let (negative, digits) = split(token, radix)?;
    let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
    T::try_from(if negative { -magnitude } else { magnitude }).ok()
}

fn unsigned(token: &str) -> Option<(bool, u64)> {
    let (negative, digits) = split(token, 10)?;
    Some((negative, digits.parse().ok()?))
}
