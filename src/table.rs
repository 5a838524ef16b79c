use crate::{decode::Value, error::Error, MAXIMUM};
use std::{borrow::Cow, collections::HashSet};

pub(crate) const POSITIONAL: &str = "positional argument";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A switch that takes no value.
    Flag,
    /// A named switch followed by exactly one value.
    Option,
    /// An unnamed, required value assigned by table order.
    Positional,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor<'a> {
    pub(crate) kind: Kind,
    pub(crate) short: Option<Cow<'static, str>>,
    pub(crate) long: Option<Cow<'static, str>>,
    pub(crate) value: Value<'a>,
    pub(crate) seen: bool,
}

/// An ordered list of descriptors. Lookups resolve ties by this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table<'a> {
    pub(crate) descriptors: Vec<Descriptor<'a>>,
}

impl<'a> Descriptor<'a> {
    const fn new(kind: Kind, value: Value<'a>) -> Self {
        Self {
            kind,
            short: None,
            long: None,
            value,
            seen: false,
        }
    }

    pub const fn flag() -> Self {
        Self::new(Kind::Flag, Value::Flag(false))
    }

    /// The initial value doubles as the default kept when the option is absent.
    pub const fn option(value: Value<'a>) -> Self {
        Self::new(Kind::Option, value)
    }

    pub const fn positional(value: Value<'a>) -> Self {
        Self::new(Kind::Positional, value)
    }

    pub fn short(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.short = Some(name.into());
        self
    }

    pub fn long(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.long = Some(name.into());
        self
    }

    pub const fn kind(&self) -> Kind {
        self.kind
    }

    pub fn short_name(&self) -> Option<&str> {
        self.short.as_deref()
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub const fn value(&self) -> &Value<'a> {
        &self.value
    }

    /// Whether this descriptor consumed input during the last parse.
    pub const fn seen(&self) -> bool {
        self.seen
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.short.as_deref().into_iter().chain(self.long.as_deref())
    }

    /// The name used in diagnostics about this descriptor itself.
    pub(crate) fn label(&self) -> Cow<'static, str> {
        match (&self.short, &self.long) {
            (Some(name), _) | (None, Some(name)) => name.clone(),
            (None, None) => Cow::Borrowed(POSITIONAL),
        }
    }
}

impl<'a> Table<'a> {
    pub const fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    pub fn with(mut self, descriptor: Descriptor<'a>) -> Self {
        self.push(descriptor);
        self
    }

    pub fn push(&mut self, descriptor: Descriptor<'a>) {
        self.descriptors.push(descriptor);
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn descriptors(&self) -> &[Descriptor<'a>] {
        &self.descriptors
    }

    /// The value of the first flag or option answering to `name`.
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.find(name).map(|index| &self.descriptors[index].value)
    }

    /// The value of the `index`-th positional descriptor.
    pub fn positional(&self, index: usize) -> Option<&Value<'a>> {
        self.descriptors
            .iter()
            .filter(|descriptor| descriptor.kind == Kind::Positional)
            .nth(index)
            .map(|descriptor| &descriptor.value)
    }

    /// Rejects names shared by more than one descriptor, which would leave
    /// all but the first unreachable.
    pub fn verify(&self) -> Result<(), Error> {
        let mut names = HashSet::new();
        for descriptor in &self.descriptors {
            for name in descriptor.names() {
                if !names.insert(truncate(name)) {
                    return Err(Error::DuplicateName(name.into()));
                }
            }
        }
        Ok(())
    }

    /// Index of the first descriptor with a short or long name equal to `token`.
    pub(crate) fn find(&self, token: &str) -> Option<usize> {
        let token = truncate(token);
        self.descriptors
            .iter()
            .position(|descriptor| descriptor.names().any(|name| truncate(name) == token))
    }

    pub(crate) fn count(&self, kind: Kind) -> usize {
        self.descriptors
            .iter()
            .filter(|descriptor| descriptor.kind == kind)
            .count()
    }
}

impl<'a> FromIterator<Descriptor<'a>> for Table<'a> {
    fn from_iter<T: IntoIterator<Item = Descriptor<'a>>>(iter: T) -> Self {
        Self {
            descriptors: iter.into_iter().collect(),
        }
    }
}

impl<'a> Extend<Descriptor<'a>> for Table<'a> {
    fn extend<T: IntoIterator<Item = Descriptor<'a>>>(&mut self, iter: T) {
        self.descriptors.extend(iter);
    }
}

/// Names are compared on their first `MAXIMUM` bytes only.
fn truncate(name: &str) -> &[u8] {
    let bytes = name.as_bytes();
    &bytes[..bytes.len().min(MAXIMUM)]
}
