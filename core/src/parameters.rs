//! Parameters attached to a `Generic` or `Array` descriptor.

use alloc::{string::String, vec::Vec};
use core::slice;


/// One entry in a [`Parameters`](struct.Parameters.html) list.
///
/// Values are always strings, with any quoting and escaping already resolved.
/// Interpreting them (e.g. as numbers) is up to the user.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Parameter {
    /// A value given by position, e.g. the `0` in `int(0)`
    Positional(String),
    /// A value given by key, e.g. the `max:123` in `int(max:123)`
    Named {
        /// The key, an identifier
        key: String,
        /// The value
        value: String,
    },
}

impl Parameter {
    /// The key, if this is a named parameter.
    #[inline]
    pub fn key(&self) -> Option<&str> {
        match self {
            Parameter::Positional(_) => None,
            Parameter::Named { key, .. } => Some(key),
        }
    }

    /// The value, regardless of how it was given.
    #[inline]
    pub fn value(&self) -> &str {
        match self {
            Parameter::Positional(value) | Parameter::Named { value, .. } => value,
        }
    }
}


/// An ordered list of parameters where positional and named entries are
/// interleaved in the order they appeared in the source, and where the keys of
/// the named entries are unique.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Parameters {
    entries: Vec<Parameter>,
}

/// A list of just `param`, which cannot have a duplicate key.
impl From<Parameter> for Parameters {
    #[inline]
    fn from(param: Parameter) -> Self {
        Self { entries: alloc::vec![param] }
    }
}

impl Parameters {
    /// An empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append a parameter.  If it is named and its key is already present, the
    /// list is left unchanged and the rejected parameter is given back.
    pub fn try_push(&mut self, param: Parameter) -> Result<(), Parameter> {
        if let Some(key) = param.key() {
            if self.get(key).is_some() {
                return Err(param);
            }
        }
        self.entries.push(param);
        Ok(())
    }

    /// The number of entries, positional and named.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at the given source position.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<&Parameter> {
        self.entries.get(index)
    }

    /// The value of the named entry with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find_map(|p| match p {
            Parameter::Named { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// All entries in source order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Parameter> {
        self.entries.iter()
    }

    /// The values of only the positional entries, in source order.
    pub fn positional(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().filter_map(|p| match p {
            Parameter::Positional(value) => Some(value.as_str()),
            Parameter::Named { .. } => None,
        })
    }

    /// The `(key, value)` pairs of only the named entries, in source order.
    pub fn named(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().filter_map(|p| match p {
            Parameter::Named { key, value } => Some((key.as_str(), value.as_str())),
            Parameter::Positional(_) => None,
        })
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = slice::Iter<'a, Parameter>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
