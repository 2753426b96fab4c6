//! How syntax errors are surfaced by the entry points.

use std::sync::Arc;

use crate::{Descriptor, Error};


/// What happens when the text given to an entry point is not valid descriptor
/// syntax.  Chosen per call.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub enum ErrorMode {
    /// Return the [`Error`](../typedesc_core/struct.Error.html) as `Err`.
    #[default]
    Throw,
    /// Return [`Parsed::Absent`](enum.Parsed.html#variant.Absent).
    Null,
    /// Return the error as the value
    /// [`Parsed::Invalid`](enum.Parsed.html#variant.Invalid), without failing.
    ErrorValue,
}

impl ErrorMode {
    /// Surface the outcome of parsing according to this mode.  Only `Throw`
    /// ever gives `Err`.
    #[inline]
    pub fn apply(self, result: Result<Arc<Descriptor>, Error>) -> Result<Parsed, Error> {
        match (result, self) {
            (Ok(descriptor), _) => Ok(Parsed::Descriptor(descriptor)),
            (Err(error), ErrorMode::Throw) => Err(error),
            (Err(_), ErrorMode::Null) => Ok(Parsed::Absent),
            (Err(error), ErrorMode::ErrorValue) => Ok(Parsed::Invalid(error)),
        }
    }
}


/// The successful return of an entry point that was given an `ErrorMode`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Parsed {
    /// The text was valid.
    Descriptor(Arc<Descriptor>),
    /// The text was invalid, under `ErrorMode::Null`.
    Absent,
    /// The text was invalid, under `ErrorMode::ErrorValue`.  The error exposes
    /// the original text and renders a message.
    Invalid(Error),
}

impl Parsed {
    /// The `Descriptor`, if valid.
    #[inline]
    pub fn descriptor(&self) -> Option<&Arc<Descriptor>> {
        match self {
            Parsed::Descriptor(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    /// Like [`descriptor`](#method.descriptor) but by value.
    #[inline]
    pub fn into_descriptor(self) -> Option<Arc<Descriptor>> {
        match self {
            Parsed::Descriptor(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    /// The `Error`, if invalid under `ErrorMode::ErrorValue`.
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        match self {
            Parsed::Invalid(error) => Some(error),
            _ => None,
        }
    }

    /// Whether the text was invalid under `ErrorMode::Null`.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Parsed::Absent)
    }
}
