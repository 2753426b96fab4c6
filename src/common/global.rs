//! The process-wide parser and the entry points that use it.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::{
    Descriptor, Error,
    parser::{CachingParser, DefaultCharClassifier},
    mode::{ErrorMode, Parsed},
};


/// The type of the process-wide parser.
pub type GlobalParser = CachingParser<DefaultCharClassifier>;

static GLOBAL: Lazy<GlobalParser> = Lazy::new(GlobalParser::default);


/// The process-wide parser, which uses the default character classes and an
/// unbounded cache.  It is made on first use.
#[inline]
pub fn global() -> &'static GlobalParser {
    &GLOBAL
}

/// Decompose one level of `text`, without degrouping, using the process-wide
/// parser.
///
/// ```
/// let d = typedesc::parse("?Map<string, int>|null").unwrap();
/// assert_eq!(d.names(), &["?Map<string, int>", "null"]);
/// assert!(typedesc::parse("int(").is_err());
/// ```
#[inline]
pub fn parse(text: &str) -> Result<Arc<Descriptor>, Error> {
    GLOBAL.parse(text, false)
}

/// Like [`parse`](fn.parse.html) but enclosing parentheses are unwrapped.
#[inline]
pub fn parse_degrouped(text: &str) -> Result<Arc<Descriptor>, Error> {
    GLOBAL.parse(text, true)
}

/// Decompose one level of `text` using the process-wide parser, with syntax
/// errors surfaced as chosen by `mode`.
///
/// ```
/// use typedesc::{ErrorMode, Parsed};
///
/// assert_eq!(typedesc::parse_with("", false, ErrorMode::Null), Ok(Parsed::Absent));
/// let invalid = typedesc::parse_with("int||float", false, ErrorMode::ErrorValue).unwrap();
/// assert_eq!(invalid.error().unwrap().input(), "int||float");
/// ```
#[inline]
pub fn parse_with(text: &str, degroup: bool, mode: ErrorMode) -> Result<Parsed, Error> {
    mode.apply(GLOBAL.parse(text, degroup))
}
