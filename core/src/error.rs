//! Errors that might be returned by parsing.

use alloc::string::String;


/// The single kind of error returned by parsing: the input is not valid
/// type-descriptor syntax.
///
/// It carries the exact text that was given to the parser (not the trimmed or
/// unwrapped text that was being examined when the problem was found), so that
/// callers can report it or retry against it.  The [`Reason`] only exists to
/// make the message more helpful; callers are not expected to branch on it.
///
/// [`Reason`]: enum.Reason.html
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[error("invalid type descriptor {input:?}: {reason}")]
pub struct Error {
    input: String,
    reason: Reason,
}

impl Error {
    /// Make a new `Error` for the given rejected input.
    #[inline]
    pub fn new(input: impl Into<String>, reason: Reason) -> Self {
        Self { input: input.into(), reason }
    }

    /// The exact text that was rejected.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// What was wrong with it.
    #[inline]
    pub fn reason(&self) -> Reason {
        self.reason
    }

    /// Consume `self` and give back the rejected text.
    #[inline]
    pub fn into_input(self) -> String {
        self.input
    }
}


/// Why some input was rejected.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, thiserror::Error)]
pub enum Reason {
    /// Input was empty or only whitespace
    #[error("empty input")]
    Empty,
    /// Close-delimiter without matching open-delimiter, open-delimiter without
    /// matching close-delimiter, or a pair that does not match (e.g. `(]`)
    #[error("unbalanced delimiters")]
    Unbalanced,
    /// End of input reached inside a double-quoted string
    #[error("unterminated quoted string")]
    UnterminatedQuote,
    /// A character that is not allowed where it appeared
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    /// An operand, group, generic argument or parameter item was blank.  This
    /// is what a dangling or doubled `|` or `&` operator causes.
    #[error("empty operand")]
    EmptyOperand,
    /// The same named parameter was given more than once
    #[error("duplicate parameter key")]
    DuplicateKey,
    /// The interior of an array suffix was not a run of digits
    #[error("array size is not a number")]
    ArraySize,
    /// A named parameter had no value
    #[error("missing parameter value")]
    EmptyValue,
    /// Something followed what should have been the end of the descriptor
    #[error("unexpected trailing text")]
    TrailingText,
    /// No type name where one is required
    #[error("missing type name")]
    MissingName,
}


#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn message() {
        let e = Error::new(" int( ", Reason::Unbalanced);
        assert_eq!(e.to_string(),
                   r#"invalid type descriptor " int( ": unbalanced delimiters"#);
        assert_eq!(e.input(), " int( ");
        assert_eq!(e.reason(), Reason::Unbalanced);

        let e = Error::new("a;b", Reason::UnexpectedChar(';'));
        assert_eq!(e.to_string(),
                   r#"invalid type descriptor "a;b": unexpected character ';'"#);
    }

    #[test]
    fn equality() {
        use Reason::*;

        assert_eq!(Error::new("", Empty), Error::new("", Empty));
        assert_ne!(Error::new("x", Empty), Error::new("y", Empty));
        assert_ne!(Error::new("x", Empty), Error::new("x", TrailingText));
        assert_eq!(Error::new("x", Empty).into_input(), "x");
    }
}
