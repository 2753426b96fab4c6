//! Traits and types that provide the different aspects of `Parser`s'
//! functionality.

use core::borrow::Borrow;

use crate::{Descriptor, Error};


/// Implementations provided for ready use.
pub mod premade
{
    mod default_classifier;
    pub use default_classifier::{DefaultCharClassifier, FLAG_SYMBOLS};
}

mod decompose;
mod params;


/// Determines which characters may form the flags and names of the `Generic`
/// form.  The structural punctuation (`(`, `)`, `<`, `>`, `[`, `]`, `,`, `:`,
/// `|`, `&` and `"`) is fixed and is not affected by this.
///
/// Characters that none of these predicates accept, and that are not
/// structural punctuation, are syntax errors wherever they appear outside of
/// parameter values.
pub trait CharClassifier {
    /// Predicate that determines the character(s) that may begin a name
    /// segment or a parameter key.
    fn is_name_start(&self, c: char) -> bool;

    /// Predicate that determines the character(s) that may continue a name
    /// segment or a parameter key.
    fn is_name_char(&self, c: char) -> bool;

    /// Predicate that determines the character(s) that join the segments of a
    /// namespaced name.
    fn is_namespace_separator(&self, c: char) -> bool;

    /// Predicate that determines the character(s) that may prefix a name to
    /// make it absolute.  Only one is allowed.
    fn is_root_separator(&self, c: char) -> bool;

    /// Predicate that determines the character(s) of a flag word, which is
    /// terminated by a `:`.
    fn is_flag_word_char(&self, c: char) -> bool;

    /// Predicate that determines the character(s) that are flags on their own,
    /// without needing a terminating `:`.
    fn is_flag_symbol(&self, c: char) -> bool;

    /// Predicate that determines the character(s) considered to be
    /// insignificant whitespace.
    fn is_whitespace(&self, c: char) -> bool;
}


/// Something that can decompose descriptor text.  This is implemented by the
/// uncached [`Parser`](struct.Parser.html) here and by the caching parser of
/// the full crate, which give back their results in different ways.
pub trait ParseDescriptor {
    /// How the resulting `Descriptor` is held.
    type DescriptorRef: Borrow<Descriptor>;

    /// Decompose one level of the given `input`.  If `degroup` is true, any
    /// parentheses that enclose the whole input are unwrapped, repeatedly,
    /// instead of giving a `Group`.
    fn parse_descriptor(&self, input: &str, degroup: bool)
                        -> Result<Self::DescriptorRef, Error>;
}


/// The uncached parser.  It is parameterized over the `CharClassifier` it uses
/// so that applications may customize which characters are accepted as flags
/// and in names.
///
/// Parsing is a pure function of the classifier and the input, so a `Parser`
/// may be shared between threads if its classifier can be.
#[derive(Copy, Clone, Default, Debug)]
pub struct Parser<CC> {
    /// The `CharClassifier` used
    pub classifier: CC,
}

impl<CC> Parser<CC>
    where CC: CharClassifier,
{
    /// Decompose one level of the given `input`, giving a new `Descriptor`.
    ///
    /// Returns an [`Error`] carrying the exact `input` if it is not valid
    /// descriptor syntax.
    ///
    /// [`Error`]: ../struct.Error.html
    #[inline]
    pub fn parse(&self, input: &str, degroup: bool) -> Result<Descriptor, Error> {
        decompose::decompose(&self.classifier, input, degroup)
            .map_err(|reason| Error::new(input, reason))
    }
}

impl<CC> ParseDescriptor for Parser<CC>
    where CC: CharClassifier,
{
    type DescriptorRef = Descriptor;

    #[inline]
    fn parse_descriptor(&self, input: &str, degroup: bool) -> Result<Descriptor, Error> {
        self.parse(input, degroup)
    }
}


/// Remove leading and trailing whitespace, as determined by `cc`.
#[inline]
fn trim<'t, CC>(cc: &CC, text: &'t str) -> &'t str
    where CC: CharClassifier,
{
    text.trim_matches(|c| cc.is_whitespace(c))
}
