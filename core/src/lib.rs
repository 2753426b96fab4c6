//! The core of a parser for a compact textual notation that describes types,
//! such as `?\App\Collection(max:10)<int|string>` or `(A&B)|null` or
//! `int[3]`.
//!
//! A descriptor is decomposed only one level at a time: parsing classifies the
//! whole text as one of the [`Kind`]s and gives back the parts as raw,
//! unparsed substrings, which can each be parsed again if and when a deeper
//! breakdown is wanted.  This keeps each parse small and lets the results for
//! distinct substrings be memoized, which the full `typedesc` crate does.
//!
//! The notation, in order of precedence:
//!
//! * `( D )`: a group.  The parser can be asked to *degroup*, in which case
//!   enclosing parentheses are transparently unwrapped, repeatedly.
//! * `D1 | D2 | ...`: a union, split at `|` that are not nested inside any
//!   `(`, `<`, `[` or double-quoted string.
//! * `D1 & D2 & ...`: an intersection, split likewise, only when there is no
//!   top-level `|`.
//! * `D[N]` or `D[]`: an array.  Only the last bracket pair is the suffix.
//! * `word:` *flags* *name* `(`*parameters*`)` `<`*generic arguments*`>`: the
//!   generic form, where every part but the name is optional.  The name is
//!   made of segments joined by `\` or `.`, optionally prefixed by one `\`.
//!   The parameters are `value` or `key:value` items, where a value may be
//!   double-quoted with `\` escapes.
//!
//! Anything else is a syntax [`Error`], which carries the exact rejected text.
//!
//! This crate is `no_std` and only needs the `alloc` crate.  Which characters
//! are accepted in flags and names is determined by a [`CharClassifier`], and
//! the [`DefaultCharClassifier`] is provided.
//!
//! [`Kind`]: enum.Kind.html
//! [`Error`]: struct.Error.html
//! [`CharClassifier`]: parser/trait.CharClassifier.html
//! [`DefaultCharClassifier`]: parser/premade/struct.DefaultCharClassifier.html

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;


mod scan;

pub mod parser;
#[doc(no_inline)]
pub use parser::{Parser, ParseDescriptor, CharClassifier};

mod descriptor;
pub use descriptor::{Descriptor, Kind};

mod parameters;
pub use parameters::{Parameter, Parameters};

mod error;
pub use error::{Error, Reason};


/// A `Parser` that uses the [`DefaultCharClassifier`].
///
/// [`DefaultCharClassifier`]: parser/premade/struct.DefaultCharClassifier.html
pub type DefaultParser = Parser<parser::premade::DefaultCharClassifier>;


#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec, vec::Vec};

    #[test]
    fn one_level_at_a_time() {
        let p = DefaultParser::default();

        let top = p.parse("?Map<string, (int|float)[]>|null", false).unwrap();
        assert_eq!(top.kind(), Kind::Union);
        assert_eq!(top.names(), &["?Map<string, (int|float)[]>", "null"]);

        let map = p.parse(top.name(), false).unwrap();
        assert_eq!(map.kind(), Kind::Generic);
        assert_eq!(map.flags(), "?");
        assert_eq!(map.generic_args(), &["string", "(int|float)[]"]);

        let array = p.parse(&map.generic_args()[1], false).unwrap();
        assert_eq!(array.kind(), Kind::Array);
        assert_eq!(array.name(), "(int|float)");

        let group = p.parse(array.name(), false).unwrap();
        assert_eq!(group.kind(), Kind::Group);
        assert_eq!(p.parse(array.name(), true).unwrap().names(), &["int", "float"]);
        assert_eq!(p.parse(group.name(), false).unwrap().kind(), Kind::Union);
    }

    #[test]
    fn error_carries_original_input() {
        let p = DefaultParser::default();
        let e = p.parse("  ((int|)) ", true).unwrap_err();
        assert_eq!(e.input(), "  ((int|)) ");
        assert_eq!(e.reason(), Reason::EmptyOperand);
    }

    #[test]
    fn display_reparses_equal() {
        let p = DefaultParser::default();
        for input in vec![r#"u:?*+\A\B(" x ", k:"a\"b", n:1)<int, T<U>>"#,
                          "int[3][]", "( a | b )", "a | b & c", "x & y",
                          r"Foo(re:\d+, p:a b)"]
        {
            let d = p.parse(input, false).unwrap();
            assert_eq!(p.parse(&d.to_string(), false).unwrap(), d, "{}", input);
        }
        let displayed: Vec<_> = ["int", "+int"].iter()
                                               .map(|s| p.parse(s, false).unwrap().to_string())
                                               .collect();
        assert_eq!(displayed, vec!["int", "+int"]);
    }
}
