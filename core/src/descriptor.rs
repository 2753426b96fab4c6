//! The `Descriptor` type returned by parsing.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Display, Formatter, Write as _};

use crate::{Parameter, Parameters};


/// The top-level shape of a [`Descriptor`](struct.Descriptor.html).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    /// A possibly-flagged, possibly-parameterized, possibly-generic name, e.g.
    /// `?\Foo\Bar(max:3)<int>`
    Generic,
    /// An element type followed by one bracket pair, e.g. `int[3]`
    Array,
    /// A whole descriptor enclosed in parentheses, e.g. `(int|null)`
    Group,
    /// Operands joined by top-level `|`
    Union,
    /// Operands joined by top-level `&`
    Intersection,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Generic => "generic",
            Kind::Array => "array",
            Kind::Group => "group",
            Kind::Union => "union",
            Kind::Intersection => "intersection",
        })
    }
}


/// One level of structural breakdown of a type-descriptor string.
///
/// Only the primary name of a `Generic` is fully decomposed.  Every other entry
/// of [`names`](#method.names) is the raw, trimmed, not-yet-parsed text of a
/// sub-descriptor, which can be given to a parser again to break it down
/// further.
///
/// The meaning of `names` depends on the [`Kind`](enum.Kind.html):
///
/// * `Generic`: the primary name followed by the generic arguments, if any.
/// * `Array`: exactly one entry, the element type.
/// * `Group`: exactly one entry, the text inside the parentheses.
/// * `Union`, `Intersection`: two or more operands.
///
/// Values are immutable once made by a parser.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Descriptor {
    kind: Kind,
    names: Vec<String>,
    flags: String,
    parameters: Parameters,
}

impl Descriptor {
    pub(crate) fn generic(flags: String, names: Vec<String>, parameters: Parameters)
                          -> Self
    {
        debug_assert!(!names.is_empty());
        Self { kind: Kind::Generic, names, flags, parameters }
    }

    pub(crate) fn array(element: String, parameters: Parameters) -> Self {
        debug_assert!(parameters.len() <= 1);
        Self {
            kind: Kind::Array,
            names: alloc::vec![element],
            flags: String::new(),
            parameters,
        }
    }

    pub(crate) fn group(inner: String) -> Self {
        Self {
            kind: Kind::Group,
            names: alloc::vec![inner],
            flags: String::new(),
            parameters: Parameters::new(),
        }
    }

    pub(crate) fn operator(kind: Kind, operands: Vec<String>) -> Self {
        debug_assert!(matches!(kind, Kind::Union | Kind::Intersection));
        debug_assert!(operands.len() >= 2);
        Self {
            kind,
            names: operands,
            flags: String::new(),
            parameters: Parameters::new(),
        }
    }

    /// The top-level shape.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The names, whose meaning depends on the [`kind`](#method.kind).  Never
    /// empty.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The first of the [`names`](#method.names): the primary name of a
    /// `Generic`, the element type of an `Array`, the inner text of a `Group`,
    /// or the first operand.
    #[inline]
    pub fn name(&self) -> &str {
        &self.names[0]
    }

    /// The generic arguments of a `Generic`.  Empty for other kinds.
    #[inline]
    pub fn generic_args(&self) -> &[String] {
        match self.kind {
            Kind::Generic => &self.names[1..],
            _ => &[],
        }
    }

    /// The prefix modifier characters of a `Generic`, in source order, with any
    /// flag-word colon and whitespace removed.  Empty for other kinds.
    #[inline]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// The parameters of a `Generic`, or the size of an `Array`.  Empty for
    /// other kinds.
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The size of an `Array`, if it has one.  Parsing rejects sizes that do not
    /// fit in a `usize`.
    pub fn array_size(&self) -> Option<usize> {
        match self.kind {
            Kind::Array => self.parameters.positional().next()?.parse().ok(),
            _ => None,
        }
    }
}


/// Renders canonical notation, which parses back to an equal `Descriptor` (when
/// using the default character classes).
impl Display for Descriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Generic => {
                let word_len = self.flags
                                   .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                                   .unwrap_or(self.flags.len());
                let (word, symbols) = self.flags.split_at(word_len);
                if !word.is_empty() {
                    write!(f, "{}:", word)?;
                }
                f.write_str(symbols)?;
                f.write_str(&self.names[0])?;
                if !self.parameters.is_empty() {
                    f.write_char('(')?;
                    for (i, param) in self.parameters.iter().enumerate() {
                        if i > 0 { f.write_str(", ")?; }
                        if let Parameter::Named { key, .. } = param {
                            write!(f, "{}:", key)?;
                        }
                        write_value(f, param.value())?;
                    }
                    f.write_char(')')?;
                }
                if self.names.len() > 1 {
                    write!(f, "<{}>", self.names[1..].join(","))?;
                }
                Ok(())
            },
            Kind::Array => {
                let size = self.parameters.positional().next().unwrap_or("");
                write!(f, "{}[{}]", self.names[0], size)
            },
            Kind::Group => write!(f, "({})", self.names[0]),
            Kind::Union => f.write_str(&self.names.join("|")),
            Kind::Intersection => f.write_str(&self.names.join("&")),
        }
    }
}

/// Plain tokens are written bare, anything else is double-quoted with `"` and
/// `\` escaped.
fn write_value(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    let plain = !value.is_empty()
        && value.chars().all(|c| c.is_ascii_alphanumeric() || "_.-+".contains(c));
    if plain {
        return f.write_str(value);
    }
    f.write_char('"')?;
    for c in value.chars() {
        if c == '"' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}


#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec};

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accessors() {
        let mut ps = Parameters::new();
        assert_eq!(ps.try_push(Parameter::Positional("7".to_string())), Ok(()));
        let a = Descriptor::array("int[3]".to_string(), ps);
        assert_eq!(a.kind(), Kind::Array);
        assert_eq!(a.name(), "int[3]");
        assert_eq!(a.array_size(), Some(7));
        assert!(a.generic_args().is_empty());
        assert_eq!(a.flags(), "");

        let g = Descriptor::generic("?".to_string(), strings(&["map", "K", "V"]),
                                    Parameters::new());
        assert_eq!(g.name(), "map");
        assert_eq!(g.generic_args(), &["K".to_string(), "V".to_string()][..]);
        assert_eq!(g.array_size(), None);

        let u = Descriptor::operator(Kind::Intersection, strings(&["A", "B"]));
        assert_eq!(u.names().len(), 2);
        assert!(u.parameters().is_empty());
    }

    #[test]
    fn display() {
        let mut ps = Parameters::new();
        for p in vec![Parameter::Positional("\"foo bar\"".to_string()),
                      Parameter::Named { key: "min".to_string(), value: "0".to_string() },
                      Parameter::Named { key: "re".to_string(), value: r"a\b".to_string() }]
        {
            assert_eq!(ps.try_push(p), Ok(()));
        }
        let g = Descriptor::generic("u?*+".to_string(), strings(&["\\Foo\\Bar", "int", "T<U>"]),
                                    ps);
        assert_eq!(g.to_string(),
                   r#"u:?*+\Foo\Bar("\"foo bar\"", min:0, re:"a\\b")<int,T<U>>"#);

        let plain = Descriptor::generic(String::new(), strings(&["int"]), Parameters::new());
        assert_eq!(plain.to_string(), "int");

        assert_eq!(Descriptor::array("int[1]".to_string(), Parameters::new()).to_string(),
                   "int[1][]");
        assert_eq!(Descriptor::group("a|b".to_string()).to_string(), "(a|b)");
        assert_eq!(Descriptor::operator(Kind::Union, strings(&["a&b", "c"])).to_string(),
                   "a&b|c");
        assert_eq!(Kind::Intersection.to_string(), "intersection");
    }
}
