//! Used by the tests of both the [core](../typedesc_core/index.html) and the
//! [full](../typedesc/index.html) crates.  It provides test suites that can be
//! run against any type of parser that implements
//! [`ParseDescriptor`](../typedesc_core/parser/trait.ParseDescriptor.html),
//! and a representation of expected results that can be compared against the
//! `Descriptor`s given by any of them.

#![allow(missing_docs, clippy::must_use_candidate)]

use std::borrow::Borrow;

use typedesc_core::{Descriptor, Error, Kind, Parameter, ParseDescriptor};


pub mod suites;
pub mod utils;


/// What a `Descriptor` is expected to be.  Parameters are `(key, value)` pairs
/// where the key is `None` for positional ones.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Expected {
    pub kind: Kind,
    pub names: Vec<String>,
    pub flags: String,
    pub parameters: Vec<(Option<String>, String)>,
}

impl From<&Descriptor> for Expected {
    fn from(d: &Descriptor) -> Self {
        Self {
            kind: d.kind(),
            names: d.names().to_vec(),
            flags: d.flags().to_owned(),
            parameters: d.parameters()
                         .iter()
                         .map(|p| (p.key().map(str::to_owned), p.value().to_owned()))
                         .collect(),
        }
    }
}

impl Expected {
    /// Replace the names.
    pub fn with_names(mut self, names: &[&str]) -> Self {
        self.names = strings(names);
        self
    }
}

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|&s| s.to_owned()).collect()
}

/// A `Generic` with the given flags, names, and parameters made with [`pos`]
/// and [`kv`].
pub fn generic(flags: &str, names: &[&str], parameters: &[(Option<&str>, &str)])
               -> Expected
{
    Expected {
        kind: Kind::Generic,
        names: strings(names),
        flags: flags.to_owned(),
        parameters: parameters.iter()
                              .map(|&(k, v)| (k.map(str::to_owned), v.to_owned()))
                              .collect(),
    }
}

/// A `Generic` with only a name.
pub fn plain(name: &str) -> Expected {
    generic("", &[name], &[])
}

pub fn array(element: &str, size: Option<&str>) -> Expected {
    Expected {
        kind: Kind::Array,
        names: strings(&[element]),
        flags: String::new(),
        parameters: size.map(|s| (None, s.to_owned())).into_iter().collect(),
    }
}

pub fn group(inner: &str) -> Expected {
    operands(Kind::Group, &[inner])
}

pub fn union(names: &[&str]) -> Expected {
    operands(Kind::Union, names)
}

pub fn intersection(names: &[&str]) -> Expected {
    operands(Kind::Intersection, names)
}

fn operands(kind: Kind, names: &[&str]) -> Expected {
    Expected { kind, names: strings(names), flags: String::new(), parameters: vec![] }
}

/// A positional parameter.
pub fn pos(value: &str) -> (Option<&str>, &str) {
    (None, value)
}

/// A named parameter.
pub fn kv<'a>(key: &'a str, value: &'a str) -> (Option<&'a str>, &'a str) {
    (Some(key), value)
}


/// Parse with `p` and convert to our representation.
pub fn parse<P>(p: &P, input: &str, degroup: bool) -> Result<Expected, Error>
    where P: ParseDescriptor + ?Sized,
{
    p.parse_descriptor(input, degroup)
     .map(|d| Expected::from(Borrow::<Descriptor>::borrow(&d)))
}

/// Check that the different accessors of the parameters of `d` agree with each
/// other.
pub fn check_parameter_accessors(d: &Descriptor) {
    let params = d.parameters();
    for (i, p) in params.iter().enumerate() {
        assert_eq!(params.get_index(i), Some(p));
        if let Parameter::Named { key, value } = p {
            assert_eq!(params.get(key), Some(value.as_str()));
        }
    }
    assert_eq!(params.positional().count() + params.named().count(), params.len());
}
