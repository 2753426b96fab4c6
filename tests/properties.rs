//! Property tests over generated descriptor text.

use std::collections::BTreeMap;

use proptest::{collection::{btree_map, vec}, option, prelude::*};

use typedesc::{
    CacheConfig, Kind,
    parser::{CachingParser, DefaultCharClassifier},
};


fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', r"\\").replace('"', "\\\""))
}

fn parameters() -> impl Strategy<Value = String> {
    (vec("[ -~]{0,6}", 0 .. 3), btree_map("[a-z][a-z0-9_]{0,3}", "[ -~]{0,6}", 0 .. 3))
        .prop_map(|(positional, named): (Vec<String>, BTreeMap<String, String>)| {
            let items: Vec<String> =
                positional.iter().map(|v| quote(v))
                          .chain(named.iter().map(|(k, v)| format!("{}: {}", k, quote(v))))
                          .collect();
            format!("({})", items.join(", "))
        })
}

/// The `Generic` form without generic arguments.
fn generic() -> impl Strategy<Value = String> {
    (option::of("[a-z_]{1,3}"),
     "[?*+=@^~!#$%-]{0,2}",
     r"\\?[A-Za-z_][A-Za-z0-9_]{0,4}([.\\][A-Za-z_][A-Za-z0-9_]{0,4}){0,2}",
     option::of(parameters()))
        .prop_map(|(word, symbols, name, params)| {
            format!("{}{}{}{}",
                    word.map_or(String::new(), |w| format!("{}:", w)),
                    symbols,
                    name,
                    params.unwrap_or_default())
        })
}

fn descriptor() -> impl Strategy<Value = String> {
    generic().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            vec(inner.clone(), 2 .. 4).prop_map(|operands| operands.join(" | ")),
            vec(inner.clone(), 2 .. 4).prop_map(|operands| operands.join("&")),
            inner.clone().prop_map(|d| format!("( {} )", d)),
            (inner.clone(), option::of(0_u32 .. 1000)).prop_map(|(element, size)| {
                format!("{}[{}]", element, size.map_or(String::new(), |n| n.to_string()))
            }),
            (generic(), vec(inner, 1 .. 3)).prop_map(|(base, args)| {
                format!("{}<{}>", base, args.join(", "))
            }),
        ]
    })
}


proptest! {
    /// Property: generated text is valid, and its canonical rendering parses
    /// back to an equal descriptor.
    #[test]
    fn display_round_trips(text in descriptor(), degroup in any::<bool>()) {
        let d = typedesc::parse_with(&text, degroup, typedesc::ErrorMode::Throw)
            .map_err(|e| TestCaseError::fail(e.to_string()))?
            .into_descriptor()
            .ok_or_else(|| TestCaseError::fail("absent"))?;
        let rendered = d.to_string();
        prop_assert_eq!(&*typedesc::parse(&rendered).unwrap(), &*d);
    }

    /// Property: wrapping in parentheses gives a group of exactly the text,
    /// and is transparent when degrouping.
    #[test]
    fn groups_wrap_and_unwrap(text in descriptor()) {
        let outer = format!("({})", text);
        let group = typedesc::parse(&outer).unwrap();
        prop_assert_eq!(group.kind(), Kind::Group);
        prop_assert_eq!(group.name(), text.as_str());
        prop_assert_eq!(typedesc::parse_degrouped(&outer), typedesc::parse_degrouped(&text));
    }

    /// Property: operands and arguments are exactly what can be parsed next.
    #[test]
    fn parts_parse(text in descriptor()) {
        let d = typedesc::parse(&text).unwrap();
        let parts = match d.kind() {
            Kind::Generic => d.generic_args(),
            _ => d.names(),
        };
        for part in parts {
            prop_assert!(typedesc::parse(part).is_ok(), "part {:?}", part);
        }
    }

    /// Property: any text either parses or is rejected with itself as the
    /// error's input, and a bounded cache stays within its bound.
    #[test]
    fn anything_is_handled(text in r#"[a-z ()<>\[\]|&,:"\\?0-9]{0,16}"#,
                           other in any::<String>()) {
        let p = CachingParser::new(DefaultCharClassifier, CacheConfig::bounded(1));
        for input in [&text, &other] {
            for degroup in [false, true] {
                match p.parse(input, degroup) {
                    Ok(d) => prop_assert!(!d.names().is_empty()),
                    Err(e) => prop_assert_eq!(e.input(), input.as_str()),
                }
                prop_assert!(p.cache().len() <= 1);
            }
        }
    }
}
