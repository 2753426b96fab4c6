//! The parameter-list sub-parser for the text inside `name(...)`.

use alloc::string::{String, ToString};

use crate::{Parameter, Parameters, Reason, scan::{self, QUOTE, QUOTE_ESCAPE}};
use super::{CharClassifier, trim};


/// Parse the comma-separated items of a parameter list.  Each item is either a
/// `value` or a `key:value`, where a value is either a double-quoted string or
/// bare text.
pub(super) fn parse_list<CC>(cc: &CC, interior: &str) -> Result<Parameters, Reason>
    where CC: CharClassifier,
{
    let mut parameters = Parameters::new();
    if trim(cc, interior).is_empty() {
        return Ok(parameters);
    }
    for item in scan::split_top_level(interior, ',')? {
        let item = trim(cc, item);
        if item.is_empty() {
            return Err(Reason::EmptyOperand);
        }
        parameters.try_push(parse_item(cc, item)?)
                  .map_err(|_| Reason::DuplicateKey)?;
    }
    Ok(parameters)
}

fn parse_item<CC>(cc: &CC, item: &str) -> Result<Parameter, Reason>
    where CC: CharClassifier,
{
    match split_key(cc, item) {
        Some((key, value)) => {
            let value = trim(cc, value);
            if value.is_empty() {
                return Err(Reason::EmptyValue);
            }
            Ok(Parameter::Named { key: key.to_string(), value: parse_value(cc, value)? })
        },
        None => Ok(Parameter::Positional(parse_value(cc, item)?)),
    }
}

/// If `item` begins with an identifier followed by `:`, split it there.
fn split_key<'i, CC>(cc: &CC, item: &'i str) -> Option<(&'i str, &'i str)>
    where CC: CharClassifier,
{
    let mut chars = item.char_indices();
    match chars.next() {
        Some((_, c)) if cc.is_name_start(c) => {},
        _ => return None,
    }
    let key_end = chars.find(|&(_, c)| !cc.is_name_char(c))
                       .map_or(item.len(), |(i, _)| i);
    let rest = trim(cc, &item[key_end ..]);
    rest.strip_prefix(':').map(|value| (&item[.. key_end], value))
}

/// A quoted value has its escapes resolved, and nothing may follow its closing
/// quote.  A bare value is taken as-is.
fn parse_value<CC>(cc: &CC, value: &str) -> Result<String, Reason>
    where CC: CharClassifier,
{
    let quoted = match value.strip_prefix(QUOTE) {
        Some(quoted) => quoted,
        None => return Ok(value.to_string()),
    };
    let mut resolved = String::with_capacity(quoted.len());
    let mut chars = quoted.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == QUOTE_ESCAPE {
            match chars.next() {
                Some((_, escaped)) => resolved.push(escaped),
                None => return Err(Reason::UnterminatedQuote),
            }
        } else if c == QUOTE {
            return if trim(cc, &quoted[i + 1 ..]).is_empty() {
                Ok(resolved)
            } else {
                Err(Reason::TrailingText)
            };
        } else {
            resolved.push(c);
        }
    }
    Err(Reason::UnterminatedQuote)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::premade::DefaultCharClassifier;
    use alloc::{vec, vec::Vec};

    fn parse(interior: &str) -> Result<Parameters, Reason> {
        parse_list(&DefaultCharClassifier, interior)
    }

    fn pos(v: &str) -> Parameter {
        Parameter::Positional(v.to_string())
    }

    fn named(k: &str, v: &str) -> Parameter {
        Parameter::Named { key: k.to_string(), value: v.to_string() }
    }

    fn entries(interior: &str) -> Vec<Parameter> {
        parse(interior).unwrap().iter().cloned().collect()
    }

    #[test]
    fn quoting() {
        assert_eq!(entries(r#""\"foo bar\"", min:0, max:123"#),
                   vec![pos(r#""foo bar""#), named("min", "0"), named("max", "123")]);
        assert_eq!(entries(r#""a\\b", "c\,d", "e,f""#),
                   vec![pos(r"a\b"), pos("c,d"), pos("e,f")]);
        assert_eq!(entries(r#"k: "x:y" "#), vec![named("k", "x:y")]);
        assert_eq!(entries(r#""""#), vec![pos("")]);
        assert_eq!(parse(r#""a" b"#), Err(Reason::TrailingText));
    }

    #[test]
    fn bare_values() {
        assert_eq!(entries(" 1 ,two words, a-b "),
                   vec![pos("1"), pos("two words"), pos("a-b")]);
        assert_eq!(entries("12:30"), vec![pos("12:30")]);
        assert_eq!(entries("at : 12:30"), vec![named("at", "12:30")]);
        assert_eq!(entries(r"re:\d+"), vec![named("re", r"\d+")]);
        assert_eq!(entries("list:(1,2), x"), vec![named("list", "(1,2)"), pos("x")]);
    }

    #[test]
    fn empty_lists_and_items() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   ").unwrap().is_empty());
        assert_eq!(parse("a,"), Err(Reason::EmptyOperand));
        assert_eq!(parse(",a"), Err(Reason::EmptyOperand));
        assert_eq!(parse("a,,b"), Err(Reason::EmptyOperand));
        assert_eq!(parse("max:"), Err(Reason::EmptyValue));
        assert_eq!(parse("max: "), Err(Reason::EmptyValue));
    }

    #[test]
    fn duplicate_keys() {
        assert_eq!(parse("max:1,max:2"), Err(Reason::DuplicateKey));
        assert_eq!(parse("max:1, min:1, max:1"), Err(Reason::DuplicateKey));
        assert_eq!(entries("max, max"), vec![pos("max"), pos("max")]);
    }
}
