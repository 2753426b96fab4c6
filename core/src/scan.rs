//! Delimiter-depth scanning of descriptor text.
//!
//! Every structural question the parser asks ("where is the `)` matching this
//! `(`?", "is there a `|` outside all brackets?") is answered by walking the
//! text with a [`Scanner`], which tracks the stack of open `(`, `<` and `[`
//! delimiters and steps over double-quoted strings, so that delimiters and
//! operators inside quotes never count.

use alloc::vec::Vec;
use core::str::CharIndices;

use crate::Reason;


/// A character of the text that is not inside a quoted string, with its nesting
/// depth.
///
/// For an open-delimiter the depth is the depth outside of it, and the same for
/// a close-delimiter, so a matching pair has equal depths.  For a quote
/// character it is the depth of the whole quoted string, which the scanner
/// steps over without yielding its contents.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct Item {
    pub(crate) pos: usize,
    pub(crate) ch: char,
    pub(crate) depth: usize,
}


/// An `Iterator` over the [`Item`]s of some text.  Yields an `Err` once, and
/// then ends, if the delimiters are unbalanced or a quoted string is not
/// terminated.
#[derive(Clone, Debug)]
pub(crate) struct Scanner<'t> {
    chars: CharIndices<'t>,
    /// Close-delimiters expected, innermost last
    expected: Vec<char>,
    failed: bool,
}

pub(crate) const QUOTE: char = '"';
pub(crate) const QUOTE_ESCAPE: char = '\\';

#[inline]
fn closer_of(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '<' => Some('>'),
        '[' => Some(']'),
        _ => None,
    }
}

#[inline]
fn is_closer(c: char) -> bool {
    matches!(c, ')' | '>' | ']')
}

impl<'t> Scanner<'t> {
    #[inline]
    pub(crate) fn new(text: &'t str) -> Self {
        Self {
            chars: text.char_indices(),
            expected: Vec::new(),
            failed: false,
        }
    }

    fn fail(&mut self, reason: Reason) -> Option<Result<Item, Reason>> {
        self.failed = true;
        Some(Err(reason))
    }

    /// Advance past the rest of a quoted string whose opening quote was just
    /// consumed.  Returns `false` if the text ended first.
    fn skip_quoted(&mut self) -> bool {
        while let Some((_, c)) = self.chars.next() {
            if c == QUOTE_ESCAPE {
                if self.chars.next().is_none() {
                    return false;
                }
            } else if c == QUOTE {
                return true;
            }
        }
        false
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Item, Reason>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let (pos, ch) = match self.chars.next() {
            Some(next) => next,
            None => return if self.expected.is_empty() {
                None
            } else {
                self.fail(Reason::Unbalanced)
            },
        };
        let depth = self.expected.len();
        if ch == QUOTE {
            if !self.skip_quoted() {
                return self.fail(Reason::UnterminatedQuote);
            }
        } else if let Some(closer) = closer_of(ch) {
            self.expected.push(closer);
        } else if is_closer(ch) {
            match self.expected.pop() {
                Some(expected) if expected == ch
                    => return Some(Ok(Item { pos, ch, depth: depth - 1 })),
                _
                    => return self.fail(Reason::Unbalanced),
            }
        }
        Some(Ok(Item { pos, ch, depth }))
    }
}


/// Check that all delimiters in `text` are balanced and properly paired, that
/// all quoted strings are terminated, and that every character at depth 0 is
/// one that `allowed` accepts.  The first problem found is the one returned.
pub(crate) fn check_top_level<F>(text: &str, allowed: F) -> Result<(), Reason>
    where F: Fn(char) -> bool,
{
    for item in Scanner::new(text) {
        let Item { ch, depth, .. } = item?;
        if depth == 0 && !allowed(ch) {
            return Err(Reason::UnexpectedChar(ch));
        }
    }
    Ok(())
}

/// Split `text` at every occurrence of `sep` at depth 0.  Gives a single
/// segment, the whole text, if there are none.
pub(crate) fn split_top_level(text: &str, sep: char) -> Result<Vec<&str>, Reason> {
    let mut segments = Vec::new();
    let mut start = 0;
    for item in Scanner::new(text) {
        let Item { pos, ch, depth } = item?;
        if depth == 0 && ch == sep {
            segments.push(&text[start .. pos]);
            start = pos + ch.len_utf8();
        }
    }
    segments.push(&text[start ..]);
    Ok(segments)
}

/// Find the position of the close-delimiter that matches the open-delimiter at
/// byte position `open` of `text`.
pub(crate) fn find_close(text: &str, open: usize) -> Result<usize, Reason> {
    debug_assert!(text[open ..].starts_with(|c: char| closer_of(c).is_some()));
    for item in Scanner::new(&text[open ..]).skip(1) {
        let Item { pos, ch, depth } = item?;
        if depth == 0 && is_closer(ch) {
            return Ok(open + pos);
        }
    }
    Err(Reason::Unbalanced)
}

/// If `text` ends with a `]` at depth 0, find the position of its matching `[`.
pub(crate) fn last_bracket_open(text: &str) -> Result<Option<usize>, Reason> {
    if !text.ends_with(']') {
        return Ok(None);
    }
    let last = text.len() - 1;
    let mut open = None;
    for item in Scanner::new(text) {
        let Item { pos, ch, depth } = item?;
        if depth == 0 {
            if ch == '[' {
                open = Some(pos);
            } else if ch == ']' && pos == last {
                return Ok(open);
            }
        }
    }
    Ok(None)
}


#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn depths(text: &str) -> Vec<(char, usize)> {
        Scanner::new(text).map(|i| i.map(|Item { ch, depth, .. }| (ch, depth)))
                          .collect::<Result<_, _>>()
                          .unwrap()
    }

    #[test]
    fn depth_tracking() {
        assert_eq!(depths("a<b>"), vec![('a', 0), ('<', 0), ('b', 1), ('>', 0)]);
        assert_eq!(depths("([x])"),
                   vec![('(', 0), ('[', 1), ('x', 2), (']', 1), (')', 0)]);
        // Quoted strings are stepped over as a whole.
        assert_eq!(depths(r#"f("a|(\"b")"#),
                   vec![('f', 0), ('(', 0), ('"', 1), (')', 0)]);
    }

    fn check_balanced(text: &str) -> Result<(), Reason> {
        check_top_level(text, |_| true)
    }

    #[test]
    fn balance() {
        assert_eq!(check_balanced("a(b<c[d]>)"), Ok(()));
        assert_eq!(check_balanced(r#"a(")")"#), Ok(()));
        assert_eq!(check_balanced("a("), Err(Reason::Unbalanced));
        assert_eq!(check_balanced("a)"), Err(Reason::Unbalanced));
        assert_eq!(check_balanced("a(]"), Err(Reason::Unbalanced));
        assert_eq!(check_balanced("a<)>"), Err(Reason::Unbalanced));
        assert_eq!(check_balanced(r#"a(""#), Err(Reason::UnterminatedQuote));
        assert_eq!(check_balanced(r#""\"#), Err(Reason::UnterminatedQuote));
    }

    #[test]
    fn top_level_characters() {
        let letters = |c: char| c.is_ascii_alphabetic() || "()<>|".contains(c);
        assert_eq!(check_top_level("a<;>|(b;)", letters), Ok(()));
        assert_eq!(check_top_level(r#"a("x;")"#, letters), Ok(()));
        assert_eq!(check_top_level("a;b", letters), Err(Reason::UnexpectedChar(';')));
        assert_eq!(check_top_level("a|b;(", letters), Err(Reason::UnexpectedChar(';')));
        assert_eq!(check_top_level(r#"a"x""#, letters), Err(Reason::UnexpectedChar('"')));
        assert_eq!(check_top_level("a(;", letters), Err(Reason::Unbalanced));
    }

    #[test]
    fn errors_end_iteration() {
        let mut s = Scanner::new(")))");
        assert_eq!(s.next(), Some(Err(Reason::Unbalanced)));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn splitting() {
        assert_eq!(split_top_level("a|b<c|d>|(e|f)", '|'),
                   Ok(vec!["a", "b<c|d>", "(e|f)"]));
        assert_eq!(split_top_level("a", '|'), Ok(vec!["a"]));
        assert_eq!(split_top_level("|", '|'), Ok(vec!["", ""]));
        assert_eq!(split_top_level(r#"x("|")"#, '|'), Ok(vec![r#"x("|")"#]));
    }

    #[test]
    fn matching() {
        assert_eq!(find_close("(a)(b)", 0), Ok(2));
        assert_eq!(find_close("(a)(b)", 3), Ok(5));
        assert_eq!(find_close("f<a<b>,c>", 1), Ok(8));
        assert_eq!(find_close("(a", 0), Err(Reason::Unbalanced));

        assert_eq!(last_bracket_open("int[1][2]"), Ok(Some(6)));
        assert_eq!(last_bracket_open("a<b[1]>"), Ok(None));
        assert_eq!(last_bracket_open("[x]"), Ok(Some(0)));
        assert_eq!(last_bracket_open("int"), Ok(None));
    }
}
