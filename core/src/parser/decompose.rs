//! The classification of descriptor text into one of the `Kind`s, and the
//! decomposition of the `Generic` form.

use alloc::{string::{String, ToString}, vec::Vec};

use crate::{Descriptor, Kind, Parameter, Parameters, Reason, scan};
use super::{CharClassifier, params, trim};


/// Decompose one level of `input`.  The forms are tried in order of precedence:
/// a group enclosing everything, a top-level union, a top-level intersection,
/// an array suffix, and lastly the generic form.
pub(super) fn decompose<CC>(cc: &CC, input: &str, degroup: bool)
                            -> Result<Descriptor, Reason>
    where CC: CharClassifier,
{
    let mut text = trim(cc, input);
    if text.is_empty() {
        return Err(Reason::Empty);
    }

    // Each unwrapping strictly shrinks `text`, so this ends.  A group is only
    // found when its parentheses enclose all of `text`, which is then balanced.
    while let Some(inner) = group_inner(text)? {
        let inner = trim(cc, inner);
        if inner.is_empty() {
            return Err(Reason::EmptyOperand);
        }
        if !degroup {
            return Ok(Descriptor::group(inner.to_string()));
        }
        text = inner;
    }
    scan::check_top_level(text, |c| is_top_level_char(cc, c))?;

    if let Some(union) = operator(cc, text, '|', Kind::Union)? {
        Ok(union)
    } else if let Some(intersection) = operator(cc, text, '&', Kind::Intersection)? {
        Ok(intersection)
    } else if let Some(array) = array(cc, text)? {
        Ok(array)
    } else {
        generic(cc, text)
    }
}

/// Whether `c` may appear outside of all delimiters.  Commas and quotes only
/// have meaning inside of them.
fn is_top_level_char<CC>(cc: &CC, c: char) -> bool
    where CC: CharClassifier,
{
    matches!(c, '(' | ')' | '<' | '>' | '[' | ']' | ':' | '|' | '&')
        || cc.is_whitespace(c)
        || cc.is_name_start(c)
        || cc.is_name_char(c)
        || cc.is_namespace_separator(c)
        || cc.is_root_separator(c)
        || cc.is_flag_word_char(c)
        || cc.is_flag_symbol(c)
}

/// If `text` is wholly enclosed in a pair of parentheses, give the text inside.
fn group_inner(text: &str) -> Result<Option<&str>, Reason> {
    if text.starts_with('(') && scan::find_close(text, 0)? == text.len() - 1 {
        Ok(Some(&text[1 .. text.len() - 1]))
    } else {
        Ok(None)
    }
}

fn operator<CC>(cc: &CC, text: &str, op: char, kind: Kind)
                -> Result<Option<Descriptor>, Reason>
    where CC: CharClassifier,
{
    let segments = scan::split_top_level(text, op)?;
    if segments.len() < 2 {
        return Ok(None);
    }
    let operands = segments.into_iter()
                           .map(|s| match trim(cc, s) {
                               "" => Err(Reason::EmptyOperand),
                               s => Ok(s.to_string()),
                           })
                           .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(Descriptor::operator(kind, operands)))
}

/// Only the last bracket pair is taken as the array suffix.  Any before it stay
/// in the element type.
fn array<CC>(cc: &CC, text: &str) -> Result<Option<Descriptor>, Reason>
    where CC: CharClassifier,
{
    let open = match scan::last_bracket_open(text)? {
        Some(open) => open,
        None => return Ok(None),
    };
    let element = trim(cc, &text[.. open]);
    if element.is_empty() {
        return Ok(None);
    }
    let size = trim(cc, &text[open + 1 .. text.len() - 1]);
    let parameters = if size.is_empty() {
        Parameters::new()
    } else {
        // Only digits, and small enough for `Descriptor::array_size`.
        if !size.bytes().all(|b| b.is_ascii_digit()) || size.parse::<usize>().is_err() {
            return Err(Reason::ArraySize);
        }
        Parameters::from(Parameter::Positional(size.to_string()))
    };
    Ok(Some(Descriptor::array(element.to_string(), parameters)))
}


/// Position in the text of the generic form being decomposed.
struct Cursor<'t, 'c, CC> {
    text: &'t str,
    pos: usize,
    cc: &'c CC,
}

impl<'t, CC> Cursor<'t, '_, CC>
    where CC: CharClassifier,
{
    #[inline]
    fn peek(&self) -> Option<char> {
        self.text[self.pos ..].chars().next()
    }

    #[inline]
    fn peek_second(&self) -> Option<char> {
        self.text[self.pos ..].chars().nth(1)
    }

    #[inline]
    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| self.cc.is_whitespace(c)) {
            self.bump();
        }
    }

    fn take_while<P>(&mut self, pred: P) -> &'t str
        where P: Fn(&CC, char) -> bool,
    {
        let start = self.pos;
        while self.peek().is_some_and(|c| pred(self.cc, c)) {
            self.bump();
        }
        &self.text[start .. self.pos]
    }

    /// If the next character is `open`, give the text up to its matching
    /// close-delimiter and advance past that.
    fn delimited(&mut self, open: char) -> Result<Option<&'t str>, Reason> {
        if self.peek() != Some(open) {
            return Ok(None);
        }
        let close = scan::find_close(self.text, self.pos)?;
        let interior = &self.text[self.pos + 1 .. close];
        self.pos = close + 1;
        Ok(Some(interior))
    }
}


fn generic<CC>(cc: &CC, text: &str) -> Result<Descriptor, Reason>
    where CC: CharClassifier,
{
    let mut cur = Cursor { text, pos: 0, cc };

    let flags = flags(&mut cur);

    cur.skip_whitespace();
    let name = name(&mut cur)?;
    let mut names = alloc::vec![name.to_string()];

    cur.skip_whitespace();
    let parameters = match cur.delimited('(')? {
        Some(interior) => params::parse_list(cc, interior)?,
        None => Parameters::new(),
    };

    cur.skip_whitespace();
    if let Some(interior) = cur.delimited('<')? {
        if !trim(cc, interior).is_empty() {
            for arg in scan::split_top_level(interior, ',')? {
                match trim(cc, arg) {
                    "" => return Err(Reason::EmptyOperand),
                    arg => names.push(arg.to_string()),
                }
            }
        }
    }

    cur.skip_whitespace();
    if cur.peek().is_some() {
        return Err(Reason::TrailingText);
    }
    Ok(Descriptor::generic(flags, names, parameters))
}

/// An optional flag word terminated by `:`, then any flag symbols.
fn flags<CC>(cur: &mut Cursor<'_, '_, CC>) -> String
    where CC: CharClassifier,
{
    let mut flags = String::new();

    let start = cur.pos;
    let word = cur.take_while(CC::is_flag_word_char);
    cur.skip_whitespace();
    if !word.is_empty() && cur.peek() == Some(':') {
        flags.push_str(word);
        cur.bump();
    } else {
        cur.pos = start;
    }

    loop {
        cur.skip_whitespace();
        match cur.peek() {
            Some(c) if cur.cc.is_flag_symbol(c) => {
                flags.push(c);
                cur.bump();
            },
            _ => break,
        }
    }
    flags
}

/// Name segments joined by namespace separators, with an optional root
/// separator before the first.
fn name<'t, CC>(cur: &mut Cursor<'t, '_, CC>) -> Result<&'t str, Reason>
    where CC: CharClassifier,
{
    let start = cur.pos;
    if cur.peek().is_some_and(|c| cur.cc.is_root_separator(c)) {
        cur.bump();
    }
    loop {
        match cur.peek() {
            Some(c) if cur.cc.is_name_start(c) => {
                cur.bump();
                let _ = cur.take_while(CC::is_name_char);
            },
            Some(c) => return Err(Reason::UnexpectedChar(c)),
            None => return Err(Reason::MissingName),
        }
        match cur.peek() {
            Some(c) if cur.cc.is_namespace_separator(c)
                       && cur.peek_second().is_some_and(|n| cur.cc.is_name_start(n))
                => cur.bump(),
            Some(c) if cur.cc.is_namespace_separator(c)
                => return Err(Reason::MissingName),
            _
                => return Ok(&cur.text[start .. cur.pos]),
        }
    }
}
