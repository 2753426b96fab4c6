//! Utilities for making parsers with non-default character classes.

use typedesc_core::parser::{CharClassifier, premade::DefaultCharClassifier};


/// A `CharClassifier` where some classes can be replaced by given sets of
/// characters.  A class that is `None` is the same as the
/// `DefaultCharClassifier`'s.
#[derive(Clone, Default, Debug)]
pub struct CustomCharClassifier {
    pub flag_symbols: Option<Vec<char>>,
    pub namespace_separators: Option<Vec<char>>,
    pub whitespace: Option<Vec<char>>,
}

impl CharClassifier for CustomCharClassifier {
    fn is_name_start(&self, c: char) -> bool {
        DefaultCharClassifier.is_name_start(c)
    }

    fn is_name_char(&self, c: char) -> bool {
        DefaultCharClassifier.is_name_char(c)
    }

    fn is_namespace_separator(&self, c: char) -> bool {
        match &self.namespace_separators {
            Some(chars) => chars.contains(&c),
            None => DefaultCharClassifier.is_namespace_separator(c),
        }
    }

    fn is_root_separator(&self, c: char) -> bool {
        match &self.namespace_separators {
            Some(chars) => chars.first() == Some(&c),
            None => DefaultCharClassifier.is_root_separator(c),
        }
    }

    fn is_flag_word_char(&self, c: char) -> bool {
        DefaultCharClassifier.is_flag_word_char(c)
    }

    fn is_flag_symbol(&self, c: char) -> bool {
        match &self.flag_symbols {
            Some(chars) => chars.contains(&c),
            None => DefaultCharClassifier.is_flag_symbol(c),
        }
    }

    fn is_whitespace(&self, c: char) -> bool {
        match &self.whitespace {
            Some(chars) => chars.contains(&c),
            None => DefaultCharClassifier.is_whitespace(c),
        }
    }
}
