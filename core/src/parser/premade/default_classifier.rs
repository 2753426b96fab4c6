use crate::parser::CharClassifier;


/// The characters that [`DefaultCharClassifier`](struct.DefaultCharClassifier.html)
/// accepts as flags without a terminating `:`.
pub const FLAG_SYMBOLS: &str = "?*+-=@^`~!#$%";

/// A [`CharClassifier`](../trait.CharClassifier.html) that uses ASCII
/// identifier characters for names and flag words, `\` and `.` as namespace
/// separators, `\` as the absolute-name prefix, the
/// [`FLAG_SYMBOLS`](constant.FLAG_SYMBOLS.html) as flag symbols, and the
/// Unicode whitespace property.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct DefaultCharClassifier;

impl CharClassifier for DefaultCharClassifier {
    #[inline]
    fn is_name_start(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || '_' == c
    }

    #[inline]
    fn is_name_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || '_' == c
    }

    #[inline]
    fn is_namespace_separator(&self, c: char) -> bool {
        '\\' == c || '.' == c
    }

    #[inline]
    fn is_root_separator(&self, c: char) -> bool {
        '\\' == c
    }

    #[inline]
    fn is_flag_word_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || '_' == c
    }

    #[inline]
    fn is_flag_symbol(&self, c: char) -> bool {
        FLAG_SYMBOLS.contains(c)
    }

    #[inline]
    fn is_whitespace(&self, c: char) -> bool {
        c.is_whitespace()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_disjoint_where_needed() {
        let cc = DefaultCharClassifier;
        for c in FLAG_SYMBOLS.chars() {
            assert!(!cc.is_name_start(c));
            assert!(!cc.is_namespace_separator(c));
            assert!(!cc.is_whitespace(c));
        }
        for c in "()<>[],:|&\"".chars() {
            assert!(!cc.is_flag_symbol(c));
            assert!(!cc.is_name_char(c));
        }
        assert!(cc.is_name_start('_'));
        assert!(!cc.is_name_start('1'));
        assert!(cc.is_name_char('1'));
        assert!(cc.is_root_separator('\\'));
        assert!(!cc.is_root_separator('.'));
    }
}
