use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    Descriptor, Error, Parser,
    parser::{CharClassifier, ParseDescriptor},
    cache::{CacheConfig, DescriptorCache},
};


/// A [`Parser`] paired with a [`DescriptorCache`], so that each distinct
/// `(input, degroup)` is only decomposed once and later calls get back the
/// same shared `Descriptor`.
///
/// Failures are never cached, so re-parsing bad input always re-validates it.
///
/// This may be shared between threads if its classifier can be.
///
/// [`Parser`]: ../../typedesc_core/struct.Parser.html
/// [`DescriptorCache`]: ../cache/struct.DescriptorCache.html
#[derive(Debug, Default)]
pub struct CachingParser<CC> {
    parser: Parser<CC>,
    cache: DescriptorCache,
}

impl<CC> CachingParser<CC>
    where CC: CharClassifier,
{
    /// Make a new `CachingParser` with an empty cache.
    #[inline]
    pub fn new(classifier: CC, config: CacheConfig) -> Self {
        Self {
            parser: Parser { classifier },
            cache: DescriptorCache::new(config),
        }
    }

    /// The `CharClassifier` used.  It cannot be changed once a cache exists
    /// for it.
    #[inline]
    pub fn classifier(&self) -> &CC {
        &self.parser.classifier
    }

    /// The cache of this parser's results.
    #[inline]
    pub fn cache(&self) -> &DescriptorCache {
        &self.cache
    }

    /// Like [`Parser::parse`] but the result is memoized.
    ///
    /// [`Parser::parse`]: ../../typedesc_core/struct.Parser.html#method.parse
    pub fn parse(&self, input: &str, degroup: bool) -> Result<Arc<Descriptor>, Error> {
        if let Some(descriptor) = self.cache.get(input, degroup) {
            trace!(input, degroup, "descriptor cache hit");
            return Ok(descriptor);
        }
        trace!(input, degroup, "descriptor cache miss");
        match self.parser.parse(input, degroup) {
            Ok(descriptor) => Ok(self.cache.insert(input, degroup, descriptor)),
            Err(error) => {
                debug!(input, degroup, reason = %error.reason(), "rejected descriptor");
                Err(error)
            },
        }
    }
}

impl<CC> ParseDescriptor for CachingParser<CC>
    where CC: CharClassifier,
{
    type DescriptorRef = Arc<Descriptor>;

    #[inline]
    fn parse_descriptor(&self, input: &str, degroup: bool)
                        -> Result<Arc<Descriptor>, Error>
    {
        self.parse(input, degroup)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Kind, Reason, parser::DefaultCharClassifier};

    #[test]
    fn memoizes_successes_only() {
        let p = CachingParser::<DefaultCharClassifier>::default();
        let a = p.parse("?Foo<int>", false).unwrap();
        let b = p.parse("?Foo<int>", false).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(p.cache().len(), 1);

        let e = p.parse("int||float", false).unwrap_err();
        assert_eq!(e, Error::new("int||float", Reason::EmptyOperand));
        assert_eq!(p.parse("int||float", false), Err(e));
        assert_eq!(p.cache().len(), 1);
    }

    #[test]
    fn keyed_by_exact_input_and_degroup() {
        let p = CachingParser::new(DefaultCharClassifier, CacheConfig::default());
        let grouped = p.parse("(int)", false).unwrap();
        let degrouped = p.parse("(int)", true).unwrap();
        assert_eq!(grouped.kind(), Kind::Group);
        assert_eq!(degrouped.kind(), Kind::Generic);
        let spaced = p.parse(" int ", false).unwrap();
        let bare = p.parse("int", false).unwrap();
        assert_eq!(spaced, bare);
        assert!(!Arc::ptr_eq(&spaced, &bare));
        assert_eq!(p.cache().len(), 4);
    }
}
