//! A concurrent memo of parsed descriptors, keyed by the exact input text and
//! the degroup switch.
//!
//! Only successful parses are stored.  By default the cache is unbounded and
//! keeps every distinct input for as long as it lives.  A capacity may be
//! configured, in which case the oldest-inserted entries are evicted first.

use std::{collections::VecDeque, sync::Arc};

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::trace;

use crate::Descriptor;


/// Configuration of a [`DescriptorCache`](struct.DescriptorCache.html).
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct CacheConfig {
    /// The maximum number of entries held.  `None`, the default, means
    /// unbounded.  `Some(0)` means nothing is ever held.
    pub capacity: Option<usize>,
}

impl CacheConfig {
    /// An unbounded configuration.
    pub const UNBOUNDED: Self = Self { capacity: None };

    /// A configuration bounded to `capacity` entries.
    #[inline]
    pub const fn bounded(capacity: usize) -> Self {
        Self { capacity: Some(capacity) }
    }
}


/// Maps `(input, degroup)` to a shared `Descriptor`.  Safe for concurrent use.
///
/// The two values of `degroup` have separate maps so that lookups can borrow
/// the input `&str` without building a key.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    plain: DashMap<Box<str>, Arc<Descriptor>>,
    degrouped: DashMap<Box<str>, Arc<Descriptor>>,
    /// Insertion order, only tracked when bounded.  Holding this lock also
    /// serializes bounded inserts, so the bound is never exceeded.
    order: Mutex<VecDeque<(Box<str>, bool)>>,
    config: CacheConfig,
}

impl DescriptorCache {
    /// Make a new empty cache with the given configuration.
    #[inline]
    pub fn new(config: CacheConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[inline]
    fn map(&self, degroup: bool) -> &DashMap<Box<str>, Arc<Descriptor>> {
        if degroup { &self.degrouped } else { &self.plain }
    }

    /// Get the cached `Descriptor` for `input`, if there is one.
    #[inline]
    pub fn get(&self, input: &str, degroup: bool) -> Option<Arc<Descriptor>> {
        self.map(degroup).get(input).map(|entry| Arc::clone(entry.value()))
    }

    /// Store `descriptor` as the result for `input`, unless there already is
    /// one, and return whichever is now the stored one.  When racing threads
    /// insert for the same input, the first insert wins and the others get the
    /// winner back.
    pub fn insert(&self, input: &str, degroup: bool, descriptor: Descriptor)
                  -> Arc<Descriptor>
    {
        match self.config.capacity {
            None => {
                let entry = self.map(degroup)
                                .entry(input.into())
                                .or_insert_with(|| {
                                    trace!(input, degroup, "cached descriptor");
                                    Arc::new(descriptor)
                                });
                Arc::clone(&*entry)
            },
            Some(0) => Arc::new(descriptor),
            Some(capacity) => {
                let mut order = self.order.lock();
                if let Some(existing) = self.get(input, degroup) {
                    return existing;
                }
                while order.len() >= capacity {
                    let Some((oldest, oldest_degroup)) = order.pop_front() else { break };
                    drop(self.map(oldest_degroup).remove(&*oldest));
                    trace!(input = &*oldest, degroup = oldest_degroup, "evicted descriptor");
                }
                let descriptor = Arc::new(descriptor);
                drop(self.map(degroup).insert(input.into(), Arc::clone(&descriptor)));
                order.push_back((input.into(), degroup));
                trace!(input, degroup, "cached descriptor");
                descriptor
            },
        }
    }

    /// The number of entries held, across both values of `degroup`.
    #[inline]
    pub fn len(&self) -> usize {
        self.plain.len() + self.degrouped.len()
    }

    /// Whether nothing is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The configured maximum number of entries, if bounded.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.config.capacity
    }

    /// Remove all entries.
    pub fn clear(&self) {
        let mut order = self.order.lock();
        self.plain.clear();
        self.degrouped.clear();
        order.clear();
    }
}
