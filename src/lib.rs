//! Additional, more convenient, functionality, which leverages the Rust
//! standard library, layered on top of [`typedesc_core`].
//!
//! This crate:
//!
//! * Re-exports all of [`typedesc_core`], which decomposes type-descriptor
//! notation such as `?\App\Collection(max:10)<int|string>` one level at a
//! time.
//!
//! * Provides a concurrent [`DescriptorCache`] and the [`CachingParser`] that
//! uses it, so that each distinct input is only decomposed once and its
//! `Descriptor` is shared via `Arc`.
//!
//! * Provides [entry points](common/index.html) that use a lazily-made
//! process-wide `CachingParser`, with a per-call [`ErrorMode`] that chooses
//! whether syntax errors are returned as `Err`, as an absent result, or as an
//! error value.
//!
//! * Logs cache activity and rejected input with [`tracing`].  No subscriber
//! is installed by this crate.
//!
//! ```
//! use typedesc::Kind;
//!
//! let d = typedesc::parse("(int|float)[3]").unwrap();
//! assert_eq!(d.kind(), Kind::Array);
//! assert_eq!(d.array_size(), Some(3));
//!
//! let element = typedesc::parse_degrouped(d.name()).unwrap();
//! assert_eq!(element.kind(), Kind::Union);
//! assert_eq!(element.names(), &["int", "float"]);
//! ```
//!
//! [`typedesc_core`]: ../typedesc_core/index.html
//! [`DescriptorCache`]: cache/struct.DescriptorCache.html
//! [`CachingParser`]: parser/struct.CachingParser.html
//! [`ErrorMode`]: enum.ErrorMode.html
//! [`tracing`]: https://docs.rs/tracing

#![forbid(unsafe_code)]


// Re-export everything from the core crate. (Except items shadowed by ours,
// which are re-exported elsewhere.)
#[doc(no_inline)]
pub use typedesc_core::*;

pub mod cache;
pub use cache::{CacheConfig, DescriptorCache};

mod mode;
pub use mode::{ErrorMode, Parsed};

/// The process-wide parser and the entry points that use it, provided for
/// convenience.
pub mod common {
    mod global;
    pub use global::*;
}
#[doc(no_inline)]
pub use common::{parse, parse_degrouped, parse_with};

/// Types for `Parser`s that use the `std` library.  Also re-exports the core
/// crate's module and premades.
pub mod parser {
    #[doc(no_inline)]
    pub use typedesc_core::parser::{*, premade::*};

    mod caching;
    pub use caching::CachingParser;
}
