//! Multi-pattern literal byte replacement, plus a patcher that rewrites
//! string scalars inside length-prefixed serialized data (the format produced
//! by PHP's `serialize()`, as found in WordPress database exports) without
//! breaking their declared byte lengths.
//!
//! Two independent entry points:
//!
//! - [`batch_replace`] applies an ordered list of `(pattern, replacement)`
//!   rules to a buffer in a single left-to-right pass.
//! - [`serialized_replace`] finds every `s:<N>:"<payload>";` scalar, replaces
//!   inside the payload and recomputes `N` from the new payload's byte length.
//!
//! ```rust
//! use serialsub::{batch_replace, serialized_replace};
//!
//! let out = batch_replace("Hello world", [("Hello", "Hi"), ("world", "there")]).unwrap();
//! assert_eq!(out, b"Hi there");
//!
//! let blob = br#"a:1:{i:0;s:15:"http://old.com/";}"#;
//! let out = serialized_replace(blob, "http://old.com", "https://new.com").unwrap();
//! assert_eq!(out, br#"a:1:{i:0;s:16:"https://new.com/";}"#);
//! ```
//!
//! Every function is pure: inputs are borrowed, a fresh buffer is returned,
//! and nothing is cached between calls, so calls may run concurrently from
//! any number of threads.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod trace;

mod batch;
mod error;
mod options;
mod rule;
mod scan;
mod serialized;

pub mod baseline;

#[cfg(test)]
mod tests;

pub use batch::{batch_replace, batch_replace_with};
pub use error::{ArgumentError, ReplaceError, TruncationKind};
pub use options::ReplaceOptions;
pub use rule::{ReplacementRule, RuleSet};
pub use serialized::{
    Scalars, SerializedScalar, scalars, serialized_batch_replace, serialized_replace,
    serialized_replace_with,
};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Every entry point is a pure function over borrowed input with no shared
/// state, so they may be called concurrently without synchronization.
pub const THREAD_SAFE: bool = true;
