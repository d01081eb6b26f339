//! Length-preserving replacement inside serialized string scalars.
//!
//! Only `s:<N>:"<payload>";` regions are rewritten. Array, object, integer,
//! boolean and null markers are copied through untouched, as is every byte
//! between scalars; nesting is never tracked. When a payload changes, `N` is
//! recomputed from the new payload's byte length (not its character count).

mod scalar;

use alloc::vec::Vec;

pub use scalar::{Scalars, SerializedScalar, scalars};

use crate::{
    error::{ArgumentError, ReplaceError},
    options::ReplaceOptions,
    rule::RuleSet,
};

/// Replace `old` with `new` inside every string scalar of `blob`, fixing up
/// each rewritten scalar's length prefix.
///
/// ```rust
/// use serialsub::serialized_replace;
///
/// let out = serialized_replace(r#"s:15:"http://old.com/";"#, "http://old.com", "https://new.com").unwrap();
/// assert_eq!(out, br#"s:16:"https://new.com/";"#);
///
/// // Multi-byte text: the prefix counts bytes.
/// let out = serialized_replace(r#"s:5:"cafe!";"#, "e", "é").unwrap();
/// assert_eq!(out, r#"s:6:"café!";"#.as_bytes());
/// ```
///
/// # Errors
///
/// - [`ReplaceError::InvalidArgument`] if `old` is empty.
/// - [`ReplaceError::TruncatedScalar`] if a recognized scalar's declared
///   length runs past the end of `blob`, or its payload is not followed by
///   `";`. Nothing is returned in that case, not even the scalars before it.
pub fn serialized_replace(
    blob: impl AsRef<[u8]>,
    old: impl AsRef<[u8]>,
    new: impl AsRef<[u8]>,
) -> Result<Vec<u8>, ReplaceError> {
    serialized_replace_with(blob, old, new, ReplaceOptions::default())
}

/// [`serialized_replace`] with explicit [`ReplaceOptions`].
///
/// # Errors
///
/// See [`serialized_replace`].
pub fn serialized_replace_with(
    blob: impl AsRef<[u8]>,
    old: impl AsRef<[u8]>,
    new: impl AsRef<[u8]>,
    options: ReplaceOptions,
) -> Result<Vec<u8>, ReplaceError> {
    let old = old.as_ref();
    if old.is_empty() {
        return Err(traced!(ReplaceError::from(ArgumentError::EmptySearch)));
    }
    let rules = RuleSet::with_options([(old, new.as_ref())], options)?;
    serialized_batch_replace(blob, &rules)
}

/// Apply a whole [`RuleSet`] inside every string scalar of `blob` in one pass.
///
/// Each payload is rewritten with the same semantics as [`RuleSet::apply`];
/// scalars whose payload bytes come out unchanged are copied byte-for-byte,
/// including their original length spelling.
///
/// ```rust
/// use serialsub::{RuleSet, serialized_batch_replace};
///
/// let rules = RuleSet::new([("old.example", "new.example"), ("http:", "https:")]).unwrap();
/// let blob = br#"a:2:{i:0;s:21:"http://old.example/wp";i:1;s:2:"ok";}"#;
/// let out = serialized_batch_replace(blob, &rules).unwrap();
/// assert_eq!(out, br#"a:2:{i:0;s:22:"https://new.example/wp";i:1;s:2:"ok";}"#);
/// ```
///
/// # Errors
///
/// [`ReplaceError::TruncatedScalar`], as for [`serialized_replace`].
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn serialized_batch_replace(
    blob: impl AsRef<[u8]>,
    rules: &RuleSet,
) -> Result<Vec<u8>, ReplaceError> {
    let blob = blob.as_ref();
    let mut out = Vec::with_capacity(rules.estimate_output_len(blob.len()));
    let mut payload = Vec::new();
    let mut copied = 0;
    let mut seen = 0usize;
    let mut rewritten = 0usize;

    for scalar in scalars(blob) {
        let scalar = scalar.map_err(|err| traced!(err))?;
        seen += 1;
        out.extend_from_slice(&blob[copied..scalar.offset()]);

        payload.clear();
        if rules.apply_into(scalar.payload(), &mut payload) == 0 || payload == scalar.payload() {
            out.extend_from_slice(scalar.region());
        } else {
            SerializedScalar::encode(&mut out, &payload);
            rewritten += 1;
        }
        copied = scalar.end();
    }
    out.extend_from_slice(&blob[copied..]);

    trace_debug!(
        input_len = blob.len(),
        output_len = out.len(),
        scalars = seen,
        rewritten,
        "serialized replace"
    );
    Ok(out)
}
