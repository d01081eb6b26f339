//! Recognition of `s:<N>:"<payload>";` string scalars.
//!
//! The declared length, not a closing-quote search, decides where a payload
//! ends: payloads may contain raw `"` bytes. A marker is only treated as a
//! scalar when `s:` is followed by at least one ASCII digit and then `:"`;
//! anything else is ordinary data. Once a marker is recognized, the scalar must
//! be complete or the scan fails.

use alloc::vec::Vec;
use core::ops::Range;

use memchr::memmem;

use crate::{
    error::{ReplaceError, TruncationKind},
    scan::{leading_decimal, push_decimal},
};

const MARKER: &[u8] = b"s:";
const OPEN: &[u8] = b":\"";
const CLOSE: &[u8] = b"\";";

/// A string scalar located inside a serialized blob.
///
/// Borrowed from the blob it was found in. The payload is exactly
/// [`declared_len`](Self::declared_len) bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializedScalar<'a> {
    offset: usize,
    declared: usize,
    payload_start: usize,
    region: &'a [u8],
}

impl<'a> SerializedScalar<'a> {
    /// Byte offset of the leading `s` in the blob.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The `N` in `s:<N>:"`, which equals `payload().len()`.
    #[must_use]
    pub fn declared_len(&self) -> usize {
        self.declared
    }

    /// The payload bytes between the quotes.
    #[must_use]
    pub fn payload(&self) -> &'a [u8] {
        let start = self.payload_start - self.offset;
        &self.region[start..start + self.declared]
    }

    /// Position of the payload within the blob.
    #[must_use]
    pub fn payload_range(&self) -> Range<usize> {
        self.payload_start..self.payload_start + self.declared
    }

    /// The whole scalar, from `s` through the closing `;`.
    #[must_use]
    pub fn region(&self) -> &'a [u8] {
        self.region
    }

    /// Offset one past the closing `;`.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.region.len()
    }

    /// Append `s:<len>:"<payload>";` with `len` taken from `payload`'s byte
    /// length.
    pub(crate) fn encode(out: &mut Vec<u8>, payload: &[u8]) {
        out.reserve(payload.len() + MARKER.len() + OPEN.len() + CLOSE.len() + 20);
        out.extend_from_slice(MARKER);
        push_decimal(out, payload.len());
        out.extend_from_slice(OPEN);
        out.extend_from_slice(payload);
        out.extend_from_slice(CLOSE);
    }

    /// Try to read a scalar whose marker starts at `at`.
    ///
    /// `Ok(None)` means the bytes at `at` are not a scalar header at all.
    fn parse(blob: &'a [u8], at: usize) -> Result<Option<Self>, ReplaceError> {
        let digits_start = at + MARKER.len();
        let Some((declared, digits)) = blob.get(digits_start..).and_then(leading_decimal) else {
            return Ok(None);
        };
        let open = digits_start + digits;
        if blob.get(open..open + OPEN.len()) != Some(OPEN) {
            return Ok(None);
        }

        let payload_start = open + OPEN.len();
        let truncated = |kind| ReplaceError::TruncatedScalar {
            offset: at,
            declared: declared.unwrap_or(usize::MAX),
            kind,
        };
        let (declared, payload_end) = declared
            .and_then(|n| Some((n, payload_start.checked_add(n)?)))
            .filter(|&(_, end)| end <= blob.len())
            .ok_or_else(|| truncated(TruncationKind::PayloadOutOfBounds))?;
        if blob.get(payload_end..payload_end + CLOSE.len()) != Some(CLOSE) {
            return Err(truncated(TruncationKind::MissingTerminator));
        }

        Ok(Some(SerializedScalar {
            offset: at,
            declared,
            payload_start,
            region: &blob[at..payload_end + CLOSE.len()],
        }))
    }
}

/// Iterator over the string scalars of a blob, in order.
///
/// Yields an error and then stops at the first marker whose scalar is
/// truncated or unterminated. Bytes inside a payload are never inspected for
/// markers.
///
/// ```rust
/// let blob = br#"a:2:{i:0;s:3:"a"b";i:1;s:0:"";}"#;
/// let payloads: Vec<&[u8]> = serialsub::scalars(blob)
///     .map(|s| s.map(|s| s.payload()))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(payloads, [b"a\"b".as_slice(), b"".as_slice()]);
/// ```
#[derive(Debug, Clone)]
pub struct Scalars<'a> {
    blob: &'a [u8],
    pos: usize,
    finder: memmem::Finder<'static>,
    failed: bool,
}

impl<'a> Scalars<'a> {
    /// Start scanning `blob` from its first byte.
    #[must_use]
    pub fn new(blob: &'a [u8]) -> Self {
        Scalars {
            blob,
            pos: 0,
            finder: memmem::Finder::new(MARKER),
            failed: false,
        }
    }
}

impl<'a> Iterator for Scalars<'a> {
    type Item = Result<SerializedScalar<'a>, ReplaceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let at = self.pos + self.finder.find(self.blob.get(self.pos..)?)?;
            match SerializedScalar::parse(self.blob, at) {
                Ok(Some(scalar)) => {
                    self.pos = scalar.end();
                    return Some(Ok(scalar));
                }
                Ok(None) => self.pos = at + 1,
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl core::iter::FusedIterator for Scalars<'_> {}

/// Iterate over the string scalars of `blob`. See [`Scalars`].
#[must_use]
pub fn scalars(blob: &[u8]) -> Scalars<'_> {
    Scalars::new(blob)
}
