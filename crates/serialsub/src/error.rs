use thiserror::Error;

/// Errors returned by the replacement entry points.
///
/// No partial output accompanies an error: a call either produces the whole
/// rewritten buffer or fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplaceError {
    /// The rule set or search pattern was rejected before any input was read.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
    /// A recognized `s:<N>:"` marker does not describe a complete scalar.
    #[error("truncated scalar at byte {offset} (declared length {declared}): {kind}")]
    TruncatedScalar {
        /// Byte offset of the `s` that opens the scalar.
        offset: usize,
        /// Declared payload length, saturated at `usize::MAX` when the digits
        /// overflow.
        declared: usize,
        /// What exactly is wrong with the scalar.
        kind: TruncationKind,
    },
}

/// Why a rule set or search pattern was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    /// No rules were supplied.
    #[error("rule set is empty")]
    EmptyRuleSet,
    /// The rule at `index` would match the empty string everywhere.
    #[error("rule {index} has an empty pattern")]
    EmptyPattern {
        /// Position of the offending rule.
        index: usize,
    },
    /// The element at `index` is not a two-element pair. Only produced by
    /// callers that receive untyped rule sequences, such as language bindings.
    #[error("rule {index} is not a (pattern, replacement) pair")]
    MalformedRule {
        /// Position of the offending element.
        index: usize,
    },
    /// The `old` argument of the serialized patcher is empty.
    #[error("search pattern is empty")]
    EmptySearch,
}

/// How a serialized string scalar failed to close.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationKind {
    /// Fewer than the declared number of bytes remain after the opening quote.
    #[error("payload runs past the end of input")]
    PayloadOutOfBounds,
    /// The byte after the payload is not `"` followed by `;`.
    #[error("payload is not followed by `\";`")]
    MissingTerminator,
}

impl ReplaceError {
    /// `true` for [`ReplaceError::InvalidArgument`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// `true` for [`ReplaceError::TruncatedScalar`].
    #[must_use]
    pub fn is_truncated_scalar(&self) -> bool {
        matches!(self, Self::TruncatedScalar { .. })
    }
}
