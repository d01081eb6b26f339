use alloc::vec::Vec;

use bstr::{BStr, BString};

use crate::{
    error::{ArgumentError, ReplaceError},
    options::ReplaceOptions,
    scan::StartSet,
};

/// One literal substitution: every occurrence of `pattern` becomes
/// `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplacementRule {
    /// Bytes to search for. Must not be empty.
    pub pattern: BString,
    /// Bytes emitted in place of each match. May be empty.
    pub replacement: BString,
}

impl ReplacementRule {
    /// Build a rule from anything convertible into byte strings.
    pub fn new(pattern: impl Into<BString>, replacement: impl Into<BString>) -> Self {
        ReplacementRule {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// The search pattern.
    #[must_use]
    pub fn pattern(&self) -> &BStr {
        self.pattern.as_ref()
    }

    /// The replacement text.
    #[must_use]
    pub fn replacement(&self) -> &BStr {
        self.replacement.as_ref()
    }
}

impl<P, R> From<(P, R)> for ReplacementRule
where
    P: Into<BString>,
    R: Into<BString>,
{
    fn from((pattern, replacement): (P, R)) -> Self {
        ReplacementRule::new(pattern, replacement)
    }
}

/// A validated, ordered rule set that can be applied to any number of inputs.
///
/// Construction checks the rule constraints once; applying the set afterwards
/// cannot fail. When several patterns match at the same position the earlier
/// rule wins, so `[("cat", "dog"), ("ca", "XX")]` turns `"cat"` into `"dog"`.
///
/// ```rust
/// use serialsub::RuleSet;
///
/// let rules = RuleSet::new([("cat", "dog"), ("ca", "XX")]).unwrap();
/// assert_eq!(rules.apply("cat"), b"dog");
/// assert_eq!(rules.apply("cab"), b"XXb");
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ReplacementRule>,
    options: ReplaceOptions,
    starts: StartSet,
    /// Largest `replacement.len() - pattern.len()` over all rules, zero when
    /// no rule grows its match.
    max_growth: usize,
}

impl RuleSet {
    /// Validate `rules` with byte-exact matching.
    ///
    /// # Errors
    ///
    /// [`ReplaceError::InvalidArgument`] when `rules` is empty or any pattern
    /// is empty; the error names the first offending index.
    pub fn new<I, T>(rules: I) -> Result<Self, ReplaceError>
    where
        I: IntoIterator<Item = T>,
        T: Into<ReplacementRule>,
    {
        Self::with_options(rules, ReplaceOptions::default())
    }

    /// Validate `rules` with the given matching options.
    ///
    /// # Errors
    ///
    /// See [`RuleSet::new`].
    pub fn with_options<I, T>(rules: I, options: ReplaceOptions) -> Result<Self, ReplaceError>
    where
        I: IntoIterator<Item = T>,
        T: Into<ReplacementRule>,
    {
        let rules: Vec<ReplacementRule> = rules.into_iter().map(Into::into).collect();
        if rules.is_empty() {
            return Err(traced!(ReplaceError::from(ArgumentError::EmptyRuleSet)));
        }
        if let Some(index) = rules.iter().position(|r| r.pattern.is_empty()) {
            return Err(traced!(ReplaceError::from(ArgumentError::EmptyPattern { index })));
        }

        let starts = StartSet::new(
            rules.iter().map(|r| r.pattern.as_slice()),
            options.case_insensitive,
        );
        let max_growth = rules
            .iter()
            .map(|r| r.replacement.len().saturating_sub(r.pattern.len()))
            .max()
            .unwrap_or(0);

        Ok(RuleSet {
            rules,
            options,
            starts,
            max_growth,
        })
    }

    /// The rules, in priority order.
    #[must_use]
    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    /// The options this set was built with.
    #[must_use]
    pub fn options(&self) -> ReplaceOptions {
        self.options
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false`: an empty rule set is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn starts(&self) -> &StartSet {
        &self.starts
    }

    /// A capacity guess for the output of rewriting `input_len` bytes: the
    /// input length plus head-room for growth if any rule lengthens its match.
    pub(crate) fn estimate_output_len(&self, input_len: usize) -> usize {
        if self.max_growth == 0 {
            input_len
        } else {
            input_len.saturating_add(input_len / 8).saturating_add(self.max_growth)
        }
    }
}
