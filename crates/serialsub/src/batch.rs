use alloc::vec::Vec;

use crate::{
    error::ReplaceError,
    options::ReplaceOptions,
    rule::{ReplacementRule, RuleSet},
    scan::matches_at,
};

impl RuleSet {
    /// Rewrite `input`, returning a new buffer.
    ///
    /// The scan runs once, left to right. At each position the rules are
    /// tried in order and the first match is replaced; scanning resumes after
    /// the matched bytes, so replacement text is never scanned again.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn apply(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let mut out = Vec::with_capacity(self.estimate_output_len(input.len()));
        let replaced = self.apply_into(input, &mut out);
        trace_debug!(
            input_len = input.len(),
            output_len = out.len(),
            rules = self.len(),
            replaced,
            "batch replace"
        );
        out
    }

    /// Rewrite `input`, appending the result to `out`. Returns how many
    /// matches were replaced; zero means `out` received `input` verbatim.
    pub fn apply_into(&self, input: &[u8], out: &mut Vec<u8>) -> usize {
        let fold_case = self.options().case_insensitive;
        let rules = self.rules();
        let mut replaced = 0;
        // Unchanged bytes are copied in runs: `copied` marks the start of the
        // pending run, `pos` the next position to test.
        let mut copied = 0;
        let mut pos = 0;

        while let Some(at) = self.starts().next_candidate(input, pos) {
            let hit = rules
                .iter()
                .find(|rule| matches_at(input, at, &rule.pattern, fold_case));
            if let Some(rule) = hit {
                out.extend_from_slice(&input[copied..at]);
                out.extend_from_slice(&rule.replacement);
                pos = at + rule.pattern.len();
                copied = pos;
                replaced += 1;
            } else {
                pos = at + 1;
            }
        }

        out.extend_from_slice(&input[copied..]);
        replaced
    }
}

/// Replace every occurrence of every rule's pattern in `input`.
///
/// Matching is byte-exact, leftmost and non-overlapping; on a tie at the same
/// position the earlier rule wins.
///
/// ```rust
/// use serialsub::batch_replace;
///
/// assert_eq!(batch_replace("aaa", [("a", "aa")]).unwrap(), b"aaaaaa");
/// assert_eq!(batch_replace("cat", [("cat", "dog"), ("ca", "XX")]).unwrap(), b"dog");
/// ```
///
/// # Errors
///
/// [`ReplaceError::InvalidArgument`] if `rules` is empty or contains an empty
/// pattern. Build a [`RuleSet`] once to validate a rule list up front and reuse
/// it across inputs.
pub fn batch_replace<I, T>(input: impl AsRef<[u8]>, rules: I) -> Result<Vec<u8>, ReplaceError>
where
    I: IntoIterator<Item = T>,
    T: Into<ReplacementRule>,
{
    batch_replace_with(input, rules, ReplaceOptions::default())
}

/// [`batch_replace`] with explicit [`ReplaceOptions`].
///
/// # Errors
///
/// See [`batch_replace`].
pub fn batch_replace_with<I, T>(
    input: impl AsRef<[u8]>,
    rules: I,
    options: ReplaceOptions,
) -> Result<Vec<u8>, ReplaceError>
where
    I: IntoIterator<Item = T>,
    T: Into<ReplacementRule>,
{
    let rules = RuleSet::with_options(rules, options)?;
    Ok(rules.apply(input))
}
