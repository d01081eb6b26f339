//! The naive strategy the engine is measured against: one global replace per
//! rule, each rule rewriting the previous rule's output.
//!
//! Unlike [`RuleSet::apply`](crate::RuleSet::apply), later rules *do* see
//! text produced by earlier ones, so the two only agree in general when the
//! rule set has a single rule. Benchmarks and property tests use this as the
//! reference implementation.

use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::rule::RuleSet;

/// Apply each rule of `rules` in turn over the whole buffer.
///
/// ```rust
/// use serialsub::{RuleSet, baseline::sequential_replace};
///
/// let rules = RuleSet::new([("a", "b"), ("b", "c")]).unwrap();
/// assert_eq!(sequential_replace("ab", &rules), b"cc");
/// assert_eq!(rules.apply("ab"), b"bc");
/// ```
#[must_use]
pub fn sequential_replace(input: impl AsRef<[u8]>, rules: &RuleSet) -> Vec<u8> {
    let mut content = input.as_ref().to_vec();
    for rule in rules.rules() {
        if rules.options().case_insensitive {
            content = replace_ignore_ascii_case(&content, &rule.pattern, &rule.replacement);
        } else {
            content = content.replace(&rule.pattern, &rule.replacement);
        }
    }
    content
}

fn replace_ignore_ascii_case(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    let folded = haystack.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();
    let mut out = Vec::with_capacity(haystack.len());
    let mut copied = 0;
    for at in folded.find_iter(&needle) {
        out.extend_from_slice(&haystack[copied..at]);
        out.extend_from_slice(replacement);
        copied = at + needle.len();
    }
    out.extend_from_slice(&haystack[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReplaceOptions;

    #[test]
    fn folding_baseline_keeps_unmatched_case() {
        let rules = RuleSet::with_options(
            [("ab", "x")],
            ReplaceOptions {
                case_insensitive: true,
            },
        )
        .unwrap();
        assert_eq!(sequential_replace("AbC aB ABAB", &rules), b"xC x xx");
    }
}
