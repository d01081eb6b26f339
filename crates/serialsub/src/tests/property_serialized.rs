use quickcheck::QuickCheck;

use super::{
    arbitrary::{Doc, Pattern, Text},
    quickcheck_tests,
};
use crate::{RuleSet, scalars, serialized_replace};

/// Property: patching a rendered document equals rendering the document with
/// each payload replaced, so lengths are recomputed and everything outside
/// string payloads survives byte for byte.
#[test]
fn patch_equals_rerender_with_replaced_payloads() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: Doc, old: Pattern, new: Text) -> bool {
        let rules = RuleSet::new([(old.0.clone(), new.0.clone())]).unwrap();
        let expected = doc.render_with(|payload| rules.apply(payload));
        serialized_replace(doc.render(), &old.0, &new.0) == Ok(expected)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Doc, Pattern, Text) -> bool);
}

/// Property: every scalar in the patched output declares its true byte length.
#[test]
fn patched_output_is_self_consistent() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: Doc, old: Pattern, new: Text) -> bool {
        let Ok(out) = serialized_replace(doc.render(), &old.0, &new.0) else {
            return false;
        };
        scalars(&out).all(|s| s.is_ok_and(|s| s.declared_len() == s.payload().len()))
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Doc, Pattern, Text) -> bool);
}

/// Property: cutting a blob anywhere inside its last scalar (after the header)
/// is reported as truncation, never as a partial result.
#[test]
fn cut_inside_last_scalar_is_truncation() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: Doc, cut: usize) -> bool {
        let blob = doc.render();
        let Some(last) = scalars(&blob).filter_map(Result::ok).last() else {
            return true;
        };
        let start = last.payload_range().start;
        let at = start + cut % (last.end() - start);
        serialized_replace(&blob[..at], "a", "b").is_err_and(|e| e.is_truncated_scalar())
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Doc, usize) -> bool);
}
