#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serialsub::{ReplaceOptions, RuleSet, baseline::sequential_replace};

#[derive(Debug, Arbitrary)]
struct Input {
    case_insensitive: bool,
    rules: Vec<(Vec<u8>, Vec<u8>)>,
    haystack: Vec<u8>,
}

fn check(input: Input) {
    let options = ReplaceOptions {
        case_insensitive: input.case_insensitive,
    };
    let invalid = input.rules.is_empty() || input.rules.iter().any(|(p, _)| p.is_empty());
    let rules = match RuleSet::with_options(input.rules, options) {
        Ok(rules) => rules,
        Err(err) => {
            assert!(invalid && err.is_invalid_argument(), "{err}");
            return;
        }
    };
    assert!(!invalid);

    let mut out = Vec::new();
    let count = rules.apply_into(&input.haystack, &mut out);
    assert_eq!(out, rules.apply(&input.haystack));
    if count == 0 {
        assert_eq!(out, input.haystack);
    }
    if rules.len() == 1 {
        assert_eq!(out, sequential_replace(&input.haystack, &rules));
    }
}

fuzz_target!(|input: Input| check(input));
