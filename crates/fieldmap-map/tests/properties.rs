//! Property tests for normalization and scoring.

use fieldmap_map::path::{is_list_path, normalize_path};
use fieldmap_map::score::{CandidateScore, SuffixMatch};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,8}(\\[\\])?"
}

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 0..8).prop_map(|s| s.join("."))
}

fn type_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Max35Text".to_string()),
        Just("ActiveCurrencyAndAmount".to_string()),
        Just("PostalAddress24".to_string()),
        Just("java.util.List<x.PartyIdentification135>".to_string()),
    ]
}

fn score(
    k: usize,
    source_path: &str,
    source_type: &str,
    target_path: &str,
    target_type: &str,
) -> CandidateScore {
    CandidateScore::suffix_match(&SuffixMatch {
        suffix_len: k,
        source_path,
        source_type,
        target_path,
        target_type,
    })
}

proptest! {
    #[test]
    fn normalization_is_idempotent(p in path()) {
        let once = normalize_path(&p);
        let twice = normalize_path(&once.join("."));
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.iter().all(|s| !s.is_empty() && !s.contains("[]")));
    }

    #[test]
    fn normalized_paths_are_never_list_shaped(p in path()) {
        prop_assert!(!is_list_path(&normalize_path(&p).join(".")));
    }

    #[test]
    fn longer_suffix_scores_higher(
        k in 1usize..6,
        source in path(),
        target in path(),
        source_type in type_name(),
        target_type in type_name(),
    ) {
        let shorter = score(k, &source, &source_type, &target, &target_type);
        let longer = score(k + 1, &source, &source_type, &target, &target_type);
        prop_assert!(longer.raw() > shorter.raw());
        prop_assert!(longer.value() >= shorter.value());
        if shorter.raw() > 0 {
            prop_assert!(longer.value() > shorter.value());
        }
    }

    #[test]
    fn scores_and_confidence_are_clamped(
        k in 1usize..7,
        source in path(),
        target in path(),
        source_type in type_name(),
        target_type in type_name(),
    ) {
        let s = score(k, &source, &source_type, &target, &target_type);
        prop_assert!(s.value() >= 0);
        prop_assert!(s.confidence() <= 100);
    }

    #[test]
    fn amount_address_penalty_costs_at_least_twenty(k in 1usize..7, target in path()) {
        let neutral = score(k, "a.amt", "InstdAmt", &target, "InstdAmt2");
        let penalized = score(k, "a.amt", "InstdAmt", &target, "PostalAddress24");
        prop_assert!(penalized.raw() <= neutral.raw() - 20);
        prop_assert!(penalized.value() >= 0);
    }
}
