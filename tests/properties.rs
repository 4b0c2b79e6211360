use json_record_helpers as jrh;
use proptest::prelude::*;
use serde_json::{json, Value};

proptest! {
    #[test]
    fn sort_by_prop_matches_plain_integer_sort(values in prop::collection::vec(-1000i64..1000, 0..40)) {
        let records: Vec<Value> = values.iter().map(|n| json!({"n": n})).collect();
        let sorted = jrh::sort_by_prop(&records, "n");

        let mut expected = values.clone();
        expected.sort();
        let got: Vec<i64> = sorted
            .iter()
            .filter_map(|r| r.get("n").and_then(Value::as_i64))
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn sort_output_is_a_permutation_of_the_input(values in prop::collection::vec(-50i64..50, 0..30)) {
        let records: Vec<Value> = values.iter().map(|n| json!({"n": n})).collect();
        let mut sorted = jrh::sort_by_prop(&records, "n");
        let mut original = records.clone();
        let key = |v: &Value| v.to_string();
        sorted.sort_by_key(key);
        original.sort_by_key(key);
        prop_assert_eq!(sorted, original);
    }

    #[test]
    fn capitalize_is_idempotent(s in "[a-zA-Z0-9 ßàüé]{0,20}") {
        let once = jrh::capitalize(&s);
        let twice = jrh::capitalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn name_list_matches_manual_join(names in prop::collection::vec("[a-z]{1,8}", 0..10)) {
        let records: Vec<Value> = names.iter().map(|n| json!({"name": n})).collect();
        prop_assert_eq!(jrh::get_name_list(&records), names.join(", "));
    }

    #[test]
    fn random_entry_is_always_a_member(values in prop::collection::vec(0i64..100, 1..20)) {
        let records: Vec<Value> = values.iter().map(|n| json!({"n": n})).collect();
        let picked = jrh::get_random_entry(&records).unwrap();
        prop_assert!(records.contains(picked));
    }
}
