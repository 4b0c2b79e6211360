use json_record_helpers as jrh;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Purchase {
    item: String,
    amount: f64,
    tags: Vec<String>,
}

#[test]
fn derived_struct_round_trips() {
    let original = Purchase {
        item: "hammer".into(),
        amount: 12.5,
        tags: vec!["tools".into(), "sale".into()],
    };
    let copy: Purchase = jrh::copy_value(&original).unwrap();
    assert_eq!(copy, original);
}

#[test]
fn object_copy_is_deep_equal_but_independent() {
    let original = json!({"user": {"purchases": [{"amount": 1}, {"amount": 2}]}});
    let mut copy = jrh::copy_object(&original).unwrap();
    assert_eq!(copy, original);

    copy["user"]["purchases"][0]["amount"] = json!(999);
    assert_eq!(original["user"]["purchases"][0]["amount"], json!(1));
}

#[test]
fn array_copy_is_deep_equal_but_independent() {
    let original = vec![json!({"a": [1, 2]}), json!({"b": {"c": 3}})];
    let mut copy = jrh::copy_array(&original).unwrap();
    assert_eq!(copy, original);

    copy[1]["b"]["c"] = json!(0);
    assert_eq!(original[1]["b"]["c"], json!(3));
}

#[test]
fn non_json_values_do_not_survive() {
    // non-finite floats are not JSON-representable
    let err = jrh::copy_value(&f64::INFINITY);
    assert!(err.is_err());
}
