use itertools::Itertools;
use rand::Rng;
use serde_json::Value;

use crate::props::{has_name_value, has_type_value};

/// =========================
/// Filtering / lookup
/// =========================

/// All records whose `name` field equals `name`, original order preserved.
pub fn get_by_name(arr: &[Value], name: &str) -> Vec<Value> {
    let pred = has_name_value(name);
    arr.iter().filter(|rec| pred(rec)).cloned().collect()
}

/// All records whose `type` field equals `kind`, original order preserved.
pub fn get_by_type(arr: &[Value], kind: &str) -> Vec<Value> {
    let pred = has_type_value(kind);
    arr.iter().filter(|rec| pred(rec)).cloned().collect()
}

/// First record with the given `name`, or `None`.
pub fn get_first_by_name<'a>(arr: &'a [Value], name: &str) -> Option<&'a Value> {
    let pred = has_name_value(name);
    arr.iter().find(|rec| pred(rec))
}

/// First record with the given `type`, or `None`.
pub fn get_first_by_type<'a>(arr: &'a [Value], kind: &str) -> Option<&'a Value> {
    let pred = has_type_value(kind);
    arr.iter().find(|rec| pred(rec))
}

/// Comma-and-space-joined `name` fields, in order.
///
/// Records without a string `name` contribute nothing; an empty input
/// yields the empty string.
pub fn get_name_list(arr: &[Value]) -> String {
    arr.iter()
        .filter_map(|rec| rec.get("name").and_then(Value::as_str))
        .join(", ")
}

/// Uniformly random record, or `None` on empty input.
pub fn get_random_entry(arr: &[Value]) -> Option<&Value> {
    if arr.is_empty() {
        return None;
    }
    let idx = rand::thread_rng().gen_range(0..arr.len());
    arr.get(idx)
}
