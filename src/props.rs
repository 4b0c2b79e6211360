use serde_json::Value;

/// Presence test behind the `*_set` predicates.
///
/// Everything except `null` and `false` counts as set: numeric zero and the
/// empty string are deliberate inclusions, an absent key is not set.
fn is_set(val: &Value) -> bool {
    !matches!(val, Value::Null | Value::Bool(false))
}

/// Predicate: the record has `prop` set.
///
/// Non-object records (null, scalars, arrays) never match.
pub fn has_prop_set(prop: &str) -> impl Fn(&Value) -> bool + '_ {
    move |rec| rec.get(prop).is_some_and(is_set)
}

/// Predicate: every property in `props` is set on the record.
///
/// An empty list is vacuously true.
pub fn has_all_props_set<'a>(props: &'a [&'a str]) -> impl Fn(&Value) -> bool + 'a {
    move |rec| props.iter().all(|prop| has_prop_set(prop)(rec))
}

/// Predicate over a sequence: some record has `prop` set.
pub fn any_has_prop_set(prop: &str) -> impl Fn(&[Value]) -> bool + '_ {
    let pred = has_prop_set(prop);
    move |arr| arr.iter().any(|rec| pred(rec))
}

/// Predicate: the record's `prop` field equals `value` exactly.
///
/// Records without the field never match.
pub fn has_prop_value(prop: &str, value: Value) -> impl Fn(&Value) -> bool + '_ {
    move |rec| rec.get(prop) == Some(&value)
}

/// Predicate: the record's `name` field equals the given string.
pub fn has_name_value(name: &str) -> impl Fn(&Value) -> bool {
    has_prop_value("name", Value::String(name.to_owned()))
}

/// Predicate: the record's `type` field equals the given string.
pub fn has_type_value(kind: &str) -> impl Fn(&Value) -> bool {
    has_prop_value("type", Value::String(kind.to_owned()))
}
