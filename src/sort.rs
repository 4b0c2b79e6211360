use std::cmp::Ordering;

use serde_json::Value;

/// Total order over JSON values used as sort keys.
///
/// Numbers compare numerically, strings lexically, booleans false-before-
/// true. A number paired with a numeric-looking string compares
/// numerically; any other mixed pair falls back to comparing serialized
/// text so the order stays defined for every input.
pub fn cmp_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(sa), Value::String(sb)) => sa.cmp(sb),
        (Value::Number(na), Value::Number(nb)) => cmp_f64(na.as_f64(), nb.as_f64()),
        (Value::Bool(ba), Value::Bool(bb)) => ba.cmp(bb),
        (Value::Number(na), Value::String(sb)) => match (na.as_f64(), sb.parse::<f64>()) {
            (Some(da), Ok(db)) => cmp_f64(Some(da), Some(db)),
            _ => a.to_string().cmp(&b.to_string()),
        },
        (Value::String(sa), Value::Number(nb)) => match (sa.parse::<f64>(), nb.as_f64()) {
            (Ok(da), Some(db)) => cmp_f64(Some(da), Some(db)),
            _ => a.to_string().cmp(&b.to_string()),
        },
        _ => a.to_string().cmp(&b.to_string()),
    }
}

fn cmp_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(da), Some(db)) => da.partial_cmp(&db).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Walk a dot-separated path through nested objects.
///
/// Any segment that does not resolve to a key of the current node yields
/// `None`; array elements are not addressable this way.
pub fn resolve_path<'a>(rec: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(rec, |node, key| node.get(key))
}

// Absent keys order before every present value so records with a missing
// sort key land at the front instead of aborting the sort.
fn cmp_keys(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(va), Some(vb)) => cmp_values(va, vb),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// New vector sorted ascending by the `prop` field of each record.
///
/// The input is left untouched; elements are deep-copied (`Value::clone`
/// is structural). Records without the field sort first.
pub fn sort_by_prop(arr: &[Value], prop: &str) -> Vec<Value> {
    let mut copy = arr.to_vec();
    copy.sort_by(|a, b| cmp_keys(a.get(prop), b.get(prop)));
    copy
}

/// New vector sorted ascending by a dot-separated nested path,
/// e.g. `"user.purchases.average"`.
///
/// Records where the path does not fully resolve sort first.
pub fn sort_by_deep_prop(arr: &[Value], path: &str) -> Vec<Value> {
    let mut copy = arr.to_vec();
    copy.sort_by(|a, b| cmp_keys(resolve_path(a, path), resolve_path(b, path)));
    copy
}
