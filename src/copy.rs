use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::Result;

/// Deep copy through a JSON text round-trip.
///
/// Only JSON-representable data survives the trip. A non-finite float in
/// the input fails the serialization step instead of degrading silently;
/// fields the serde derive skips are re-created from their defaults.
pub fn copy_value<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let text = serde_json::to_string(value)?;
    Ok(serde_json::from_str(&text)?)
}

/// Deep copy of a single record.
pub fn copy_object(obj: &Value) -> Result<Value> {
    copy_value(obj)
}

/// Deep copy of a sequence of records.
pub fn copy_array(arr: &[Value]) -> Result<Vec<Value>> {
    let text = serde_json::to_string(arr)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn object_round_trip_is_deep_equal() {
        let original = json!({"a": {"b": [1, 2, {"c": "x"}]}});
        let copy = copy_object(&original).unwrap();
        assert_eq!(copy, original);
    }

    #[test]
    fn copy_is_independent_of_the_original() {
        let original = vec![json!({"n": 1}), json!({"n": 2})];
        let mut copy = copy_array(&original).unwrap();
        copy[0]["n"] = json!(99);
        assert_eq!(original[0]["n"], json!(1));
    }

    #[test]
    fn non_finite_float_fails_serialization() {
        assert!(copy_value(&f64::NAN).is_err());
    }
}
