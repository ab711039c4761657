//! JSON decoding rules shared by every request payload.
//!
//! Clients of these APIs have always been allowed to send `null` for any field,
//! to send `null` as the whole body, and to spell field names in any letter case.
//! All of those decode to the zero value of the affected field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Field deserializer mapping an explicit `null` to `T::default()`.
pub fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Decode a payload whose field names are all lower case, matching keys
/// case-insensitively. An exactly spelled key wins over a differently cased one.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    let mut value: Value = serde_json::from_slice(bytes)?;
    match &mut value {
        Value::Null => value = Value::Object(Default::default()),
        Value::Object(map) => {
            let cased: Vec<String> = map
                .keys()
                .filter(|k| k.chars().any(char::is_uppercase))
                .cloned()
                .collect();
            for key in cased {
                let lower = key.to_lowercase();
                if let Some(v) = map.remove(&key) {
                    if !map.contains_key(&lower) {
                        map.insert(lower, v);
                    }
                }
            }
        }
        _ => {}
    }
    serde_json::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductInput;
    use crate::todo::Todo;
    use rust_decimal::Decimal;

    #[test]
    fn null_fields_decode_to_zero_values() {
        let t: Todo = from_slice(br#"{"id":"5","item":null,"completed":null}"#).unwrap();
        assert_eq!(t, Todo::new("5", "", false));

        let p: ProductInput = from_slice(br#"{"code":"A","price":null}"#).unwrap();
        assert_eq!(p.code, "A");
        assert!(p.price.is_zero());
    }

    #[test]
    fn field_names_match_in_any_case() {
        let t: Todo = from_slice(br#"{"ID":"5","Item":"x","COMPLETED":true}"#).unwrap();
        assert_eq!(t, Todo::new("5", "x", true));

        let p: ProductInput = from_slice(br#"{"Code":"K","NAME":"Kite","Price":"2.5"}"#).unwrap();
        assert_eq!(p, ProductInput { code: "K".into(), name: "Kite".into(), price: Decimal::new(25, 1) });
    }

    #[test]
    fn exact_key_wins_over_other_casing() {
        let t: Todo = from_slice(br#"{"Id":"upper","id":"lower"}"#).unwrap();
        assert_eq!(t.id, "lower");
    }

    #[test]
    fn null_body_is_an_empty_payload() {
        assert_eq!(from_slice::<Todo>(b"null").unwrap(), Todo::default());
    }

    #[test]
    fn type_mismatches_and_broken_json_still_fail() {
        assert!(from_slice::<Todo>(br#"{"completed":"yes"}"#).is_err());
        assert!(from_slice::<Todo>(b"{\"id\":").is_err());
        assert!(from_slice::<Todo>(b"[]").is_err());
    }
}
