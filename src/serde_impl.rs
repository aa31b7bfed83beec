//! Serde support, enabled with the `serde` feature.
//!
//! A [`NonEmptyVec`] serializes as a plain sequence. Deserializing an empty
//! sequence is an error, so a decoded `Validation` failure always carries at
//! least one error. `Validation` itself uses the derived, externally tagged
//! form: `{"Success": value}` or `{"Failure": [error, ...]}`.
//!
//! ```
//! use accrue::Validation;
//!
//! let v = Validation::<String, u8>::failure("too old".to_string());
//! let json = serde_json::to_string(&v).unwrap();
//! assert_eq!(json, r#"{"Failure":["too old"]}"#);
//!
//! let empty: Result<Validation<String, u8>, _> = serde_json::from_str(r#"{"Failure":[]}"#);
//! assert!(empty.is_err());
//! ```

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::NonEmptyVec;

impl<T> Serialize for NonEmptyVec<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for NonEmptyVec<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<T>::deserialize(deserializer)?;
        NonEmptyVec::try_from(elements).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{nonempty, NonEmptyVec, Validation};

    #[test]
    fn test_nonempty_serializes_as_sequence() {
        let json = serde_json::to_string(&nonempty![1, 2, 3]).unwrap();
        assert_eq!(json, "[1,2,3]");
    }

    #[test]
    fn test_nonempty_rejects_empty_sequence() {
        let result: Result<NonEmptyVec<i32>, _> = serde_json::from_str("[]");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("expected at least one element"));
    }

    #[test]
    fn test_validation_success_json() {
        let v = Validation::<String, _>::success(5);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"Success":5}"#);

        let back: Validation<String, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_validation_failure_json_keeps_order() {
        let json = r#"{"Failure":["b","a"]}"#;
        let v: Validation<String, i32> = serde_json::from_str(json).unwrap();
        assert_eq!(
            v.into_errors(),
            Some(nonempty!["b".to_string(), "a".to_string()])
        );
    }
}
