//! Custom serde helpers for the service's wire formats.

/// (De)serializes an integer transported as a JSON string.
///
/// The service writes the numeric fields it treats as opaque — quote,
/// candle, and net-value timestamps, plus the order ticket's `type`
/// discriminant — as strings, e.g. `"ts": "1699920000"`.
pub mod stringified {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid stringified number {:?}: {}", s, e)))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "super::stringified")]
        ts: i64,
    }

    #[test]
    fn test_stringified_roundtrip() {
        let v: Stamped = serde_json::from_str(r#"{"ts":"1699920000"}"#).unwrap();
        assert_eq!(v.ts, 1_699_920_000);
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"ts":"1699920000"}"#);
    }

    #[test]
    fn test_stringified_rejects_bare_number() {
        let err = serde_json::from_str::<Stamped>(r#"{"ts":1699920000}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_stringified_rejects_garbage() {
        let err = serde_json::from_str::<Stamped>(r#"{"ts":"soon"}"#);
        assert!(err.is_err());
    }
}
