//! Discord snowflakes exceed JavaScript's safe integer range, so they travel as
//! strings on the wire and as `u64` in Rust.

use serde::{Deserialize, Deserializer, Serializer};

pub mod u64_string {
    use super::*;

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        String::deserialize(deserializer)?
            .parse::<u64>()
            .map_err(D::Error::custom)
    }
}

pub mod option_u64_string {
    use super::*;

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        Option::<String>::deserialize(deserializer)?
            .map(|s| s.parse::<u64>().map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Wrapper {
        #[serde(with = "super::u64_string")]
        id: u64,
        #[serde(with = "super::option_u64_string", default)]
        parent: Option<u64>,
    }

    #[test]
    fn snowflakes_survive_as_strings() {
        let value = Wrapper {
            id: 1_234_567_890_123_456_789,
            parent: Some(42),
        };

        let json = serde_json::to_string(&value).unwrap();

        assert_eq!(json, r#"{"id":"1234567890123456789","parent":"42"}"#);
        assert_eq!(serde_json::from_str::<Wrapper>(&json).unwrap(), value);
    }

    #[test]
    fn missing_optional_snowflake_is_none() {
        let value: Wrapper = serde_json::from_str(r#"{"id":"7"}"#).unwrap();

        assert_eq!(value.parent, None);
    }
}
