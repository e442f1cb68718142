//! Lenient scalar deserialization
//!
//! Some back-office endpoints send phone numbers and addresses as JSON
//! numbers, and ids as numeric strings. These helpers accept either shape
//! so one oddly typed record cannot fail a whole snapshot.

use serde::{Deserialize, Deserializer};

/// Any JSON scalar the API has been seen to send for a text or id field
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// `deserialize_with` target for optional text that may arrive as a number
pub(crate) fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

/// `deserialize_with` target for integer ids that may arrive as strings
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Int(n) => Ok(n),
        Scalar::Text(raw) => raw
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id '{raw}'"))),
        other => Err(serde::de::Error::custom(format!(
            "invalid id '{}'",
            other.into_text()
        ))),
    }
}
