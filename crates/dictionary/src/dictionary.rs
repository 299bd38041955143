use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::{Deserializer as JsonDeserializer, Value};

use crate::ResponseError;

// Every field is decoded on its own: a missing or mistyped field becomes
// `None` without affecting its siblings.

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Entry {
    #[serde(default, deserialize_with = "lenient")]
    pub word: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub meanings: Option<Vec<Meaning>>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Meaning {
    #[serde(default, rename = "partOfSpeech", deserialize_with = "lenient")]
    pub part_of_speech: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub definitions: Option<Vec<Definition>>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Definition {
    #[serde(default, deserialize_with = "lenient")]
    pub definition: Option<String>,
}

impl Entry {
    /// The only meaning that gets reported.
    pub fn first_meaning(&self) -> Option<&Meaning> {
        self.meanings.as_deref()?.first()
    }
}

impl Meaning {
    pub fn first_definition(&self) -> Option<&Definition> {
        self.definitions.as_deref()?.first()
    }
}

/// Decodes an API response body into its entries.
///
/// Only the first JSON value of the body is read, anything after it is
/// ignored. Fails only when there is no such value or when it is not an
/// array; anything below the root is decoded leniently.
pub fn parse_entries(body: &[u8]) -> Result<Vec<Entry>, ResponseError> {
    let root = match JsonDeserializer::from_slice(body).into_iter::<Value>().next() {
        Some(value) => value.map_err(ResponseError::Malformed)?,
        None => return Err(ResponseError::Empty),
    };
    match root {
        Value::Array(items) => Ok(items.into_iter().map(lenient_item).collect()),
        _ => Err(ResponseError::NotAnArray),
    }
}

fn lenient_item<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    // serde would happily map an array onto a struct positionally
    if !value.is_object() {
        return T::default();
    }
    serde_json::from_value(value).unwrap_or_default()
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(items.into_iter().map(lenient_item).collect())),
        _ => Ok(None),
    }
}
