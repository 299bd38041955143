use dictionary_api::get_entries;

mod config;
mod dictionary;
mod dictionary_api;

pub use config::{DictionaryConfig, DICTIONARY_API_URL};
pub use dictionary::{parse_entries, Definition, Entry, Meaning};
pub use dictionary_api::ResponseBuffer;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to build the http client")]
    Client(#[source] reqwest::Error),
    #[error("invalid dictionary url")]
    InvalidUrl(#[from] url::ParseError),
    #[error("dictionary url {0:?} cannot take a path")]
    CannotBeABase(String),
    #[error("{0:?} cannot be looked up as a path segment")]
    DotSegment(String),
    #[error("request to the dictionary failed")]
    Fetch(#[source] reqwest::Error),
}

/// Ways a response body can fail to be a list of entries.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("response is not valid json")]
    Malformed(#[source] serde_json::Error),
    #[error("response is empty")]
    Empty,
    #[error("response root is not an array")]
    NotAnArray,
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new(config: DictionaryConfig) -> Result<Self, DictionaryError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build().map_err(DictionaryError::Client)?,
            base_url: config.base_url,
        })
    }

    /// Looks up `word` and returns the raw response body, whatever its status.
    pub async fn get_definition(&self, word: &str) -> Result<ResponseBuffer, DictionaryError> {
        get_entries(&self.client, &self.base_url, word).await
    }
}
