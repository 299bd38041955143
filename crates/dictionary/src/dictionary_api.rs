// https://dictionaryapi.dev/ - free dictionary api, no key required
// unknown words come back as a 404 with a json object body

use reqwest::{StatusCode, Url};
use tracing::{debug, trace};

use crate::{dictionary::parse_entries, DictionaryError, Entry, ResponseError};

/// The complete body of a dictionary API response.
#[derive(Debug)]
pub struct ResponseBuffer {
    status: StatusCode,
    body: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Status the body arrived with; bodies are kept whatever the status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn parse_entries(&self) -> Result<Vec<Entry>, ResponseError> {
        parse_entries(&self.body)
    }
}

pub(crate) fn build_entry_url(base_url: &str, word: &str) -> Result<Url, DictionaryError> {
    // url normalizes `.`/`..` away even when percent-encoded as %2E
    if word == "." || word == ".." {
        return Err(DictionaryError::DotSegment(word.to_owned()));
    }
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| DictionaryError::CannotBeABase(base_url.to_owned()))?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

pub(crate) async fn get_entries(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<ResponseBuffer, DictionaryError> {
    let url = build_entry_url(base_url, word)?;
    debug!(%url, "requesting definition");
    let mut res: reqwest::Response = client
        .get(url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();

    let mut body = Vec::new();
    while let Some(chunk) = res.chunk().await.map_err(DictionaryError::Fetch)? {
        trace!(size = chunk.len(), "body chunk");
        body.extend_from_slice(&chunk);
    }
    let buffer = ResponseBuffer::new(status, body);
    debug!(status = %buffer.status(), len = buffer.len(), "response received");
    Ok(buffer)
}
