use crate::error::{Error, Result};
use crate::post::Post;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use serde_json::Value;
use std::path::PathBuf;
use tokio::fs;

/// Where the post collection lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostSource {
    File(PathBuf),
    Http(String),
}

impl PostSource {
    pub fn new(location: &str) -> Self {
        let lower = location.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            PostSource::Http(location.to_string())
        } else {
            PostSource::File(PathBuf::from(location))
        }
    }

    /// Fetches and parses the collection, bypassing any caches.
    pub async fn load(&self) -> Result<Vec<Post>> {
        let body = match self {
            PostSource::File(path) => fs::read_to_string(path).await.map_err(Error::Io)?,
            PostSource::Http(url) => fetch(url).await?,
        };

        parse_collection(body.as_str())
    }
}

async fn fetch(url: &str) -> Result<String> {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(Error::Fetch)?;

    let response = client.get(url).send().await.map_err(Error::Fetch)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }

    response.text().await.map_err(Error::Fetch)
}

/// A well-formed document that isn't an array counts as an empty collection,
/// and an element that isn't an object counts as a record with no fields.
pub fn parse_collection(body: &str) -> Result<Vec<Post>> {
    let value: Value = serde_json::from_str(body).map_err(Error::Parse)?;
    let items = match value {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => serde_json::from_value(item).map_err(Error::Parse),
            _ => Ok(Post::default()),
        })
        .collect()
}
