use std::{fmt::Display, io};

use glob::{GlobError, PatternError};

#[derive(Debug)]
pub enum Error {
    Fetch(reqwest::Error),
    Glob(GlobError),
    Io(io::Error),
    Parse(serde_json::Error),
    Pattern(PatternError),
    Render(handlebars::RenderError),
    Status(u16),
    Template(handlebars::TemplateError),
    Toml(toml::de::Error),
}

impl Error {
    /// True for failures of the post collection itself. These never escape
    /// the feed controller; they degrade to the empty-state placeholder.
    pub fn is_feed_failure(&self) -> bool {
        matches!(
            self,
            Error::Fetch(_) | Error::Io(_) | Error::Parse(_) | Error::Status(_)
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Status(code) => write!(f, "posts.json not found (status {})", code),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
