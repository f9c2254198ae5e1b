use crate::error::{Error, Result};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Path or `http(s)://` URL of the post collection.
    pub data: String,
    pub container_id: String,
    pub home_limit: usize,
    pub view_more_href: String,
    pub search_endpoint: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            data: "assets/data/posts.json".to_string(),
            container_id: "posts".to_string(),
            home_limit: 8,
            view_more_href: "story.html".to_string(),
            search_endpoint: "/search.html".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub page_pattern: String,
    pub page_root: String,
    pub out_dir: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            page_pattern: "pages/**/*.html".to_string(),
            page_root: "pages".to_string(),
            out_dir: "build".to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(Error::Io)?;
        Config::parse(text.as_str())
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        if path.exists() {
            Config::load(path)
        } else {
            log::debug!("{:?} not found, using defaults", path);
            Ok(Config::default())
        }
    }

    pub fn parse(text: &str) -> Result<Config> {
        toml::from_str(text).map_err(Error::Toml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.feed.data, "assets/data/posts.json");
        assert_eq!(config.feed.container_id, "posts");
        assert_eq!(config.feed.home_limit, 8);
        assert_eq!(config.feed.view_more_href, "story.html");
        assert_eq!(config.feed.search_endpoint, "/search.html");
        assert_eq!(config.build.out_dir, "build");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::parse(
            r#"
            [feed]
            home_limit = 4
            data = "https://example.com/posts.json"

            [build]
            out_dir = "public"
            "#,
        )
        .unwrap();

        assert_eq!(config.feed.home_limit, 4);
        assert_eq!(config.feed.data, "https://example.com/posts.json");
        assert_eq!(config.feed.container_id, "posts");
        assert_eq!(config.build.out_dir, "public");
        assert_eq!(config.build.page_pattern, "pages/**/*.html");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = Config::parse("[feed\nhome_limit = 1").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn loads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[feed]\ncontainer_id = \"feed\"\n").unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.feed.container_id, "feed");
        assert_eq!(config.feed.home_limit, 8);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.feed.home_limit, 8);
        assert!(Config::load(&path).is_err());
    }
}
