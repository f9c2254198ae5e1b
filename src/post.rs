use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One record of the static post collection. Every field is optional;
/// defaults are applied at render time, never stored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tags: Option<String>,
}

/// Accepts any JSON value as text so one odd field doesn't sink the
/// collection. Arrays join with commas; objects count as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(&Value::deserialize(deserializer)?))
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| text_of(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
    }
}

impl Post {
    #[cfg(test)]
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    /// Lower-cased `title excerpt date tags`, missing fields as empty text.
    pub fn haystack(&self) -> String {
        let field = |f: &Option<String>| f.as_deref().unwrap_or_default().to_string();

        [
            field(&self.title),
            field(&self.excerpt),
            field(&self.date),
            field(&self.tags),
        ]
        .join(" ")
        .to_lowercase()
    }
}
