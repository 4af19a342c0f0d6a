use serde::Deserialize;

/// Values a config file may provide. Anything set explicitly on the command
/// line takes precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(default, deserialize_with = "headers::deserialize")]
    pub headers: Option<String>,
    pub body: Option<BodyValue>,
    #[serde(alias = "virtual_users")]
    pub vus: Option<usize>,
    #[serde(alias = "delay_ms")]
    pub delay: Option<u64>,
    #[serde(alias = "timeout_secs")]
    pub timeout: Option<u64>,
    #[serde(alias = "duration_secs")]
    pub duration: Option<u64>,
    pub debug: Option<bool>,
}

/// A body given either as raw JSON text or as an inline table/object.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum BodyValue {
    Text(String),
    Json(serde_json::Value),
}

impl BodyValue {
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            BodyValue::Text(text) => text,
            BodyValue::Json(value) => value.to_string(),
        }
    }
}

mod headers {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum HeadersValue {
        Joined(String),
        List(Vec<String>),
    }

    /// Accepts `"a:1,b:2"` or `["a:1", "b:2"]`.
    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<HeadersValue>::deserialize(deserializer)?;
        Ok(value.map(|value| match value {
            HeadersValue::Joined(joined) => joined,
            HeadersValue::List(list) => list.join(","),
        }))
    }
}
