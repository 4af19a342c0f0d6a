use std::collections::BTreeMap;

use crate::error::ValidationError;

/// URLs at or below this many characters are rejected outright.
const MIN_URL_LEN: usize = 2;
const HEADER_SEPARATOR: char = ',';
const KEY_VALUE_SEPARATOR: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    #[must_use]
    pub const fn carries_body(self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable description of the call every virtual user repeats.
///
/// Built once before the run and only ever read afterwards; each call
/// derives its own outgoing request from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTemplate {
    method: HttpMethod,
    url: String,
    headers: BTreeMap<String, String>,
    body: Option<String>,
}

impl RequestTemplate {
    /// Validates raw flag values into a template.
    ///
    /// `raw_body` is ignored for methods without a payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UrlTooShort`] for URLs of two characters or
    /// fewer, [`ValidationError::MalformedHeader`] when the header string is
    /// not a list of `key:value` pairs, [`ValidationError::MissingBody`] when a
    /// body-carrying method has no body and [`ValidationError::MalformedBody`]
    /// when the body is not valid JSON.
    pub fn new(
        method: HttpMethod,
        url: &str,
        raw_headers: &str,
        raw_body: Option<&str>,
    ) -> Result<Self, ValidationError> {
        if url.chars().count() <= MIN_URL_LEN {
            return Err(ValidationError::UrlTooShort);
        }

        let headers = parse_header_list(raw_headers)?;

        let body = if method.carries_body() {
            let body = raw_body.ok_or(ValidationError::MissingBody)?;
            serde_json::from_str::<serde_json::Value>(body)
                .map_err(|source| ValidationError::MalformedBody { source })?;
            Some(body.to_owned())
        } else {
            None
        };

        Ok(Self {
            method,
            url: url.to_owned(),
            headers,
            body,
        })
    }

    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// True when the user already chose a content type for the body.
    #[must_use]
    pub fn has_content_type(&self) -> bool {
        self.headers
            .keys()
            .any(|key| key.eq_ignore_ascii_case("content-type"))
    }
}

/// Parses a `"k1:v1,k2:v2"` header string into a map.
///
/// Surrounding whitespace and stray leading/trailing commas are ignored. An
/// empty string yields an empty map.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedHeader`] when any entry does not split
/// into exactly one non-empty key and one non-empty value.
pub fn parse_header_list(raw: &str) -> Result<BTreeMap<String, String>, ValidationError> {
    let mut headers = BTreeMap::new();
    let trimmed = raw.trim().trim_matches(HEADER_SEPARATOR).trim();
    if trimmed.is_empty() {
        return Ok(headers);
    }

    for entry in trimmed.split(HEADER_SEPARATOR) {
        let (key, value) = parse_header_entry(entry)?;
        headers.insert(key.to_owned(), value.to_owned());
    }

    Ok(headers)
}

fn parse_header_entry(entry: &str) -> Result<(&str, &str), ValidationError> {
    let mut parts = entry.trim().split(KEY_VALUE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => {
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                return Err(malformed(entry));
            }
            Ok((key, value))
        }
        _ => Err(malformed(entry)),
    }
}

fn malformed(entry: &str) -> ValidationError {
    ValidationError::MalformedHeader {
        value: entry.trim().to_owned(),
    }
}
