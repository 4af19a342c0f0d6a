use reqwest::{
    Client, Method, Request, Url,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use tracing::error;

use crate::{
    args::DEFAULT_USER_AGENT,
    domain::{HttpMethod, LoadProfile, RequestTemplate},
    error::HttpError,
};

const DEFAULT_SCHEME_PREFIX: &str = "http://";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Builds the single client shared by every virtual user.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub(crate) fn build_transport(profile: &LoadProfile) -> Result<Client, HttpError> {
    let mut client_builder = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .pool_max_idle_per_host(profile.virtual_users.get());

    if let Some(timeout) = profile.timeout {
        client_builder = client_builder.timeout(timeout);
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        HttpError::BuildClientFailed { source: err }
    })
}

/// Turns the template into the request every call is cloned from.
///
/// All structural checks (URL, scheme, header names and values) happen here,
/// so a bad template is rejected before any user is spawned.
///
/// # Errors
///
/// Returns an error when the URL cannot be parsed, uses a scheme other than
/// http/https, or a header cannot be represented on the wire.
pub(crate) fn prepare_request(
    client: &Client,
    template: &RequestTemplate,
) -> Result<Request, HttpError> {
    let url = parse_target_url(template.url())?;
    let headers = build_header_map(template)?;

    let mut builder = client
        .request(to_method(template.method()), url)
        .headers(headers);
    if let Some(body) = template.body() {
        builder = builder.body(body.to_owned());
    }

    builder
        .build()
        .map_err(|err| HttpError::BuildRequestFailed { source: err })
}

pub(super) fn parse_target_url(raw: &str) -> Result<Url, HttpError> {
    let normalized = if raw.contains("://") {
        raw.to_owned()
    } else {
        format!("{}{}", DEFAULT_SCHEME_PREFIX, raw)
    };
    let url = Url::parse(&normalized).map_err(|err| HttpError::InvalidUrl {
        url: normalized.clone(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(HttpError::UnsupportedScheme {
            scheme: other.to_owned(),
        }),
    }
}

fn build_header_map(template: &RequestTemplate) -> Result<HeaderMap, HttpError> {
    let mut headers = HeaderMap::with_capacity(template.headers().len().saturating_add(1));
    for (key, value) in template.headers() {
        let name =
            HeaderName::from_bytes(key.as_bytes()).map_err(|err| HttpError::InvalidHeaderName {
                name: key.clone(),
                source: err,
            })?;
        let val = HeaderValue::from_str(value).map_err(|err| HttpError::InvalidHeaderValue {
            name: key.clone(),
            source: err,
        })?;
        headers.insert(name, val);
    }
    if template.body().is_some() && !template.has_content_type() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }
    Ok(headers)
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}
