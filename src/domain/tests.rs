use std::time::Duration;

use super::*;
use crate::error::ValidationError;

#[test]
fn header_list_with_spaces_parses() -> Result<(), String> {
    let headers = parse_header_list("a:1, b:2").map_err(|err| err.to_string())?;
    if headers.len() != 2 {
        return Err(format!("Unexpected header count: {}", headers.len()));
    }
    if headers.get("a").map(String::as_str) != Some("1") {
        return Err("Unexpected value for a".to_owned());
    }
    if headers.get("b").map(String::as_str) != Some("2") {
        return Err("Unexpected value for b".to_owned());
    }
    Ok(())
}

#[test]
fn header_list_ignores_trailing_commas() -> Result<(), String> {
    let headers =
        parse_header_list("  Accept:text/plain,X-Id:7, ").map_err(|err| err.to_string())?;
    if headers.get("Accept").map(String::as_str) != Some("text/plain") {
        return Err("Unexpected Accept".to_owned());
    }
    if headers.get("X-Id").map(String::as_str) != Some("7") {
        return Err("Unexpected X-Id".to_owned());
    }
    Ok(())
}

#[test]
fn empty_header_list_is_empty_map() -> Result<(), String> {
    let headers = parse_header_list("").map_err(|err| err.to_string())?;
    if !headers.is_empty() {
        return Err("Expected no headers".to_owned());
    }
    let headers = parse_header_list(" , ").map_err(|err| err.to_string())?;
    if !headers.is_empty() {
        return Err("Expected no headers for separators only".to_owned());
    }
    Ok(())
}

#[test]
fn malformed_headers_are_rejected() -> Result<(), String> {
    for raw in ["a:1:2", "a", "a:", ":1", "a:1,,b:2"] {
        match parse_header_list(raw) {
            Err(ValidationError::MalformedHeader { .. }) => {}
            Err(err) => return Err(format!("Unexpected error for '{}': {}", raw, err)),
            Ok(_) => return Err(format!("Expected '{}' to be rejected", raw)),
        }
    }
    Ok(())
}

#[test]
fn url_length_boundary() -> Result<(), String> {
    for url in ["x", "ok"] {
        match RequestTemplate::new(HttpMethod::Get, url, "", None) {
            Err(ValidationError::UrlTooShort) => {}
            Err(err) => return Err(format!("Unexpected error for '{}': {}", url, err)),
            Ok(_) => return Err(format!("Expected '{}' to be too short", url)),
        }
    }
    let template =
        RequestTemplate::new(HttpMethod::Get, "oka", "", None).map_err(|err| err.to_string())?;
    if template.url() != "oka" {
        return Err("Unexpected url".to_owned());
    }
    Ok(())
}

#[test]
fn get_template_drops_body() -> Result<(), String> {
    let template = RequestTemplate::new(
        HttpMethod::Get,
        "http://localhost/health",
        "a:1",
        Some("not json"),
    )
    .map_err(|err| err.to_string())?;
    if template.body().is_some() {
        return Err("GET must not carry a body".to_owned());
    }
    if template.method() != HttpMethod::Get {
        return Err("Unexpected method".to_owned());
    }
    Ok(())
}

#[test]
fn post_template_requires_json_body() -> Result<(), String> {
    match RequestTemplate::new(HttpMethod::Post, "http://localhost/x", "", Some("{oops")) {
        Err(ValidationError::MalformedBody { .. }) => {}
        Err(err) => return Err(format!("Unexpected error: {}", err)),
        Ok(_) => return Err("Expected malformed body".to_owned()),
    }
    match RequestTemplate::new(HttpMethod::Post, "http://localhost/x", "", None) {
        Err(ValidationError::MissingBody) => {}
        Err(err) => return Err(format!("Unexpected error: {}", err)),
        Ok(_) => return Err("Expected missing body".to_owned()),
    }
    let template = RequestTemplate::new(
        HttpMethod::Post,
        "http://localhost/x",
        "",
        Some(r#"{"name":"toad"}"#),
    )
    .map_err(|err| err.to_string())?;
    if template.body() != Some(r#"{"name":"toad"}"#) {
        return Err("Unexpected body".to_owned());
    }
    Ok(())
}

#[test]
fn content_type_detection_is_case_insensitive() -> Result<(), String> {
    let template = RequestTemplate::new(
        HttpMethod::Post,
        "http://localhost/x",
        "content-TYPE:text/plain",
        Some("{}"),
    )
    .map_err(|err| err.to_string())?;
    if !template.has_content_type() {
        return Err("Expected content type to be detected".to_owned());
    }
    Ok(())
}

#[test]
fn profile_rejects_zero_users() -> Result<(), String> {
    match LoadProfile::new(0, 100, 1, 60, false) {
        Err(ValidationError::VirtualUsersZero) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected zero users to be rejected".to_owned()),
    }
}

#[test]
fn profile_zero_timeout_is_unbounded() -> Result<(), String> {
    let profile = LoadProfile::new(3, 100, 1, 0, true).map_err(|err| err.to_string())?;
    if profile.timeout.is_some() {
        return Err("Expected no timeout".to_owned());
    }
    if profile.virtual_users.get() != 3 {
        return Err("Unexpected virtual users".to_owned());
    }
    if profile.delay != Duration::from_millis(100) || profile.duration != Duration::from_secs(1)
    {
        return Err("Unexpected pacing".to_owned());
    }
    let profile = LoadProfile::new(1, 0, 0, 60, false).map_err(|err| err.to_string())?;
    if profile.timeout != Some(Duration::from_secs(60)) {
        return Err("Unexpected timeout".to_owned());
    }
    Ok(())
}
