use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::Command;
use crate::domain::{HttpMethod, LoadProfile, RequestTemplate};
use crate::error::{AppError, AppResult, ValidationError};

use super::types::{BodyValue, ConfigFile};

/// Validated inputs for one run.
#[derive(Debug, Clone)]
pub struct ResolvedRun {
    pub template: RequestTemplate,
    pub profile: LoadProfile,
}

/// Merges CLI values over the optional config file and validates the result.
///
/// `matches` must be the subcommand's matches so flag sources can be told
/// apart from defaults.
///
/// # Errors
///
/// Returns a validation error when a mandatory value is missing or any value
/// fails template/profile validation.
pub fn resolve_run(
    command: &Command,
    matches: &ArgMatches,
    config: Option<ConfigFile>,
) -> AppResult<ResolvedRun> {
    let config = config.unwrap_or_default();
    let load = command.load();

    let url = load
        .url
        .clone()
        .or(config.url)
        .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
    let duration = load
        .duration
        .or(config.duration)
        .ok_or_else(|| AppError::validation(ValidationError::MissingDuration))?;

    let headers = pick(matches, "headers", load.headers.clone(), config.headers);
    let vus = pick(matches, "vus", load.vus, config.vus);
    let delay = pick(matches, "delay", load.delay, config.delay);
    let timeout = pick(matches, "timeout", load.timeout, config.timeout);
    let debug = pick(matches, "debug", load.debug, config.debug);

    let (method, body) = match command {
        Command::Get(_) => (HttpMethod::Get, None),
        Command::Post(post) => (
            HttpMethod::Post,
            post.body
                .clone()
                .or_else(|| config.body.map(BodyValue::into_text)),
        ),
    };

    let template = RequestTemplate::new(method, &url, &headers, body.as_deref())
        .map_err(AppError::validation)?;
    let profile =
        LoadProfile::new(vus, delay, duration, timeout, debug).map_err(AppError::validation)?;

    Ok(ResolvedRun { template, profile })
}

fn pick<T>(matches: &ArgMatches, id: &str, cli: T, config: Option<T>) -> T {
    if is_explicit(matches, id) {
        return cli;
    }
    config.unwrap_or(cli)
}

fn is_explicit(matches: &ArgMatches, id: &str) -> bool {
    matches!(
        matches.value_source(id),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
