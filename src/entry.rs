use std::ffi::OsString;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{debug, info};

use crate::app::run_load_test;
use crate::args::ToadArgs;
use crate::config::{ResolvedRun, load_config, resolve_run};
use crate::error::{AppError, AppResult};
use crate::shutdown::shutdown_token;
use crate::shutdown_handlers::setup_signal_shutdown_handler;

/// Process entry point. Any failure is printed to stdout and mapped to exit
/// code 1.
#[must_use]
pub fn run() -> ExitCode {
    run_from(std::env::args_os())
}

/// Same as [`run`], with explicit arguments.
#[must_use]
pub fn run_from<I, T>(raw_args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match try_run(raw_args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_run<I, T>(raw_args: I) -> AppResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let Some((args, matches)) = parse_args(raw_args)? else {
        return Ok(());
    };

    crate::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, &matches))
}

fn parse_args<I, T>(raw_args: I) -> AppResult<Option<(ToadArgs, ArgMatches)>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match ToadArgs::command().try_get_matches_from(raw_args) {
        Ok(matches) => matches,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            err.print()?;
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let args = ToadArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

async fn run_async(args: ToadArgs, matches: &ArgMatches) -> AppResult<()> {
    let Some((_, sub_matches)) = matches.subcommand() else {
        return Err(AppError::from(
            ToadArgs::command().error(ErrorKind::MissingSubcommand, "missing subcommand"),
        ));
    };

    debug!("Running '{}' load test", args.command.name());
    let config = load_config(args.config.as_deref())?;
    let ResolvedRun { template, profile } = resolve_run(&args.command, sub_matches, config)?;
    if !template.headers().is_empty() {
        info!("Headers: {:?}", template.headers());
    }

    let shutdown = shutdown_token();
    let signal_handle = setup_signal_shutdown_handler(&shutdown);

    let result = run_load_test(&profile, &template, &shutdown).await;

    let interrupted = shutdown.is_cancelled();
    shutdown.cancel();
    signal_handle.await?;

    let completion = result?;
    info!("{} virtual users stopped", completion.stopped_users);
    if interrupted {
        return Err(AppError::Interrupted);
    }
    println!("Load test complete");

    Ok(())
}
