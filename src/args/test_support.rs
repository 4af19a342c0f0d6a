use clap::Parser;

use crate::error::{AppError, AppResult};

use super::ToadArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<ToadArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    ToadArgs::try_parse_from(args).map_err(AppError::from)
}
