//! CLI argument types.
mod cli;
mod defaults;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::{Command, GetArgs, LoadArgs, PostArgs, ToadArgs};

pub(crate) use defaults::DEFAULT_USER_AGENT;
