//! Core library for the `toad` CLI.
//!
//! `toad` drives a fixed number of virtual users, each repeating one HTTP
//! request at a fixed delay until the run duration elapses. The crate holds
//! the CLI argument types, config-file merging, input validation, the shared
//! transport and the virtual user loop. The primary interface is the `toad`
//! binary; library APIs may change with it.
pub(crate) mod app;
pub mod args;
pub mod config;
pub mod domain;
pub mod entry;
pub mod error;
pub(crate) mod http;
mod logger;
mod shutdown;
mod shutdown_handlers;
