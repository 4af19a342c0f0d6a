//! HTTP transport setup and the per-user request loop.
mod sender;
pub(crate) mod workload;


pub(crate) use sender::{build_transport, prepare_request};
pub use workload::CallOutcome;
pub(crate) use workload::{CallPort, HttpCallExecutor, VirtualUser};
