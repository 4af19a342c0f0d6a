pub(crate) const DEFAULT_USER_AGENT: &str = concat!("toad/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_VUS: usize = 10;
pub(crate) const DEFAULT_DELAY_MS: u64 = 100;
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 60;
