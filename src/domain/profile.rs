use std::num::NonZeroUsize;
use std::time::Duration;

use crate::error::ValidationError;

/// Run parameters: how many users, how fast each one loops, for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProfile {
    pub virtual_users: NonZeroUsize,
    pub delay: Duration,
    pub duration: Duration,
    /// `None` leaves calls unbounded.
    pub timeout: Option<Duration>,
    pub debug: bool,
}

impl LoadProfile {
    /// Builds a profile from raw flag values.
    ///
    /// A `timeout_secs` of zero disables the per-call deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::VirtualUsersZero`] when `virtual_users` is 0.
    pub fn new(
        virtual_users: usize,
        delay_ms: u64,
        duration_secs: u64,
        timeout_secs: u64,
        debug: bool,
    ) -> Result<Self, ValidationError> {
        let virtual_users =
            NonZeroUsize::new(virtual_users).ok_or(ValidationError::VirtualUsersZero)?;
        let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));
        Ok(Self {
            virtual_users,
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_secs(duration_secs),
            timeout,
            debug,
        })
    }
}
