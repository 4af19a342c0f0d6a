use tokio_util::sync::CancellationToken;

/// Run-wide stop token. Cancelling it stops every virtual user at its next
/// suspension point.
pub type ShutdownToken = CancellationToken;

#[must_use]
pub fn shutdown_token() -> ShutdownToken {
    CancellationToken::new()
}
