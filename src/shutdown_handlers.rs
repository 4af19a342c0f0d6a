use tracing::warn;

use crate::shutdown::ShutdownToken;

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Cancels `shutdown` on Ctrl+C (and SIGTERM on unix). The task ends on its
/// own once the token is cancelled by anyone.
pub fn setup_signal_shutdown_handler(shutdown: &ShutdownToken) -> tokio::task::JoinHandle<()> {
    let shutdown = shutdown.clone();
    tokio::spawn(async move {
        #[cfg(unix)]
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                warn!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        #[cfg(unix)]
        {
            tokio::select! {
                () = shutdown.cancelled() => {}
                _ = tokio::signal::ctrl_c() => {
                    warn!("Interrupt received, stopping virtual users.");
                    shutdown.cancel();
                }
                () = async {
                    if let Some(signal) = term_signal.as_mut() {
                        signal.recv().await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                } => {
                    warn!("SIGTERM received, stopping virtual users.");
                    shutdown.cancel();
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                () = shutdown.cancelled() => {}
                _ = tokio::signal::ctrl_c() => {
                    warn!("Interrupt received, stopping virtual users.");
                    shutdown.cancel();
                }
            }
        }
    })
}
