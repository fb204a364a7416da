//! OS signal handling.
//!
//! # Responsibilities
//! - Listen for SIGTERM and SIGINT (Ctrl-C only on non-unix targets)
//! - Translate the first one into a shutdown trigger
//! - Treat a handler that cannot be installed as a shutdown request
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - A second signal is not special-cased: the parked driver is already
//!   resuming after the first

use std::future::Future;

use tokio::task::JoinHandle;

use crate::lifecycle::shutdown::Shutdown;

/// Resolve when the process receives SIGINT or SIGTERM.
pub async fn wait_for_signal() -> std::io::Result<&'static str> {
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        signal(SignalKind::terminate())?.recv().await;
        Ok::<_, std::io::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<std::io::Result<()>>();

    tokio::select! {
        res = tokio::signal::ctrl_c() => res.map(|_| "SIGINT"),
        res = terminate => res.map(|_| "SIGTERM"),
    }
}

/// Spawn a task that triggers `shutdown` on the first termination signal.
///
/// The task also exits if `shutdown` is triggered some other way.
pub fn spawn_signal_listener(shutdown: Shutdown) -> JoinHandle<()> {
    tokio::spawn(relay(wait_for_signal(), shutdown))
}

/// Trigger `shutdown` once `signal` resolves.
///
/// A handler that failed to install also triggers: nothing could ever
/// release a parked driver otherwise.
async fn relay<F>(signal: F, shutdown: Shutdown)
where
    F: Future<Output = std::io::Result<&'static str>>,
{
    tokio::select! {
        res = signal => {
            match res {
                Ok(signal) => tracing::info!(signal, "Termination signal received"),
                Err(e) => tracing::error!(
                    error = %e,
                    "Failed to install signal handler, shutting down"
                ),
            }
            shutdown.trigger();
        }
        _ = shutdown.wait() => {}
    }
}
