//! Process bootstrap shared by the service binaries: runtime construction,
//! panic logging and Ctrl+C handling.

use std::future::Future;
use std::process::ExitCode;

use tracing::{error, info};
use uuid::Uuid;

use crate::errors::StartupError;

fn build_runtime(worker_threads: Option<usize>) -> Result<tokio::runtime::Runtime, StartupError> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    builder.build().map_err(|e| StartupError::Runtime(e.to_string()))
}

/// Run `serve` on a fresh multi-thread runtime until it returns or Ctrl+C arrives.
pub fn launch<F, Fut>(service: &'static str, worker_threads: Option<usize>, serve: F) -> ExitCode
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    // Correlates the log lines of one process run.
    let service_id = Uuid::new_v4();
    let pid = std::process::id();

    std::panic::set_hook(Box::new(move |info| {
        error!(service, event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    let rt = match build_runtime(worker_threads) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version = env!("CARGO_PKG_VERSION"),
        threads = worker_threads.unwrap_or_default(),
        "{service} service starting"
    );

    rt.block_on(async move {
        let task = tokio::spawn(async move { serve().await });

        tokio::select! {
            res = task => match res {
                Ok(Ok(())) => {
                    info!(service, event = "stop", %service_id, pid, "service stopped normally");
                    ExitCode::SUCCESS
                }
                Ok(Err(e)) => {
                    error!(service, event = "run_failed", error = %e, "service returned error");
                    ExitCode::FAILURE
                }
                Err(e) => {
                    error!(service, event = "task_join_error", error = %e, "service task join error");
                    ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service, event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                ExitCode::SUCCESS
            }
        }
    })
}
