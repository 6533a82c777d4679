//! Long-running job polling
//!
//! Clip exports run server-side; the client polls their status. The poll is
//! an explicit, cancellable task with a maximum attempt count and capped
//! exponential backoff, never an unbounded timer recursion. A response
//! arriving after cancellation is dropped with the in-flight future.

use pictune_client::{ClipJobStatus, MusicApi};
use pictune_common::config::ClipPollConfig;
use tokio_util::sync::CancellationToken;

/// Terminal result of a clip export poll.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipOutcome {
    Completed { url: String },
    Failed { message: String },
    /// Attempt budget exhausted without a terminal status
    TimedOut,
    Cancelled,
}

/// Poll a clip job until it settles, the attempt budget runs out, or the
/// token is cancelled. Transient errors (network, timeout) consume an
/// attempt and keep polling; server-reported errors end the poll.
pub async fn poll_clip_job<C: MusicApi>(
    api: &C,
    job_id: &str,
    config: &ClipPollConfig,
    cancel: CancellationToken,
) -> ClipOutcome {
    let mut interval = config.initial_interval();

    for attempt in 1..=config.max_attempts {
        if attempt > 1 {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!(job_id, "clip poll cancelled during backoff");
                    return ClipOutcome::Cancelled;
                }
                _ = tokio::time::sleep(interval) => {}
            }
            interval = (interval * 2).min(config.max_interval());
        }

        let status = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(job_id, "clip poll cancelled in flight");
                return ClipOutcome::Cancelled;
            }
            status = api.clip_job_status(job_id) => status,
        };

        match status {
            Ok(ClipJobStatus::Completed { url }) => {
                tracing::info!(job_id, attempt, "clip export completed");
                return ClipOutcome::Completed { url };
            }
            Ok(ClipJobStatus::Failed { message }) => {
                return ClipOutcome::Failed { message };
            }
            Ok(ClipJobStatus::Pending) | Ok(ClipJobStatus::Processing) => {
                tracing::debug!(job_id, attempt, "clip job still running");
            }
            Err(e) if e.is_transient() => {
                tracing::debug!(job_id, attempt, error = %e, "clip status check failed, retrying");
            }
            Err(e) => {
                return ClipOutcome::Failed {
                    message: e.user_message("Clip export failed"),
                };
            }
        }
    }

    ClipOutcome::TimedOut
}
