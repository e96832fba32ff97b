//! Hint expiry timers.
//!
//! Responsibilities:
//! - Sleep for a hint's lifetime, then send `Action::HintExpired`.
//!
//! Does NOT handle:
//! - Deciding whether the hint is still current (see `App::update`).
//!
//! Invariants:
//! - Each timer exits early when the cancellation token fires, including
//!   while waiting for space in a full channel.
//! - A closed channel is not an error; the app is shutting down.

use std::time::Duration;

use omarchy_engine::HintId;
use tokio::sync::mpsc::Sender;
use tokio_util::{sync::CancellationToken, task::TaskTracker};

use crate::action::Action;

/// Spawns a tracked timer that expires hint `id` after `ttl`.
pub fn spawn_hint_expiry(
    tracker: &TaskTracker,
    cancel: CancellationToken,
    tx: Sender<Action>,
    id: HintId,
    ttl: Duration,
) {
    tracker.spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = tokio::time::sleep(ttl) => {
                if !send_unless_cancelled(&tx, &cancel, Action::HintExpired(id)).await {
                    tracing::debug!(hint = %id, "Hint expiry not delivered");
                }
            }
        }
    });
}

/// Sends `action`, giving up if `cancel` fires while the channel is full.
///
/// Returns `false` when the action was not delivered.
pub async fn send_unless_cancelled(
    tx: &Sender<Action>,
    cancel: &CancellationToken,
    action: Action,
) -> bool {
    tokio::select! {
        _ = cancel.cancelled() => false,
        sent = tx.send(action) => sent.is_ok(),
    }
}
