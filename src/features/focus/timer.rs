//! Focus session timers
//!
//! Each session is a spawned task that sleeps for the requested duration and
//! then pings the user in the channel the session started from. Starting a new
//! session replaces the running one; `cancel` aborts it without a ping.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Sessions are cancellable and tracked per user
//! - 1.0.0: Sleep-then-notify timer

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use log::{error, info};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::outbound::Outbound;

/// Longest focus session accepted, in minutes
pub const MAX_FOCUS_MINUTES: i64 = 24 * 60;

struct FocusSession {
    id: u64,
    ends_at: DateTime<Utc>,
    handle: JoinHandle<()>,
}

/// What happened when a session was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusStart {
    Started,
    /// A running session was cancelled in favour of the new one
    Replaced,
}

#[derive(Clone)]
pub struct FocusTimers {
    sessions: Arc<DashMap<u64, FocusSession>>,
    outbound: Arc<dyn Outbound>,
    next_id: Arc<AtomicU64>,
}

impl FocusTimers {
    pub fn new(outbound: Arc<dyn Outbound>) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            outbound,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Start a session for `user_id`, notifying in `channel_id` when it ends
    pub fn start(&self, user_id: u64, channel_id: u64, minutes: u64) -> FocusStart {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let length = Duration::from_secs(minutes * 60);
        let ends_at = Utc::now() + chrono::Duration::minutes(minutes as i64);

        let sessions = Arc::clone(&self.sessions);
        let outbound = Arc::clone(&self.outbound);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(length).await;
            sessions.remove_if(&user_id, |_, s| s.id == id);

            let text = format!("<@{user_id}> Focus session ended! Take a break.");
            if let Err(e) = outbound.send_to_channel(channel_id, &text).await {
                error!("Failed to deliver focus notification to user {user_id}: {e}");
            } else {
                info!("Focus session #{id} for user {user_id} finished after {minutes}m");
            }
        });

        let previous = self.sessions.insert(
            user_id,
            FocusSession {
                id,
                ends_at,
                handle,
            },
        );

        match previous {
            Some(old) if !old.handle.is_finished() => {
                old.handle.abort();
                info!("Focus session #{} for user {user_id} replaced by #{id}", old.id);
                FocusStart::Replaced
            }
            _ => {
                info!("Focus session #{id} started for user {user_id} ({minutes}m)");
                FocusStart::Started
            }
        }
    }

    /// Abort the user's running session; false when there was none
    pub fn cancel(&self, user_id: u64) -> bool {
        match self.sessions.remove(&user_id) {
            Some((_, session)) if !session.handle.is_finished() => {
                session.handle.abort();
                info!("Focus session #{} for user {user_id} cancelled", session.id);
                true
            }
            _ => false,
        }
    }

    /// Time left in the user's running session
    pub fn remaining(&self, user_id: u64) -> Option<chrono::Duration> {
        let session = self.sessions.get(&user_id)?;
        if session.handle.is_finished() {
            return None;
        }
        Some((session.ends_at - Utc::now()).max(chrono::Duration::zero()))
    }

    pub fn active_count(&self) -> usize {
        self.sessions
            .iter()
            .filter(|s| !s.handle.is_finished())
            .count()
    }
}
