//! Reminder scheduler
//!
//! Ticks once a minute and sends a direct message for every stored reminder
//! whose class starts `minutes_before` minutes after a moment inside the
//! elapsed tick window. A reminder applies to every class with the same name.
//!
//! - **Version**: 1.0.1
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.0.1: Retry the window after a failed check instead of skipping it
//! - 1.0.0: Initial DM reminders

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::features::schedule::class_start_between;
use crate::outbound::Outbound;
use crate::store::{UserMap, UserStore};

/// A reminder that should be delivered now
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueReminder {
    pub user_id: String,
    pub class_name: String,
    pub starts_at: NaiveDateTime,
    pub minutes_before: i64,
}

impl DueReminder {
    pub fn message(&self) -> String {
        format!(
            "⏰ Reminder: **{}** starts in {} minutes (at {}).",
            self.class_name,
            self.minutes_before,
            self.starts_at.format("%H:%M")
        )
    }
}

pub struct ReminderScheduler {
    store: UserStore,
    outbound: Arc<dyn Outbound>,
    tick: Duration,
}

impl ReminderScheduler {
    pub fn new(store: UserStore, outbound: Arc<dyn Outbound>) -> Self {
        Self {
            store,
            outbound,
            tick: Duration::from_secs(60),
        }
    }

    /// Run forever, checking once per tick
    pub async fn run(self) {
        info!("⏰ Reminder scheduler started ({}s tick)", self.tick.as_secs());
        let mut interval = tokio::time::interval(self.tick);
        let mut last_check = Local::now().naive_local();

        loop {
            interval.tick().await;
            last_check = self.check(last_check, Local::now().naive_local()).await;
        }
    }

    /// One tick over `(last_check, now]`; returns where the next window starts
    ///
    /// A failed check keeps `last_check` so the window is retried next tick.
    pub async fn check(&self, last_check: NaiveDateTime, now: NaiveDateTime) -> NaiveDateTime {
        match self.deliver_due(last_check, now).await {
            Ok(0) => now,
            Ok(sent) => {
                info!("⏰ Delivered {sent} class reminders");
                now
            }
            Err(e) => {
                error!("Reminder check failed, retrying from {last_check}: {e}");
                last_check
            }
        }
    }

    /// Send every reminder due in `(after, until]`, returning how many were sent
    pub async fn deliver_due(&self, after: NaiveDateTime, until: NaiveDateTime) -> Result<usize> {
        let data = self.store.load().await?;
        let due = collect_due(&data, after, until);
        debug!("Reminder window {after} .. {until}: {} due", due.len());

        let mut sent = 0;
        for reminder in due {
            let Ok(user_id) = reminder.user_id.parse::<u64>() else {
                warn!("Skipping reminder for non-numeric user id '{}'", reminder.user_id);
                continue;
            };
            match self.outbound.send_direct(user_id, &reminder.message()).await {
                Ok(()) => sent += 1,
                Err(e) => error!(
                    "Failed to send reminder for '{}' to user {user_id}: {e}",
                    reminder.class_name
                ),
            }
        }
        Ok(sent)
    }
}

/// Reminders whose fire time (class start minus lead) falls in `(after, until]`
pub fn collect_due(data: &UserMap, after: NaiveDateTime, until: NaiveDateTime) -> Vec<DueReminder> {
    let mut due = Vec::new();

    for (user_id, record) in data {
        for reminder in &record.reminders {
            let lead = chrono::Duration::minutes(reminder.minutes_before);
            for class in record.classes.iter().filter(|c| c.name == reminder.name) {
                if let Some(starts_at) = class_start_between(class, after + lead, until + lead) {
                    due.push(DueReminder {
                        user_id: user_id.clone(),
                        class_name: class.name.clone(),
                        starts_at,
                        minutes_before: reminder.minutes_before,
                    });
                }
            }
        }
    }

    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::schedule::{parse_date, parse_time};
    use crate::outbound::testing::{RecordingOutbound, Target};
    use crate::store::{ClassEntry, MemoryBackend, ReminderEntry, UserRecord};
    use tempfile::tempdir;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        parse_date(date).unwrap().and_time(parse_time(time).unwrap())
    }

    // 2025-01-06 is a Monday
    fn sample_data() -> UserMap {
        let mut record = UserRecord::default();
        record.classes.push(ClassEntry::new("Math", "Monday", "09:00"));
        record.classes.push(ClassEntry::new("Math", "Wednesday", "09:00"));
        record.classes.push(ClassEntry::new("Art", "Monday", "09:00"));
        record.reminders.push(ReminderEntry {
            name: "Math".to_string(),
            minutes_before: 15,
        });

        let mut data = UserMap::new();
        data.insert("42".to_string(), record);
        data
    }

    #[test]
    fn test_collect_due_inside_window() {
        let due = collect_due(
            &sample_data(),
            at("2025-01-06", "08:44"),
            at("2025-01-06", "08:45"),
        );
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].class_name, "Math");
        assert_eq!(due[0].starts_at, at("2025-01-06", "09:00"));
        assert_eq!(
            due[0].message(),
            "⏰ Reminder: **Math** starts in 15 minutes (at 09:00)."
        );
    }

    #[test]
    fn test_collect_due_fires_once_across_windows() {
        let data = sample_data();
        let first = collect_due(&data, at("2025-01-06", "08:44"), at("2025-01-06", "08:45"));
        let second = collect_due(&data, at("2025-01-06", "08:45"), at("2025-01-06", "08:46"));
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn test_collect_due_outside_window() {
        let due = collect_due(
            &sample_data(),
            at("2025-01-06", "07:00"),
            at("2025-01-06", "07:01"),
        );
        assert!(due.is_empty());
    }

    #[tokio::test]
    async fn test_deliver_due_sends_direct_messages() {
        let store = UserStore::new(Arc::new(MemoryBackend::with_data(sample_data())));
        let outbound = Arc::new(RecordingOutbound::default());
        let scheduler = ReminderScheduler::new(store, outbound.clone());

        let sent = scheduler
            .deliver_due(at("2025-01-08", "08:40"), at("2025-01-08", "08:50"))
            .await
            .unwrap();

        assert_eq!(sent, 1);
        let messages = outbound.messages().await;
        assert_eq!(messages[0].0, Target::Direct(42));
    }

    #[tokio::test]
    async fn test_failed_check_retries_window() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        std::fs::write(&path, "[[[").unwrap();

        let outbound = Arc::new(RecordingOutbound::default());
        let scheduler = ReminderScheduler::new(UserStore::json_file(&path), outbound.clone());

        let start = at("2025-01-06", "08:44");
        let next = scheduler.check(start, at("2025-01-06", "08:45")).await;
        assert_eq!(next, start);
        assert!(outbound.messages().await.is_empty());

        std::fs::write(&path, serde_json::to_string(&sample_data()).unwrap()).unwrap();
        let later = at("2025-01-06", "08:46");
        assert_eq!(scheduler.check(next, later).await, later);

        let messages = outbound.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, Target::Direct(42));
    }

    #[tokio::test]
    async fn test_deliver_due_skips_non_numeric_users() {
        let mut data = sample_data();
        let record = data.remove("42").unwrap();
        data.insert("not-a-user".to_string(), record);

        let store = UserStore::in_memory();
        store.save(&data).await.unwrap();
        let outbound = Arc::new(RecordingOutbound::default());
        let scheduler = ReminderScheduler::new(store, outbound.clone());

        let sent = scheduler
            .deliver_due(at("2025-01-06", "08:40"), at("2025-01-06", "08:50"))
            .await
            .unwrap();
        assert_eq!(sent, 0);
        assert!(outbound.messages().await.is_empty());
    }
}
