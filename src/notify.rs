//! Interview reminders.
//!
//! The repositories only know the [`ReminderScheduler`] trait: schedule a
//! one-shot reminder for the morning of an interview, or cancel whatever is
//! pending for a company. The shipped implementation keeps a JSON ledger next
//! to the database; `shukatsu remind` drains the entries that have come due.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Hour of the interview day at which the reminder fires.
const REMINDER_HOUR: u32 = 7;

pub trait ReminderScheduler {
    /// Schedule (replacing any prior reminder for this company) a reminder
    /// for the morning of `interview_at`. Returns the reminder identifier,
    /// or `None` when the reminder moment is already in the past or the
    /// timestamp cannot be read.
    fn schedule_interview_reminder(
        &self,
        company_id: &str,
        company_name: &str,
        interview_at: &str,
    ) -> Result<Option<String>>;

    /// Remove the pending reminder for this company, if any.
    fn cancel_interview_reminder(&self, company_id: &str) -> Result<()>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub company_id: String,
    pub company_name: String,
    /// Local wall-clock moment, `%Y-%m-%dT%H:%M:%S`.
    pub fire_at: String,
}

/// JSON-file ledger of pending reminders.
pub struct FileReminders {
    path: PathBuf,
}

impl FileReminders {
    pub fn open() -> Result<Self> {
        let path = if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "shukatsu") {
            proj_dirs.data_dir().join("reminders.json")
        } else {
            PathBuf::from("reminders.json")
        };
        Ok(Self::at(&path))
    }

    pub fn at(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Remove and return every reminder due at or before `now`.
    pub fn take_due(&self, now: NaiveDateTime) -> Result<Vec<Reminder>> {
        let mut pending = self.load()?;
        let cutoff = now.format("%Y-%m-%dT%H:%M:%S").to_string();
        let (due, rest): (Vec<_>, Vec<_>) =
            pending.drain(..).partition(|r| r.fire_at <= cutoff);
        self.save(&rest)?;
        Ok(due)
    }

    pub fn pending(&self) -> Result<Vec<Reminder>> {
        self.load()
    }

    fn load(&self) -> Result<Vec<Reminder>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Malformed reminder ledger {}", self.path.display()))
    }

    fn save(&self, reminders: &[Reminder]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(reminders)?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

impl ReminderScheduler for FileReminders {
    fn schedule_interview_reminder(
        &self,
        company_id: &str,
        company_name: &str,
        interview_at: &str,
    ) -> Result<Option<String>> {
        let mut pending = self.load()?;
        pending.retain(|r| r.company_id != company_id);

        let Some(date) = interview_date(interview_at) else {
            self.save(&pending)?;
            return Ok(None);
        };
        let Some(fire_at) = date.and_hms_opt(REMINDER_HOUR, 0, 0) else {
            self.save(&pending)?;
            return Ok(None);
        };

        // A reminder moment already behind us never fires.
        if fire_at <= Local::now().naive_local() {
            self.save(&pending)?;
            return Ok(None);
        }

        pending.push(Reminder {
            company_id: company_id.to_string(),
            company_name: company_name.to_string(),
            fire_at: fire_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        });
        self.save(&pending)?;
        Ok(Some(format!("interview-{company_id}")))
    }

    fn cancel_interview_reminder(&self, company_id: &str) -> Result<()> {
        let mut pending = self.load()?;
        let before = pending.len();
        pending.retain(|r| r.company_id != company_id);
        if pending.len() != before {
            self.save(&pending)?;
        }
        Ok(())
    }
}

/// Calendar day of the interview, from any of the timestamp shapes the CLI
/// and the store produce. `None` when the string is not a recognizable date.
fn interview_date(interview_at: &str) -> Option<NaiveDate> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(interview_at) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(interview_at, fmt) {
            return Some(naive.date());
        }
    }
    NaiveDate::parse_from_str(interview_at, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ledger() -> (TempDir, FileReminders) {
        let dir = TempDir::new().expect("create temp dir");
        let reminders = FileReminders::at(&dir.path().join("reminders.json"));
        (dir, reminders)
    }

    #[test]
    fn schedules_for_the_interview_morning() {
        let (_dir, reminders) = ledger();
        let handle = reminders
            .schedule_interview_reminder("c1", "テスト商事", "2999-06-01T14:00")
            .expect("schedule");
        assert_eq!(handle.as_deref(), Some("interview-c1"));

        let pending = reminders.pending().expect("pending");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].fire_at, "2999-06-01T07:00:00");
    }

    #[test]
    fn past_interview_is_not_scheduled() {
        let (_dir, reminders) = ledger();
        let handle = reminders
            .schedule_interview_reminder("c1", "テスト商事", "2001-06-01T14:00")
            .expect("schedule");
        assert!(handle.is_none());
        assert!(reminders.pending().expect("pending").is_empty());
    }

    #[test]
    fn rescheduling_replaces_the_prior_reminder() {
        let (_dir, reminders) = ledger();
        reminders
            .schedule_interview_reminder("c1", "テスト商事", "2999-06-01T14:00")
            .expect("schedule");
        reminders
            .schedule_interview_reminder("c1", "テスト商事", "2999-07-01T10:00")
            .expect("reschedule");

        let pending = reminders.pending().expect("pending");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].fire_at, "2999-07-01T07:00:00");
    }

    #[test]
    fn cancel_is_silent_when_nothing_is_scheduled() {
        let (_dir, reminders) = ledger();
        reminders
            .cancel_interview_reminder("ghost")
            .expect("cancel");
    }

    #[test]
    fn take_due_drains_only_elapsed_reminders() {
        let (_dir, reminders) = ledger();
        reminders
            .schedule_interview_reminder("c1", "A社", "2999-06-01T14:00")
            .expect("schedule");
        reminders
            .schedule_interview_reminder("c2", "B社", "2999-08-01T14:00")
            .expect("schedule");

        let cutoff = NaiveDate::from_ymd_opt(2999, 7, 1)
            .expect("valid date")
            .and_hms_opt(8, 0, 0)
            .expect("valid time");
        let due = reminders.take_due(cutoff).expect("take_due");
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].company_id, "c1");
        assert_eq!(reminders.pending().expect("pending").len(), 1);
    }
}
