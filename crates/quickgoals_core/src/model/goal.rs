//! Goal domain model.
//!
//! # Responsibility
//! - Define the persisted goal record and its wire field names.
//! - Provide pure derived-status helpers over calendar days.
//!
//! # Invariants
//! - `id` and `created_date` never change after construction.
//! - `toggle()` is the only mutation of a constructed goal.
//! - Derived values are computed, never stored.
//! - A completed goal is never overdue.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a goal.
pub type GoalId = Uuid;

/// Goals due within this many days (inclusive) are classified as due soon.
pub const DUE_SOON_DAYS: i64 = 3;

/// One user-defined objective with a target due date.
///
/// Serialized with camelCase field names (`targetDate`, `isCompleted`, ...).
/// Unknown fields are rejected so a persisted collection decodes fully or
/// not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Goal {
    id: GoalId,
    title: String,
    target_date: DateTime<Utc>,
    is_completed: bool,
    created_date: DateTime<Utc>,
}

/// Two-state lifecycle projection of `is_completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalState {
    Active,
    Completed,
}

/// Display classification of a goal relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    /// Marked complete; date is irrelevant.
    Completed,
    /// Target date has passed and the goal is still active.
    Overdue,
    /// Due today or within `DUE_SOON_DAYS`.
    DueSoon,
    /// Due further out.
    OnTrack,
}

impl Goal {
    /// Creates an active goal with a fresh ID and `created_date = now`.
    ///
    /// Title validation is the caller's job; see `GoalStore::add`.
    pub fn new(title: impl Into<String>, target_date: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4(), title, target_date, false, Utc::now())
    }

    /// Creates a goal with caller-provided identity and timestamps.
    ///
    /// Used by import and test paths where identity already exists.
    pub fn with_id(
        id: GoalId,
        title: impl Into<String>,
        target_date: DateTime<Utc>,
        is_completed: bool,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            target_date,
            is_completed,
            created_date,
        }
    }

    pub fn id(&self) -> GoalId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target_date(&self) -> DateTime<Utc> {
        self.target_date
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    pub fn state(&self) -> GoalState {
        if self.is_completed {
            GoalState::Completed
        } else {
            GoalState::Active
        }
    }

    /// Flips completion. Applying it twice restores the original state.
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Target date as a calendar day in `tz`.
    pub fn target_day_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.target_date.with_timezone(tz).date_naive()
    }

    /// Signed calendar-day difference from `today` to the target day in `tz`.
    ///
    /// Positive means future, negative means past, zero means due today.
    pub fn days_remaining_in<Tz: TimeZone>(&self, today: NaiveDate, tz: &Tz) -> i64 {
        self.target_day_in(tz)
            .signed_duration_since(today)
            .num_days()
    }

    /// `days_remaining_in` using the local calendar.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        self.days_remaining_in(today, &Local)
    }

    /// `days_remaining` against the local clock.
    pub fn days_remaining_now(&self) -> i64 {
        self.days_remaining(local_today())
    }

    pub fn is_overdue_in<Tz: TimeZone>(&self, today: NaiveDate, tz: &Tz) -> bool {
        !self.is_completed && self.days_remaining_in(today, tz) < 0
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_overdue_in(today, &Local)
    }

    pub fn is_overdue_now(&self) -> bool {
        self.is_overdue(local_today())
    }

    /// Classifies the goal for display.
    pub fn due_status_in<Tz: TimeZone>(&self, today: NaiveDate, tz: &Tz) -> DueStatus {
        if self.is_completed {
            return DueStatus::Completed;
        }
        match self.days_remaining_in(today, tz) {
            days if days < 0 => DueStatus::Overdue,
            days if days <= DUE_SOON_DAYS => DueStatus::DueSoon,
            _ => DueStatus::OnTrack,
        }
    }

    pub fn due_status(&self, today: NaiveDate) -> DueStatus {
        self.due_status_in(today, &Local)
    }

    /// Countdown text such as `"4 days left"` or `"2 days ago"`.
    ///
    /// Completed goals have no countdown.
    pub fn countdown_label_in<Tz: TimeZone>(&self, today: NaiveDate, tz: &Tz) -> Option<String> {
        if self.is_completed {
            return None;
        }
        let days = self.days_remaining_in(today, tz);
        let suffix = if days >= 0 { "days left" } else { "days ago" };
        Some(format!("{} {suffix}", days.unsigned_abs()))
    }

    pub fn countdown_label(&self, today: NaiveDate) -> Option<String> {
        self.countdown_label_in(today, &Local)
    }
}

/// Today's date on the local calendar.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Converts a picked calendar day into the stored instant at local midnight.
///
/// Falls back to the earliest valid local instant on DST transitions, and to
/// midnight UTC when the local day has no midnight at all.
pub fn start_of_local_day(date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&midnight),
    }
}
