//! Linear filter over the in-memory goal collection.
//!
//! # Invariants
//! - Filtering never reorders goals.
//! - Blank search text matches every title.

use crate::model::goal::Goal;
use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Completion-based subset of the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalFilter {
    #[default]
    All,
    Active,
    Completed,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported goal filter `{0}`; expected all|active|completed|overdue")]
pub struct UnknownFilter(pub String);

impl FromStr for GoalFilter {
    type Err = UnknownFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" | "done" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

/// Filter plus optional case-insensitive title text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalQuery {
    pub filter: GoalFilter,
    pub text: Option<String>,
}

impl GoalQuery {
    pub fn new(filter: GoalFilter, text: Option<String>) -> Self {
        Self { filter, text }
    }

    /// Whether `goal` belongs in the result for `today` in calendar `tz`.
    pub fn matches<Tz: TimeZone>(&self, goal: &Goal, today: NaiveDate, tz: &Tz) -> bool {
        let state_ok = match self.filter {
            GoalFilter::All => true,
            GoalFilter::Active => !goal.is_completed(),
            GoalFilter::Completed => goal.is_completed(),
            GoalFilter::Overdue => goal.is_overdue_in(today, tz),
        };
        state_ok && self.matches_text(goal.title())
    }

    fn matches_text(&self, title: &str) -> bool {
        match self.text.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => title.to_lowercase().contains(&needle.to_lowercase()),
        }
    }
}
