//! Goal store: the authoritative in-memory collection for one session.
//!
//! # Responsibility
//! - Load the persisted collection once at session start.
//! - Apply add/toggle/delete and rewrite the full collection after each one.
//!
//! # Invariants
//! - Newest-added goal is at index 0; no other ordering is applied.
//! - Mutations land in memory before the save; a failed save leaves the
//!   change visible for the session but not durable.
//! - No-op operations (blank title, unknown ID) never trigger a save.

use crate::model::goal::{DueStatus, Goal, GoalId};
use crate::repo::goal_repo::{GoalRepository, RepoError};
use crate::search::filter::GoalQuery;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The change was applied in memory but could not be persisted.
    #[error("goal change not persisted: {0}")]
    Persist(#[source] RepoError),
    #[error("failed to load goals: {0}")]
    Load(#[source] RepoError),
}

/// Read-only projection of one goal for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    pub id: GoalId,
    pub title: String,
    pub target_date: NaiveDate,
    pub is_completed: bool,
    pub days_remaining: i64,
    pub is_overdue: bool,
    pub due_status: DueStatus,
    pub countdown: Option<String>,
}

impl GoalSummary {
    pub fn from_goal<Tz: TimeZone>(goal: &Goal, today: NaiveDate, tz: &Tz) -> Self {
        Self {
            id: goal.id(),
            title: goal.title().to_string(),
            target_date: goal.target_day_in(tz),
            is_completed: goal.is_completed(),
            days_remaining: goal.days_remaining_in(today, tz),
            is_overdue: goal.is_overdue_in(today, tz),
            due_status: goal.due_status_in(today, tz),
            countdown: goal.countdown_label_in(today, tz),
        }
    }
}

/// Ordered goal collection synchronized with a repository.
pub struct GoalStore<R: GoalRepository> {
    repo: R,
    goals: Vec<Goal>,
}

impl<R: GoalRepository> GoalStore<R> {
    /// Initializes the store from `repo`, degrading to empty on load failure.
    ///
    /// An unreadable slot is indistinguishable from "no goals yet" for the
    /// caller; the failure is logged.
    pub fn open(repo: R) -> Self {
        match repo.load() {
            Ok(goals) => Self::with_goals(repo, goals),
            Err(err) => {
                warn!("event=store_init module=store status=degraded error={err}");
                Self::with_goals(repo, Vec::new())
            }
        }
    }

    /// Initializes the store from `repo`, surfacing load failures.
    pub fn try_open(repo: R) -> StoreResult<Self> {
        let goals = repo.load().map_err(StoreError::Load)?;
        Ok(Self::with_goals(repo, goals))
    }

    fn with_goals(repo: R, goals: Vec<Goal>) -> Self {
        info!(
            "event=store_init module=store status=ok count={}",
            goals.len()
        );
        Self { repo, goals }
    }

    /// Current collection, newest-added first.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id() == id)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Adds a new active goal at the front of the collection.
    ///
    /// Returns `Ok(None)` without saving when `title` is blank.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        target_date: DateTime<Utc>,
    ) -> StoreResult<Option<GoalId>> {
        let title = title.into();
        if title.trim().is_empty() {
            info!("event=goal_add module=store status=rejected reason=empty_title");
            return Ok(None);
        }

        let goal = Goal::new(title, target_date);
        let id = goal.id();
        self.goals.insert(0, goal);
        info!("event=goal_add module=store status=ok goal_id={id}");

        self.persist("goal_add")?;
        Ok(Some(id))
    }

    /// Flips completion of the goal with `id`.
    ///
    /// Returns the new completion flag, or `Ok(None)` when `id` is unknown.
    pub fn toggle(&mut self, id: GoalId) -> StoreResult<Option<bool>> {
        let Some(goal) = self.goals.iter_mut().find(|goal| goal.id() == id) else {
            info!("event=goal_toggle module=store status=not_found goal_id={id}");
            return Ok(None);
        };

        goal.toggle();
        let completed = goal.is_completed();
        info!("event=goal_toggle module=store status=ok goal_id={id} completed={completed}");

        self.persist("goal_toggle")?;
        Ok(Some(completed))
    }

    /// Removes every goal with `id`, keeping the order of the rest.
    ///
    /// Returns the number of removed goals (zero or one in practice).
    pub fn delete(&mut self, id: GoalId) -> StoreResult<usize> {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id() != id);
        let removed = before - self.goals.len();

        if removed == 0 {
            info!("event=goal_delete module=store status=not_found goal_id={id}");
            return Ok(0);
        }
        info!("event=goal_delete module=store status=ok goal_id={id} removed={removed}");

        self.persist("goal_delete")?;
        Ok(removed)
    }

    /// Goals matching `query`, in collection order.
    pub fn query<Tz: TimeZone>(&self, query: &GoalQuery, today: NaiveDate, tz: &Tz) -> Vec<&Goal> {
        self.goals
            .iter()
            .filter(|goal| query.matches(goal, today, tz))
            .collect()
    }

    /// Render-ready projections of the whole collection.
    pub fn summaries<Tz: TimeZone>(&self, today: NaiveDate, tz: &Tz) -> Vec<GoalSummary> {
        self.goals
            .iter()
            .map(|goal| GoalSummary::from_goal(goal, today, tz))
            .collect()
    }

    fn persist(&self, event: &str) -> StoreResult<()> {
        self.repo.save(&self.goals).map_err(|err| {
            warn!("event={event} module=store status=not_persisted error={err}");
            StoreError::Persist(err)
        })
    }
}
