//! Core domain logic for QuickGoals.
//! This crate is the single source of truth for goal invariants; UI hosts
//! hold a `GoalStore` and call into it.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::goal::{
    local_today, start_of_local_day, DueStatus, Goal, GoalId, GoalState, DUE_SOON_DAYS,
};
pub use repo::codec::{decode, encode, CodecError};
pub use repo::goal_repo::{
    GoalRepository, RepoError, RepoResult, SqliteGoalRepository, GOALS_SLOT_KEY,
};
pub use search::filter::{GoalFilter, GoalQuery, UnknownFilter};
pub use service::goal_store::{GoalStore, GoalSummary, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
