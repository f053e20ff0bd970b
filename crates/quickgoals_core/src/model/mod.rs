//! Domain model for goal tracking.
//!
//! # Responsibility
//! - Define the canonical goal record persisted by core.
//! - Compute derived status (days remaining, overdue) from calendar dates.
//!
//! # Invariants
//! - Every goal is identified by a stable `GoalId`.
//! - Deletion removes a goal entirely; there is no tombstone state.

pub mod goal;
