//! Persistence layer for the goal collection.
//!
//! # Responsibility
//! - Define the save/load contract for the whole goal collection.
//! - Keep the wire encoding and SQLite slot details inside core.
//!
//! # Invariants
//! - The collection is written and read as one unit; there is no per-goal row.
//! - Decoding is all-or-nothing.

pub mod codec;
pub mod goal_repo;
