//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory goal collection and its mutation rules.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod goal_store;
