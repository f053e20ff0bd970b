//! Goal list filtering.
//!
//! # Responsibility
//! - Narrow the ordered collection by completion state and title text.
//! - Preserve collection order in results.

pub mod filter;
