//! Flutter-facing bindings for QuickGoals core.
//!
//! `flutter_rust_bridge_codegen` scans `api` and generates the Dart side.

pub mod api;
