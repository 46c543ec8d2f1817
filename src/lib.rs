//! Minimal to-do board used to validate a container deployment pipeline.
//!
//! The binary serves two iterations of the demo app: a standalone greeting
//! page driven by `APP_VERSION`, and a single-page to-do board backed by an
//! in-memory [`store::TodoStore`]. Nothing is persisted — board state lives
//! for the process lifetime only, which is exactly what the pipeline
//! exercise needs.

pub mod api;
pub mod models;
pub mod store;
