//! GNU Backgammon bridge — one-shot match session orchestrator.
//!
//! One invocation resolves an environment-supplied action request,
//! restores match state in a co-located engine, optionally applies
//! evaluation settings, captures the engine's decision artifacts and
//! persists them as a JSON snapshot keyed by the match reference.

pub mod config;
pub mod dispatch;
pub mod eval;
pub mod lifecycle;
pub mod persist;
pub mod snapshot;
