//! Engine-session boundary for the GNU Backgammon bridge.
//!
//! This crate owns everything that talks to the engine directly: the
//! [`EngineSession`] trait (textual commands plus a fixed query surface),
//! a subprocess-backed implementation driving the co-located `gnubg-cli`
//! executable, and the gzip+base64 codec used to move match payloads
//! around compactly.

pub mod cli;
pub mod codec;
pub mod session;

pub use cli::{engine_binary, CliEngine};
pub use session::{EngineError, EngineSession, Query};
