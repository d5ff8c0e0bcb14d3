//! Sequenced engine commands for creating and restoring one match
//! session.
//!
//! Command rejections are not caught here; they propagate to the
//! dispatcher's top-level handling.

use gnubg_engine::{EngineError, EngineSession};
use tracing::debug;

use crate::eval::{on_off, EvalConfig};

/// Lifecycle progress for one invocation. `Persisted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Created,
    Restored,
    Configured,
    Captured,
    Persisted,
}

/// One match session over an explicit engine handle.
pub struct MatchSession<'a, E: EngineSession> {
    engine: &'a mut E,
    state: SessionState,
}

impl<'a, E: EngineSession> MatchSession<'a, E> {
    pub fn new(engine: &'a mut E) -> Self {
        Self {
            engine,
            state: SessionState::Uninitialized,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Start a fresh match. Length 0 means an open-ended session rather
    /// than a zero-point match.
    pub fn create(&mut self, length: u32) -> Result<(), EngineError> {
        if length == 0 {
            self.engine.command("new session")?;
        } else {
            self.engine.command(&format!("new match {length}"))?;
        }
        self.advance(SessionState::Created);
        Ok(())
    }

    /// Restore a match from its encoded state identifier.
    ///
    /// Variation and Jacoby come first: the identifier command is
    /// authoritative, but the engine may need the ruleset context
    /// established before it will accept the identifier.
    pub fn restore(
        &mut self,
        game_id: &str,
        jacoby: bool,
        variation: &str,
    ) -> Result<(), EngineError> {
        self.engine.command(&format!("set variation {variation}"))?;
        self.engine
            .command(&format!("set jacoby {}", on_off(jacoby)))?;
        self.engine.command(&format!("set gnubgid {game_id}"))?;
        self.advance(SessionState::Restored);
        Ok(())
    }

    /// Apply evaluator settings; only the `hint` action needs this.
    pub fn configure(&mut self, eval: &EvalConfig) -> Result<(), EngineError> {
        eval.apply(self.engine)?;
        self.advance(SessionState::Configured);
        Ok(())
    }

    /// Engine access for the capture pass.
    pub fn engine(&mut self) -> &mut E {
        self.engine
    }

    /// Record a transition driven outside this manager (capture and
    /// persistence).
    pub fn mark(&mut self, state: SessionState) {
        self.advance(state);
    }

    fn advance(&mut self, next: SessionState) {
        debug!(from = ?self.state, to = ?next, "session transition");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::EvalContext;
    use crate::test_support::RecordingEngine;

    #[test]
    fn create_with_zero_length_starts_open_session() {
        let mut engine = RecordingEngine::new();
        let mut session = MatchSession::new(&mut engine);
        session.create(0).expect("create");
        assert_eq!(session.state(), SessionState::Created);
        assert_eq!(engine.commands, vec!["new session"]);
    }

    #[test]
    fn create_with_length_starts_fixed_match() {
        let mut engine = RecordingEngine::new();
        MatchSession::new(&mut engine).create(7).expect("create");
        assert_eq!(engine.commands, vec!["new match 7"]);
    }

    #[test]
    fn restore_orders_ruleset_before_identifier() {
        let mut engine = RecordingEngine::new();
        let mut session = MatchSession::new(&mut engine);
        session
            .restore("4HPwATDgc/ABMA:cAkBAAAAAAAA", true, "standard")
            .expect("restore");
        assert_eq!(session.state(), SessionState::Restored);
        assert_eq!(
            engine.commands,
            vec![
                "set variation standard",
                "set jacoby on",
                "set gnubgid 4HPwATDgc/ABMA:cAkBAAAAAAAA",
            ]
        );
    }

    #[test]
    fn configure_advances_state() {
        let mut engine = RecordingEngine::new();
        let mut session = MatchSession::new(&mut engine);
        let eval = EvalConfig {
            context: EvalContext::Chequerplay,
            plies: 2,
            prune: true,
            noise: 0.0,
            deterministic: true,
            cubeful: true,
        };
        session.configure(&eval).expect("configure");
        assert_eq!(session.state(), SessionState::Configured);
    }
}
