//! Maps one external action request onto the lifecycle + capture
//! sequence, or rejects it before any engine interaction.

use gnubg_engine::{EngineError, EngineSession};
use tracing::{error, info};

use crate::config::BridgeConfig;
use crate::eval::EvalConfig;
use crate::lifecycle::{MatchSession, SessionState};
use crate::persist;
use crate::snapshot::Snapshot;

/// The actions a caller may request. Anything else is rejected with no
/// engine command issued and no output file written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Accept,
    Create,
    Error,
    Double,
    Drop,
    Move,
    New,
    Reject,
    Resign,
    Roll,
    Take,
    Hint,
    Play,
}

impl Action {
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "accept" => Action::Accept,
            "create" => Action::Create,
            "error" => Action::Error,
            "double" => Action::Double,
            "drop" => Action::Drop,
            "move" => Action::Move,
            "new" => Action::New,
            "reject" => Action::Reject,
            "resign" => Action::Resign,
            "roll" => Action::Roll,
            "take" => Action::Take,
            "hint" => Action::Hint,
            "play" => Action::Play,
            _ => return None,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("unsupported action '{0}'")]
    UnsupportedAction(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// A request whose action has passed validation. Constructing one is a
/// precondition for touching the engine, so rejected requests can never
/// cause engine interaction.
pub struct ValidatedRequest<'a> {
    action: Action,
    config: &'a BridgeConfig,
}

/// Check the requested action against the supported set.
pub fn validate(config: &BridgeConfig) -> Result<ValidatedRequest<'_>, DispatchError> {
    match Action::parse(&config.action) {
        Some(action) => Ok(ValidatedRequest { action, config }),
        None => Err(DispatchError::UnsupportedAction(config.action.clone())),
    }
}

impl ValidatedRequest<'_> {
    /// Run the request to completion against `engine`.
    ///
    /// Engine command rejections during lifecycle transitions propagate
    /// to the caller. Capture and persistence failures degrade to null
    /// fields and log lines, so a partial snapshot is still produced
    /// whenever possible.
    pub fn run<E: EngineSession>(
        &self,
        eval: &EvalConfig,
        engine: &mut E,
    ) -> Result<(), EngineError> {
        let config = self.config;

        let mut session = MatchSession::new(engine);
        if self.action == Action::New {
            session.create(config.match_length)?;
        }
        session.restore(&config.game_id, config.jacoby, &config.variation)?;
        if self.action == Action::Hint {
            session.configure(eval)?;
        }

        let snapshot = Snapshot::capture(session.engine());
        session.mark(SessionState::Captured);

        match persist::write_snapshot(&snapshot.to_record(), &config.output_dir, &config.match_ref)
        {
            Ok(path) => {
                session.mark(SessionState::Persisted);
                info!(action = %config.action, path = %path.display(), "action complete");
            }
            // Logged, never escalated: the caller reads failure from the
            // snapshot file's absence, not the exit code.
            Err(e) => error!(error = %e, "failed to persist snapshot"),
        }
        Ok(())
    }
}

/// Validate and run in one step.
pub fn dispatch<E: EngineSession>(
    config: &BridgeConfig,
    eval: &EvalConfig,
    engine: &mut E,
) -> Result<(), DispatchError> {
    validate(config)?.run(eval, engine).map_err(Into::into)
}
