use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine rejected command '{command}': {reason}")]
    CommandRejected { command: String, reason: String },
    #[error("engine I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed reply to {query}: {reason}")]
    MalformedReply {
        query: &'static str,
        reason: String,
    },
    #[error("engine session closed")]
    Closed,
}

/// The evaluation queries the bridge captures after restoring a match.
/// Each may fail independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    CfEvaluate,
    CubeInfo,
    Hint,
    FindBestMove,
}

impl Query {
    /// Name of the corresponding function in the engine's `gnubg` module.
    pub fn function(&self) -> &'static str {
        match self {
            Query::CfEvaluate => "cfevaluate",
            Query::CubeInfo => "cubeinfo",
            Query::Hint => "hint",
            Query::FindBestMove => "findbestmove",
        }
    }
}

/// One stateful engine session.
///
/// The engine is a single mutable session: commands change its state,
/// queries read evaluation artifacts out of it. The handle is passed
/// explicitly through every lifecycle and capture operation so the
/// dependency is visible in each component's contract.
pub trait EngineSession {
    /// Issue a textual command (`new session`, `set variation …`, …).
    fn command(&mut self, line: &str) -> Result<(), EngineError>;

    /// Run one evaluation query and return its structured reply.
    fn query(&mut self, query: Query) -> Result<Value, EngineError>;
}
