//! Capture of the engine's decision artifacts after lifecycle setup.

use gnubg_engine::{EngineError, EngineSession, Query};
use serde_json::{Map, Value};
use tracing::warn;

/// The artifacts captured per invocation, keyed as they appear in the
/// persisted JSON document.
const ARTIFACTS: [(Query, &str); 4] = [
    (Query::CfEvaluate, "cfevaluate"),
    (Query::CubeInfo, "cubeinfo"),
    (Query::Hint, "hint"),
    (Query::FindBestMove, "bestMove"),
];

/// Per-artifact outcomes for one capture pass.
///
/// Every known artifact is always present; a failed query keeps its
/// error rather than silently disappearing, and the caller decides how
/// to render it.
#[derive(Debug)]
pub struct Snapshot {
    outcomes: Vec<(&'static str, Result<Value, EngineError>)>,
}

impl Snapshot {
    /// Query every artifact independently. A failing query is logged
    /// and recorded; the remaining artifacts are still attempted, so a
    /// partial failure never aborts the session.
    pub fn capture<E: EngineSession>(engine: &mut E) -> Self {
        let outcomes = ARTIFACTS
            .iter()
            .map(|(query, key)| {
                let outcome = engine.query(*query);
                if let Err(e) = &outcome {
                    warn!(artifact = *key, error = %e, "artifact query failed");
                }
                (*key, outcome)
            })
            .collect();
        Self { outcomes }
    }

    /// The artifacts that failed to capture, with their reasons.
    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &EngineError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|(key, outcome)| outcome.as_ref().err().map(|e| (*key, e)))
    }

    /// Render the snapshot record: every key present, failed artifacts
    /// as `null`.
    pub fn to_record(&self) -> Value {
        let mut record = Map::new();
        for (key, outcome) in &self.outcomes {
            let value = match outcome {
                Ok(value) => value.clone(),
                Err(_) => Value::Null,
            };
            record.insert((*key).to_string(), value);
        }
        Value::Object(record)
    }
}
