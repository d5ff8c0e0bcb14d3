//! Evaluation configuration, resolved from the environment and applied
//! to the engine before a hint capture.

use gnubg_engine::{EngineError, EngineSession};
use tracing::warn;

use crate::config::{env_bool, env_parse, env_str};

/// Which decision context the evaluator settings apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalContext {
    Chequerplay,
    CubeDecision,
}

impl EvalContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvalContext::Chequerplay => "chequerplay",
            EvalContext::CubeDecision => "cubedecision",
        }
    }

    fn from_env_value(value: &str) -> Self {
        match value {
            "chequerplay" => EvalContext::Chequerplay,
            "cubedecision" => EvalContext::CubeDecision,
            other => {
                warn!(value = other, "unknown EVAL_TYPE, using chequerplay");
                EvalContext::Chequerplay
            }
        }
    }
}

/// AI evaluation parameters. Every field has a default, so the record is
/// always fully populated regardless of what the environment supplies.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalConfig {
    pub context: EvalContext,
    pub plies: u32,
    pub prune: bool,
    pub noise: f64,
    pub deterministic: bool,
    pub cubeful: bool,
}

impl EvalConfig {
    /// Resolve from the environment. Absent or malformed values fall
    /// back to their defaults; this resolver has no failure mode.
    pub fn from_env() -> Self {
        Self {
            context: EvalContext::from_env_value(&env_str("EVAL_TYPE", "chequerplay")),
            plies: env_parse("PLIES", 2),
            prune: env_bool("PRUNE", true),
            noise: env_parse("NOISE", 0.0),
            deterministic: env_bool("DETERMINISTIC", true),
            cubeful: env_bool("CUBEFUL", true),
        }
    }

    /// Issue the evaluator settings, one command per field, in fixed
    /// order. The evaluator type is selected first; the engine expects
    /// that before it accepts the parameter commands.
    pub fn apply<E: EngineSession>(&self, engine: &mut E) -> Result<(), EngineError> {
        let ctx = self.context.as_str();
        engine.command(&format!("set evaluation {ctx} type evaluation"))?;
        engine.command(&format!(
            "set evaluation {ctx} evaluation plies {}",
            self.plies
        ))?;
        engine.command(&format!(
            "set evaluation {ctx} evaluation prune {}",
            on_off(self.prune)
        ))?;
        engine.command(&format!(
            "set evaluation {ctx} evaluation noise {}",
            self.noise
        ))?;
        engine.command(&format!(
            "set evaluation {ctx} evaluation deterministic {}",
            on_off(self.deterministic)
        ))?;
        engine.command(&format!(
            "set evaluation {ctx} evaluation cubeful {}",
            on_off(self.cubeful)
        ))?;
        Ok(())
    }
}

pub(crate) fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
