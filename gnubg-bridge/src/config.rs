use std::path::PathBuf;

use tracing::warn;

/// Opening position in the engine's state-id encoding, used when the
/// caller does not supply one.
pub const DEFAULT_GAME_ID: &str = "AEAAAAAAAgAAAA:cAluAAAAAAAA";

/// One external action request, resolved from the environment once per
/// invocation and immutable afterwards.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Identifies the match; names the output file.
    pub match_ref: String,
    /// Match length for the `new` action; 0 starts an open-ended session.
    pub match_length: u32,
    /// Ruleset variation name, validated only by the engine accepting it.
    pub variation: String,
    /// Whether the Jacoby rule is active.
    pub jacoby: bool,
    /// Requested action; membership in the supported set is checked by
    /// the dispatcher.
    pub action: String,
    /// Encoded match state (position, cube, score) for restoration.
    pub game_id: String,
    /// Directory the snapshot is written to.
    pub output_dir: PathBuf,
}

impl BridgeConfig {
    /// Resolve the request from the environment. The output directory is
    /// the only required input; everything else has a typed default.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let output_dir = std::env::var("GNUBG_OUTPUT_DIR")
            .map_err(|_| anyhow::anyhow!("GNUBG_OUTPUT_DIR not set"))?;

        Ok(Self {
            match_ref: env_str("MATCH_REF", "default_ref"),
            match_length: env_parse("MATCH_LENGTH", 0),
            variation: env_str("VARIATION", "standard"),
            jacoby: env_bool("JACOBY", false),
            action: env_str("ACTION", "hint"),
            game_id: env_str("GAME_ID", DEFAULT_GAME_ID),
            output_dir: PathBuf::from(output_dir),
        })
    }
}

pub(crate) fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an env var, falling back to the default when the variable is
/// absent or its value is malformed. Malformed values are logged, never
/// fatal.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => match val.parse::<T>() {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(key, value = %val, error = %e, default = %default, "malformed env value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

/// Case-insensitive bool-like parsing: `"true"` and `"1"` are true,
/// anything else present is false.
pub(crate) fn env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "true" | "1"),
        Err(_) => default,
    }
}
