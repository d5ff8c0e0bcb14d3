use gnubg_bridge::config::BridgeConfig;
use gnubg_bridge::dispatch::{self, DispatchError};
use gnubg_bridge::eval::EvalConfig;
use gnubg_engine::{engine_binary, CliEngine};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gnubg_bridge=info,gnubg_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fatal when the output directory is missing; everything else in the
    // environment has a default.
    let config = BridgeConfig::from_env()?;
    let eval = EvalConfig::from_env();
    info!(
        match_ref = %config.match_ref,
        action = %config.action,
        "bridge invocation starting"
    );

    // Reject unsupported actions before the engine is even spawned.
    let request = match dispatch::validate(&config) {
        Ok(request) => request,
        Err(DispatchError::UnsupportedAction(action)) => {
            error!(action = %action, "unsupported action");
            return Ok(());
        }
        Err(DispatchError::Engine(e)) => return Err(e.into()),
    };

    let binary = engine_binary();
    let mut engine = CliEngine::spawn(&binary)?;

    request.run(&eval, &mut engine)?;
    Ok(())
}
