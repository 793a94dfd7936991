//! ログ設定（tracing）
//!
//! `PERSONA_AI_LOG` で上書き可能。例: `PERSONA_AI_LOG=debug persona-ai analyze ...`

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "PERSONA_AI_LOG";

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "persona_ai=info,persona_ai_common=info,warn"
    } else {
        "persona_ai=warn,persona_ai_common=warn,error"
    }
}

pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
