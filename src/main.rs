use one_hand_cursor::cursor::{TracingDispatcher, TracingOverlay, IDLE_TIMEOUT};
use one_hand_cursor::replay::{self, ReplayTrace};
use one_hand_cursor::settings::Settings;
use one_hand_cursor::logging;

use anyhow::{anyhow, Context};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const SETTINGS_FILE: &str = "settings.json";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let trace_path = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("usage: one_hand_cursor <trace.json> [settings.json]"))?;
    let settings_path = args.next().unwrap_or_else(|| SETTINGS_FILE.to_string());

    let settings = Settings::load(&settings_path)?;
    logging::init(settings.debug_logging, settings.log_path());

    if !settings.enabled {
        tracing::info!("cursor disabled in settings, nothing to replay");
        return Ok(());
    }

    let trace = ReplayTrace::load(&trace_path)?;
    replay::run(
        &trace,
        Box::new(TracingOverlay::default()),
        Arc::new(TracingDispatcher),
        IDLE_TIMEOUT + Duration::from_millis(100),
    )
    .with_context(|| format!("replay {}", trace_path.display()))
}
