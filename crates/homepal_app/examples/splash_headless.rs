//! Headless Splash Demo
//!
//! Launches the app shell without a window and plays the splash in real
//! time, logging progress until the shape covers the screen.
//!
//! Run with: cargo run -p homepal_app --example splash_headless
//!
//! Pass a scenario file to run it instead, and optionally a relative path
//! for the JSON report (printed to stdout otherwise):
//! cargo run -p homepal_app --example splash_headless -- crates/homepal_app/scenarios/launch.json target/splash-report.json

use anyhow::Result;
use homepal_app::headless_runner::{run_loaded_scenario, RunOutcome};
use homepal_app::headless_runtime::HeadlessRunConfig;
use homepal_app::headless_scenario::HeadlessScenario;
use homepal_app::prelude::*;
use homepal_core::events::event_types::ANIMATION_COMPLETE;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    homepal_app::logging::init();

    let mut args = std::env::args().skip(1);
    if let Some(path) = args.next() {
        return run_scenario(Path::new(&path), args.next().as_deref().map(Path::new));
    }

    let viewport = Viewport::new(390.0, 844.0);
    let mut shell = NavigationContainer::new(app_navigator())?;

    let done = Arc::new(AtomicBool::new(false));
    let done_clone = done.clone();
    shell.on_route_event(SPLASH_ROUTE, ANIMATION_COMPLETE, move |event| {
        tracing::info!(at_ms = event.timestamp, "splash finished, ready to hand off");
        done_clone.store(true, Ordering::SeqCst);
    })?;
    shell.launch(viewport)?;

    let mut frames = 0u32;
    while !done.load(Ordering::SeqCst) {
        let scene = shell.tick()?;
        frames += 1;
        if frames % 30 == 0 {
            tracing::info!(
                frame = frames,
                commands = scene.commands().len(),
                "rendered"
            );
        }
        std::thread::sleep(FRAME_INTERVAL);
    }

    tracing::info!(frames, "splash played to completion");
    shell.shutdown();
    Ok(())
}

fn run_scenario(path: &Path, report_path: Option<&Path>) -> Result<()> {
    let scenario = HeadlessScenario::from_path(path)?;
    let outcome = run_loaded_scenario(&scenario, HeadlessRunConfig::default())?;
    match report_path {
        Some(report_path) => {
            outcome.report().write_to_path(report_path)?;
            tracing::info!(path = %report_path.display(), "report written");
        }
        None => outcome.report().write_to_writer(&mut std::io::stdout())?,
    }

    if let RunOutcome::Failed { report } = outcome {
        anyhow::bail!(
            "scenario failed at step {:?}: {}",
            report.failed_step_index,
            report.message.unwrap_or_default()
        );
    }
    Ok(())
}
