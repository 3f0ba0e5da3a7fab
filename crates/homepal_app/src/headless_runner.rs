//! Scenario runner that drives the splash screen headlessly.

use crate::headless_assert::{
    evaluate_assert_channel, evaluate_assert_completed, evaluate_assert_shape, AssertionResult,
    SplashSnapshot,
};
use crate::headless_report::{HeadlessReport, RunStats};
use crate::headless_runtime::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::navigation::Screen;
use crate::splash::{ShapeConfig, SplashChannel, SplashScreen, SplashTimeline};
use anyhow::{anyhow, Result};
use homepal_core::{DrawCommand, Scene, Viewport};
use std::ops::ControlFlow;

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a freshly mounted splash screen.
pub fn run_splash_scenario(input: &str, runtime_cfg: HeadlessRunConfig) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, runtime_cfg)
}

/// Execute a pre-loaded scenario against a freshly mounted splash screen.
pub fn run_loaded_scenario(
    scenario: &HeadlessScenario,
    runtime_cfg: HeadlessRunConfig,
) -> Result<RunOutcome> {
    let mut runtime = HeadlessRuntime::new(runtime_cfg)?;
    let mut screen = SplashScreen::new();
    screen.mount(runtime.viewport())?;

    for (step_index, step) in scenario.steps.iter().enumerate() {
        let failure = match step {
            ScenarioStep::Wait { ms } => {
                broken_frame(runtime.wait(*ms, |ctx| drive_frame(&mut screen, ctx))?)
            }
            ScenarioStep::Tick { frames } => {
                broken_frame(runtime.tick(*frames, |ctx| drive_frame(&mut screen, ctx))?)
            }
            ScenarioStep::Resize { width, height } => {
                let viewport = Viewport::new(*width as f32, *height as f32);
                screen.resize(viewport)?;
                runtime.set_viewport(viewport)?;
                None
            }
            ScenarioStep::Unmount => {
                screen.unmount();
                None
            }
            ScenarioStep::AssertChannel {
                channel,
                value,
                tolerance,
            } => failed_assertion(
                "assert_channel",
                evaluate_assert_channel(*channel, *value, *tolerance, &snapshot(&screen)?),
            ),
            ScenarioStep::AssertShape { kind } => failed_assertion(
                "assert_shape",
                evaluate_assert_shape(*kind, &snapshot(&screen)?),
            ),
            ScenarioStep::AssertCompleted { completed } => failed_assertion(
                "assert_completed",
                evaluate_assert_completed(*completed, &snapshot(&screen)?),
            ),
        };

        if let Some((assertion, message)) = failure {
            let stats = run_stats(&runtime, &screen);
            tracing::warn!(step_index, assertion, %message, "headless scenario failed");
            let report = HeadlessReport::failed(assertion, step_index, message, stats);
            return Ok(RunOutcome::Failed { report });
        }
    }

    let stats = run_stats(&runtime, &screen);
    tracing::info!(
        frames = stats.elapsed_frames,
        elapsed_ms = stats.elapsed_ms,
        "headless scenario passed"
    );
    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(stats),
    })
}

type Failure = Option<(&'static str, String)>;

fn failed_assertion(assertion: &'static str, result: AssertionResult) -> Failure {
    match result {
        AssertionResult::Passed => None,
        AssertionResult::Failed { message, .. } => Some((assertion, message)),
    }
}

fn broken_frame(flow: ControlFlow<(&'static str, String)>) -> Failure {
    match flow {
        ControlFlow::Break(failure) => Some(failure),
        ControlFlow::Continue(()) => None,
    }
}

fn timeline(screen: &SplashScreen) -> Result<&SplashTimeline> {
    screen
        .timeline()
        .ok_or_else(|| anyhow!("splash screen was never mounted"))
}

fn snapshot(screen: &SplashScreen) -> Result<SplashSnapshot> {
    Ok(SplashSnapshot::capture(timeline(screen)?))
}

fn run_stats(runtime: &HeadlessRuntime, screen: &SplashScreen) -> RunStats {
    let mut stats = RunStats {
        elapsed_frames: runtime.frame_count(),
        elapsed_ms: runtime.elapsed_ms(),
        ..RunStats::default()
    };
    if let Some(timeline) = screen.timeline() {
        stats.covering_scale = timeline.covering_scale();
        stats.completed = timeline.is_complete();
    }
    stats
}

/// Advance one frame, render it, and check the drawn corner radius against
/// the live scale.
fn drive_frame(
    screen: &mut SplashScreen,
    ctx: &HeadlessContext,
) -> ControlFlow<(&'static str, String)> {
    screen.advance(ctx.dt_ms as f64);
    if !screen.is_mounted() {
        return ControlFlow::Continue(());
    }
    let Some(timeline) = screen.timeline() else {
        return ControlFlow::Continue(());
    };

    let mut scene = Scene::new(ctx.viewport);
    screen.render(&mut scene);
    let scale = timeline.value(SplashChannel::Scale);
    match check_corner_style(&scene, scale, &timeline.config().shape) {
        Some(message) => ControlFlow::Break((
            "shape_classification",
            format!("frame {} at {}ms: {message}", ctx.frame_index, ctx.elapsed_ms),
        )),
        None => ControlFlow::Continue(()),
    }
}

/// Compare the shape drawn in `scene` with the corner style `scale` calls
/// for. Returns a description of the mismatch, if any.
fn check_corner_style(scene: &Scene, scale: f32, shape: &ShapeConfig) -> Option<String> {
    let drawn = scene.commands().iter().find_map(|command| match command {
        DrawCommand::RoundedRect { corner_radius, .. } => Some(*corner_radius),
        _ => None,
    });
    let Some(drawn) = drawn else {
        return Some(format!("scale {scale} rendered no shape"));
    };

    let circle = scale < shape.small_threshold || scale > shape.large_threshold;
    let radius = if circle {
        shape.circle_radius
    } else {
        shape.rectangle_radius
    };
    let expected = radius * scale;
    if (drawn - expected).abs() > 1e-4 * expected.abs().max(1.0) {
        let style = if circle { "circle" } else { "rectangle" };
        return Some(format!(
            "scale {scale} drawn with corner radius {drawn}, {style} needs {expected}"
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::splash::SplashConfig;
    use homepal_core::{Color, Point, Size};

    fn scene_with_radius(corner_radius: f32) -> Scene {
        let mut scene = Scene::new(Viewport::new(390.0, 844.0));
        scene.push(DrawCommand::RoundedRect {
            center: Point::new(195.0, 422.0),
            size: Size::new(100.0, 100.0),
            corner_radius,
            rotation_deg: 0.0,
            color: Color::WHITE,
        });
        scene
    }

    #[test]
    fn test_corner_style_follows_scale() {
        let shape = SplashConfig::default().shape;
        assert_eq!(check_corner_style(&scene_with_radius(15.0), 0.3, &shape), None);
        assert_eq!(check_corner_style(&scene_with_radius(10.0), 1.0, &shape), None);
        assert_eq!(check_corner_style(&scene_with_radius(13.0), 1.3, &shape), None);
        assert_eq!(check_corner_style(&scene_with_radius(506.4), 10.128, &shape), None);
    }

    #[test]
    fn test_corner_style_catches_misdrawn_shape() {
        let shape = SplashConfig::default().shape;
        // a small shape drawn with rectangle corners
        let message = check_corner_style(&scene_with_radius(3.0), 0.3, &shape).unwrap();
        assert!(message.contains("circle"), "{message}");
        // a regular shape drawn fully rounded
        assert!(check_corner_style(&scene_with_radius(50.0), 1.0, &shape).is_some());
        assert!(check_corner_style(&Scene::new(Viewport::new(1.0, 1.0)), 1.0, &shape).is_some());
    }

    #[test]
    fn test_full_splash_draws_consistent_corners() {
        let outcome = run_splash_scenario(
            r#"{ "steps": [ { "type": "wait", "ms": 5000 } ] }"#,
            HeadlessRunConfig::default(),
        )
        .unwrap();
        assert!(!outcome.is_failed(), "{:?}", outcome.report().message);
        assert!(outcome.report().completed);
    }

    #[test]
    fn test_frames_count_across_steps() {
        let outcome = run_splash_scenario(
            r#"{ "steps": [
                { "type": "wait", "ms": 40 },
                { "type": "tick", "frames": 2 },
                { "type": "wait", "ms": 8 }
            ] }"#,
            HeadlessRunConfig::default(),
        )
        .unwrap();
        let report = outcome.report();
        assert_eq!(report.elapsed_frames, 6);
        assert_eq!(report.elapsed_ms, 80);
    }

    #[test]
    fn test_run_beyond_frame_budget_errors() {
        let result = run_splash_scenario(
            r#"{ "steps": [ { "type": "wait", "ms": 1000 } ] }"#,
            HeadlessRunConfig {
                max_frames: 10,
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resize_to_empty_viewport_errors() {
        let result = run_splash_scenario(
            r#"{ "steps": [ { "type": "resize", "width": 0, "height": 844 } ] }"#,
            HeadlessRunConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_wait_lands_on_exact_time() {
        let outcome = run_splash_scenario(
            r#"{ "steps": [ { "type": "wait", "ms": 1400 } ] }"#,
            HeadlessRunConfig::default(),
        )
        .unwrap();
        assert!(!outcome.is_failed());
        assert_eq!(outcome.report().elapsed_ms, 1400);
        assert_eq!(outcome.report().elapsed_frames, 88);
    }

    #[test]
    fn test_failed_assertion_reports_step() {
        let outcome = run_splash_scenario(
            r#"{ "steps": [
                { "type": "wait", "ms": 100 },
                { "type": "assert_completed", "completed": true }
            ] }"#,
            HeadlessRunConfig::default(),
        )
        .unwrap();
        assert!(outcome.is_failed());
        let report = outcome.report();
        assert_eq!(report.failed_step_index, Some(1));
        assert_eq!(report.assertion.as_deref(), Some("assert_completed"));
        assert!(!report.completed);
    }
}
