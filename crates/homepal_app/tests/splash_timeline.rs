//! Integration tests for the splash timeline
//!
//! These tests drive a mounted timeline frame by frame and verify:
//! - Channel values at every stage boundary of the launch sequence
//! - The corner style always follows the live scale
//! - Unmounting freezes every channel where it stood
//! - The covering scale is fixed at mount

use homepal_app::{ShapeKind, SplashChannel, SplashConfig, SplashTimeline, TimelineState};
use homepal_core::{DrawCommand, Viewport};
use std::cell::Cell;
use std::rc::Rc;

const FRAME_MS: f64 = 16.0;

fn phone() -> Viewport {
    Viewport::new(390.0, 844.0)
}

fn mount() -> SplashTimeline {
    SplashTimeline::mount(phone(), SplashConfig::default()).unwrap()
}

/// Advance in 16ms frames, landing exactly on `target_ms`
fn advance_to(timeline: &mut SplashTimeline, target_ms: f64) {
    while timeline.elapsed_ms() < target_ms {
        let dt = (target_ms - timeline.elapsed_ms()).min(FRAME_MS);
        timeline.advance(dt);
    }
}

fn assert_near(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn test_initial_values_at_mount() {
    let timeline = mount();

    assert_eq!(timeline.value(SplashChannel::VerticalOffset), 100.0);
    assert_eq!(timeline.value(SplashChannel::HorizontalOffset), 0.0);
    assert_eq!(timeline.value(SplashChannel::Scale), 1.0);
    assert_eq!(timeline.value(SplashChannel::Rotation), 0.0);
    assert_eq!(timeline.value(SplashChannel::Opacity), 0.4);
    assert_eq!(timeline.value(SplashChannel::TextOffset), -30.0);
    assert_eq!(timeline.value(SplashChannel::TextOpacity), 0.0);
    assert_eq!(timeline.frame().shape.kind, ShapeKind::Rectangle);
    assert_eq!(timeline.state(), TimelineState::Running);
}

#[test]
fn test_stage_boundaries() {
    let mut timeline = mount();

    advance_to(&mut timeline, 600.0);
    assert_near(timeline.value(SplashChannel::VerticalOffset), 10.0, "move up");
    assert_eq!(timeline.value(SplashChannel::Scale), 1.0);

    advance_to(&mut timeline, 1000.0);
    assert_near(timeline.value(SplashChannel::Opacity), 1.0, "fade in");

    advance_to(&mut timeline, 1100.0);
    assert_near(timeline.value(SplashChannel::Rotation), 360.0, "spin");

    advance_to(&mut timeline, 1400.0);
    assert_near(timeline.value(SplashChannel::Scale), 1.3, "grow");
    assert_eq!(timeline.frame().shape.kind, ShapeKind::Rectangle);

    advance_to(&mut timeline, 2200.0);
    assert_near(timeline.value(SplashChannel::Scale), 0.16, "shrink");
    assert_eq!(timeline.frame().shape.kind, ShapeKind::Circle);
    assert_eq!(timeline.value(SplashChannel::HorizontalOffset), 0.0);

    advance_to(&mut timeline, 3200.0);
    assert_near(
        timeline.value(SplashChannel::HorizontalOffset),
        115.0,
        "move right",
    );

    advance_to(&mut timeline, 3300.0);
    assert_near(timeline.value(SplashChannel::TextOffset), 0.0, "text slide");
    assert_near(timeline.value(SplashChannel::TextOpacity), 1.0, "text fade");

    advance_to(&mut timeline, 3600.0);
    assert_near(timeline.value(SplashChannel::Scale), 0.16, "hold before cover");
    assert!(!timeline.is_complete());

    advance_to(&mut timeline, 4300.0);
    assert_near(
        timeline.value(SplashChannel::Scale),
        timeline.covering_scale(),
        "cover",
    );
    assert!(timeline.is_complete());
    assert!(!timeline.has_active_animations());
}

#[test]
fn test_text_waits_for_its_delay() {
    let mut timeline = mount();
    advance_to(&mut timeline, 2500.0);

    assert_eq!(timeline.value(SplashChannel::TextOffset), -30.0);
    assert_eq!(timeline.value(SplashChannel::TextOpacity), 0.0);

    advance_to(&mut timeline, 2900.0);
    let offset = timeline.value(SplashChannel::TextOffset);
    assert!(offset > -30.0 && offset < 0.0);
}

#[test]
fn test_scale_stages_run_in_order() {
    let mut timeline = mount();
    let mut grew = false;
    let mut shrank = false;
    let mut previous = timeline.value(SplashChannel::Scale);

    while !timeline.is_complete() {
        timeline.advance(FRAME_MS);
        let scale = timeline.value(SplashChannel::Scale);
        let now = timeline.elapsed_ms();

        if now <= 1400.0 {
            assert!(scale >= previous, "scale fell during grow at {now}ms");
        } else if now <= 2200.0 {
            grew = true;
            assert!(scale <= previous, "scale rose during shrink at {now}ms");
        } else if now > 3600.0 {
            shrank = true;
            assert!(scale >= previous, "scale fell during cover at {now}ms");
        }
        previous = scale;
        assert!(now < 5000.0, "splash never completed");
    }

    assert!(grew && shrank);
}

#[test]
fn test_corner_style_tracks_scale_every_frame() {
    let mut timeline = mount();
    let config = SplashConfig::default();

    for _ in 0..300 {
        timeline.advance(FRAME_MS);
        let scale = timeline.value(SplashChannel::Scale);
        let circle = scale < 0.5 || scale > 1.3;
        let radius = if circle { 50.0 } else { 10.0 };

        let frame = timeline.frame();
        assert_eq!(frame.shape.kind == ShapeKind::Circle, circle);

        let scene = frame.to_scene(timeline.viewport());
        let drawn = scene.commands().iter().find_map(|c| match c {
            DrawCommand::RoundedRect { corner_radius, .. } => Some(*corner_radius),
            _ => None,
        });
        assert_eq!(drawn, Some(radius * scale));
        assert_eq!(config.shape.base_size, frame.shape.base_size);
    }
}

#[test]
fn test_unmount_early_freezes_midway() {
    let mut timeline = mount();
    advance_to(&mut timeline, 50.0);

    timeline.unmount();
    let frozen = timeline.value(SplashChannel::VerticalOffset);
    assert!(frozen < 100.0 && frozen > 10.0, "got {frozen}");

    for _ in 0..400 {
        timeline.advance(FRAME_MS);
    }
    assert_eq!(timeline.value(SplashChannel::VerticalOffset), frozen);
    assert_eq!(timeline.value(SplashChannel::Scale), 1.0);
    assert_eq!(timeline.value(SplashChannel::TextOpacity), 0.0);
    assert_eq!(timeline.state(), TimelineState::Unmounted);
    assert!(!timeline.has_active_animations());
}

#[test]
fn test_unmount_freezes_every_channel() {
    for stop_ms in [700.0, 1800.0, 2600.0, 3900.0] {
        let mut timeline = mount();
        advance_to(&mut timeline, stop_ms);
        timeline.unmount();

        let before: Vec<f32> = SplashChannel::ALL
            .iter()
            .map(|c| timeline.value(*c))
            .collect();
        for _ in 0..150 {
            timeline.advance(FRAME_MS);
        }
        assert_eq!(timeline.elapsed_ms(), stop_ms);
        let after: Vec<f32> = SplashChannel::ALL
            .iter()
            .map(|c| timeline.value(*c))
            .collect();

        assert_eq!(before, after, "values moved after unmount at {stop_ms}ms");
        assert!(!timeline.is_complete());
    }
}

#[test]
fn test_unmount_suppresses_completion() {
    let mut timeline = mount();
    let fired = Rc::new(Cell::new(0));
    let fired_clone = fired.clone();
    timeline.on_complete(move |_| fired_clone.set(fired_clone.get() + 1));

    advance_to(&mut timeline, 4000.0);
    timeline.unmount();
    for _ in 0..100 {
        timeline.advance(FRAME_MS);
    }
    assert_eq!(fired.get(), 0);
}

#[test]
fn test_completion_fires_once() {
    let mut timeline = mount();
    let seen = Rc::new(Cell::new(None));
    let seen_clone = seen.clone();
    timeline.on_complete(move |completion| {
        assert!(seen_clone.get().is_none(), "completion fired twice");
        seen_clone.set(Some(completion));
    });

    for _ in 0..400 {
        timeline.advance(FRAME_MS);
    }

    let completion = seen.get().unwrap();
    assert!(completion.elapsed_ms >= 4300.0);
    assert!(completion.elapsed_ms < 4300.0 + FRAME_MS);
    assert_eq!(completion.covering_scale, timeline.covering_scale());
}

#[test]
fn test_resize_keeps_covering_scale() {
    let mut timeline = mount();
    let covering = timeline.covering_scale();
    assert_near(covering, 10.128, "covering scale");

    advance_to(&mut timeline, 1000.0);
    timeline.resize(Viewport::new(1200.0, 2000.0)).unwrap();
    advance_to(&mut timeline, 4300.0);

    assert_eq!(timeline.covering_scale(), covering);
    assert_near(timeline.value(SplashChannel::Scale), covering, "cover");
    assert_eq!(timeline.viewport(), Viewport::new(1200.0, 2000.0));
}

#[test]
fn test_landscape_covers_larger_side() {
    let timeline = SplashTimeline::mount(Viewport::new(844.0, 390.0), SplashConfig::default())
        .unwrap();
    assert_near(timeline.covering_scale(), 10.128, "landscape covering scale");
}

#[test]
fn test_empty_viewport_is_rejected() {
    assert!(SplashTimeline::mount(Viewport::new(0.0, 0.0), SplashConfig::default()).is_err());
}
