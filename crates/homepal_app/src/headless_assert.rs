//! Assertion helpers for headless splash diagnostics.

use crate::splash::{ShapeKind, SplashChannel, SplashTimeline, TimelineState};

/// Snapshot of the splash state observed by assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashSnapshot {
    pub elapsed_ms: f64,
    pub values: [(SplashChannel, f32); 7],
    pub shape: ShapeKind,
    pub state: TimelineState,
}

impl SplashSnapshot {
    pub fn capture(timeline: &SplashTimeline) -> Self {
        Self {
            elapsed_ms: timeline.elapsed_ms(),
            values: SplashChannel::ALL.map(|c| (c, timeline.value(c))),
            shape: timeline.frame().shape.kind,
            state: timeline.state(),
        }
    }

    pub fn value(&self, channel: SplashChannel) -> f32 {
        self.values
            .iter()
            .find(|(c, _)| *c == channel)
            .map_or(0.0, |(_, v)| *v)
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    fn failed(code: &str, message: String) -> Self {
        AssertionResult::Failed {
            code: code.to_string(),
            message,
        }
    }
}

pub fn evaluate_assert_channel(
    channel: SplashChannel,
    expected: f32,
    tolerance: f32,
    snapshot: &SplashSnapshot,
) -> AssertionResult {
    let actual = snapshot.value(channel);
    if (actual - expected).abs() <= tolerance.abs() {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "channel_mismatch",
            format!(
                "{}: expected {expected} ± {tolerance}, got {actual} at {}ms",
                channel.label(),
                snapshot.elapsed_ms
            ),
        )
    }
}

pub fn evaluate_assert_shape(expected: ShapeKind, snapshot: &SplashSnapshot) -> AssertionResult {
    if snapshot.shape == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "shape_mismatch",
            format!(
                "expected {expected:?}, got {:?} at scale {}",
                snapshot.shape,
                snapshot.value(SplashChannel::Scale)
            ),
        )
    }
}

pub fn evaluate_assert_completed(expected: bool, snapshot: &SplashSnapshot) -> AssertionResult {
    let completed = snapshot.state == TimelineState::Completed;
    if completed == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "completion_mismatch",
            format!(
                "expected completed={expected}, state is {:?} at {}ms",
                snapshot.state, snapshot.elapsed_ms
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SplashSnapshot {
        SplashSnapshot {
            elapsed_ms: 2200.0,
            values: SplashChannel::ALL.map(|c| (c, if c == SplashChannel::Scale { 0.16 } else { 0.0 })),
            shape: ShapeKind::Circle,
            state: TimelineState::Running,
        }
    }

    #[test]
    fn test_channel_within_tolerance() {
        let s = snapshot();
        assert_eq!(
            evaluate_assert_channel(SplashChannel::Scale, 0.165, 0.01, &s),
            AssertionResult::Passed
        );
        assert!(matches!(
            evaluate_assert_channel(SplashChannel::Scale, 1.3, 0.01, &s),
            AssertionResult::Failed { code, .. } if code == "channel_mismatch"
        ));
    }

    #[test]
    fn test_shape_and_completion() {
        let s = snapshot();
        assert_eq!(evaluate_assert_shape(ShapeKind::Circle, &s), AssertionResult::Passed);
        assert!(matches!(
            evaluate_assert_shape(ShapeKind::Rectangle, &s),
            AssertionResult::Failed { .. }
        ));
        assert_eq!(evaluate_assert_completed(false, &s), AssertionResult::Passed);
        assert!(matches!(
            evaluate_assert_completed(true, &s),
            AssertionResult::Failed { code, .. } if code == "completion_mismatch"
        ));
    }
}
