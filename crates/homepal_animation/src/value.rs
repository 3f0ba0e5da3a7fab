//! Animated scalar channel

use crate::schedule::{Plan, Schedule};

/// Result of sampling a channel at a point in time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStatus {
    /// No schedule installed
    Idle,
    /// A schedule is in flight
    Running,
    /// The schedule reached its end on this tick
    Finished,
}

#[derive(Clone, Debug)]
struct ActiveSchedule {
    started_at_ms: f64,
    plan: Plan,
}

/// An owned animatable value with at most one schedule in flight.
///
/// The value only changes when the channel is ticked. Once canceled, the
/// value stays wherever the last tick left it.
#[derive(Clone, Debug)]
pub struct AnimatedValue {
    value: f32,
    active: Option<ActiveSchedule>,
}

impl AnimatedValue {
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            active: None,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Install a schedule starting at `now_ms`, replacing any running one.
    ///
    /// The new schedule starts from the current value.
    pub fn animate(&mut self, schedule: &Schedule, now_ms: f64) {
        self.active = Some(ActiveSchedule {
            started_at_ms: now_ms,
            plan: schedule.compile(self.value),
        });
    }

    /// Stop the in-flight schedule, keeping the current value.
    ///
    /// Returns true if a schedule was running.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Sample the schedule at `now_ms`
    pub fn tick(&mut self, now_ms: f64) -> TickStatus {
        let Some(active) = &self.active else {
            return TickStatus::Idle;
        };

        let local_ms = (now_ms - active.started_at_ms).max(0.0);
        if local_ms >= active.plan.total_ms() as f64 {
            self.value = active.plan.end_value();
            self.active = None;
            return TickStatus::Finished;
        }

        self.value = active.plan.sample(local_ms);
        TickStatus::Running
    }
}
