//! Declarative schedules for a single channel
//!
//! A schedule describes how a value moves over time: timed transitions,
//! delays before a step, and sequences of steps. Schedules are compiled
//! into a flat list of non-overlapping segments relative to the moment
//! they are installed on a channel.

use crate::easing::Easing;
use smallvec::SmallVec;

/// Where a timed transition ends
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target {
    /// Absolute end value
    To(f32),
    /// End value relative to the value at the moment the step starts
    By(f32),
}

impl Target {
    fn resolve(self, from: f32) -> f32 {
        match self {
            Target::To(value) => value,
            Target::By(delta) => from + delta,
        }
    }
}

/// A channel schedule
#[derive(Clone, Debug, PartialEq)]
pub enum Schedule {
    /// Interpolate from the current value to `target` over `duration_ms`
    Timing {
        target: Target,
        duration_ms: u32,
        easing: Easing,
    },
    /// Hold the current value for `delay_ms`, then run `then`
    Delay { delay_ms: u32, then: Box<Schedule> },
    /// Run each step after the previous one finishes
    Sequence(Vec<Schedule>),
}

impl Schedule {
    pub fn timing(target: f32, duration_ms: u32, easing: Easing) -> Self {
        Schedule::Timing {
            target: Target::To(target),
            duration_ms,
            easing,
        }
    }

    /// Timed transition by `delta` from wherever the value is when it starts
    pub fn timing_by(delta: f32, duration_ms: u32, easing: Easing) -> Self {
        Schedule::Timing {
            target: Target::By(delta),
            duration_ms,
            easing,
        }
    }

    pub fn delay(delay_ms: u32, then: Schedule) -> Self {
        Schedule::Delay {
            delay_ms,
            then: Box::new(then),
        }
    }

    pub fn sequence(steps: impl IntoIterator<Item = Schedule>) -> Self {
        Schedule::Sequence(steps.into_iter().collect())
    }

    /// Builder: wrap this schedule in a leading delay
    pub fn delayed(self, delay_ms: u32) -> Self {
        Schedule::delay(delay_ms, self)
    }

    /// Total time from install to the last step's end
    pub fn duration_ms(&self) -> u64 {
        match self {
            Schedule::Timing { duration_ms, .. } => *duration_ms as u64,
            Schedule::Delay { delay_ms, then } => *delay_ms as u64 + then.duration_ms(),
            Schedule::Sequence(steps) => steps.iter().map(Schedule::duration_ms).sum(),
        }
    }

    /// Compile into segments, resolving every step's start value from `from`
    pub fn compile(&self, from: f32) -> Plan {
        let mut plan = Plan {
            initial: from,
            segments: SmallVec::new(),
            total_ms: 0,
        };
        let mut cursor = 0u64;
        let mut value = from;
        self.flatten(&mut cursor, &mut value, &mut plan.segments);
        plan.total_ms = cursor;
        plan
    }

    fn flatten(&self, cursor: &mut u64, value: &mut f32, out: &mut SmallVec<[Segment; 4]>) {
        match self {
            Schedule::Timing {
                target,
                duration_ms,
                easing,
            } => {
                let to = target.resolve(*value);
                out.push(Segment {
                    start_ms: *cursor,
                    duration_ms: *duration_ms,
                    from: *value,
                    to,
                    easing: *easing,
                });
                *cursor += *duration_ms as u64;
                *value = to;
            }
            Schedule::Delay { delay_ms, then } => {
                *cursor += *delay_ms as u64;
                then.flatten(cursor, value, out);
            }
            Schedule::Sequence(steps) => {
                for step in steps {
                    step.flatten(cursor, value, out);
                }
            }
        }
    }
}

/// One timed interpolation inside a compiled plan
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Offset from plan start
    pub start_ms: u64,
    pub duration_ms: u32,
    pub from: f32,
    pub to: f32,
    pub easing: Easing,
}

impl Segment {
    pub fn end_ms(&self) -> u64 {
        self.start_ms + self.duration_ms as u64
    }

    fn sample(&self, local_ms: f64) -> f32 {
        let elapsed = local_ms - self.start_ms as f64;
        if self.duration_ms == 0 || elapsed >= self.duration_ms as f64 {
            return self.to;
        }
        let progress = (elapsed / self.duration_ms as f64) as f32;
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}

/// A compiled schedule: segments sorted by start time, never overlapping
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    initial: f32,
    segments: SmallVec<[Segment; 4]>,
    total_ms: u64,
}

impl Plan {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    /// Value after the last segment
    pub fn end_value(&self) -> f32 {
        self.segments.last().map_or(self.initial, |s| s.to)
    }

    /// Value at `local_ms` after install
    pub fn sample(&self, local_ms: f64) -> f32 {
        if local_ms >= self.total_ms as f64 {
            return self.end_value();
        }
        match self
            .segments
            .iter()
            .rev()
            .find(|s| s.start_ms as f64 <= local_ms)
        {
            Some(segment) => segment.sample(local_ms),
            None => self.initial,
        }
    }
}
