//! Animation scheduler
//!
//! Owns every channel of one component and advances them together against a
//! single frame clock.

use crate::clock::FrameClock;
use crate::error::{AnimationError, Result};
use crate::schedule::Schedule;
use crate::value::{AnimatedValue, TickStatus};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    pub struct ChannelId;
}

struct Channel {
    label: &'static str,
    value: AnimatedValue,
}

/// Ticks all channels once per frame
pub struct AnimationScheduler {
    channels: SlotMap<ChannelId, Channel>,
    clock: FrameClock,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            channels: SlotMap::with_key(),
            clock: FrameClock::new(),
        }
    }

    /// Create a channel holding `initial`
    pub fn create_channel(&mut self, label: &'static str, initial: f32) -> ChannelId {
        self.channels.insert(Channel {
            label,
            value: AnimatedValue::new(initial),
        })
    }

    /// Install `schedule` on a channel, starting now
    pub fn animate(&mut self, id: ChannelId, schedule: &Schedule) -> Result<()> {
        let now = self.clock.now_ms();
        let channel = self.channel_mut(id)?;
        tracing::debug!(
            channel = channel.label,
            from = channel.value.value(),
            duration_ms = schedule.duration_ms(),
            "scheduling animation"
        );
        channel.value.animate(schedule, now);
        Ok(())
    }

    /// Stop a channel's schedule, keeping its current value
    pub fn cancel(&mut self, id: ChannelId) -> Result<bool> {
        let channel = self.channel_mut(id)?;
        let was_running = channel.value.cancel();
        if was_running {
            tracing::debug!(
                channel = channel.label,
                value = channel.value.value(),
                "animation canceled"
            );
        }
        Ok(was_running)
    }

    /// Stop every channel. Returns how many were in flight.
    pub fn cancel_all(&mut self) -> usize {
        let mut canceled = 0;
        for (_, channel) in self.channels.iter_mut() {
            if channel.value.cancel() {
                canceled += 1;
            }
        }
        if canceled > 0 {
            tracing::debug!(canceled, "canceled all animations");
        }
        canceled
    }

    pub fn value(&self, id: ChannelId) -> Option<f32> {
        self.channels.get(id).map(|c| c.value.value())
    }

    pub fn label(&self, id: ChannelId) -> Option<&'static str> {
        self.channels.get(id).map(|c| c.label)
    }

    pub fn is_animating(&self, id: ChannelId) -> bool {
        self.channels
            .get(id)
            .is_some_and(|c| c.value.is_animating())
    }

    /// Step the clock by `dt_ms` and sample every channel.
    ///
    /// Returns the channels whose schedule finished on this step.
    pub fn advance(&mut self, dt_ms: f64) -> SmallVec<[ChannelId; 4]> {
        self.clock.advance(dt_ms);
        self.sample_all()
    }

    fn sample_all(&mut self) -> SmallVec<[ChannelId; 4]> {
        let now = self.clock.now_ms();
        let mut finished = SmallVec::new();
        for (id, channel) in self.channels.iter_mut() {
            if channel.value.tick(now) == TickStatus::Finished {
                tracing::trace!(channel = channel.label, at_ms = now, "animation finished");
                finished.push(id);
            }
        }
        finished
    }

    /// Check if any channel still has a schedule in flight
    pub fn has_active_animations(&self) -> bool {
        self.channels.iter().any(|(_, c)| c.value.is_animating())
    }

    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    fn channel_mut(&mut self, id: ChannelId) -> Result<&mut Channel> {
        self.channels
            .get_mut(id)
            .ok_or(AnimationError::UnknownChannel(id))
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
