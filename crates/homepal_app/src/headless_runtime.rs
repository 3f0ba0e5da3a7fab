//! Headless frame loop for diagnostics and tests.
//!
//! The runtime owns logical time for a whole run. Every step of a scenario
//! advances the same runtime, so frame indices and elapsed time keep
//! counting across steps.

use anyhow::{bail, Result};
use homepal_core::Viewport;
use std::ops::ControlFlow;

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Logical viewport width used by the headless run.
    pub width: u32,
    /// Logical viewport height used by the headless run.
    pub height: u32,
    /// Most frames a single run may execute.
    pub max_frames: u32,
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
}

impl HeadlessRunConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        // a common phone viewport at 60 fps, ten minutes of frames
        Self {
            width: 390,
            height: 844,
            max_frames: 36_000,
            tick_ms: 16,
        }
    }
}

/// Frame context passed to headless frame callbacks.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    /// Zero-based index of this frame within the run
    pub frame_index: u64,
    /// Logical milliseconds this frame advances
    pub dt_ms: u64,
    /// Logical time once this frame has been applied
    pub elapsed_ms: u64,
    /// Viewport the frame is laid out in
    pub viewport: Viewport,
}

/// Deterministic headless runtime.
#[derive(Debug)]
pub struct HeadlessRuntime {
    cfg: HeadlessRunConfig,
    viewport: Viewport,
    frame_count: u64,
    elapsed_ms: u64,
}

impl HeadlessRuntime {
    pub fn new(cfg: HeadlessRunConfig) -> Result<Self> {
        if cfg.width == 0 || cfg.height == 0 {
            bail!("headless dimensions must be non-zero");
        }
        if cfg.max_frames == 0 {
            bail!("headless max_frames must be > 0");
        }
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }
        Ok(Self {
            cfg,
            viewport: cfg.viewport(),
            frame_count: 0,
            elapsed_ms: 0,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Frames executed so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Lay out following frames in `viewport`
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        if viewport.is_empty() {
            bail!(
                "headless viewport must be non-empty, got {}x{}",
                viewport.width,
                viewport.height
            );
        }
        self.viewport = viewport;
        Ok(())
    }

    /// Run `frames` full-length frames.
    pub fn tick<B, F>(&mut self, frames: u32, on_frame: F) -> Result<ControlFlow<B>>
    where
        F: FnMut(&HeadlessContext) -> ControlFlow<B>,
    {
        let tick = self.cfg.tick_ms;
        self.run(u64::from(frames), |_| tick, on_frame)
    }

    /// Advance exactly `ms` of logical time. The last frame is shortened
    /// when `ms` is not a multiple of the tick.
    pub fn wait<B, F>(&mut self, ms: u64, on_frame: F) -> Result<ControlFlow<B>>
    where
        F: FnMut(&HeadlessContext) -> ControlFlow<B>,
    {
        let tick = self.cfg.tick_ms;
        let frames = ms.div_ceil(tick);
        self.run(
            frames,
            |i| if i + 1 == frames { ms - tick * i } else { tick },
            on_frame,
        )
    }

    fn run<B, D, F>(&mut self, frames: u64, dt_for: D, mut on_frame: F) -> Result<ControlFlow<B>>
    where
        D: Fn(u64) -> u64,
        F: FnMut(&HeadlessContext) -> ControlFlow<B>,
    {
        let budget = u64::from(self.cfg.max_frames);
        if self.frame_count.saturating_add(frames) > budget {
            bail!(
                "headless run would exceed its budget of {budget} frames ({} run, {frames} requested)",
                self.frame_count
            );
        }

        for i in 0..frames {
            let dt_ms = dt_for(i);
            let ctx = HeadlessContext {
                frame_index: self.frame_count,
                dt_ms,
                elapsed_ms: self.elapsed_ms + dt_ms,
                viewport: self.viewport,
            };
            self.frame_count += 1;
            self.elapsed_ms = ctx.elapsed_ms;

            if let ControlFlow::Break(value) = on_frame(&ctx) {
                return Ok(ControlFlow::Break(value));
            }
        }
        Ok(ControlFlow::Continue(()))
    }
}
