//! Frame scheduling and the explicit playback loop.
//!
//! The original demos rescheduled themselves through the display refresh
//! callback; here the frame source is injected and the loop is stopped
//! through a cancellation token instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

use crate::scene::SceneGraph;
use crate::Demo;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since playback started, unscaled
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self {
            number,
            time,
            delta,
        }
    }
}

/// Source of frames. Returning `None` ends playback.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<FrameInfo>;
}

/// Cloneable stop flag shared between the loop and whoever cancels it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Wall-clock frame source, gated by a [`CancelToken`].
pub struct SystemFrames {
    token: CancelToken,
    number: u64,
    start: Instant,
    last: Instant,
}

impl SystemFrames {
    pub fn new(token: CancelToken) -> Self {
        let now = Instant::now();
        Self {
            token,
            number: 0,
            start: now,
            last: now,
        }
    }
}

impl FrameSource for SystemFrames {
    fn next_frame(&mut self) -> Option<FrameInfo> {
        if self.token.is_cancelled() {
            return None;
        }

        let now = Instant::now();
        let info = FrameInfo::new(
            self.number,
            now.duration_since(self.start).as_secs_f32(),
            now.duration_since(self.last).as_secs_f32(),
        );
        self.number += 1;
        self.last = now;
        Some(info)
    }
}

/// Fixed-timestep frame source with a frame budget, for headless playback
/// and tests.
pub struct ScriptedFrames {
    step: f32,
    remaining: u64,
    number: u64,
}

impl ScriptedFrames {
    pub fn new(step: f32, frames: u64) -> Self {
        Self {
            step,
            remaining: frames,
            number: 0,
        }
    }
}

impl FrameSource for ScriptedFrames {
    fn next_frame(&mut self) -> Option<FrameInfo> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let info = FrameInfo::new(self.number, self.number as f32 * self.step, self.step);
        self.number += 1;
        Some(info)
    }
}

/// Owns a demo and its scene graph and advances them one frame at a time.
pub struct Player {
    demo: Box<dyn Demo>,
    scene: SceneGraph,
}

impl Player {
    /// Build the demo's scene once; setup errors surface here, not per frame.
    pub fn new(mut demo: Box<dyn Demo>) -> Result<Self> {
        let mut scene = SceneGraph::new();
        demo.build(&mut scene)?;
        log::info!(
            "built demo '{}' with {} scene nodes",
            demo.name(),
            scene.len()
        );
        Ok(Self { demo, scene })
    }

    /// Advance the animation to this frame's time
    pub fn step(&mut self, frame: &FrameInfo) {
        let time = frame.time * self.demo.time_scale();
        self.demo.update(&mut self.scene, time);
    }

    /// Explicit loop: drain the frame source, updating every frame.
    /// Returns the number of frames played.
    pub fn run(&mut self, frames: &mut dyn FrameSource) -> u64 {
        let mut played = 0;
        while let Some(frame) = frames.next_frame() {
            self.step(&frame);
            played += 1;
        }
        played
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn demo(&self) -> &dyn Demo {
        self.demo.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_frames_respect_budget() {
        let mut frames = ScriptedFrames::new(0.5, 3);
        let times: Vec<f32> = std::iter::from_fn(|| frames.next_frame().map(|f| f.time)).collect();
        assert_eq!(times, vec![0.0, 0.5, 1.0]);
        assert!(frames.next_frame().is_none());
    }

    #[test]
    fn cancel_token_stops_system_frames() {
        let token = CancelToken::new();
        let mut frames = SystemFrames::new(token.clone());

        assert!(frames.next_frame().is_some());
        token.cancel();
        assert!(frames.next_frame().is_none());
    }

    #[test]
    fn frame_numbers_are_sequential() {
        let mut frames = ScriptedFrames::new(1.0, 4);
        let numbers: Vec<u64> =
            std::iter::from_fn(|| frames.next_frame().map(|f| f.number)).collect();
        assert_eq!(numbers, vec![0, 1, 2, 3]);
    }
}
