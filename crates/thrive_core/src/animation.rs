//! Frame animation driven by elapsed time.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Default number of frames in a unit walk cycle.
pub const UNIT_FRAME_COUNT: usize = 4;

/// Default time each frame stays on screen, in seconds.
pub const UNIT_FRAME_SECONDS: f32 = 0.25;

/// Looping frame counter advanced by delta time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameAnimation {
    frame_count: usize,
    frame_duration: f32,
    current: usize,
    elapsed: f32,
}

impl FrameAnimation {
    /// Create an animation starting on frame 0.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidAnimation`] if `frame_count` is zero or
    /// `frame_duration` is not a positive finite number of seconds.
    pub fn new(frame_count: usize, frame_duration: f32) -> Result<Self> {
        if frame_count == 0 {
            return Err(GameError::InvalidAnimation(
                "animation needs at least one frame".to_string(),
            ));
        }
        if !(frame_duration.is_finite() && frame_duration > 0.0) {
            return Err(GameError::InvalidAnimation(format!(
                "frame duration must be positive, got {frame_duration}"
            )));
        }
        Ok(Self {
            frame_count,
            frame_duration,
            current: 0,
            elapsed: 0.0,
        })
    }

    /// Animation used for both unit sprites.
    #[must_use]
    pub const fn unit_walk() -> Self {
        Self {
            frame_count: UNIT_FRAME_COUNT,
            frame_duration: UNIT_FRAME_SECONDS,
            current: 0,
            elapsed: 0.0,
        }
    }

    /// Advance by `delta_seconds`. Returns `true` if the frame changed.
    pub fn advance(&mut self, delta_seconds: f32) -> bool {
        if !(delta_seconds.is_finite() && delta_seconds > 0.0) {
            return false;
        }
        self.elapsed += delta_seconds;
        let steps = (self.elapsed / self.frame_duration).floor();
        if steps < 1.0 {
            return false;
        }
        self.elapsed -= steps * self.frame_duration;
        let previous = self.current;
        self.current = (self.current + steps as usize % self.frame_count) % self.frame_count;
        self.current != previous
    }

    /// Index of the frame to draw.
    #[must_use]
    pub const fn current_frame(&self) -> usize {
        self.current
    }
}

impl Default for FrameAnimation {
    fn default() -> Self {
        Self::unit_walk()
    }
}
