//! Tuning constants and viewport state.
use raylib::prelude::*;

/// Fixed tuning values for a run. One instance lives in the `Session`
/// instead of the free-floating globals the game started out with.
#[derive(Copy, Clone, Debug)]
pub struct GameConfig {
    /// Pursuit speed in pixels per second.
    pub speed: f32,
    /// Logical ticks per second; also the frame-pacing target.
    pub fps: u32,
    /// Distance below which the mouse stops closing on the cursor.
    pub dead_zone: f32,
    /// How long the death screen stays up, in milliseconds.
    pub death_hold_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: 190.0,
            fps: 60,
            dead_zone: 30.0,
            death_hold_ms: 3000,
        }
    }
}

/// Current window dimensions. Updated on resize events; only the
/// background stretch follows it, the maze keeps absolute coordinates.
#[derive(Copy, Clone, Debug)]
pub struct ViewportState {
    pub width: i32,
    pub height: i32,
}

impl ViewportState {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Where the mouse (re)spawns: just inside the left edge, centered
    /// vertically.
    pub fn spawn_point(&self) -> Vector2 {
        Vector2::new(self.width as f32 / 100.0, self.height as f32 / 2.0)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(1250, 700)
    }
}
