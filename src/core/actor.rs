//! The mouse character (position, facing, animation).
use raylib::prelude::*;

/// On-screen sprite size in pixels.
pub const ACTOR_W: f32 = 75.0;
pub const ACTOR_H: f32 = 65.0;

/// Frames in the running sheet.
pub const FRAME_COUNT: usize = 4;
/// Sheet frame shown while standing next to the cursor.
pub const IDLE_FRAME: usize = 2;

pub struct Actor {
    /// Top-left corner of the sprite, float precision.
    pub pos: Vector2,
    /// Mirrored horizontally when running to the left.
    pub mirror: bool,
    /// Current frame of the running animation.
    pub frame: usize,
}

impl Actor {
    pub fn new(spawn: Vector2) -> Self {
        Self {
            pos: spawn,
            mirror: false,
            frame: 0,
        }
    }

    /// Puts the mouse back at the spawn point and rewinds the animation.
    pub fn reset(&mut self, spawn: Vector2) {
        self.pos = spawn;
        self.mirror = false;
        self.frame = 0;
    }

    /// Geometric center of the sprite; this is the collision point.
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.pos.x + ACTOR_W / 2.0, self.pos.y + ACTOR_H / 2.0)
    }

    pub fn step_frame(&mut self) {
        self.frame = (self.frame + 1) % FRAME_COUNT;
    }

    pub fn set_idle(&mut self) {
        self.frame = IDLE_FRAME;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_offset_by_half_the_sprite() {
        let a = Actor::new(Vector2::new(10.0, 20.0));
        let c = a.center();
        assert_eq!(c.x, 47.5);
        assert_eq!(c.y, 52.5);
    }

    #[test]
    fn frames_cycle_and_idle_holds() {
        let mut a = Actor::new(Vector2::new(0.0, 0.0));
        for _ in 0..FRAME_COUNT {
            a.step_frame();
        }
        assert_eq!(a.frame, 0);
        a.set_idle();
        assert_eq!(a.frame, IDLE_FRAME);
    }

    #[test]
    fn reset_clears_pose() {
        let mut a = Actor::new(Vector2::new(0.0, 0.0));
        a.pos = Vector2::new(500.0, 500.0);
        a.mirror = true;
        a.step_frame();
        a.reset(Vector2::new(12.5, 350.0));
        assert_eq!(a.pos.x, 12.5);
        assert_eq!(a.pos.y, 350.0);
        assert!(!a.mirror);
        assert_eq!(a.frame, 0);
    }
}
