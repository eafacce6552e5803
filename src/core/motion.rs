//! Cursor-pursuit movement.
use raylib::prelude::*;

/// Below this distance the mouse stays put so it does not jitter on top of
/// the cursor.
pub const DEAD_ZONE: f32 = 30.0;

/// Moves `pos` one tick toward `target` at `speed` px/s and returns the new
/// position together with the pre-move distance to the target. The caller
/// uses the distance to pick the running vs. idle animation. No movement
/// happens inside the dead zone.
pub fn advance(pos: Vector2, target: Vector2, speed: f32, fps: u32) -> (Vector2, f32) {
    let dx = target.x - pos.x;
    let dy = target.y - pos.y;
    let mut len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        len = 0.1;
    }
    let ux = dx / len;
    let uy = dy / len;

    if len > DEAD_ZONE {
        let step = speed / fps as f32;
        (Vector2::new(pos.x + ux * step, pos.y + uy * step), len)
    } else {
        (pos, len)
    }
}
