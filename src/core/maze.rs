//! Fixed wall layout and the key rectangle.
use raylib::prelude::*;

/// Upper bound on walls; `build_maze` stays well under it.
pub const MAX_WALLS: usize = 50;

/// Builds the maze as an ordered list of axis-aligned wall rectangles.
/// Pure and deterministic; insertion order is draw order. Coordinates are
/// absolute window pixels for the 1250x700 base window (the first wall's
/// 500 height is 700 / 1.4) and do not rescale on resize.
pub fn build_maze() -> Vec<Rectangle> {
    let walls = [
        (90.0, 80.0, 10.0, 500.0),
        (90.0, 80.0, 200.0, 10.0),
        (170.0, 0.0, 10.0, 80.0),
        (390.0, 80.0, 775.0, 10.0),
        (1165.0, 80.0, 10.0, 200.0),
        (1165.0, 340.0, 10.0, 300.0),
        (1165.0, 490.0, 85.0, 10.0),
        (90.0, 640.0, 1085.0, 10.0),
        (170.0, 150.0, 10.0, 430.0),
        (170.0, 150.0, 300.0, 10.0),
        (570.0, 150.0, 520.0, 10.0),
        (1090.0, 150.0, 10.0, 190.0),
        (1090.0, 400.0, 10.0, 180.0),
        (170.0, 580.0, 930.0, 10.0),
        (90.0, 400.0, 80.0, 10.0),
        (770.0, 80.0, 10.0, 70.0),
        (250.0, 230.0, 10.0, 270.0),
        (250.0, 230.0, 220.0, 10.0),
        (250.0, 500.0, 110.0, 10.0),
        (470.0, 230.0, 10.0, 100.0),
        (390.0, 330.0, 90.0, 10.0),
        (390.0, 330.0, 10.0, 90.0),
        (390.0, 420.0, 500.0, 10.0),
        (740.0, 230.0, 10.0, 190.0),
        (740.0, 230.0, 260.0, 10.0),
        (1000.0, 230.0, 10.0, 270.0),
        (450.0, 500.0, 560.0, 10.0),
        (700.0, 500.0, 10.0, 80.0),
        (830.0, 310.0, 170.0, 10.0),
    ];
    debug_assert!(walls.len() <= MAX_WALLS);
    walls
        .iter()
        .map(|&(x, y, w, h)| Rectangle::new(x, y, w, h))
        .collect()
}

/// The key at the center of the labyrinth. Touching it wins the game.
pub fn goal_rect() -> Rectangle {
    Rectangle::new(940.0, 265.0, 50.0, 50.0)
}
