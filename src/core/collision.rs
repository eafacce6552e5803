//! Center-point wall/key collision tests.
use raylib::prelude::*;

/// Strict containment: a point exactly on an edge does not collide. The
/// sprite box is bigger than the mouse drawing, so only the center point
/// counts.
#[inline]
fn contains_strict(rect: &Rectangle, p: Vector2) -> bool {
    p.x > rect.x && p.x < rect.x + rect.width && p.y > rect.y && p.y < rect.y + rect.height
}

/// True if the actor's center point is inside any wall. First hit wins.
pub fn hits_wall(center: Vector2, walls: &[Rectangle]) -> bool {
    walls.iter().any(|w| contains_strict(w, center))
}

/// True if the actor's center point is inside the key rectangle.
pub fn hits_goal(center: Vector2, goal: &Rectangle) -> bool {
    contains_strict(goal, center)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall() -> Rectangle {
        Rectangle::new(90.0, 80.0, 10.0, 560.0)
    }

    #[test]
    fn center_inside_wall_collides() {
        assert!(hits_wall(Vector2::new(95.0, 100.0), &[wall()]));
    }

    #[test]
    fn center_beside_wall_does_not_collide() {
        assert!(!hits_wall(Vector2::new(85.0, 100.0), &[wall()]));
    }

    #[test]
    fn edge_touch_is_not_a_collision() {
        let w = wall();
        // all four edges, strictly exclusive
        assert!(!hits_wall(Vector2::new(90.0, 100.0), &[w]));
        assert!(!hits_wall(Vector2::new(100.0, 100.0), &[w]));
        assert!(!hits_wall(Vector2::new(95.0, 80.0), &[w]));
        assert!(!hits_wall(Vector2::new(95.0, 640.0), &[w]));
    }

    #[test]
    fn one_unit_inside_each_edge_collides() {
        let w = wall();
        assert!(hits_wall(Vector2::new(91.0, 100.0), &[w]));
        assert!(hits_wall(Vector2::new(99.0, 100.0), &[w]));
        assert!(hits_wall(Vector2::new(95.0, 81.0), &[w]));
        assert!(hits_wall(Vector2::new(95.0, 639.0), &[w]));
    }

    #[test]
    fn empty_maze_never_collides() {
        assert!(!hits_wall(Vector2::new(95.0, 100.0), &[]));
    }

    #[test]
    fn later_walls_are_checked_too() {
        let far = Rectangle::new(0.0, 0.0, 5.0, 5.0);
        assert!(hits_wall(Vector2::new(95.0, 100.0), &[far, wall()]));
    }

    #[test]
    fn goal_uses_the_same_strict_test() {
        let key = Rectangle::new(940.0, 265.0, 50.0, 50.0);
        assert!(hits_goal(Vector2::new(965.0, 290.0), &key));
        assert!(!hits_goal(Vector2::new(940.0, 290.0), &key));
        assert!(!hits_goal(Vector2::new(1000.0, 290.0), &key));
    }
}
