//! Collision detection and response for the ball
//!
//! Everything on the course is an axis-aligned rectangle or a circle, so the
//! math stays small: closest-point tests for circle vs rectangle, an interval
//! test for rectangle vs rectangle, and per-axis reflection for response.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Point on (or in) the rectangle nearest to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(self.x, self.right()), p.y.clamp(self.y, self.bottom()))
    }

    /// Whether two rectangles overlap. Touching edges count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }

    /// Whether the rectangle fits inside `bounds` with `margin` to spare on every side
    pub fn inside(&self, bounds: Vec2, margin: f32) -> bool {
        self.x >= margin
            && self.y >= margin
            && self.right() <= bounds.x - margin
            && self.bottom() <= bounds.y - margin
    }
}

/// Strict circle vs rectangle intersection (grazing contact is a miss)
#[inline]
pub fn circle_rect_intersect(rect: &Rect, center: Vec2, radius: f32) -> bool {
    center.distance_squared(rect.closest_point(center)) < radius * radius
}

/// Axis a contact was resolved on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the obstacle (if hit)
    pub point: Vec2,
    /// Vector from the contact point to the ball center
    pub penetration: Vec2,
    /// Dominant axis of the penetration vector
    pub axis: Axis,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            penetration: Vec2::ZERO,
            axis: Axis::Y,
        }
    }
}

/// Check the ball against one obstacle using the closest-point method
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> CollisionResult {
    if !circle_rect_intersect(rect, ball_pos, ball_radius) {
        return CollisionResult::miss();
    }

    let point = rect.closest_point(ball_pos);
    let penetration = ball_pos - point;
    // Ties (including a center buried inside the rect) go to the y axis
    let axis = if penetration.x.abs() > penetration.y.abs() {
        Axis::X
    } else {
        Axis::Y
    };

    CollisionResult {
        hit: true,
        point,
        penetration,
        axis,
    }
}

/// Sign that is zero at zero, unlike `f32::signum`
#[inline]
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Bounce off an obstacle: flip and damp the velocity on the contact axis and
/// nudge the ball out along that axis.
pub fn resolve_obstacle_contact(
    pos: &mut Vec2,
    vel: &mut Vec2,
    contact: &CollisionResult,
    restitution: f32,
    push: f32,
) {
    if !contact.hit {
        return;
    }
    match contact.axis {
        Axis::X => {
            vel.x *= -restitution;
            pos.x += sign(contact.penetration.x) * push;
        }
        Axis::Y => {
            vel.y *= -restitution;
            pos.y += sign(contact.penetration.y) * push;
        }
    }
}

/// Keep the ball inside `bounds`. Returns true if any wall was touched.
///
/// A crossing ball is placed exactly against the wall and the normal
/// velocity component is reflected and damped.
pub fn resolve_walls(
    pos: &mut Vec2,
    vel: &mut Vec2,
    radius: f32,
    bounds: Vec2,
    restitution: f32,
) -> bool {
    let mut hit = false;
    if pos.x - radius < 0.0 {
        pos.x = radius;
        vel.x *= -restitution;
        hit = true;
    }
    if pos.x + radius > bounds.x {
        pos.x = bounds.x - radius;
        vel.x *= -restitution;
        hit = true;
    }
    if pos.y - radius < 0.0 {
        pos.y = radius;
        vel.y *= -restitution;
        hit = true;
    }
    if pos.y + radius > bounds.y {
        pos.y = bounds.y - radius;
        vel.y *= -restitution;
        hit = true;
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_rect_intersect() {
        let rect = Rect::new(100.0, 100.0, 50.0, 20.0);

        // Center inside
        assert!(circle_rect_intersect(&rect, Vec2::new(120.0, 110.0), 1.0));
        // Near the left face
        assert!(circle_rect_intersect(&rect, Vec2::new(95.0, 110.0), 8.0));
        // Clear of the corner diagonally
        assert!(!circle_rect_intersect(&rect, Vec2::new(90.0, 90.0), 8.0));
        // Exactly grazing is not an intersection
        assert!(!circle_rect_intersect(&rect, Vec2::new(92.0, 110.0), 8.0));
    }

    #[test]
    fn test_rect_overlap_counts_touching() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(10.5, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, -20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_ball_rect_collision_picks_dominant_axis() {
        let rect = Rect::new(100.0, 100.0, 50.0, 50.0);

        let left = ball_rect_collision(Vec2::new(95.0, 120.0), 8.0, &rect);
        assert!(left.hit);
        assert_eq!(left.axis, Axis::X);
        assert!(left.penetration.x < 0.0);

        let top = ball_rect_collision(Vec2::new(120.0, 94.0), 8.0, &rect);
        assert!(top.hit);
        assert_eq!(top.axis, Axis::Y);
        assert!(top.penetration.y < 0.0);

        let miss = ball_rect_collision(Vec2::new(20.0, 20.0), 8.0, &rect);
        assert!(!miss.hit);
    }

    #[test]
    fn test_resolve_obstacle_contact_reflects_and_pushes() {
        let rect = Rect::new(100.0, 100.0, 50.0, 50.0);
        let mut pos = Vec2::new(95.0, 120.0);
        let mut vel = Vec2::new(3.0, 1.0);

        let contact = ball_rect_collision(pos, 8.0, &rect);
        resolve_obstacle_contact(&mut pos, &mut vel, &contact, 0.7, 4.0);

        assert!((vel.x - (-2.1)).abs() < 1e-5);
        assert!((vel.y - 1.0).abs() < 1e-6);
        assert!((pos.x - 91.0).abs() < 1e-5);
        assert!((pos.y - 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_buried_center_resolves_on_y_without_push() {
        let rect = Rect::new(100.0, 100.0, 50.0, 50.0);
        let mut pos = Vec2::new(125.0, 125.0);
        let mut vel = Vec2::new(1.0, 2.0);

        let contact = ball_rect_collision(pos, 8.0, &rect);
        assert_eq!(contact.axis, Axis::Y);
        resolve_obstacle_contact(&mut pos, &mut vel, &contact, 0.7, 4.0);

        assert!((vel.y - (-1.4)).abs() < 1e-5);
        assert_eq!(pos, Vec2::new(125.0, 125.0));
    }

    #[test]
    fn test_walls_clamp_exactly() {
        let bounds = Vec2::new(400.0, 300.0);

        let mut pos = Vec2::new(-3.0, 150.0);
        let mut vel = Vec2::new(-2.0, 0.5);
        assert!(resolve_walls(&mut pos, &mut vel, 8.0, bounds, 0.6));
        assert_eq!(pos.x, 8.0);
        assert!((vel.x - 1.2).abs() < 1e-6);
        assert_eq!(vel.y, 0.5);

        let mut pos = Vec2::new(200.0, 297.0);
        let mut vel = Vec2::new(0.0, 5.0);
        assert!(resolve_walls(&mut pos, &mut vel, 8.0, bounds, 0.6));
        assert_eq!(pos.y, 292.0);
        assert!(vel.y < 0.0);

        let mut pos = Vec2::new(200.0, 150.0);
        let mut vel = Vec2::new(1.0, 1.0);
        assert!(!resolve_walls(&mut pos, &mut vel, 8.0, bounds, 0.6));
        assert_eq!(vel, Vec2::new(1.0, 1.0));
    }
}
