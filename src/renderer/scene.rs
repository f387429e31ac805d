//! Build the frame's triangle list from game state
//!
//! Pure read: nothing here touches the state it is given.

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{GameState, Rect};

/// Height of the lighter strips along the top and bottom
const BAND_HEIGHT: f32 = 20.0;
const OBSTACLE_BORDER: f32 = 1.5;
/// Cup interior is this much smaller than the rim
const CUP_INSET: f32 = 4.0;
const AIM_LINE_WIDTH: f32 = 3.0;
const BALL_OUTLINE: f32 = 1.0;
const CIRCLE_SEGMENTS: u32 = 32;

/// Every vertex for one frame, back to front
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let (w, h) = (state.bounds.x, state.bounds.y);
    let mut vertices = Vec::with_capacity(1024);

    // Background and fairway bands
    vertices.extend(shapes::rect(&Rect::new(0.0, 0.0, w, h), colors::BACKGROUND));
    vertices.extend(shapes::rect(
        &Rect::new(0.0, 0.0, w, BAND_HEIGHT),
        colors::FAIRWAY_BAND,
    ));
    vertices.extend(shapes::rect(
        &Rect::new(0.0, h - BAND_HEIGHT, w, BAND_HEIGHT),
        colors::FAIRWAY_BAND,
    ));

    for obstacle in &state.obstacles {
        vertices.extend(shapes::rect(obstacle, colors::OBSTACLE));
        vertices.extend(shapes::rect_outline(
            obstacle,
            OBSTACLE_BORDER,
            colors::OBSTACLE_BORDER,
        ));
    }

    let hole = &state.hole;
    vertices.extend(shapes::circle(
        hole.pos,
        hole.radius,
        colors::HOLE_RIM,
        CIRCLE_SEGMENTS,
    ));
    vertices.extend(shapes::circle(
        hole.pos,
        (hole.radius - CUP_INSET).max(0.0),
        colors::HOLE_CUP,
        CIRCLE_SEGMENTS,
    ));

    if let Some(pointer) = state.aim.current() {
        vertices.extend(shapes::line(
            state.ball.pos,
            pointer,
            AIM_LINE_WIDTH,
            colors::AIM_LINE,
        ));
    }

    let ball = &state.ball;
    vertices.extend(shapes::circle(
        ball.pos,
        ball.radius,
        colors::BALL,
        CIRCLE_SEGMENTS,
    ));
    vertices.extend(shapes::ring(
        ball.pos,
        ball.radius,
        ball.radius + BALL_OUTLINE,
        colors::BALL_OUTLINE,
        CIRCLE_SEGMENTS,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{AimGesture, generate_course};
    use glam::Vec2;

    fn course() -> GameState {
        let mut state = GameState::new(8, Settings::default(), Vec2::new(800.0, 500.0));
        generate_course(&mut state);
        state
    }

    fn count_color(vertices: &[Vertex], color: [f32; 4]) -> usize {
        vertices.iter().filter(|v| v.color == color).count()
    }

    #[test]
    fn test_scene_contains_every_element() {
        let state = course();
        let verts = build_scene(&state);

        assert_eq!(verts.len() % 3, 0);
        assert_eq!(count_color(&verts, colors::BACKGROUND), 6);
        assert_eq!(count_color(&verts, colors::FAIRWAY_BAND), 12);
        assert_eq!(count_color(&verts, colors::OBSTACLE), 6 * state.obstacles.len());
        assert!(count_color(&verts, colors::HOLE_RIM) > 0);
        assert!(count_color(&verts, colors::HOLE_CUP) > 0);
        assert!(count_color(&verts, colors::BALL) > 0);
        assert_eq!(count_color(&verts, colors::AIM_LINE), 0);
    }

    #[test]
    fn test_aim_line_only_while_aiming() {
        let mut state = course();
        state.aim = AimGesture::Aiming {
            start: Vec2::new(100.0, 100.0),
            current: Vec2::new(60.0, 120.0),
        };
        let verts = build_scene(&state);
        assert_eq!(count_color(&verts, colors::AIM_LINE), 6);
    }
}
