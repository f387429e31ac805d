//! Drag-to-putt aiming
//!
//! Single pointer only: press anywhere, drag back, release. The launch
//! direction is from the release point back toward the press point.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};
use crate::settings::Tuning;

/// Aim gesture state machine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum AimGesture {
    #[default]
    Idle,
    Aiming {
        start: Vec2,
        current: Vec2,
    },
}

impl AimGesture {
    #[inline]
    pub fn is_aiming(&self) -> bool {
        matches!(self, AimGesture::Aiming { .. })
    }

    /// Current pointer position while aiming
    pub fn current(&self) -> Option<Vec2> {
        match *self {
            AimGesture::Aiming { current, .. } => Some(current),
            AimGesture::Idle => None,
        }
    }
}

/// Power in `[0, max_power]` for a drag vector
#[inline]
pub fn shot_power(drag: Vec2, tuning: &Tuning) -> f32 {
    (drag.length() / tuning.power_divisor).min(tuning.max_power)
}

/// Launch velocity (pixels per tick) for a drag vector
#[inline]
pub fn launch_velocity(drag: Vec2, tuning: &Tuning) -> Vec2 {
    drag * tuning.launch_scale * shot_power(drag, tuning)
}

pub fn pointer_down(state: &mut GameState, p: Vec2) {
    if state.phase != GamePhase::Playing || state.aim.is_aiming() {
        return;
    }
    state.aim = AimGesture::Aiming {
        start: p,
        current: p,
    };
}

pub fn pointer_move(state: &mut GameState, p: Vec2) {
    if let AimGesture::Aiming { ref mut current, .. } = state.aim {
        *current = p;
    }
}

/// Release: putt the ball and count the stroke
pub fn pointer_up(state: &mut GameState, p: Vec2) {
    let AimGesture::Aiming { start, .. } = state.aim else {
        return;
    };
    state.aim = AimGesture::Idle;
    if state.phase != GamePhase::Playing {
        return;
    }

    let drag = start - p;
    let tuning = state.settings.tuning;
    let power = shot_power(drag, &tuning);
    state.ball.vel = launch_velocity(drag, &tuning);
    state.strokes += 1;

    log::debug!(
        "Hole {} stroke {}: drag=({:.1}, {:.1}) power={:.2}",
        state.hole_number,
        state.strokes,
        drag.x,
        drag.y,
        power
    );
    state.events.push(GameEvent::StrokeTaken {
        hole: state.hole_number,
        strokes: state.strokes,
        power,
    });
}

/// Abandon the gesture without touching the ball
pub fn pointer_cancel(state: &mut GameState) {
    state.aim = AimGesture::Idle;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn open_field() -> GameState {
        let mut state = GameState::new(1, Settings::default(), Vec2::new(400.0, 300.0));
        state.ball.pos = Vec2::new(50.0, 50.0);
        state
    }

    #[test]
    fn test_drag_scenario() {
        let mut state = open_field();

        pointer_down(&mut state, Vec2::new(50.0, 50.0));
        assert!(state.aim.is_aiming());
        pointer_up(&mut state, Vec2::new(10.0, 50.0));

        assert!((state.ball.vel.x - 2.4).abs() < 1e-5);
        assert_eq!(state.ball.vel.y, 0.0);
        assert_eq!(state.strokes, 1);
        assert_eq!(state.aim, AimGesture::Idle);
    }

    #[test]
    fn test_power_is_capped() {
        let tuning = Tuning::default();
        let drag = Vec2::new(0.0, -400.0);
        assert!((shot_power(drag, &tuning) - 1.6).abs() < 1e-6);
        let vel = launch_velocity(drag, &tuning);
        assert!((vel.y - (-400.0 * 0.12 * 1.6)).abs() < 1e-3);
    }

    #[test]
    fn test_move_updates_current_only() {
        let mut state = open_field();
        pointer_move(&mut state, Vec2::new(5.0, 5.0));
        assert_eq!(state.aim, AimGesture::Idle);

        pointer_down(&mut state, Vec2::new(100.0, 100.0));
        pointer_move(&mut state, Vec2::new(80.0, 90.0));
        assert_eq!(
            state.aim,
            AimGesture::Aiming {
                start: Vec2::new(100.0, 100.0),
                current: Vec2::new(80.0, 90.0),
            }
        );
        assert_eq!(state.aim.current(), Some(Vec2::new(80.0, 90.0)));
    }

    #[test]
    fn test_second_press_is_ignored() {
        let mut state = open_field();
        pointer_down(&mut state, Vec2::new(100.0, 100.0));
        pointer_down(&mut state, Vec2::new(10.0, 10.0));

        match state.aim {
            AimGesture::Aiming { start, .. } => assert_eq!(start, Vec2::new(100.0, 100.0)),
            AimGesture::Idle => panic!("gesture dropped"),
        }
    }

    #[test]
    fn test_cancel_discards_aim() {
        let mut state = open_field();
        pointer_down(&mut state, Vec2::new(100.0, 100.0));
        pointer_move(&mut state, Vec2::new(20.0, 100.0));
        pointer_cancel(&mut state);

        assert_eq!(state.aim, AimGesture::Idle);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.strokes, 0);

        // Release after cancel does nothing
        pointer_up(&mut state, Vec2::new(20.0, 100.0));
        assert_eq!(state.strokes, 0);
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut state = open_field();
        pointer_up(&mut state, Vec2::new(0.0, 0.0));
        assert_eq!(state.strokes, 0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_no_aiming_outside_play() {
        let mut state = open_field();
        state.phase = GamePhase::Sinking { ticks_left: 10 };
        pointer_down(&mut state, Vec2::new(100.0, 100.0));
        assert_eq!(state.aim, AimGesture::Idle);

        state.phase = GamePhase::Completed;
        pointer_down(&mut state, Vec2::new(100.0, 100.0));
        assert_eq!(state.aim, AimGesture::Idle);
    }

    #[test]
    fn test_stroke_event_emitted() {
        let mut state = open_field();
        pointer_down(&mut state, Vec2::new(50.0, 50.0));
        pointer_up(&mut state, Vec2::new(10.0, 50.0));

        match state.drain_events().as_slice() {
            [GameEvent::StrokeTaken { hole: 1, strokes: 1, power }] => {
                assert!((power - 0.5).abs() < 1e-6)
            }
            other => panic!("unexpected events: {:?}", other),
        }
    }
}
