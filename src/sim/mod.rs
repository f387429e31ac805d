//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Obstacles resolved in stable (generation) order
//! - No rendering or platform dependencies

pub mod aim;
pub mod collision;
pub mod course;
pub mod state;
pub mod tick;

pub use aim::{AimGesture, launch_velocity, pointer_cancel, pointer_down, pointer_move, pointer_up};
pub use collision::{CollisionResult, Rect, ball_rect_collision, circle_rect_intersect};
pub use course::{advance_hole, generate_course, new_course, resize, restart_course};
pub use state::{Ball, GameEvent, GamePhase, GameState, Hole};
pub use tick::{StepReport, step_ball, tick};
