//! Fixed timestep simulation tick
//!
//! One call advances the ball by one frame of implicit timestep. Velocities
//! are in pixels per tick, so the step has no `dt`.

use glam::Vec2;

use super::collision::{Rect, ball_rect_collision, resolve_obstacle_contact, resolve_walls};
use super::course::advance_hole;
use super::state::{Ball, GameEvent, GamePhase, GameState, Hole};
use crate::settings::Tuning;

/// What happened to the ball during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub hit_wall: bool,
    /// Obstacles touched this step
    pub obstacle_hits: u32,
}

impl StepReport {
    #[inline]
    pub fn collided(&self) -> bool {
        self.hit_wall || self.obstacle_hits > 0
    }
}

/// Integrate, apply friction, then resolve walls and obstacles.
///
/// Obstacles are resolved one at a time in order; there is no simultaneous
/// solver. Generated courses never overlap obstacles, which keeps this sound.
pub fn step_ball(
    ball: &mut Ball,
    bounds: Vec2,
    obstacles: &[Rect],
    tuning: &Tuning,
) -> StepReport {
    let mut report = StepReport::default();

    ball.pos += ball.vel;

    ball.vel *= tuning.friction;
    if ball.vel.x.abs() < tuning.stop_speed {
        ball.vel.x = 0.0;
    }
    if ball.vel.y.abs() < tuning.stop_speed {
        ball.vel.y = 0.0;
    }

    report.hit_wall = resolve_walls(
        &mut ball.pos,
        &mut ball.vel,
        ball.radius,
        bounds,
        tuning.wall_restitution,
    );

    for rect in obstacles {
        let contact = ball_rect_collision(ball.pos, ball.radius, rect);
        if contact.hit {
            resolve_obstacle_contact(
                &mut ball.pos,
                &mut ball.vel,
                &contact,
                tuning.obstacle_restitution,
                tuning.obstacle_push,
            );
            report.obstacle_hits += 1;
        }
    }

    report
}

/// Whether a ball would drop into the cup right now
pub fn ball_settles(ball: &Ball, hole: &Hole, tuning: &Tuning) -> bool {
    ball.pos.distance(hole.pos) < hole.radius - tuning.settle_margin
        && ball.vel.x.abs() < tuning.settle_speed
        && ball.vel.y.abs() < tuning.settle_speed
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState) {
    match state.phase {
        GamePhase::Completed => return,
        GamePhase::Sinking { ticks_left } => {
            state.time_ticks += 1;
            if ticks_left <= 1 {
                advance_hole(state);
            } else {
                state.phase = GamePhase::Sinking {
                    ticks_left: ticks_left - 1,
                };
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;
    let tuning = state.settings.tuning;
    step_ball(&mut state.ball, state.bounds, &state.obstacles, &tuning);

    if ball_settles(&state.ball, &state.hole, &tuning) {
        sink_ball(state);
    }
}

/// Score the hole and start the countdown to the next one
fn sink_ball(state: &mut GameState) {
    state.ball.vel = Vec2::ZERO;
    state.total_strokes += state.strokes;
    state.scorecard.push(state.strokes);
    state.phase = GamePhase::Sinking {
        ticks_left: state.settings.tuning.sink_delay_ticks,
    };

    log::info!(
        "Hole {} sunk in {} (total {})",
        state.hole_number,
        state.strokes,
        state.total_strokes
    );
    state.events.push(GameEvent::HoleSunk {
        hole: state.hole_number,
        strokes: state.strokes,
        total: state.total_strokes,
    });
}
