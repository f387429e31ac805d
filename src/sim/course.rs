//! Procedural course layout and the commands that trigger it
//!
//! A course is a tee on the left, a cup somewhere in the right-hand band and
//! a handful of rectangular obstacles placed by rejection sampling.

use glam::Vec2;
use rand::Rng;

use super::aim::AimGesture;
use super::collision::{Rect, circle_rect_intersect};
use super::state::{Ball, GameEvent, GamePhase, GameState, Hole};

/// Uniform sample in `[lo, lo + span)`, or `lo` when the span is empty
fn sample(rng: &mut impl Rng, lo: f32, span: f32) -> f32 {
    if span > 0.0 {
        lo + rng.random::<f32>() * span
    } else {
        lo
    }
}

/// Lay out a fresh course for the current hole.
///
/// Resets the stroke counter, cancels any pending hole advance and drops an
/// in-progress aim. Placement gives up after the configured attempt budget
/// and keeps whatever fit.
pub fn generate_course(state: &mut GameState) {
    let mut rng = state.rng_state.next_rng();
    let cfg = state.settings.course;
    let (w, h) = (state.bounds.x, state.bounds.y);

    state.ball = Ball::new(Vec2::new(cfg.tee_x, h / 2.0), cfg.ball_radius);
    let hole_x = sample(&mut rng, w * cfg.hole_x_min, w * cfg.hole_x_span);
    let hole_y = sample(&mut rng, h * cfg.hole_y_min, h * cfg.hole_y_span);
    state.hole = Hole {
        pos: Vec2::new(hole_x, hole_y),
        radius: cfg.hole_radius,
    };

    let requested = rng.random_range(cfg.min_obstacles..=cfg.max_obstacles) as usize;
    let mut obstacles: Vec<Rect> =
        Vec::with_capacity(requested.min(cfg.placement_attempts as usize));
    let margin = cfg.edge_margin;

    let mut attempts = 0;
    while obstacles.len() < requested && attempts < cfg.placement_attempts {
        attempts += 1;

        let rw = sample(
            &mut rng,
            cfg.obstacle_min_width,
            cfg.obstacle_max_width - cfg.obstacle_min_width,
        );
        let rh = sample(
            &mut rng,
            cfg.obstacle_min_height,
            cfg.obstacle_max_height - cfg.obstacle_min_height,
        );
        let free_x = w - rw - 2.0 * margin;
        let free_y = h - rh - 2.0 * margin;
        if free_x < 0.0 || free_y < 0.0 {
            // Canvas too small for this size, burn the attempt
            continue;
        }
        let candidate = Rect::new(
            sample(&mut rng, margin, free_x),
            sample(&mut rng, margin, free_y),
            rw,
            rh,
        );

        let blocks_tee = circle_rect_intersect(
            &candidate,
            state.ball.pos,
            state.ball.radius + cfg.clearance,
        );
        let blocks_cup = circle_rect_intersect(
            &candidate,
            state.hole.pos,
            state.hole.radius + cfg.clearance,
        );
        let overlaps_placed = obstacles.iter().any(|r| r.overlaps(&candidate));

        if !blocks_tee && !blocks_cup && !overlaps_placed {
            obstacles.push(candidate);
        }
    }

    if obstacles.len() < requested {
        log::debug!(
            "Hole {}: placed {}/{} obstacles after {} attempts",
            state.hole_number,
            obstacles.len(),
            requested,
            attempts
        );
    }

    log::info!(
        "Hole {}: {}x{} course, cup at ({:.0}, {:.0}), {} obstacles",
        state.hole_number,
        w,
        h,
        hole_x,
        hole_y,
        obstacles.len()
    );

    state.events.push(GameEvent::CourseGenerated {
        hole: state.hole_number,
        obstacles: obstacles.len(),
        requested,
    });
    state.obstacles = obstacles;
    state.strokes = 0;
    state.phase = GamePhase::Playing;
    state.aim = AimGesture::Idle;
}

/// Move past a sunk hole: next course, or the end of the round
pub fn advance_hole(state: &mut GameState) {
    if state.is_last_hole() {
        state.phase = GamePhase::Completed;
        state.aim = AimGesture::Idle;
        log::info!("Round complete: {} strokes", state.total_strokes);
        state.events.push(GameEvent::RoundCompleted {
            total: state.total_strokes,
        });
    } else {
        state.hole_number += 1;
        generate_course(state);
    }
}

/// "Restart Course": relay the current hole, keeping progress.
///
/// Ignored once the hole has been scored (sinking) or the round is over, so
/// a finished hole can never be played twice.
pub fn restart_course(state: &mut GameState) {
    match state.phase {
        GamePhase::Playing => generate_course(state),
        GamePhase::Sinking { .. } | GamePhase::Completed => {
            log::debug!("Restart ignored in phase {:?}", state.phase);
        }
    }
}

/// "New Course": back to hole one with a clean scorecard.
///
/// Always accepted. Cancels a pending advance and leaves the completed state.
pub fn new_course(state: &mut GameState) {
    state.hole_number = 1;
    state.total_strokes = 0;
    state.scorecard.clear();
    generate_course(state);
}

/// The playfield changed size. Stored coordinates are meaningless now, so
/// the current hole is relaid; a pending advance happens right away.
pub fn resize(state: &mut GameState, bounds: Vec2) {
    state.bounds = bounds;
    match state.phase {
        GamePhase::Playing => generate_course(state),
        GamePhase::Sinking { .. } => advance_hole(state),
        GamePhase::Completed => {}
    }
}
