//! Game state and core simulation types
//!
//! One owned [`GameState`] holds the whole round. Generator, physics, input
//! and renderer all receive it explicitly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aim::AimGesture;
use super::collision::Rect;
use crate::settings::Settings;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball is in play on the current hole
    Playing,
    /// Ball dropped; the next hole starts when the countdown runs out
    Sinking { ticks_left: u32 },
    /// Last hole finished. Only a new course leaves this phase.
    Completed,
}

/// The golf ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}

/// The cup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub pos: Vec2,
    pub radius: f32,
}

/// Things the platform may want to log or react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CourseGenerated {
        hole: u32,
        obstacles: usize,
        requested: usize,
    },
    StrokeTaken {
        hole: u32,
        strokes: u32,
        power: f32,
    },
    HoleSunk {
        hole: u32,
        strokes: u32,
        total: u32,
    },
    RoundCompleted {
        total: u32,
    },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Fresh generator for the next course. Each call advances the stream.
    pub fn next_rng(&mut self) -> Pcg32 {
        let mixed = self
            .seed
            .wrapping_add(self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.stream += 1;
        Pcg32::seed_from_u64(mixed)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub settings: Settings,
    /// Playfield size in logical pixels
    pub bounds: Vec2,
    pub ball: Ball,
    pub hole: Hole,
    pub obstacles: Vec<Rect>,
    /// Current hole, 1-based
    pub hole_number: u32,
    /// Strokes on the current hole
    pub strokes: u32,
    /// Strokes over all finished holes
    pub total_strokes: u32,
    /// Stroke count of each finished hole, in order
    pub scorecard: Vec<u32>,
    pub phase: GamePhase,
    pub aim: AimGesture,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending events, drained by the platform each frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create an empty round. Call [`super::course::generate_course`] to lay
    /// out the first hole.
    pub fn new(seed: u64, settings: Settings, bounds: Vec2) -> Self {
        let course = &settings.course;
        Self {
            seed,
            rng_state: RngState::new(seed),
            settings,
            bounds,
            ball: Ball::new(Vec2::new(course.tee_x, bounds.y / 2.0), course.ball_radius),
            hole: Hole {
                pos: bounds * Vec2::new(0.75, 0.5),
                radius: course.hole_radius,
            },
            obstacles: Vec::new(),
            hole_number: 1,
            strokes: 0,
            total_strokes: 0,
            scorecard: Vec::new(),
            phase: GamePhase::Playing,
            aim: AimGesture::Idle,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Holes in this round
    #[inline]
    pub fn max_holes(&self) -> u32 {
        self.settings.course.holes
    }

    #[inline]
    pub fn is_last_hole(&self) -> bool {
        self.hole_number >= self.max_holes()
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
