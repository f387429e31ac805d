//! Mini Golf - a nine-hole procedural putting game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (course generation, physics, aiming, scoring)
//! - `renderer`: Scene building and the WebGPU pipeline that draws it
//! - `platform`: Browser viewport sizing and pointer coordinate mapping
//! - `settings`: Data-driven tuning, optionally overridden from LocalStorage

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{CourseConfig, Settings, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one physics step per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Holes in a round
    pub const MAX_HOLES: u32 = 9;

    /// Ball and cup
    pub const BALL_RADIUS: f32 = 8.0;
    pub const HOLE_RADIUS: f32 = 12.0;

    /// Per-tick multiplicative velocity decay
    pub const FRICTION: f32 = 0.985;
    /// Velocity components below this snap to zero
    pub const STOP_SPEED: f32 = 0.02;
    pub const WALL_RESTITUTION: f32 = 0.6;
    pub const OBSTACLE_RESTITUTION: f32 = 0.7;
    /// Distance the ball is pushed out of an obstacle on contact
    pub const OBSTACLE_PUSH: f32 = 4.0;

    /// Both velocity components must be under this for the ball to drop
    pub const SETTLE_SPEED: f32 = 0.6;
    /// Ball center must be this far inside the cup edge
    pub const SETTLE_MARGIN: f32 = 4.0;
    /// Delay between sinking a putt and the next course (400 ms at 60 Hz)
    pub const SINK_DELAY_TICKS: u32 = 24;

    /// Launch velocity = drag * LAUNCH_SCALE * power
    pub const LAUNCH_SCALE: f32 = 0.12;
    /// Drag length giving power 1.0
    pub const POWER_DIVISOR: f32 = 80.0;
    pub const MAX_POWER: f32 = 1.6;

    /// Course generation
    pub const MIN_OBSTACLES: u32 = 4;
    pub const MAX_OBSTACLES: u32 = 8;
    pub const OBSTACLE_MIN_WIDTH: f32 = 50.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 170.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 130.0;
    pub const PLACEMENT_ATTEMPTS: u32 = 200;
    /// Upper bounds accepted from a settings override
    pub const OBSTACLE_LIMIT: u32 = 64;
    pub const PLACEMENT_ATTEMPTS_LIMIT: u32 = 10_000;
    /// Extra radius around tee and cup that obstacles must avoid
    pub const CLEARANCE: f32 = 30.0;
    /// Obstacles stay this far inside every canvas edge
    pub const EDGE_MARGIN: f32 = 20.0;
    /// Tee distance from the left edge
    pub const TEE_X: f32 = 40.0;
}
