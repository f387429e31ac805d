//! Game tuning and course configuration
//!
//! Defaults come from [`crate::consts`]. On the web a JSON override can be
//! stored in LocalStorage; any field left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and input tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Per-tick multiplicative velocity decay
    pub friction: f32,
    /// Velocity components below this snap to zero
    pub stop_speed: f32,
    pub wall_restitution: f32,
    pub obstacle_restitution: f32,
    /// Position nudge applied when leaving an obstacle
    pub obstacle_push: f32,
    /// Max per-axis speed at which the ball can drop into the cup
    pub settle_speed: f32,
    /// How far inside the cup edge the ball center must be
    pub settle_margin: f32,
    pub launch_scale: f32,
    pub power_divisor: f32,
    pub max_power: f32,
    /// Ticks between sinking a putt and moving on
    pub sink_delay_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            stop_speed: STOP_SPEED,
            wall_restitution: WALL_RESTITUTION,
            obstacle_restitution: OBSTACLE_RESTITUTION,
            obstacle_push: OBSTACLE_PUSH,
            settle_speed: SETTLE_SPEED,
            settle_margin: SETTLE_MARGIN,
            launch_scale: LAUNCH_SCALE,
            power_divisor: POWER_DIVISOR,
            max_power: MAX_POWER,
            sink_delay_ticks: SINK_DELAY_TICKS,
        }
    }
}

/// Course generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    /// Holes per round
    pub holes: u32,
    pub min_obstacles: u32,
    pub max_obstacles: u32,
    pub obstacle_min_width: f32,
    pub obstacle_max_width: f32,
    pub obstacle_min_height: f32,
    pub obstacle_max_height: f32,
    /// Rejection sampling budget per course
    pub placement_attempts: u32,
    /// Extra radius around tee and cup kept free of obstacles
    pub clearance: f32,
    /// Obstacles stay this far inside every edge
    pub edge_margin: f32,
    pub tee_x: f32,
    /// Cup x is sampled in [hole_x_min, hole_x_min + hole_x_span) of the width
    pub hole_x_min: f32,
    pub hole_x_span: f32,
    /// Cup y is sampled in [hole_y_min, hole_y_min + hole_y_span) of the height
    pub hole_y_min: f32,
    pub hole_y_span: f32,
    pub ball_radius: f32,
    pub hole_radius: f32,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            holes: MAX_HOLES,
            min_obstacles: MIN_OBSTACLES,
            max_obstacles: MAX_OBSTACLES,
            obstacle_min_width: OBSTACLE_MIN_WIDTH,
            obstacle_max_width: OBSTACLE_MAX_WIDTH,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,
            placement_attempts: PLACEMENT_ATTEMPTS,
            clearance: CLEARANCE,
            edge_margin: EDGE_MARGIN,
            tee_x: TEE_X,
            hole_x_min: 0.55,
            hole_x_span: 0.4,
            hole_y_min: 0.1,
            hole_y_span: 0.8,
            ball_radius: BALL_RADIUS,
            hole_radius: HOLE_RADIUS,
        }
    }
}

/// Everything a round needs to know besides the seed
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,
    pub course: CourseConfig,
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "mini_golf_settings";

    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Clamp values that would break generation or physics
    pub fn sanitized(mut self) -> Self {
        let d = Self::default();
        let c = &mut self.course;
        c.holes = c.holes.max(1);
        c.placement_attempts = c.placement_attempts.min(PLACEMENT_ATTEMPTS_LIMIT);
        let obstacle_cap = OBSTACLE_LIMIT.min(c.placement_attempts);
        c.min_obstacles = c.min_obstacles.min(obstacle_cap);
        c.max_obstacles = c.max_obstacles.clamp(c.min_obstacles, obstacle_cap);
        if c.obstacle_min_width <= 0.0 || c.obstacle_max_width < c.obstacle_min_width {
            c.obstacle_min_width = d.course.obstacle_min_width;
            c.obstacle_max_width = d.course.obstacle_max_width;
        }
        if c.obstacle_min_height <= 0.0 || c.obstacle_max_height < c.obstacle_min_height {
            c.obstacle_min_height = d.course.obstacle_min_height;
            c.obstacle_max_height = d.course.obstacle_max_height;
        }
        if c.ball_radius <= 0.0 {
            c.ball_radius = d.course.ball_radius;
        }
        if c.hole_radius <= 0.0 {
            c.hole_radius = d.course.hole_radius;
        }
        c.edge_margin = c.edge_margin.max(0.0);
        c.clearance = c.clearance.max(0.0);
        // Cup bands are fractions of the canvas and must stay on it
        c.hole_x_min = c.hole_x_min.clamp(0.0, 1.0);
        c.hole_x_span = c.hole_x_span.clamp(0.0, 1.0 - c.hole_x_min);
        c.hole_y_min = c.hole_y_min.clamp(0.0, 1.0);
        c.hole_y_span = c.hole_y_span.clamp(0.0, 1.0 - c.hole_y_min);

        let t = &mut self.tuning;
        t.friction = t.friction.clamp(0.0, 1.0);
        if t.power_divisor <= 0.0 {
            t.power_divisor = d.tuning.power_divisor;
        }
        self
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring malformed settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let settings = Settings::from_json(r#"{"tuning": {"friction": 0.9}}"#).unwrap();
        assert!((settings.tuning.friction - 0.9).abs() < 1e-6);
        assert_eq!(settings.tuning.sink_delay_ticks, SINK_DELAY_TICKS);
        assert_eq!(settings.course, CourseConfig::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{not json").is_err());
    }

    #[test]
    fn test_sanitize_fixes_inverted_ranges() {
        let json = r#"{"course": {"holes": 0, "min_obstacles": 6, "max_obstacles": 2,
            "obstacle_min_width": 90, "obstacle_max_width": 10}}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.course.holes, 1);
        assert_eq!(settings.course.max_obstacles, 6);
        assert_eq!(settings.course.obstacle_min_width, OBSTACLE_MIN_WIDTH);
        assert_eq!(settings.course.obstacle_max_width, OBSTACLE_MAX_WIDTH);
    }

    #[test]
    fn test_sanitize_caps_obstacle_count() {
        let json = r#"{"course": {"min_obstacles": 4000000000, "max_obstacles": 4000000000,
            "placement_attempts": 4000000000}}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.course.placement_attempts, PLACEMENT_ATTEMPTS_LIMIT);
        assert_eq!(settings.course.min_obstacles, OBSTACLE_LIMIT);
        assert_eq!(settings.course.max_obstacles, OBSTACLE_LIMIT);

        // Never more obstacles than attempts to place them
        let json = r#"{"course": {"max_obstacles": 50, "placement_attempts": 10}}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.course.max_obstacles, 10);
        assert_eq!(settings.course.min_obstacles, MIN_OBSTACLES);
    }

    #[test]
    fn test_sanitize_keeps_layout_on_canvas() {
        let json = r#"{"course": {"edge_margin": -50, "clearance": -5,
            "hole_x_min": 0.9, "hole_x_span": 0.5, "hole_y_min": -0.2, "hole_y_span": -1}}"#;
        let c = Settings::from_json(json).unwrap().course;
        assert_eq!(c.edge_margin, 0.0);
        assert_eq!(c.clearance, 0.0);
        assert_eq!(c.hole_x_min, 0.9);
        assert!((c.hole_x_span - 0.1).abs() < 1e-6);
        assert_eq!(c.hole_y_min, 0.0);
        assert_eq!(c.hole_y_span, 0.0);
    }

    #[test]
    fn test_sanitize_clamps_friction() {
        let settings = Settings::from_json(r#"{"tuning": {"friction": 1.5}}"#).unwrap();
        assert_eq!(settings.tuning.friction, 1.0);
        let settings = Settings::from_json(r#"{"tuning": {"friction": -0.3}}"#).unwrap();
        assert_eq!(settings.tuning.friction, 0.0);
    }

    #[test]
    fn test_sanitize_rejects_zero_divisor() {
        let settings = Settings::from_json(r#"{"tuning": {"power_divisor": 0}}"#).unwrap();
        assert_eq!(settings.tuning.power_divisor, POWER_DIVISOR);
    }
}
