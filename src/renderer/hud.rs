//! HUD text, written into DOM elements by the platform layer

use crate::sim::{GamePhase, GameState};

/// The three HUD lines plus the end-of-round banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub hole: String,
    pub strokes: String,
    pub total: String,
    /// Only set once the round is complete
    pub banner: Option<String>,
}

impl HudText {
    pub fn from_state(state: &GameState) -> Self {
        let banner = (state.phase == GamePhase::Completed).then(|| {
            format!(
                "Round complete: {} strokes over {} holes. Press New Course to play again.",
                state.total_strokes,
                state.max_holes()
            )
        });

        Self {
            hole: format!("Hole: {} / {}", state.hole_number, state.max_holes()),
            strokes: format!("Strokes: {}", state.strokes),
            total: format!("Total: {}", state.total_strokes),
            banner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;

    #[test]
    fn test_hud_lines() {
        let mut state = GameState::new(1, Settings::default(), Vec2::new(800.0, 500.0));
        state.hole_number = 3;
        state.strokes = 2;
        state.total_strokes = 9;

        let hud = HudText::from_state(&state);
        assert_eq!(hud.hole, "Hole: 3 / 9");
        assert_eq!(hud.strokes, "Strokes: 2");
        assert_eq!(hud.total, "Total: 9");
        assert!(hud.banner.is_none());
    }

    #[test]
    fn test_banner_when_completed() {
        let mut state = GameState::new(1, Settings::default(), Vec2::new(800.0, 500.0));
        state.hole_number = 9;
        state.total_strokes = 31;
        state.phase = GamePhase::Completed;

        let hud = HudText::from_state(&state);
        assert!(hud.banner.unwrap().contains("31 strokes"));
    }
}
