//! HUD text shown next to the canvas

use crate::sim::{GamePhase, GameState, LEVELS};

/// Display strings derived from the game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub level: String,
    pub lives: String,
    pub sequence: String,
    pub speed: String,
    /// Label for the pause button
    pub pause_button: &'static str,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            level: level_label(state),
            lives: format!("Lives {}", state.lives),
            sequence: sequence_label(state),
            speed: state.snake.speed.to_string(),
            pause_button: if state.phase == GamePhase::Paused {
                "Resume"
            } else {
                "Pause"
            },
        }
    }
}

/// `Level i/n`, 1-based
pub fn level_label(state: &GameState) -> String {
    format!(
        "Level {}/{}",
        (state.level_index + 1).min(LEVELS.len()),
        LEVELS.len()
    )
}

/// `Sequence picked/total`
pub fn sequence_label(state: &GameState) -> String {
    format!(
        "Sequence {}/{}",
        state.picked.len(),
        state.target_sequence().len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FruitColor;

    #[test]
    fn test_hud_text() {
        let mut state = GameState::new(1, 0.0);
        state.picked.push(FruitColor::Orange);
        state.picked.push(FruitColor::Yellow);
        let hud = Hud::from_state(&state);
        assert_eq!(hud.level, "Level 1/7");
        assert_eq!(hud.lives, "Lives 100");
        assert_eq!(hud.sequence, "Sequence 2/5");
        assert_eq!(hud.speed, "3");
        assert_eq!(hud.pause_button, "Pause");

        state.toggle_pause();
        state.load_level(6);
        let hud = Hud::from_state(&state);
        assert_eq!(hud.level, "Level 7/7");
        assert_eq!(hud.sequence, "Sequence 0/5");
        assert_eq!(hud.pause_button, "Resume");
    }
}
