//! Idle/demo steering
//!
//! Heads for the nearest fruit carrying the next word of the sentence.
//! Axis-aligned chase without path planning; it can clip a wrong fruit on
//! the way.

use glam::Vec2;

use super::state::{Direction, GameState};

/// Direction to turn toward, or `None` to keep going
pub fn steer(state: &GameState) -> Option<Direction> {
    let expected = state.expected_color()?;
    let head = state.snake.head();
    let target = state
        .fruits
        .iter()
        .filter(|f| f.fruit_type.color == expected)
        .map(|f| f.pos)
        .min_by(|a, b| head.distance_squared(*a).total_cmp(&head.distance_squared(*b)))?;

    let wanted = direction_toward(head, target, state.snake.direction);
    (wanted != state.snake.direction).then_some(wanted)
}

/// Axis-aligned heading from `from` to `to` that never reverses `current`
pub fn direction_toward(from: Vec2, to: Vec2, current: Direction) -> Direction {
    let delta = to - from;
    let horizontal = if delta.x >= 0.0 { Direction::Right } else { Direction::Left };
    let vertical = if delta.y >= 0.0 { Direction::Down } else { Direction::Up };

    let (primary, secondary) = if delta.x.abs() >= delta.y.abs() {
        (horizontal, vertical)
    } else {
        (vertical, horizontal)
    };

    if primary != current.opposite() {
        primary
    } else if secondary != current.opposite() {
        secondary
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::FruitColor;
    use crate::sim::state::Fruit;

    #[test]
    fn test_direction_toward() {
        let from = Vec2::new(100.0, 100.0);
        assert_eq!(direction_toward(from, Vec2::new(300.0, 120.0), Direction::Up), Direction::Right);
        assert_eq!(direction_toward(from, Vec2::new(110.0, 20.0), Direction::Right), Direction::Up);
        // Target straight behind: sidestep rather than reverse
        let d = direction_toward(from, Vec2::new(20.0, 110.0), Direction::Right);
        assert_eq!(d, Direction::Down);
    }

    #[test]
    fn test_never_reverses() {
        let from = Vec2::new(500.0, 400.0);
        for current in Direction::ALL {
            for k in 0..16 {
                let angle = k as f32 * std::f32::consts::TAU / 16.0;
                let to = from + Vec2::new(angle.cos(), angle.sin()) * 200.0;
                assert_ne!(direction_toward(from, to, current), current.opposite());
            }
        }
    }

    #[test]
    fn test_steer_targets_expected_word() {
        let mut state = GameState::new(77, 0.0);
        state.fruits.clear();
        let head = state.snake.head();
        let orange = state.fruit_types[FruitColor::Orange.index()].clone();
        let red = state.fruit_types[FruitColor::Red.index()].clone();
        state.fruits.push(Fruit { id: 1, pos: head + Vec2::new(0.0, 50.0), fruit_type: red });
        state.fruits.push(Fruit { id: 2, pos: head + Vec2::new(0.0, -200.0), fruit_type: orange });
        assert_eq!(steer(&state), Some(Direction::Up));

        state.fruits.retain(|f| f.id == 1);
        assert_eq!(steer(&state), None);
    }
}
