//! Keyboard and pointer mapping

use glam::Vec2;

use crate::consts::{WORLD_H, WORLD_W};
use crate::sim::{Direction, TickInput};

/// A discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    ResetSequence,
    /// Speed change (+1 / -1 from keys and buttons)
    Speed(i32),
    ToggleIdle,
}

impl Command {
    /// Fold this command into the input for the next tick
    pub fn apply(self, input: &mut TickInput) {
        match self {
            Command::Turn(direction) => input.direction = Some(direction),
            Command::TogglePause => input.pause = !input.pause,
            Command::ResetSequence => input.reset_sequence = true,
            Command::Speed(delta) => input.speed_delta += delta,
            Command::ToggleIdle => input.toggle_idle = !input.toggle_idle,
        }
    }
}

/// Map a `KeyboardEvent.key` value to a command
pub fn command_for_key(key: &str) -> Option<Command> {
    let command = match key {
        "p" | "P" => Command::TogglePause,
        "z" | "Z" => Command::ResetSequence,
        "+" | "=" => Command::Speed(1),
        "-" | "_" => Command::Speed(-1),
        "i" | "I" => Command::ToggleIdle,
        "ArrowUp" | "w" | "W" => Command::Turn(Direction::Up),
        "ArrowDown" | "s" | "S" => Command::Turn(Direction::Down),
        "ArrowLeft" | "a" | "A" => Command::Turn(Direction::Left),
        "ArrowRight" | "d" | "D" => Command::Turn(Direction::Right),
        _ => return None,
    };
    Some(command)
}

/// Parse the `data-dir` attribute of an on-screen arrow button
pub fn parse_direction(name: &str) -> Option<Direction> {
    match name.to_ascii_uppercase().as_str() {
        "UP" => Some(Direction::Up),
        "DOWN" => Some(Direction::Down),
        "LEFT" => Some(Direction::Left),
        "RIGHT" => Some(Direction::Right),
        _ => None,
    }
}

/// Tap in world coordinates to a direction: top and bottom quarters win,
/// then left and right quarters; the middle does nothing.
pub fn direction_for_tap(point: Vec2) -> Option<Direction> {
    if point.y < WORLD_H / 4.0 {
        Some(Direction::Up)
    } else if point.y > WORLD_H * 3.0 / 4.0 {
        Some(Direction::Down)
    } else if point.x < WORLD_W / 4.0 {
        Some(Direction::Left)
    } else if point.x > WORLD_W * 3.0 / 4.0 {
        Some(Direction::Right)
    } else {
        None
    }
}

/// Convert a client-space pointer position to world units given the
/// canvas's on-screen rectangle
pub fn to_world(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    (client - rect_origin) / rect_size * Vec2::new(WORLD_W, WORLD_H)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(command_for_key("ArrowUp"), Some(Command::Turn(Direction::Up)));
        assert_eq!(command_for_key("d"), Some(Command::Turn(Direction::Right)));
        assert_eq!(command_for_key("P"), Some(Command::TogglePause));
        assert_eq!(command_for_key("z"), Some(Command::ResetSequence));
        assert_eq!(command_for_key("="), Some(Command::Speed(1)));
        assert_eq!(command_for_key("_"), Some(Command::Speed(-1)));
        assert_eq!(command_for_key("Enter"), None);
    }

    #[test]
    fn test_commands_fold_into_input() {
        let mut input = TickInput::default();
        Command::Speed(1).apply(&mut input);
        Command::Speed(1).apply(&mut input);
        Command::Turn(Direction::Up).apply(&mut input);
        Command::Turn(Direction::Left).apply(&mut input);
        Command::TogglePause.apply(&mut input);
        assert_eq!(input.speed_delta, 2);
        assert_eq!(input.direction, Some(Direction::Left));
        assert!(input.pause);
        // Two presses before the next tick cancel out
        Command::TogglePause.apply(&mut input);
        assert!(!input.pause);
    }

    #[test]
    fn test_tap_quadrants() {
        assert_eq!(direction_for_tap(Vec2::new(675.0, 100.0)), Some(Direction::Up));
        assert_eq!(direction_for_tap(Vec2::new(100.0, 800.0)), Some(Direction::Down));
        assert_eq!(direction_for_tap(Vec2::new(100.0, 450.0)), Some(Direction::Left));
        assert_eq!(direction_for_tap(Vec2::new(1200.0, 450.0)), Some(Direction::Right));
        assert_eq!(direction_for_tap(Vec2::new(675.0, 450.0)), None);
    }

    #[test]
    fn test_to_world_scales() {
        let world = to_world(Vec2::new(360.0, 250.0), Vec2::new(10.0, 20.0), Vec2::new(675.0, 450.0));
        assert!((world.x - 700.0).abs() < 1e-3);
        assert!((world.y - 460.0).abs() < 1e-3);
        assert_eq!(to_world(Vec2::ONE, Vec2::ZERO, Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(parse_direction("LEFT"), Some(Direction::Left));
        assert_eq!(parse_direction("down"), Some(Direction::Down));
        assert_eq!(parse_direction("sideways"), None);
    }
}
