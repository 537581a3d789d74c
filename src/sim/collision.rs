//! Point-distance collision tests
//!
//! Everything here is a pure query on positions; the tick decides what a hit
//! means.

use glam::Vec2;

use super::state::{Direction, Fruit, Snake};
use crate::Rect;
use crate::tuning::Tuning;

/// True if the head has left `field` shrunk by half the body thickness
pub fn hits_wall(head: Vec2, field: &Rect, snake_size: f32) -> bool {
    !field.inset(snake_size / 2.0).contains(head)
}

/// Indices of fruits within `reach` of the head, in list order
pub fn fruits_in_reach(head: Vec2, fruits: &[Fruit], reach: f32) -> Vec<usize> {
    fruits
        .iter()
        .enumerate()
        .filter(|(_, f)| head.distance(f.pos) < reach)
        .map(|(i, _)| i)
        .collect()
}

/// First body index the scan may report.
///
/// `self_collision_skip`, or with `adaptive_neck` on, far enough down the
/// body that consecutive segments at this speed are outside the hit distance.
pub fn self_collision_start(speed: u32, tuning: &Tuning) -> usize {
    if !tuning.adaptive_neck {
        return tuning.self_collision_skip;
    }
    let threshold = tuning.self_collision_distance();
    let neck = if speed == 0 {
        usize::MAX
    } else {
        (threshold / speed as f32).floor() as usize + 1
    };
    tuning.self_collision_skip.max(neck)
}

/// Index of the first segment the head is touching, if any
pub fn self_collision_index(snake: &Snake, tuning: &Tuning) -> Option<usize> {
    let head = snake.head();
    let threshold = tuning.self_collision_distance();
    let start = self_collision_start(snake.speed, tuning);
    snake
        .body
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, seg)| head.distance(**seg) < threshold)
        .map(|(i, _)| i)
}

/// Head position after being knocked off a wall: pushed back against the
/// direction of travel, plus a sideways wobble.
pub fn bounce_head(head: Vec2, direction: Direction, now: f64, tuning: &Tuning) -> Vec2 {
    let pushed = head - direction.unit() * tuning.bounce_push;
    let wobble = tuning.wobble_amplitude * (now / tuning.wobble_period_ms).sin() as f32;
    if direction.is_horizontal() {
        pushed + Vec2::new(0.0, wobble)
    } else {
        pushed + Vec2::new(wobble, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYFIELD;
    use crate::sim::catalog::LEVELS;

    #[test]
    fn test_wall_inset() {
        // Right edge of the playfield is 1275, inset by 15.5
        assert!(!hits_wall(Vec2::new(1259.5, 400.0), &PLAYFIELD, 31.0));
        assert!(hits_wall(Vec2::new(1259.6, 400.0), &PLAYFIELD, 31.0));
        assert!(hits_wall(Vec2::new(600.0, 91.0), &PLAYFIELD, 31.0));
        assert!(!hits_wall(PLAYFIELD.center(), &PLAYFIELD, 31.0));
    }

    #[test]
    fn test_fruits_in_reach() {
        let types = LEVELS[0].fruit_types();
        let fruits = vec![
            Fruit { id: 1, pos: Vec2::new(100.0, 100.0), fruit_type: types[0].clone() },
            Fruit { id: 2, pos: Vec2::new(154.0, 100.0), fruit_type: types[1].clone() },
            Fruit { id: 3, pos: Vec2::new(155.0, 100.0), fruit_type: types[2].clone() },
        ];
        assert_eq!(fruits_in_reach(Vec2::new(100.0, 100.0), &fruits, 55.0), vec![0, 1]);
    }

    fn adaptive() -> Tuning {
        Tuning { adaptive_neck: true, ..Tuning::default() }
    }

    fn straight_snake(speed: u32) -> Snake {
        let segments: Vec<Vec2> =
            (0..30).map(|i| Vec2::new(900.0 - (i * speed) as f32, 300.0)).collect();
        Snake::from_segments(&segments, Direction::Right, speed)
    }

    #[test]
    fn test_self_collision_start() {
        let t = Tuning::default();
        assert_eq!(self_collision_start(2, &t), 4);
        assert_eq!(self_collision_start(3, &t), 4);

        let t = adaptive();
        // 14.88 / 4 -> neck of 4, same as the configured skip
        assert_eq!(self_collision_start(4, &t), 4);
        assert_eq!(self_collision_start(13, &t), 4);
        // 14.88 / 3 -> segment 5 is the first one farther than the hit distance
        assert_eq!(self_collision_start(3, &t), 5);
        assert_eq!(self_collision_start(2, &t), 8);
    }

    #[test]
    fn test_slow_straight_snake_hits_neck_by_default() {
        // Segment 4 is 12 behind the head, inside 14.88
        let snake = straight_snake(3);
        assert_eq!(self_collision_index(&snake, &Tuning::default()), Some(4));
        assert_eq!(self_collision_index(&straight_snake(4), &Tuning::default()), None);
    }

    #[test]
    fn test_straight_snake_never_bites_itself_with_adaptive_neck() {
        let t = adaptive();
        for speed in t.speed_min..=t.speed_max {
            assert_eq!(self_collision_index(&straight_snake(speed), &t), None, "speed {speed}");
        }
    }

    #[test]
    fn test_self_collision_found() {
        let t = Tuning::default();
        let segments = [
            Vec2::new(604.0, 450.0),
            Vec2::new(600.0, 450.0),
            Vec2::new(596.0, 450.0),
            Vec2::new(596.0, 470.0),
            Vec2::new(610.0, 470.0),
            Vec2::new(620.0, 460.0),
            Vec2::new(606.0, 452.0),
            Vec2::new(606.0, 430.0),
        ];
        let snake = Snake::from_segments(&segments, Direction::Right, 4);
        assert_eq!(self_collision_index(&snake, &t), Some(6));
    }

    #[test]
    fn test_bounce_pushes_away_from_wall() {
        let t = Tuning::default();
        let head = Vec2::new(1262.0, 300.0);
        let bounced = bounce_head(head, Direction::Right, 0.0, &t);
        assert_eq!(bounced, Vec2::new(1216.0, 300.0));

        let bounced = bounce_head(Vec2::new(500.0, 88.0), Direction::Up, 0.0, &t);
        assert_eq!(bounced, Vec2::new(500.0, 134.0));

        // Wobble stays within its amplitude and is sideways only
        for k in 0..50 {
            let b = bounce_head(head, Direction::Right, k as f64 * 37.0, &t);
            assert_eq!(b.x, 1216.0);
            assert!((b.y - 300.0).abs() <= 4.0 + 1e-4);
        }
    }
}
