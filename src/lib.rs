//! Wortschlange - a word-order snake game for German Perfekt practice
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, sequence matching)
//! - `renderer`: Draw-list generation and the Canvas 2D backend
//! - `platform`: Browser input mapping
//! - `tuning`: Data-driven game balance
//! - `hud`: Text shown next to the canvas

pub mod color;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use hud::Hud;
pub use tuning::Tuning;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// World geometry constants
pub mod consts {
    use super::Rect;

    /// Logical canvas size (world units)
    pub const WORLD_W: f32 = 1350.0;
    pub const WORLD_H: f32 = 900.0;
    /// Height of the legend panel along the bottom edge
    pub const PANEL_H: f32 = 150.0;

    /// Area the snake lives in
    pub const PLAYFIELD: Rect = Rect::new(75.0, 76.0, WORLD_W - 150.0, WORLD_H - 240.0);

    /// Visual thickness of the snake body
    pub const SNAKE_SIZE: f32 = 31.0;
    /// Visual diameter of a fruit (before the word padding)
    pub const FRUIT_SIZE: f32 = SNAKE_SIZE;
}

/// Axis-aligned rectangle in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.w - 2.0 * amount).max(0.0),
            (self.h - 2.0 * amount).max(0.0),
        )
    }

    /// Inclusive containment (points on the edge are inside)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// Uniform integer in `[min, max]` (both inclusive)
#[inline]
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.random_range(min..=max)
}

/// Clamp a signed speed change into `[min, max]`
#[inline]
pub fn clamp_speed(speed: u32, delta: i32, min: u32, max: u32) -> u32 {
    let raw = speed as i64 + delta as i64;
    raw.clamp(min as i64, max.max(min) as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_rect_inset_and_contains() {
        let field = consts::PLAYFIELD;
        assert_eq!(field.max(), Vec2::new(1275.0, 736.0));

        let inner = field.inset(15.5);
        assert!(inner.contains(Vec2::new(90.5, 91.5)));
        assert!(!inner.contains(Vec2::new(90.0, 400.0)));
        assert!(inner.contains(field.center()));
    }

    #[test]
    fn test_random_in_range_inclusive() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let v = random_in_range(&mut rng, 3, 5);
            assert!((3..=5).contains(&v));
        }
        assert_eq!(random_in_range(&mut rng, 9, 9), 9);
        assert_eq!(random_in_range(&mut rng, 9, 2), 9);
    }

    #[test]
    fn test_clamp_speed() {
        assert_eq!(clamp_speed(3, 2, 2, 13), 5);
        assert_eq!(clamp_speed(13, 2, 2, 13), 13);
        assert_eq!(clamp_speed(2, -5, 2, 13), 2);
    }
}
