//! Game balance knobs
//!
//! Defaults reproduce the classroom build. Any subset of fields can be
//! overridden from JSON (the browser build reads `<script id="tuning">`).

use serde::{Deserialize, Serialize};

use crate::consts::SNAKE_SIZE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Snake ===
    /// Lives at game start
    pub starting_lives: u32,
    /// Target body length at game start
    pub start_length: usize,
    /// Shrink never takes the target length below this
    pub min_length: usize,
    /// Target length added by growing effects
    pub growth: usize,
    /// Target length removed by the shrink effect
    pub shrink: usize,
    /// Body thickness used for wall inset and self-collision distance
    pub snake_size: f32,

    // === Speed ===
    pub speed_min: u32,
    pub speed_max: u32,
    /// Speed change applied by speed_up / slow_down fruit
    pub effect_speed_step: i32,
    /// Move interval = max(min, base - speed * per_speed)
    pub move_interval_base_ms: f64,
    pub move_interval_per_speed_ms: f64,
    pub move_interval_min_ms: f64,

    // === Fruit ===
    /// Number of live fruits the spawner tops up to
    pub fruit_count: usize,
    /// Live fruits allowed per effect
    pub per_effect_cap: usize,
    /// Distance kept between spawned fruit and the playfield edge
    pub spawn_margin: f32,
    /// Head-to-fruit distance that counts as eaten
    pub fruit_hit_radius: f32,
    /// Extra reach for the word drawn on the fruit
    pub fruit_hit_padding: f32,

    // === Timers ===
    /// Self collision is off for this long after the start
    pub grace_ms: f64,
    pub invincible_ms: f64,

    // === Collision response ===
    /// Segments nearer the head than this index never count as a hit
    pub self_collision_skip: usize,
    /// Widen the skipped neck at low speeds, where packed segments sit
    /// inside the hit distance
    pub adaptive_neck: bool,
    /// Self-collision distance as a fraction of `snake_size`
    pub self_collision_factor: f32,
    /// How far the head is shoved back off a wall
    pub bounce_push: f32,
    pub wobble_amplitude: f32,
    pub wobble_period_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 100,
            start_length: 10,
            min_length: 5,
            growth: 4,
            shrink: 2,
            snake_size: SNAKE_SIZE,

            speed_min: 2,
            speed_max: 13,
            effect_speed_step: 2,
            move_interval_base_ms: 210.0,
            move_interval_per_speed_ms: 14.0,
            move_interval_min_ms: 45.0,

            fruit_count: 6,
            per_effect_cap: 1,
            spawn_margin: 40.0,
            fruit_hit_radius: 45.0,
            fruit_hit_padding: 10.0,

            grace_ms: 5000.0,
            invincible_ms: 5000.0,

            self_collision_skip: 4,
            adaptive_neck: false,
            self_collision_factor: 0.48,
            bounce_push: 46.0,
            wobble_amplitude: 4.0,
            wobble_period_ms: 85.0,
        }
    }
}

impl Tuning {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Repair values that would break the simulation
    pub fn sanitized(mut self) -> Self {
        self.speed_min = self.speed_min.max(1);
        if self.speed_max < self.speed_min {
            log::warn!(
                "speed_max {} below speed_min {}, raising it",
                self.speed_max,
                self.speed_min
            );
            self.speed_max = self.speed_min;
        }
        self.min_length = self.min_length.max(1);
        self.start_length = self.start_length.max(1);
        self.per_effect_cap = self.per_effect_cap.max(1);
        self.move_interval_min_ms = self.move_interval_min_ms.max(1.0);
        if self.wobble_period_ms <= 0.0 {
            self.wobble_period_ms = Self::default().wobble_period_ms;
        }
        self
    }

    /// Milliseconds between snake moves at `speed`
    pub fn move_interval_ms(&self, speed: u32) -> f64 {
        (self.move_interval_base_ms - speed as f64 * self.move_interval_per_speed_ms)
            .max(self.move_interval_min_ms)
    }

    /// Head-to-fruit distance that counts as contact
    pub fn fruit_reach(&self) -> f32 {
        self.fruit_hit_radius + self.fruit_hit_padding
    }

    /// Head-to-segment distance that counts as biting yourself
    pub fn self_collision_distance(&self) -> f32 {
        self.snake_size * self.self_collision_factor
    }
}
