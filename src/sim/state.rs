//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here, including the RNG, so a run
//! is fully determined by its seed, tuning and input timeline.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::catalog::{FruitColor, FruitType, LEVELS, Level};
use super::spawn;
use crate::consts::PLAYFIELD;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    Paused,
    Ended(EndReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Every level's sentence assembled
    Victory,
    /// Out of lives
    GameOver,
}

/// Heading of the snake. Screen coordinates: y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// The player's snake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    /// Segment centers, head first. Never empty.
    pub body: VecDeque<Vec2>,
    /// Length the body is converging toward
    pub target_len: usize,
    pub direction: Direction,
    /// World units per move
    pub speed: u32,
}

impl Snake {
    pub fn new(head: Vec2, direction: Direction, speed: u32, target_len: usize) -> Self {
        Self {
            body: VecDeque::from([head]),
            target_len,
            direction,
            speed,
        }
    }

    /// Build from explicit segments (head first); falls back to the playfield
    /// center if `segments` is empty
    pub fn from_segments(segments: &[Vec2], direction: Direction, speed: u32) -> Self {
        let body: VecDeque<Vec2> = if segments.is_empty() {
            VecDeque::from([PLAYFIELD.center()])
        } else {
            segments.iter().copied().collect()
        };
        Self {
            target_len: body.len(),
            body,
            direction,
            speed,
        }
    }

    pub fn head(&self) -> Vec2 {
        self.body.front().copied().unwrap_or(PLAYFIELD.center())
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Displacement of one move
    pub fn velocity(&self) -> Vec2 {
        self.direction.unit() * self.speed as f32
    }

    /// Turn, unless `direction` would reverse straight into the body.
    /// Returns whether the heading changed.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        let changed = direction != self.direction;
        self.direction = direction;
        changed
    }

    pub fn change_speed(&mut self, delta: i32, min: u32, max: u32) {
        self.speed = crate::clamp_speed(self.speed, delta, min, max);
    }

    /// Move one step and converge the body length toward `target_len`.
    ///
    /// Growth is immediate (duplicates stack on the tail and unfurl as the
    /// snake moves); shrinking drops one extra tail segment per move.
    pub fn advance(&mut self) {
        let head = self.head() + self.velocity();
        self.body.push_front(head);
        self.body.pop_back();

        let target = self.target_len.max(1);
        while self.body.len() < target {
            let tail = self.body.back().copied().unwrap_or(head);
            self.body.push_back(tail);
        }
        if self.body.len() > target {
            self.body.pop_back();
        }
    }

    /// Cut the body just before `index` and stop growing past the cut
    pub fn truncate(&mut self, index: usize) {
        self.body.truncate(index.max(1));
        self.target_len = self.body.len();
    }

    pub fn replace_head(&mut self, head: Vec2) {
        if let Some(front) = self.body.front_mut() {
            *front = head;
        }
    }
}

/// A fruit entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u32,
    pub pos: Vec2,
    pub fruit_type: FruitType,
}

/// Banner text with an expiry timestamp (ms)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    pub until: f64,
}

impl StatusMessage {
    pub fn is_visible(&self, now: f64) -> bool {
        now < self.until && !self.text.is_empty()
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FruitEaten { color: FruitColor, label: String },
    /// Correct word; `picked` words collected so far
    SequenceAdvanced { picked: usize },
    SequenceBroken,
    SequenceReset,
    SentenceCompleted { level: usize, sentence: String },
    LevelStarted { level: usize },
    LifeLost { lives: u32 },
    InvincibilityEnded,
    Victory,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Index into `LEVELS`
    pub level_index: usize,
    /// Colors eaten so far, always a prefix of the level's sequence
    pub picked: Vec<FruitColor>,
    /// The six fruit kinds with the current level's words
    pub fruit_types: Vec<FruitType>,
    pub snake: Snake,
    pub fruits: Vec<Fruit>,
    pub lives: u32,
    /// When invincibility was granted (ms)
    pub invincible_since: Option<f64>,
    /// Self collision is live once the grace period has passed
    pub collision_enabled: bool,
    pub started_at: f64,
    pub last_move_at: f64,
    pub phase: GamePhase,
    pub status: Option<StatusMessage>,
    /// Demo mode: the autopilot steers
    pub idle_mode: bool,
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// New game with default tuning, started at `now` (ms)
    pub fn new(seed: u64, now: f64) -> Self {
        Self::with_tuning(seed, Tuning::default(), now)
    }

    pub fn with_tuning(seed: u64, tuning: Tuning, now: f64) -> Self {
        let tuning = tuning.sanitized();
        let level = &LEVELS[0];
        let speed = crate::clamp_speed(level.speed, 0, tuning.speed_min, tuning.speed_max);
        let snake = Snake::new(
            PLAYFIELD.center(),
            Direction::Right,
            speed,
            tuning.start_length,
        );

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            lives: tuning.starting_lives,
            tuning,
            level_index: 0,
            picked: Vec::new(),
            fruit_types: level.fruit_types(),
            snake,
            fruits: Vec::new(),
            invincible_since: None,
            collision_enabled: false,
            started_at: now,
            last_move_at: now,
            phase: GamePhase::Running,
            status: None,
            idle_mode: false,
            events: Vec::new(),
            next_id: 1,
        };

        state.set_status("Perfekt! Sammle die Wörter (haben/sein + Partizip II)", now, 3500.0);
        spawn::fill_fruits(&mut state);
        log::info!("New game (seed {}): {}", seed, level.sentence());
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn level(&self) -> &'static Level {
        &LEVELS[self.level_index.min(LEVELS.len() - 1)]
    }

    /// Colors to collect, in order, for the current level
    pub fn target_sequence(&self) -> &'static [FruitColor] {
        self.level().sequence
    }

    /// The color the sequence needs next (None once complete)
    pub fn expected_color(&self) -> Option<FruitColor> {
        self.target_sequence().get(self.picked.len()).copied()
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.phase, GamePhase::Ended(_))
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_since.is_some()
    }

    pub fn set_status(&mut self, text: impl Into<String>, now: f64, duration_ms: f64) {
        self.status = Some(StatusMessage {
            text: text.into(),
            until: now + duration_ms,
        });
    }

    /// Status banner text, if it hasn't expired
    pub fn visible_status(&self, now: f64) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|s| s.is_visible(now))
            .map(|s| s.text.as_str())
    }

    /// Milliseconds of invincibility left
    pub fn invincible_remaining(&self, now: f64) -> f64 {
        self.invincible_since
            .map(|since| (self.tuning.invincible_ms - (now - since)).max(0.0))
            .unwrap_or(0.0)
    }

    /// Milliseconds until self collision switches on
    pub fn grace_remaining(&self, now: f64) -> f64 {
        if self.collision_enabled {
            0.0
        } else {
            (self.tuning.grace_ms - (now - self.started_at)).max(0.0)
        }
    }

    /// Turn the snake (reversal is ignored)
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.snake.set_direction(direction)
    }

    pub fn change_speed(&mut self, delta: i32) {
        let (min, max) = (self.tuning.speed_min, self.tuning.speed_max);
        self.snake.change_speed(delta, min, max);
    }

    /// Flip Running/Paused; ignored once the game has ended
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            ended @ GamePhase::Ended(_) => ended,
        };
    }

    /// Throw away sequence progress on request
    pub fn reset_sequence(&mut self, now: f64) {
        self.picked.clear();
        self.set_status("Sequence reset.", now, 1500.0);
        self.events.push(GameEvent::SequenceReset);
    }

    /// Switch to level `index`: new sequence, speed and words. Live fruits
    /// keep their positions but show the new words.
    pub fn load_level(&mut self, index: usize) {
        self.level_index = index.min(LEVELS.len() - 1);
        let level = self.level();
        self.picked.clear();
        self.snake.speed =
            crate::clamp_speed(level.speed, 0, self.tuning.speed_min, self.tuning.speed_max);
        self.fruit_types = level.fruit_types();
        for fruit in &mut self.fruits {
            fruit.fruit_type = self.fruit_types[fruit.fruit_type.color.index()].clone();
        }
    }

    /// Number of live fruits carrying each effect, indexed by `Effect::index`
    pub fn effect_counts(&self) -> [usize; 6] {
        spawn::effect_counts(&self.fruits)
    }
}
