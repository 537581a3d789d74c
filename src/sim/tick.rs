//! Simulation tick
//!
//! `tick` is called once per animation frame. It always applies pending
//! commands, but only moves the snake once the speed-dependent move interval
//! has elapsed, so gameplay speed is independent of frame rate.

use super::autopilot;
use super::catalog::{Effect, FruitColor, LEVELS};
use super::collision;
use super::spawn;
use super::state::{Direction, EndReason, GameEvent, GamePhase, GameState};
use crate::consts::PLAYFIELD;

/// Commands gathered since the last tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Requested heading (last one wins)
    pub direction: Option<Direction>,
    /// Pause toggle
    pub pause: bool,
    /// Drop the collected words and start the sentence over
    pub reset_sequence: bool,
    /// Net speed change requested by the player
    pub speed_delta: i32,
    /// Toggle demo mode, where the autopilot steers
    pub toggle_idle: bool,
}

impl TickInput {
    pub fn is_empty(&self) -> bool {
        *self == TickInput::default()
    }
}

/// Advance the game to `now` (ms, monotonic)
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    state.events.clear();

    // Ended runs are frozen
    if state.is_ended() {
        return;
    }

    apply_input(state, input, now);

    if state.phase != GamePhase::Running {
        return;
    }

    if !state.collision_enabled && now - state.started_at >= state.tuning.grace_ms {
        state.collision_enabled = true;
        log::debug!("Grace period over, self collision enabled");
    }

    if let Some(since) = state.invincible_since {
        if now - since > state.tuning.invincible_ms {
            state.invincible_since = None;
            state.events.push(GameEvent::InvincibilityEnded);
        }
    }

    let interval = state.tuning.move_interval_ms(state.snake.speed);
    if now - state.last_move_at < interval {
        return;
    }

    step(state, now);
    state.last_move_at = now;
}

fn apply_input(state: &mut GameState, input: &TickInput, now: f64) {
    if input.pause {
        state.toggle_pause();
        log::debug!("Phase now {:?}", state.phase);
    }
    if input.toggle_idle {
        state.idle_mode = !state.idle_mode;
        log::info!("Idle mode: {}", state.idle_mode);
    }
    if let Some(direction) = input.direction {
        state.set_direction(direction);
    }
    if input.speed_delta != 0 {
        state.change_speed(input.speed_delta);
    }
    if input.reset_sequence {
        state.reset_sequence(now);
    }
}

/// One snake move and everything it triggers
fn step(state: &mut GameState, now: f64) {
    if state.idle_mode {
        if let Some(direction) = autopilot::steer(state) {
            state.set_direction(direction);
        }
    }

    state.snake.advance();

    eat_fruits(state, now);
    if state.is_ended() {
        return;
    }

    let head = state.snake.head();
    if !state.is_invincible() && collision::hits_wall(head, &PLAYFIELD, state.tuning.snake_size) {
        let bounced = collision::bounce_head(head, state.snake.direction, now, &state.tuning);
        state.snake.replace_head(bounced);
        lose_life(state, now);
        if state.is_ended() {
            return;
        }
    }

    if state.collision_enabled {
        if let Some(index) = collision::self_collision_index(&state.snake, &state.tuning) {
            state.snake.truncate(index);
            log::debug!("Bit own body at segment {}, length now {}", index, state.snake.len());
            lose_life(state, now);
        }
    }
}

/// Resolve every fruit the head touches, then refill the board
fn eat_fruits(state: &mut GameState, now: f64) {
    let reach = state.tuning.fruit_reach();
    let hits = collision::fruits_in_reach(state.snake.head(), &state.fruits, reach);
    if hits.is_empty() {
        spawn::fill_fruits(state);
        return;
    }

    let mut eaten = Vec::with_capacity(hits.len());
    for index in hits {
        let fruit = state.fruits[index].clone();
        eaten.push(fruit.id);
        state.events.push(GameEvent::FruitEaten {
            color: fruit.fruit_type.color,
            label: fruit.fruit_type.label.clone(),
        });

        check_sequence(state, fruit.fruit_type.color, now);
        apply_effect(state, fruit.fruit_type.effect, now);
        if state.is_ended() {
            break;
        }
    }

    state.fruits.retain(|f| !eaten.contains(&f.id));
    if !state.is_ended() {
        spawn::fill_fruits(state);
    }
}

/// Match the eaten color against the next expected word
fn check_sequence(state: &mut GameState, color: FruitColor, now: f64) {
    if state.expected_color() != Some(color) {
        state.picked.clear();
        state.set_status(
            "Falsches Wort! (Не то слово, начни предложение сначала)",
            now,
            2500.0,
        );
        state.events.push(GameEvent::SequenceBroken);
        return;
    }

    state.picked.push(color);
    state.events.push(GameEvent::SequenceAdvanced {
        picked: state.picked.len(),
    });

    if state.picked.len() == state.target_sequence().len() {
        let sentence = state.level().sentence();
        log::info!("Level {} complete: {}", state.level_index + 1, sentence);
        state.events.push(GameEvent::SentenceCompleted {
            level: state.level_index,
            sentence,
        });
        state.set_status("Richtig! (Отлично!)", now, 1500.0);
        next_level(state, now);
    }
}

fn next_level(state: &mut GameState, now: f64) {
    let next = state.level_index + 1;
    if next >= LEVELS.len() {
        state.picked.clear();
        state.phase = GamePhase::Ended(EndReason::Victory);
        state.set_status("Alle Level geschafft! (Вы прошли все уровни!)", now, 4000.0);
        state.events.push(GameEvent::Victory);
        log::info!("All {} levels cleared", LEVELS.len());
        return;
    }

    state.load_level(next);
    state.set_status(format!("Level {}", next + 1), now, 1600.0);
    state.events.push(GameEvent::LevelStarted { level: next });
    log::info!("Level {} started: {}", next + 1, state.level().sentence());
}

/// Effects apply on contact, whether or not the word was right
fn apply_effect(state: &mut GameState, effect: Effect, now: f64) {
    let growth = state.tuning.growth;
    let step = state.tuning.effect_speed_step;
    match effect {
        Effect::Grow => state.snake.target_len += growth,
        Effect::SpeedUp => {
            state.change_speed(step);
            state.snake.target_len += growth;
        }
        Effect::SlowDown => {
            state.change_speed(-step);
            state.snake.target_len += growth;
        }
        Effect::ExtraLife => {
            state.lives += 1;
            state.snake.target_len += growth;
        }
        Effect::Invincible => {
            state.invincible_since = Some(now);
            state.snake.target_len += growth;
        }
        Effect::Shrink => {
            state.snake.target_len = state
                .snake
                .target_len
                .saturating_sub(state.tuning.shrink)
                .max(state.tuning.min_length);
        }
    }
}

fn lose_life(state: &mut GameState, now: f64) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost { lives: state.lives });
    log::debug!("Life lost, {} left", state.lives);

    if state.lives == 0 {
        state.phase = GamePhase::Ended(EndReason::GameOver);
        state.set_status("Game Over", now, 3000.0);
        state.events.push(GameEvent::GameOver);
        log::info!("Game over on level {}", state.level_index + 1);
    }
}
