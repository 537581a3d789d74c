//! Fruit spawning
//!
//! Every effect is capped (one live fruit each by default), so the board
//! always shows distinct words and the spawner can run dry.

use glam::Vec2;
use rand::Rng;

use super::catalog::FruitType;
use super::state::{Fruit, GameState};
use crate::consts::PLAYFIELD;
use crate::random_in_range;
use crate::tuning::Tuning;

/// Live fruit per effect, indexed by `Effect::index`
pub fn effect_counts(fruits: &[Fruit]) -> [usize; 6] {
    let mut counts = [0; 6];
    for fruit in fruits {
        counts[fruit.fruit_type.effect.index()] += 1;
    }
    counts
}

/// Pick a fruit type that is under its cap and place it somewhere in the
/// playfield interior. `None` when every effect is at its cap.
pub fn spawn_fruit<R: Rng + ?Sized>(
    existing: &[Fruit],
    types: &[FruitType],
    tuning: &Tuning,
    rng: &mut R,
    id: u32,
) -> Option<Fruit> {
    let counts = effect_counts(existing);
    let available: Vec<&FruitType> = types
        .iter()
        .filter(|t| counts[t.effect.index()] < tuning.per_effect_cap)
        .collect();
    if available.is_empty() {
        return None;
    }

    let fruit_type = available[rng.random_range(0..available.len())].clone();
    Some(Fruit {
        id,
        pos: random_position(tuning.spawn_margin, rng),
        fruit_type,
    })
}

/// Uniform integer position at least `margin` inside the playfield
pub fn random_position<R: Rng + ?Sized>(margin: f32, rng: &mut R) -> Vec2 {
    let min = PLAYFIELD.min();
    let max = PLAYFIELD.max();
    let x = random_in_range(rng, (min.x + margin) as i32, (max.x - margin) as i32);
    let y = random_in_range(rng, (min.y + margin) as i32, (max.y - margin) as i32);
    Vec2::new(x as f32, y as f32)
}

/// Top the live list up to `fruit_count`, stopping early if nothing is
/// eligible. Returns how many fruits were added.
pub fn fill_fruits(state: &mut GameState) -> usize {
    let mut added = 0;
    while state.fruits.len() < state.tuning.fruit_count {
        let id = state.next_entity_id();
        let Some(fruit) = spawn_fruit(
            &state.fruits,
            &state.fruit_types,
            &state.tuning,
            &mut state.rng,
            id,
        ) else {
            break;
        };
        state.fruits.push(fruit);
        added += 1;
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::{Effect, LEVELS};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_fill_gives_one_of_each_effect() {
        let mut state = GameState::new(3, 0.0);
        state.fruits.clear();
        assert_eq!(fill_fruits(&mut state), 6);
        assert_eq!(state.effect_counts(), [1; 6]);
        // Nothing left to add
        assert_eq!(fill_fruits(&mut state), 0);
    }

    #[test]
    fn test_spawn_returns_none_when_capped() {
        let mut state = GameState::new(11, 0.0);
        let types = state.fruit_types.clone();
        let tuning = state.tuning.clone();
        assert!(spawn_fruit(&state.fruits, &types, &tuning, &mut state.rng, 99).is_none());
    }

    #[test]
    fn test_spawn_only_picks_missing_effect() {
        let mut state = GameState::new(21, 0.0);
        let missing = state
            .fruits
            .iter()
            .position(|f| f.fruit_type.effect == Effect::Shrink)
            .unwrap();
        state.fruits.remove(missing);

        let types = LEVELS[0].fruit_types();
        let tuning = state.tuning.clone();
        for _ in 0..20 {
            let fruit = spawn_fruit(&state.fruits, &types, &tuning, &mut state.rng, 1).unwrap();
            assert_eq!(fruit.fruit_type.effect, Effect::Shrink);
        }
    }

    #[test]
    fn test_positions_respect_margin() {
        let mut rng = Pcg32::seed_from_u64(1234);
        let inner = PLAYFIELD.inset(40.0);
        for _ in 0..500 {
            let p = random_position(40.0, &mut rng);
            assert!(inner.contains(p), "{p:?} outside {inner:?}");
            assert_eq!(p.x.fract(), 0.0);
        }
    }
}
