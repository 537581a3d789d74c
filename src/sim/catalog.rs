//! Static level and fruit data
//!
//! Each fruit color is permanently bound to one effect. Levels only change
//! which word is printed on each color and the order the colors must be eaten.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Fruit palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FruitColor {
    Red,
    Yellow,
    Blue,
    Purple,
    Orange,
    Pink,
}

impl FruitColor {
    pub const ALL: [FruitColor; 6] = [
        FruitColor::Red,
        FruitColor::Yellow,
        FruitColor::Blue,
        FruitColor::Purple,
        FruitColor::Orange,
        FruitColor::Pink,
    ];

    pub fn color(&self) -> Color {
        match self {
            FruitColor::Red => Color::rgb(0xff, 0x42, 0x42),
            FruitColor::Yellow => Color::rgb(0xff, 0xe6, 0x36),
            FruitColor::Blue => Color::rgb(0x42, 0x94, 0xff),
            FruitColor::Purple => Color::rgb(0x97, 0x6b, 0xff),
            FruitColor::Orange => Color::rgb(0xff, 0x9d, 0x4d),
            FruitColor::Pink => Color::rgb(0xff, 0x69, 0xb4),
        }
    }

    /// Position in the palette (and in a level's label list)
    pub fn index(&self) -> usize {
        match self {
            FruitColor::Red => 0,
            FruitColor::Yellow => 1,
            FruitColor::Blue => 2,
            FruitColor::Purple => 3,
            FruitColor::Orange => 4,
            FruitColor::Pink => 5,
        }
    }

    pub fn effect(&self) -> Effect {
        Effect::ALL[self.index()]
    }
}

/// Gameplay modifier triggered by eating a fruit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    Grow,
    SpeedUp,
    SlowDown,
    ExtraLife,
    Invincible,
    Shrink,
}

impl Effect {
    pub const ALL: [Effect; 6] = [
        Effect::Grow,
        Effect::SpeedUp,
        Effect::SlowDown,
        Effect::ExtraLife,
        Effect::Invincible,
        Effect::Shrink,
    ];

    pub fn index(&self) -> usize {
        match self {
            Effect::Grow => 0,
            Effect::SpeedUp => 1,
            Effect::SlowDown => 2,
            Effect::ExtraLife => 3,
            Effect::Invincible => 4,
            Effect::Shrink => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Grow => "grow",
            Effect::SpeedUp => "speed_up",
            Effect::SlowDown => "slow_down",
            Effect::ExtraLife => "extra_life",
            Effect::Invincible => "invincible",
            Effect::Shrink => "shrink",
        }
    }
}

/// Suffix marking a distractor word in the legend
pub const TRAP_MARKER: &str = " (ловушка)";

/// A fruit kind as shown in the current level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitType {
    pub color: FruitColor,
    pub effect: Effect,
    /// Legend text, may carry the trap marker
    pub label: String,
}

impl FruitType {
    /// Word printed on the fruit itself (trap marker hidden)
    pub fn word(&self) -> &str {
        self.label.strip_suffix(TRAP_MARKER).unwrap_or(&self.label)
    }

    pub fn is_trap(&self) -> bool {
        self.label.ends_with(TRAP_MARKER)
    }
}

/// One sentence to assemble
#[derive(Debug)]
pub struct Level {
    /// Colors in sentence word order
    pub sequence: &'static [FruitColor],
    /// Snake speed when the level starts
    pub speed: u32,
    /// Labels indexed by `FruitColor::index`
    pub labels: [&'static str; 6],
}

impl Level {
    /// The six fruit types with this level's words
    pub fn fruit_types(&self) -> Vec<FruitType> {
        FruitColor::ALL
            .iter()
            .map(|&color| FruitType {
                color,
                effect: color.effect(),
                label: self.labels[color.index()].to_string(),
            })
            .collect()
    }

    pub fn label_for(&self, color: FruitColor) -> &'static str {
        self.labels[color.index()]
    }

    /// The target sentence, read off the sequence
    pub fn sentence(&self) -> String {
        self.sequence
            .iter()
            .map(|&c| self.label_for(c))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

use FruitColor::*;

/// Perfekt with haben/sein, A1
pub static LEVELS: [Level; 7] = [
    Level {
        sequence: &[Orange, Yellow, Purple, Pink, Red],
        speed: 3,
        labels: ["gegessen.", "habe", "bin (ловушка)", "eine", "Ich", "Pizza"],
    },
    Level {
        sequence: &[Yellow, Pink, Blue, Orange, Red],
        speed: 4,
        labels: ["gegangen.", "Du", "nach", "hast (ловушка)", "Hause", "bist"],
    },
    Level {
        sequence: &[Purple, Pink, Yellow, Orange],
        speed: 5,
        labels: [
            "spielen (ловушка)",
            "Fußball",
            "ist (ловушка)",
            "Er",
            "gespielt.",
            "hat",
        ],
    },
    Level {
        sequence: &[Pink, Purple, Yellow, Blue],
        speed: 6,
        labels: [
            "sind (ловушка)",
            "Wasser",
            "getrunken.",
            "haben",
            "getrinkt (ловушка)",
            "Wir",
        ],
    },
    Level {
        sequence: &[Orange, Yellow, Pink, Red, Purple],
        speed: 7,
        labels: ["Kino", "seid", "habt (ловушка)", "gegangen.", "Ihr", "ins"],
    },
    Level {
        sequence: &[Purple, Pink, Red, Yellow],
        speed: 8,
        labels: [
            "Hausaufgaben",
            "gemacht.",
            "gemachen (ловушка)",
            "Sie",
            "ist (ловушка)",
            "hat",
        ],
    },
    Level {
        sequence: &[Blue, Pink, Red, Purple, Yellow],
        speed: 9,
        labels: ["nach", "geflogen.", "Wir", "Hause", "geflogt (ловушка)", "sind"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_read_correctly() {
        let sentences: Vec<String> = LEVELS.iter().map(Level::sentence).collect();
        assert_eq!(
            sentences,
            [
                "Ich habe eine Pizza gegessen.",
                "Du bist nach Hause gegangen.",
                "Er hat Fußball gespielt.",
                "Wir haben Wasser getrunken.",
                "Ihr seid ins Kino gegangen.",
                "Sie hat Hausaufgaben gemacht.",
                "Wir sind nach Hause geflogen.",
            ]
        );
    }

    #[test]
    fn test_sequences_never_use_traps() {
        for level in &LEVELS {
            for &color in level.sequence {
                assert!(!level.label_for(color).ends_with(TRAP_MARKER));
            }
        }
    }

    #[test]
    fn test_fruit_types_bind_effects() {
        let types = LEVELS[0].fruit_types();
        assert_eq!(types.len(), 6);
        assert_eq!(types[0].effect, Effect::Grow);
        assert_eq!(types[4].color, FruitColor::Orange);
        assert_eq!(types[4].effect, Effect::Invincible);
        assert_eq!(types[2].word(), "bin");
        assert!(types[2].is_trap());
        assert!(!types[1].is_trap());
    }

    #[test]
    fn test_palette_hex() {
        assert_eq!(FruitColor::Red.color().to_hex(), "#ff4242");
        assert_eq!(FruitColor::Pink.color().to_hex(), "#ff69b4");
    }
}
