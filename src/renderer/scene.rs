//! Scene generation for the 2D canvas
//!
//! Turns a `GameState` into a flat list of draw commands in world units.
//! The list is backend-agnostic; `canvas.rs` plays it back on Canvas 2D.

use glam::Vec2;

use crate::color::Color;
use crate::consts::*;
use crate::hud;
use crate::sim::{Direction, Fruit, FruitType, GamePhase, GameState};
use crate::Rect;

/// Colors for scene elements
pub mod colors {
    use crate::color::Color;

    pub const SKY_TOP: Color = Color::rgb(0x1a, 0x24, 0x56);
    pub const SKY_BOTTOM: Color = Color::rgb(0x0b, 0x10, 0x27);
    pub const GLOW_WARM: Color = Color::rgba(255, 148, 76, 0.34);
    pub const GLOW_COOL: Color = Color::rgba(80, 137, 255, 0.34);
    pub const PANEL_TOP: Color = Color::rgb(0xff, 0x9f, 0x58);
    pub const PANEL_BOTTOM: Color = Color::rgb(0xd4, 0x59, 0x2f);
    pub const FIELD_SHADOW: Color = Color::rgb(0x2f, 0x74, 0x52);
    pub const FIELD: Color = Color::rgb(0x69, 0xd8, 0x9d);
    pub const GRID: Color = Color::rgba(139, 229, 182, 0.52);
    pub const BANNER: Color = Color::rgb(0x23, 0x41, 0xa3);
    pub const SHADOW: Color = Color::rgba(0, 0, 0, 0.34);
    pub const SNAKE_HEAD: Color = Color::rgb(0xff, 0xe6, 0x36);
    pub const SNAKE_TAIL: Color = Color::rgb(0xd8, 0xb2, 0x0b);
    pub const EYE: Color = Color::rgb(0x11, 0x11, 0x14);
    pub const HEART: Color = Color::rgb(0xff, 0x42, 0x42);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Fill style for rectangles
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Vertical gradient from `Rect` top to bottom
    Vertical(Color, Color),
    /// Radial fade from `inner` to transparent at `outer`
    Radial {
        center: Vec2,
        inner: f32,
        outer: f32,
        color: Color,
    },
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        rect: Rect,
        paint: Paint,
    },
    RoundRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Thick line with round caps
    Segment {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        /// CSS font shorthand
        font: &'static str,
        color: Color,
        align: TextAlign,
        /// Outline color and width, drawn under the fill
        outline: Option<(Color, f32)>,
    },
}

/// Full frame: background, board, snake, HUD panel and overlays
pub fn build(state: &GameState, now: f64) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(256);
    cmds.extend(background());
    if let Some(text) = state.visible_status(now) {
        cmds.extend(status_banner(text));
    }
    for fruit in &state.fruits {
        cmds.extend(fruit_shape(fruit));
    }
    let body: Vec<Vec2> = state.snake.body.iter().copied().collect();
    cmds.extend(snake_shape(&body, state.snake.direction));
    cmds.extend(lives_row(state.lives));
    cmds.extend(legend_panel(state));
    if state.phase == GamePhase::Paused {
        cmds.extend(pause_overlay());
    }
    cmds
}

/// Sky, glows, bottom panel and the grassy playfield with its grid
pub fn background() -> Vec<DrawCmd> {
    let world = Rect::new(0.0, 0.0, WORLD_W, WORLD_H);
    let mut cmds = vec![
        DrawCmd::Rect {
            rect: world,
            paint: Paint::Vertical(colors::SKY_TOP, colors::SKY_BOTTOM),
        },
        DrawCmd::Rect {
            rect: world,
            paint: Paint::Radial {
                center: Vec2::new(180.0, 130.0),
                inner: 30.0,
                outer: 280.0,
                color: colors::GLOW_WARM,
            },
        },
        DrawCmd::Rect {
            rect: world,
            paint: Paint::Radial {
                center: Vec2::new(WORLD_W - 180.0, 150.0),
                inner: 20.0,
                outer: 290.0,
                color: colors::GLOW_COOL,
            },
        },
        DrawCmd::Rect {
            rect: Rect::new(0.0, WORLD_H - PANEL_H, WORLD_W, PANEL_H),
            paint: Paint::Vertical(colors::PANEL_TOP, colors::PANEL_BOTTOM),
        },
        DrawCmd::RoundRect {
            rect: Rect::new(PLAYFIELD.x, PLAYFIELD.y + 8.0, PLAYFIELD.w, PLAYFIELD.h),
            radius: 34.0,
            color: colors::FIELD_SHADOW,
        },
        DrawCmd::RoundRect {
            rect: PLAYFIELD,
            radius: 30.0,
            color: colors::FIELD,
        },
    ];

    let max = PLAYFIELD.max();
    let mut x = PLAYFIELD.x + 40.0;
    while x < max.x {
        cmds.push(grid_line(Vec2::new(x, PLAYFIELD.y + 10.0), Vec2::new(x, max.y - 10.0)));
        x += 40.0;
    }
    let mut y = PLAYFIELD.y + 40.0;
    while y < max.y {
        cmds.push(grid_line(Vec2::new(PLAYFIELD.x + 10.0, y), Vec2::new(max.x - 10.0, y)));
        y += 40.0;
    }
    cmds
}

fn grid_line(from: Vec2, to: Vec2) -> DrawCmd {
    DrawCmd::Segment {
        from,
        to,
        width: 1.0,
        color: colors::GRID,
    }
}

/// Banner across the top of the playfield
pub fn status_banner(text: &str) -> Vec<DrawCmd> {
    vec![
        DrawCmd::RoundRect {
            rect: Rect::new(WORLD_W / 2.0 - 320.0, 32.0, 640.0, 56.0),
            radius: 14.0,
            color: Color::BLACK.with_alpha(0.42),
        },
        DrawCmd::RoundRect {
            rect: Rect::new(WORLD_W / 2.0 - 324.0, 28.0, 640.0, 56.0),
            radius: 14.0,
            color: colors::BANNER,
        },
        DrawCmd::Text {
            pos: Vec2::new(WORLD_W / 2.0, 65.0),
            text: text.to_string(),
            font: "800 28px Manrope",
            color: Color::WHITE,
            align: TextAlign::Center,
            outline: None,
        },
    ]
}

/// Circle with a drop shadow and a highlight
pub fn glossy_circle(center: Vec2, radius: f32, color: Color) -> Vec<DrawCmd> {
    vec![
        DrawCmd::Circle {
            center: center + Vec2::new(3.0, 4.0),
            radius,
            color: colors::SHADOW,
        },
        DrawCmd::Circle {
            center,
            radius,
            color,
        },
        DrawCmd::Circle {
            center: center - Vec2::splat(radius / 3.0),
            radius: (radius / 3.0).max(4.0),
            color: color.lighten(50),
        },
    ]
}

/// Fruit ball with its word printed on top
pub fn fruit_shape(fruit: &Fruit) -> Vec<DrawCmd> {
    let radius = (FRUIT_SIZE / 2.0).floor() + 10.0;
    let mut cmds = glossy_circle(fruit.pos, radius, fruit.fruit_type.color.color());
    cmds.push(DrawCmd::Text {
        pos: fruit.pos,
        text: fruit.fruit_type.word().to_string(),
        font: "700 13px Manrope, Arial",
        color: Color::WHITE,
        align: TextAlign::Center,
        outline: Some((Color::BLACK.with_alpha(0.8), 3.0)),
    });
    cmds
}

/// Body fading from head yellow to tail gold, then the head with eyes
pub fn snake_shape(body: &[Vec2], direction: Direction) -> Vec<DrawCmd> {
    let Some(&head) = body.first() else {
        return Vec::new();
    };

    let radius = (SNAKE_SIZE / 2.0).floor();
    let mut cmds = Vec::with_capacity(body.len() * 4 + 6);
    let span = (body.len() - 1).max(1) as f32;
    for (i, pair) in body.windows(2).enumerate() {
        let color = colors::SNAKE_HEAD.lerp(colors::SNAKE_TAIL, i as f32 / span);
        cmds.push(DrawCmd::Segment {
            from: pair[0],
            to: pair[1],
            width: SNAKE_SIZE,
            color,
        });
        cmds.extend(glossy_circle(pair[0], radius, color));
    }

    cmds.extend(glossy_circle(head, radius, colors::SNAKE_HEAD));
    let eye_offset = if direction.is_horizontal() {
        Vec2::new(0.0, 7.0)
    } else {
        Vec2::new(7.0, 0.0)
    };
    for eye in [head - eye_offset, head + eye_offset] {
        cmds.push(DrawCmd::Circle {
            center: eye,
            radius: 3.0,
            color: colors::EYE,
        });
    }
    cmds
}

/// Up to eight hearts, then a numeric `xN`
pub fn lives_row(lives: u32) -> Vec<DrawCmd> {
    let visible = lives.min(8);
    let y = WORLD_H - 44.0;
    let mut cmds = Vec::new();
    for i in 0..visible {
        let x = 50.0 + i as f32 * 34.0;
        cmds.extend(heart(Vec2::new(x, y)));
    }
    if lives > visible {
        cmds.push(DrawCmd::Text {
            pos: Vec2::new(50.0 + visible as f32 * 34.0 + 8.0, y + 4.0),
            text: format!("x{}", lives),
            font: "700 30px Manrope",
            color: Color::WHITE,
            align: TextAlign::Left,
            outline: None,
        });
    }
    cmds
}

fn heart(center: Vec2) -> Vec<DrawCmd> {
    vec![
        DrawCmd::Circle {
            center: center + Vec2::new(-6.0, -6.0),
            radius: 9.0,
            color: colors::HEART,
        },
        DrawCmd::Circle {
            center: center + Vec2::new(6.0, -6.0),
            radius: 9.0,
            color: colors::HEART,
        },
        DrawCmd::Polygon {
            points: vec![
                center + Vec2::new(-15.0, -2.0),
                center + Vec2::new(15.0, -2.0),
                center + Vec2::new(0.0, 16.0),
            ],
            color: colors::HEART,
        },
    ]
}

/// Word legend on the left of the panel, progress in the middle
pub fn legend_panel(state: &GameState) -> Vec<DrawCmd> {
    let mut cmds = Vec::new();
    let mut y = WORLD_H - PANEL_H + 34.0;
    for fruit_type in &state.fruit_types {
        cmds.extend(legend_entry(fruit_type, y));
        y += 23.0;
    }

    let mid = WORLD_W / 2.0;
    let top = WORLD_H - PANEL_H;
    cmds.push(panel_text(hud::level_label(state), Vec2::new(mid - 78.0, top + 34.0)));
    cmds.push(panel_text(hud::sequence_label(state), Vec2::new(mid - 90.0, top + 64.0)));
    if state.is_invincible() {
        cmds.push(panel_text("Invincible ON".to_string(), Vec2::new(mid - 74.0, top + 94.0)));
    }
    cmds
}

fn legend_entry(fruit_type: &FruitType, y: f32) -> Vec<DrawCmd> {
    vec![
        DrawCmd::Circle {
            center: Vec2::new(42.0, y - 8.0),
            radius: 12.0,
            color: fruit_type.color.color(),
        },
        DrawCmd::Text {
            pos: Vec2::new(68.0, y),
            text: fruit_type.label.clone(),
            font: "700 27px Manrope",
            color: Color::WHITE,
            align: TextAlign::Left,
            outline: None,
        },
    ]
}

fn panel_text(text: String, pos: Vec2) -> DrawCmd {
    DrawCmd::Text {
        pos,
        text,
        font: "800 24px Manrope",
        color: Color::WHITE,
        align: TextAlign::Left,
        outline: None,
    }
}

pub fn pause_overlay() -> Vec<DrawCmd> {
    vec![
        DrawCmd::Rect {
            rect: Rect::new(0.0, 0.0, WORLD_W, WORLD_H),
            paint: Paint::Solid(Color::BLACK.with_alpha(0.36)),
        },
        DrawCmd::Text {
            pos: Vec2::new(WORLD_W / 2.0, WORLD_H / 2.0),
            text: "PAUSE".to_string(),
            font: "800 72px Russo One",
            color: Color::WHITE,
            align: TextAlign::Center,
            outline: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FruitColor;

    fn texts(cmds: &[DrawCmd]) -> Vec<String> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_lives_row_caps_hearts() {
        let cmds = lives_row(3);
        assert_eq!(cmds.len(), 9);
        assert!(texts(&cmds).is_empty());

        let cmds = lives_row(100);
        // 8 hearts of 3 primitives plus the counter
        assert_eq!(cmds.len(), 25);
        assert_eq!(texts(&cmds), vec!["x100"]);
    }

    #[test]
    fn test_fruit_hides_trap_marker() {
        let state = GameState::new(1, 0.0);
        let trap = state
            .fruits
            .iter()
            .find(|f| f.fruit_type.color == FruitColor::Blue)
            .unwrap();
        assert_eq!(texts(&fruit_shape(trap)), vec!["bin"]);
    }

    #[test]
    fn test_snake_eyes_follow_direction() {
        let body = [Vec2::new(100.0, 100.0), Vec2::new(97.0, 100.0)];
        let cmds = snake_shape(&body, Direction::Right);
        let eyes: Vec<Vec2> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Circle { center, radius, .. } if *radius == 3.0 => Some(*center),
                _ => None,
            })
            .collect();
        assert_eq!(eyes, vec![Vec2::new(100.0, 93.0), Vec2::new(100.0, 107.0)]);
        assert!(snake_shape(&[], Direction::Up).is_empty());
    }

    #[test]
    fn test_frame_overlays() {
        let mut state = GameState::new(2, 0.0);
        let frame = texts(&build(&state, 100.0));
        assert!(frame.iter().any(|t| t.starts_with("Perfekt!")));
        assert!(frame.contains(&"Level 1/7".to_string()));
        assert!(frame.contains(&"Sequence 0/5".to_string()));
        assert!(!frame.contains(&"PAUSE".to_string()));

        state.toggle_pause();
        state.invincible_since = Some(0.0);
        let frame = texts(&build(&state, 10_000.0));
        assert!(!frame.iter().any(|t| t.starts_with("Perfekt!")));
        assert!(frame.contains(&"PAUSE".to_string()));
        assert!(frame.contains(&"Invincible ON".to_string()));
        // Legend keeps the trap marker
        assert!(frame.contains(&"bin (ловушка)".to_string()));
    }
}
