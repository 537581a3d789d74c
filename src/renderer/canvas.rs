//! Canvas 2D backend
//!
//! Plays a draw list back on a `CanvasRenderingContext2d`. Commands are in
//! world units; the context transform maps them onto the physical canvas.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{DrawCmd, Paint, TextAlign};
use crate::Rect;
use crate::consts::{WORLD_H, WORLD_W};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Physical canvas size last applied
    pub size: (u32, u32),
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            size: (0, 0),
        })
    }

    /// Match the backing store to the element size times `dpr`
    pub fn resize(&mut self, dpr: f64) {
        let width = (self.canvas.client_width() as f64 * dpr).max(1.0) as u32;
        let height = (self.canvas.client_height() as f64 * dpr).max(1.0) as u32;
        if (width, height) != self.size {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.size = (width, height);
            log::debug!("Canvas resized to {}x{}", width, height);
        }
    }

    pub fn render(&self, cmds: &[DrawCmd]) -> Result<(), JsValue> {
        let (w, h) = self.size;
        self.ctx.set_transform(
            w as f64 / WORLD_W as f64,
            0.0,
            0.0,
            h as f64 / WORLD_H as f64,
            0.0,
            0.0,
        )?;
        for cmd in cmds {
            self.draw(cmd)?;
        }
        Ok(())
    }

    fn draw(&self, cmd: &DrawCmd) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::Rect { rect, paint } => {
                self.set_paint(rect, paint)?;
                ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            DrawCmd::RoundRect {
                rect,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(&color.css());
                self.round_rect_path(rect, *radius);
                ctx.fill();
            }
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(&color.css());
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.fill();
            }
            DrawCmd::Segment {
                from,
                to,
                width,
                color,
            } => {
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(*width as f64);
                ctx.set_line_cap(if *width > 1.0 { "round" } else { "butt" });
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
            DrawCmd::Polygon { points, color } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                ctx.set_fill_style_str(&color.css());
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in rest {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                ctx.close_path();
                ctx.fill();
            }
            DrawCmd::Text {
                pos,
                text,
                font,
                color,
                align,
                outline,
            } => {
                ctx.set_font(font);
                match align {
                    TextAlign::Left => {
                        ctx.set_text_align("left");
                        ctx.set_text_baseline("alphabetic");
                    }
                    TextAlign::Center => {
                        ctx.set_text_align("center");
                        ctx.set_text_baseline("middle");
                    }
                }
                if let Some((stroke, width)) = outline {
                    ctx.set_stroke_style_str(&stroke.css());
                    ctx.set_line_width(*width as f64);
                    ctx.stroke_text(text, pos.x as f64, pos.y as f64)?;
                }
                ctx.set_fill_style_str(&color.css());
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
        Ok(())
    }

    fn set_paint(&self, rect: &Rect, paint: &Paint) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match paint {
            Paint::Solid(color) => ctx.set_fill_style_str(&color.css()),
            Paint::Vertical(top, bottom) => {
                let gradient = ctx.create_linear_gradient(
                    0.0,
                    rect.y as f64,
                    0.0,
                    (rect.y + rect.h) as f64,
                );
                gradient.add_color_stop(0.0, &top.css())?;
                gradient.add_color_stop(1.0, &bottom.css())?;
                ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial {
                center,
                inner,
                outer,
                color,
            } => {
                let (x, y) = (center.x as f64, center.y as f64);
                let gradient =
                    ctx.create_radial_gradient(x, y, *inner as f64, x, y, *outer as f64)?;
                gradient.add_color_stop(0.0, &color.css())?;
                gradient.add_color_stop(1.0, &color.with_alpha(0.0).css())?;
                ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    fn round_rect_path(&self, rect: &Rect, radius: f32) {
        let ctx = &self.ctx;
        let r = radius.min(rect.w / 2.0).min(rect.h / 2.0) as f64;
        let (x, y, w, h) = (rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
        ctx.begin_path();
        ctx.move_to(x + r, y);
        ctx.line_to(x + w - r, y);
        ctx.quadratic_curve_to(x + w, y, x + w, y + r);
        ctx.line_to(x + w, y + h - r);
        ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
        ctx.line_to(x + r, y + h);
        ctx.quadratic_curve_to(x, y + h, x, y + h - r);
        ctx.line_to(x, y + r);
        ctx.quadratic_curve_to(x, y, x + r, y);
        ctx.close_path();
    }
}
