//! Canvas 2D backend (browser only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::surface::Surface;
use crate::error::SkyError;
use crate::sim::Color;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// None when the image element could not be created
    sprite: Option<HtmlImageElement>,
}

impl CanvasSurface {
    /// Grab the 2D context and start loading the rose sprite
    pub fn new(canvas: &HtmlCanvasElement, sprite_src: &str) -> Result<Self, SkyError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SkyError::NoContext)?;

        let sprite = match HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(sprite_src);
                Some(img)
            }
            Err(_) => {
                log::warn!("Cannot create image element; roses will not be drawn");
                None
            }
        };

        Ok(Self { ctx, sprite })
    }

    /// Loaded and decodable; a broken image completes with zero width
    fn sprite_ready(&self) -> Option<&HtmlImageElement> {
        self.sprite
            .as_ref()
            .filter(|img| img.complete() && img.natural_width() > 0)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x.max(0.0) as f64,
            radii.y.max(0.0) as f64,
            0.0,
            0.0,
            TAU,
        );
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn fill_glow_disc(&mut self, center: Vec2, radius: f32, color: Color, blur: f32) {
        let css = color.to_css();
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&css);
        self.ctx.set_shadow_blur(blur as f64);
        self.ctx.set_shadow_color(&css);
        self.ctx.fill();
        // Glow must not leak onto balloons and sprites
        self.ctx.set_shadow_blur(0.0);
    }

    fn draw_sprite(&mut self, center: Vec2, size: f32) {
        let Some(img) = self.sprite_ready() else {
            return;
        };
        let half = size as f64 / 2.0;
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            center.x as f64 - half,
            center.y as f64 - half,
            size as f64,
            size as f64,
        );
    }
}
