//! Canvas2D rendering backend (wasm only)
//!
//! Three sprites drawn straight onto a 2D context. Images load asynchronously;
//! drawing one that has not finished loading silently produces nothing, which
//! is tolerated as a transient blank frame.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{Renderer, SpriteId};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Sprite asset paths, served next to the wasm bundle
const DOODLER_RIGHT_SRC: &str = "/doodler-right.png";
const DOODLER_LEFT_SRC: &str = "/doodler-left.png";
const PLATFORM_SRC: &str = "/platform.png";

const HUD_FONT: &str = "16px sans-serif";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    doodler_right: HtmlImageElement,
    doodler_left: HtmlImageElement,
    platform: HtmlImageElement,
}

impl CanvasRenderer {
    /// Wrap a 2D context and start the sprite loads
    pub fn new(ctx: CanvasRenderingContext2d) -> Result<Self, JsValue> {
        Ok(Self {
            ctx,
            doodler_right: load_image(DOODLER_RIGHT_SRC)?,
            doodler_left: load_image(DOODLER_LEFT_SRC)?,
            platform: load_image(PLATFORM_SRC)?,
        })
    }

    fn image(&self, sprite: SpriteId) -> &HtmlImageElement {
        match sprite {
            SpriteId::DoodlerLeft => &self.doodler_left,
            SpriteId::DoodlerRight => &self.doodler_right,
            SpriteId::Platform => &self.platform,
        }
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);
    }

    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32, w: f32, h: f32) {
        // An image that failed or has not finished loading draws as nothing
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                self.image(sprite),
                x as f64,
                y as f64,
                w as f64,
                h as f64,
            )
            .ok();
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.ctx.set_fill_style(&JsValue::from_str("black"));
        self.ctx.set_font(HUD_FONT);
        self.ctx.fill_text(text, x as f64, y as f64).ok();
    }
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(src);
    Ok(image)
}
