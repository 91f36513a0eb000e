//! SDL2 backend for the draw command stream

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};

use super::commands::{Anchor, DrawCommand, Rgba, TextSize};
use crate::platform::RenderSurface;

/// Fonts tried when no font is configured
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::RGBA(c.0, c.1, c.2, c.3)
    }
}

/// SDL_gfx reads packed colors in the opposite byte order
fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

/// HUD and overlay fonts. Either may be missing; text is then skipped.
#[derive(Default)]
pub struct Fonts<'ttf> {
    pub normal: Option<Font<'ttf, 'static>>,
    pub large: Option<Font<'ttf, 'static>>,
}

impl<'ttf> Fonts<'ttf> {
    /// Load from the configured path, falling back to common system fonts
    pub fn load(
        ttf: &'ttf Sdl2TtfContext,
        configured: Option<&Path>,
        normal_size: u16,
        large_size: u16,
    ) -> Self {
        let candidates = configured
            .map(Path::to_path_buf)
            .into_iter()
            .chain(DEFAULT_FONT_PATHS.iter().map(PathBuf::from));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match (
                ttf.load_font(&path, normal_size),
                ttf.load_font(&path, large_size),
            ) {
                (Ok(normal), Ok(large)) => {
                    log::info!("Loaded font {}", path.display());
                    return Self {
                        normal: Some(normal),
                        large: Some(large),
                    };
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::warn!("Failed to load font {}: {}", path.display(), e);
                }
            }
        }

        log::warn!("No usable font found, HUD text will not be drawn");
        Self::default()
    }

    fn get(&self, size: TextSize) -> Option<&Font<'ttf, 'static>> {
        match size {
            TextSize::Normal => self.normal.as_ref(),
            TextSize::Large => self.large.as_ref(),
        }
    }
}

/// Window canvas that executes draw commands
pub struct SdlCanvas<'ttf> {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    fonts: Fonts<'ttf>,
}

impl<'ttf> SdlCanvas<'ttf> {
    pub fn new(canvas: Canvas<Window>, fonts: Fonts<'ttf>) -> Self {
        let texture_creator = canvas.texture_creator();
        Self {
            canvas,
            texture_creator,
            fonts,
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, radius: f32) -> Result<()> {
        if w <= 0.0 || h <= 0.0 {
            return Ok(());
        }
        if radius <= 0.0 {
            self.canvas.set_draw_color(Color::from(color));
            return self
                .canvas
                .fill_rect(Rect::new(x as i32, y as i32, w as u32, h as u32))
                .map_err(anyhow::Error::msg);
        }

        let x1 = x as i16;
        let y1 = y as i16;
        let x2 = (x + w) as i16 - 1;
        let y2 = (y + h) as i16 - 1;
        self.canvas
            .rounded_box(x1, y1, x2, y2, radius as i16, to_abgr(color.into()))
            .map_err(anyhow::Error::msg)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: TextSize,
        anchor: Anchor,
        color: Rgba,
    ) -> Result<()> {
        let Some(font) = self.fonts.get(size) else {
            return Ok(());
        };

        let surface = font
            .render(text)
            .blended(Color::from(color))
            .with_context(|| format!("render text {text:?}"))?;
        let texture = self
            .texture_creator
            .create_texture_from_surface(&surface)
            .context("create text texture")?;
        let query = texture.query();

        let (left, top) = match anchor {
            Anchor::TopLeft => (x as i32, y as i32),
            Anchor::Center => (
                x as i32 - query.width as i32 / 2,
                y as i32 - query.height as i32 / 2,
            ),
        };
        self.canvas
            .copy(&texture, None, Some(Rect::new(left, top, query.width, query.height)))
            .map_err(anyhow::Error::msg)
    }
}

impl RenderSurface for SdlCanvas<'_> {
    fn draw(&mut self, frame: &[DrawCommand]) -> Result<()> {
        for command in frame {
            match command {
                DrawCommand::Rect {
                    x,
                    y,
                    w,
                    h,
                    color,
                    radius,
                } => self.fill_rect(*x, *y, *w, *h, *color, *radius)?,
                DrawCommand::Circle {
                    x,
                    y,
                    radius,
                    color,
                } => self
                    .canvas
                    .filled_circle(*x as i16, *y as i16, *radius as i16, to_abgr((*color).into()))
                    .map_err(anyhow::Error::msg)?,
                DrawCommand::Polygon { points, color } => {
                    let vx: Vec<i16> = points.iter().map(|p| p.x as i16).collect();
                    let vy: Vec<i16> = points.iter().map(|p| p.y as i16).collect();
                    self.canvas
                        .filled_polygon(&vx, &vy, to_abgr((*color).into()))
                        .map_err(anyhow::Error::msg)?
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    size,
                    anchor,
                    color,
                } => self.draw_text(text, *x, *y, *size, *anchor, *color)?,
            }
        }
        Ok(())
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
