//! Text rasterization capability and the alpha mask it produces.
//!
//! The simulation never talks to a font engine directly: a host supplies a
//! [`TextRasterizer`] (a 2D canvas in the browser, a stub in tests) and the
//! field only reads the resulting [`AlphaMask`].

use crate::constants::{LINE_HEIGHT, TEXT_WEIGHT};
use crate::error::MaskError;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size_px: f32,
    pub font_family: String,
    pub weight: u16,
    /// Line advance as a multiple of `font_size_px`.
    pub line_height: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size_px: 16.0,
            font_family: "sans-serif".to_string(),
            weight: TEXT_WEIGHT,
            line_height: LINE_HEIGHT,
        }
    }
}

impl TextStyle {
    /// CSS font shorthand, e.g. `900 19.2px Inter`.
    pub fn css_font(&self) -> String {
        format!("{} {}px {}", self.weight, self.font_size_px, self.font_family)
    }

    pub fn line_advance(&self) -> f32 {
        self.font_size_px * self.line_height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub style: TextStyle,
}

impl TextBlock {
    pub fn new<S: AsRef<str>>(lines: &[S], style: TextStyle) -> Self {
        Self {
            lines: lines.iter().map(|l| l.as_ref().to_string()).collect(),
            style,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    /// Anchor of each line when the block is centred in a `width × height`
    /// field: horizontally centred, middle baseline, lines stacked one
    /// `line_advance` apart around the vertical centre.
    pub fn line_anchors(&self, width: f32, height: f32) -> Vec<Vec2> {
        let advance = self.style.line_advance();
        let total = self.lines.len() as f32 * advance;
        let start_y = height / 2.0 - total / 2.0 + advance / 2.0;
        (0..self.lines.len())
            .map(|i| Vec2::new(width / 2.0, start_y + i as f32 * advance))
            .collect()
    }
}

/// Renders a text block into an alpha mask of exactly `width × height`.
pub trait TextRasterizer {
    type Error;

    fn rasterize(
        &mut self,
        block: &TextBlock,
        width: u32,
        height: u32,
    ) -> Result<AlphaMask, Self::Error>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl AlphaMask {
    pub fn new(width: u32, height: u32, alpha: Vec<u8>) -> Result<Self, MaskError> {
        let expected = width as usize * height as usize;
        if alpha.len() != expected {
            return Err(MaskError::SizeMismatch {
                width,
                height,
                expected,
                actual: alpha.len(),
            });
        }
        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width as usize * height as usize],
        }
    }

    /// Keep only the alpha channel of RGBA8 pixel data (canvas `ImageData`).
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, MaskError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(MaskError::SizeMismatch {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        let alpha = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[y as usize * self.width as usize + x as usize]
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, alpha: u8) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y.min(self.height)..y_end {
            let row = py as usize * self.width as usize;
            for px in x.min(self.width)..x_end {
                self.alpha[row + px as usize] = alpha;
            }
        }
    }

    /// Grid points (stride `gap`, row-major from the origin) whose alpha is
    /// strictly above `threshold`.
    pub fn sample(&self, gap: u32, threshold: u8) -> Vec<Vec2> {
        let gap = gap.max(1) as usize;
        let mut points = Vec::new();
        for y in (0..self.height).step_by(gap) {
            for x in (0..self.width).step_by(gap) {
                if self.alpha_at(x, y) > threshold {
                    points.push(Vec2::new(x as f32, y as f32));
                }
            }
        }
        points
    }
}
