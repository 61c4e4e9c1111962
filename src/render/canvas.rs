//! Raster drawing surface: thick strokes, grid rules and 8×8 bitmap text.

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut},
    point::Point,
};

/// Glyph cell edge in pixels at scale 1.
pub const GLYPH: u32 = 8;

/// Stand-in for characters the bitmap font lacks.
const MISSING_GLYPH: [u8; 8] = [0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF];

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const GRID: Rgb<u8> = Rgb([220, 220, 220]);

/// Horizontal anchor for a line of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, WHITE),
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.img.width()
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.img.height()
    }

    #[must_use]
    pub fn into_image(self) -> RgbImage {
        self.img
    }

    /// One-pixel rule.
    pub fn rule(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb<u8>) {
        draw_line_segment_mut(&mut self.img, from, to, color);
    }

    /// Polyline of `width` pixels with round joins.
    #[allow(clippy::cast_possible_truncation)]
    pub fn stroke(&mut self, pts: &[(f32, f32)], width: f32, color: Rgb<u8>) {
        let half = (width / 2.0).max(0.5);
        let radius = half.round().max(1.0) as i32;
        for seg in pts.windows(2) {
            self.thick_segment(seg[0], seg[1], half, color);
        }
        for &(x, y) in pts {
            let center = (x.round() as i32, y.round() as i32);
            draw_filled_circle_mut(&mut self.img, center, radius, color);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn thick_segment(&mut self, a: (f32, f32), b: (f32, f32), half: f32, color: Rgb<u8>) {
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let len = dx.hypot(dy);
        if len < f32::EPSILON {
            return;
        }
        // unit normal scaled to half the stroke
        let (nx, ny) = (-dy / len * half, dx / len * half);
        let p = |x: f32, y: f32| Point::new(x.round() as i32, y.round() as i32);
        let quad = [
            p(a.0 + nx, a.1 + ny),
            p(b.0 + nx, b.1 + ny),
            p(b.0 - nx, b.1 - ny),
            p(a.0 - nx, a.1 - ny),
        ];
        if quad[0] == quad[3] {
            draw_line_segment_mut(&mut self.img, a, b, color);
        } else {
            draw_polygon_mut(&mut self.img, &quad, color);
        }
    }

    #[inline]
    fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            if x < self.img.width() && y < self.img.height() {
                self.img.put_pixel(x, y, color);
            }
        }
    }

    /// Pixel width of one line of `text` at `scale`.
    #[must_use]
    pub fn text_width(text: &str, scale: u32) -> u32 {
        u32::try_from(text.chars().count())
            .unwrap_or(u32::MAX)
            .saturating_mul(GLYPH * scale)
    }

    /// Draw one line of text with its top edge at `y`; `x` is the anchor.
    pub fn text(&mut self, text: &str, x: i64, y: i64, scale: u32, align: Align, color: Rgb<u8>) {
        let w = i64::from(Self::text_width(text, scale));
        let mut cx = match align {
            Align::Left => x,
            Align::Center => x - w / 2,
            Align::Right => x - w,
        };
        let cell = i64::from(GLYPH * scale);
        for c in text.chars() {
            let glyph = BASIC_FONTS.get(c).unwrap_or(MISSING_GLYPH);
            self.blit(&glyph, scale, color, |gx, gy| (cx + gx, y + gy));
            cx += cell;
        }
    }

    /// Text rotated a quarter turn counter-clockwise, centred on `(x, y_mid)`.
    /// `x` is the left edge of the rotated column.
    pub fn text_vertical(&mut self, text: &str, x: i64, y_mid: i64, scale: u32, color: Rgb<u8>) {
        let len = i64::from(Self::text_width(text, scale));
        let cell = i64::from(GLYPH * scale);
        // first character sits at the bottom
        let mut base = y_mid + len / 2;
        for c in text.chars() {
            let glyph = BASIC_FONTS.get(c).unwrap_or(MISSING_GLYPH);
            let b = base;
            self.blit(&glyph, scale, color, |gx, gy| (x + gy, b - 1 - gx));
            base -= cell;
        }
    }

    /// Plot every set bit of `glyph`; `place` maps scaled glyph pixel
    /// coordinates to canvas coordinates.
    fn blit<F>(&mut self, glyph: &[u8; 8], scale: u32, color: Rgb<u8>, place: F)
    where
        F: Fn(i64, i64) -> (i64, i64),
    {
        let s = i64::from(scale.max(1));
        for (row, bits) in (0i64..).zip(glyph) {
            for col in 0..8i64 {
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                for sy in 0..s {
                    for sx in 0..s {
                        let (px, py) = place(col * s + sx, row * s + sy);
                        self.put(px, py, color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(c: &Canvas, color: Rgb<u8>) -> usize {
        c.img.pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn new_canvas_is_white() {
        let c = Canvas::new(20, 10);
        assert_eq!(count(&c, WHITE), 200);
    }

    #[test]
    fn text_draws_inside_its_cell() {
        let mut c = Canvas::new(40, 20);
        c.text("#", 0, 0, 1, Align::Left, BLACK);
        let inked: Vec<(u32, u32)> = c
            .img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == BLACK)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!inked.is_empty());
        assert!(inked.iter().all(|&(x, y)| x < 8 && y < 8));
    }

    #[test]
    fn text_is_clipped_at_edges() {
        let mut c = Canvas::new(10, 10);
        c.text("@@@@", -5, -3, 2, Align::Left, BLACK);
        c.text_vertical("Frequency", 0, 5, 1, BLACK);
        assert!(count(&c, BLACK) > 0);
    }

    #[test]
    fn stroke_is_thicker_than_a_rule() {
        let blue = Rgb([0, 0, 255]);
        let mut thin = Canvas::new(50, 50);
        thin.rule((5.0, 25.0), (45.0, 25.0), blue);
        let mut thick = Canvas::new(50, 50);
        thick.stroke(&[(5.0, 25.0), (45.0, 25.0)], 2.67, blue);
        assert!(count(&thick, blue) > 2 * count(&thin, blue));
    }

    #[test]
    fn text_width_scales() {
        assert_eq!(Canvas::text_width("ab", 1), 16);
        assert_eq!(Canvas::text_width("ab", 2), 32);
        assert_eq!(Canvas::text_width("", 3), 0);
    }
}
