use crate::{surface::SurfaceSize, ui::Rect};

pub type Color = [u8; 4];

// A tiny block font (no external deps). Kept deliberately simple.
pub const DEFAULT_TEXT_SCALE: u32 = 2;
const GLYPH_W: u32 = 3;
const GLYPH_H: u32 = 5;

pub fn glyph_advance_x(scale: u32) -> u32 {
    (GLYPH_W + 1) * scale.max(1)
}

pub fn line_advance_y(scale: u32) -> u32 {
    (GLYPH_H + 1) * scale.max(1)
}

/// Pixel width of `text` at `scale`, for centering labels.
pub fn text_width(text: &str, scale: u32) -> u32 {
    (text.chars().count() as u32).saturating_mul(glyph_advance_x(scale))
}

/// 2D rendering interface.
///
/// Game code only talks to this trait; it must not care where the pixels end
/// up (a window, an offscreen buffer in a test).
pub trait Renderer2d {
    fn begin_frame(&mut self, size: SurfaceSize);
    fn size(&self) -> SurfaceSize;

    /// Opaque fill.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Alpha-blended rect over existing content (alpha applies to `color`'s RGB).
    fn blend_rect(&mut self, rect: Rect, color: Color, alpha: u8);

    fn rect_outline(&mut self, rect: Rect, color: Color);

    /// Filled disc. The center is signed so callers can slide shapes partly
    /// (or fully) off-screen; out-of-bounds pixels are clipped.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Color);

    /// Ring of the given `thickness` just inside `radius`.
    fn circle_outline(&mut self, cx: i32, cy: i32, radius: u32, thickness: u32, color: Color);

    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32);

    fn draw_text(&mut self, x: u32, y: u32, text: &str, color: Color) {
        self.draw_text_scaled(x, y, text, color, DEFAULT_TEXT_SCALE);
    }

    fn clear(&mut self, color: Color) {
        let s = self.size();
        self.fill_rect(Rect::from_size(s.width, s.height), color);
    }
}

/// CPU renderer that draws into an RGBA frame buffer.
pub struct CpuRenderer<'a> {
    frame: &'a mut [u8],
    size: SurfaceSize,
}

impl<'a> CpuRenderer<'a> {
    pub fn new(frame: &'a mut [u8], size: SurfaceSize) -> Self {
        Self { frame, size }
    }

    fn frame_ok(&self) -> bool {
        let expected = self.size.rgba_len();
        expected != 0 && self.frame.len() >= expected
    }

    fn fill_span(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        if y < 0 || y >= self.size.height as i32 {
            return;
        }
        let x0 = x0.max(0) as u32;
        let x1 = (x1.min(self.size.width as i32 - 1)).max(-1);
        if x1 < 0 || x0 > x1 as u32 {
            return;
        }
        let stride = self.size.width as usize * 4;
        let start = y as usize * stride + x0 as usize * 4;
        let end = y as usize * stride + (x1 as usize + 1) * 4;
        let [r, g, b, a] = color;
        for px in self.frame[start..end].chunks_exact_mut(4) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            px[3] = a;
        }
    }
}

impl Renderer2d for CpuRenderer<'_> {
    fn begin_frame(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if !self.frame_ok() {
            return;
        }
        let max_x = rect.x.saturating_add(rect.w).min(self.size.width);
        let max_y = rect.y.saturating_add(rect.h).min(self.size.height);
        if rect.x >= max_x || rect.y >= max_y {
            return;
        }
        for y in rect.y..max_y {
            self.fill_span(rect.x as i32, max_x as i32 - 1, y as i32, color);
        }
    }

    fn blend_rect(&mut self, rect: Rect, color: Color, alpha: u8) {
        if alpha == 0 || !self.frame_ok() {
            return;
        }
        if alpha == 255 {
            self.fill_rect(rect, color);
            return;
        }

        let max_x = rect.x.saturating_add(rect.w).min(self.size.width);
        let max_y = rect.y.saturating_add(rect.h).min(self.size.height);
        if rect.x >= max_x || rect.y >= max_y {
            return;
        }

        let a = alpha as u32;
        let inv = 255u32 - a;
        let stride = self.size.width as usize * 4;
        for y in rect.y..max_y {
            let start = y as usize * stride + rect.x as usize * 4;
            let end = y as usize * stride + max_x as usize * 4;
            for px in self.frame[start..end].chunks_exact_mut(4) {
                let r0 = px[0] as u32;
                let g0 = px[1] as u32;
                let b0 = px[2] as u32;
                px[0] = ((r0 * inv + (color[0] as u32) * a + 127) / 255) as u8;
                px[1] = ((g0 * inv + (color[1] as u32) * a + 127) / 255) as u8;
                px[2] = ((b0 * inv + (color[2] as u32) * a + 127) / 255) as u8;
                px[3] = 255;
            }
        }
    }

    fn rect_outline(&mut self, rect: Rect, color: Color) {
        if rect.w == 0 || rect.h == 0 {
            return;
        }
        let x1 = rect.x.saturating_add(rect.w);
        let y1 = rect.y.saturating_add(rect.h);

        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, 1), color);
        if rect.h > 1 {
            self.fill_rect(Rect::new(rect.x, y1.saturating_sub(1), rect.w, 1), color);
        }
        self.fill_rect(Rect::new(rect.x, rect.y, 1, rect.h), color);
        if rect.w > 1 {
            self.fill_rect(Rect::new(x1.saturating_sub(1), rect.y, 1, rect.h), color);
        }
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Color) {
        if radius == 0 || !self.frame_ok() {
            return;
        }
        let r = radius as i32;
        let r2 = r * r;
        for dy in -r..=r {
            let dx2 = r2 - dy * dy;
            if dx2 < 0 {
                continue;
            }
            let half = (dx2 as f64).sqrt() as i32;
            self.fill_span(cx - half, cx + half, cy + dy, color);
        }
    }

    fn circle_outline(&mut self, cx: i32, cy: i32, radius: u32, thickness: u32, color: Color) {
        if radius == 0 || thickness == 0 || !self.frame_ok() {
            return;
        }
        let outer = radius as i32;
        let inner = radius.saturating_sub(thickness) as i32;
        let outer2 = outer * outer;
        let inner2 = inner * inner;
        for dy in -outer..=outer {
            for dx in -outer..=outer {
                let d2 = dx * dx + dy * dy;
                if d2 > outer2 || d2 < inner2 {
                    continue;
                }
                let x = cx + dx;
                let y = cy + dy;
                self.fill_span(x, x, y, color);
            }
        }
    }

    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32) {
        if !self.frame_ok() {
            return;
        }
        let width = self.size.width;
        let height = self.size.height;
        let scale = scale.max(1);
        let adv_x = glyph_advance_x(scale);
        let adv_y = line_advance_y(scale);

        let mut cursor_x = x;
        let mut cursor_y = y;

        for ch in text.chars() {
            match ch {
                '\n' => {
                    cursor_x = x;
                    cursor_y = cursor_y.saturating_add(adv_y);
                    if cursor_y >= height {
                        break;
                    }
                    continue;
                }
                ' ' => {
                    cursor_x = cursor_x.saturating_add(adv_x);
                    if cursor_x >= width {
                        break;
                    }
                    continue;
                }
                _ => {}
            }

            self.draw_char(cursor_x, cursor_y, ch, color, scale);
            cursor_x = cursor_x.saturating_add(adv_x);
            if cursor_x >= width {
                break;
            }
        }
    }
}

impl CpuRenderer<'_> {
    fn draw_char(&mut self, x: u32, y: u32, ch: char, color: Color, scale: u32) {
        let rows = glyph_rows(ch);
        for (row, bits) in rows.into_iter().enumerate() {
            let py0 = y.saturating_add((row as u32).saturating_mul(scale));
            for col in 0..GLYPH_W {
                let mask = 1u8 << (GLYPH_W - 1 - col);
                if (bits & mask) == 0 {
                    continue;
                }
                let px0 = x.saturating_add(col.saturating_mul(scale));
                self.fill_rect(Rect::new(px0, py0, scale, scale), color);
            }
        }
    }
}

fn glyph_rows(ch: char) -> [u8; GLYPH_H as usize] {
    let c = ch.to_ascii_uppercase();
    match c {
        // Digits
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],

        // Letters
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b111, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b101, 0b111, 0b111, 0b111, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b111, 0b101, 0b111, 0b110, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],

        // Punctuation used in HUD and notices.
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b111, 0b001, 0b010, 0b000, 0b010],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],

        _ => [0b111, 0b001, 0b010, 0b000, 0b010], // '?'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &[u8], size: SurfaceSize, x: u32, y: u32) -> Color {
        let idx = ((y * size.width + x) * 4) as usize;
        [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
    }

    #[test]
    fn fill_circle_covers_center_but_not_bounding_box_corner() {
        let size = SurfaceSize::new(32, 32);
        let mut frame = vec![0u8; size.rgba_len()];
        let mut r = CpuRenderer::new(&mut frame, size);
        r.fill_circle(16, 16, 8, [255, 0, 0, 255]);
        drop(r);

        assert_eq!(pixel(&frame, size, 16, 16), [255, 0, 0, 255]);
        // Corner of the bounding box lies outside the disc.
        assert_eq!(pixel(&frame, size, 9, 9), [0, 0, 0, 0]);
    }

    #[test]
    fn fill_circle_clips_offscreen_center_without_panicking() {
        let size = SurfaceSize::new(16, 16);
        let mut frame = vec![0u8; size.rgba_len()];
        let mut r = CpuRenderer::new(&mut frame, size);
        r.fill_circle(-4, 8, 8, [0, 255, 0, 255]);
        r.fill_circle(8, -30, 8, [0, 255, 0, 255]);
        drop(r);

        assert_eq!(pixel(&frame, size, 0, 8), [0, 255, 0, 255]);
        assert_eq!(pixel(&frame, size, 8, 8), [0, 0, 0, 0]);
    }

    #[test]
    fn circle_outline_leaves_interior_untouched() {
        let size = SurfaceSize::new(32, 32);
        let mut frame = vec![0u8; size.rgba_len()];
        let mut r = CpuRenderer::new(&mut frame, size);
        r.circle_outline(16, 16, 10, 2, [255, 255, 255, 255]);
        drop(r);

        assert_eq!(pixel(&frame, size, 16, 16), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, size, 16, 7), [255, 255, 255, 255]);
    }

    #[test]
    fn text_width_matches_glyph_advance() {
        assert_eq!(text_width("MOVES", 2), 5 * glyph_advance_x(2));
    }
}
