//! Drawing surfaces and colors.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn opaque(self) -> Rgba {
        Rgba::new(self.r, self.g, self.b, 255)
    }
}

/// RGB color with 8-bit alpha. `a == 255` replaces, anything lower blends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Composite this color over `dst`.
    pub fn over(self, dst: Rgb) -> Rgb {
        let a = self.a as u16;
        let mix = |src: u8, dst: u8| ((src as u16 * a + dst as u16 * (255 - a) + 127) / 255) as u8;
        Rgb::new(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b))
    }
}

impl From<Rgb> for Rgba {
    fn from(value: Rgb) -> Self {
        value.opaque()
    }
}

/// Pixel rectangle. The origin may lie off-surface; drawing clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// A raster the renderer paints on.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill `rect` with `color`, blending when `color.a < 255`.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Draw a 1-pixel outline along the inside edge of `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Rgba) {
        if rect.is_empty() {
            return;
        }
        let right = rect.x + rect.w as i32 - 1;
        let bottom = rect.y + rect.h as i32 - 1;
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, 1), color);
        if rect.h > 1 {
            self.fill_rect(Rect::new(rect.x, bottom, rect.w, 1), color);
        }
        if rect.h > 2 {
            self.fill_rect(Rect::new(rect.x, rect.y + 1, 1, rect.h - 2), color);
            if rect.w > 1 {
                self.fill_rect(Rect::new(right, rect.y + 1, 1, rect.h - 2), color);
            }
        }
    }

    /// Cover the whole surface with `color`.
    fn clear(&mut self, color: Rgba) {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(Rect::new(0, 0, w, h), color);
    }
}

/// In-memory RGB raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); (width as usize) * (height as usize)],
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Average color of the pixels inside `rect` (clipped). Black if nothing is inside.
    pub fn average(&self, rect: Rect) -> Rgb {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return Rgb::default();
        };

        let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
        for y in y0..y1 {
            let row = y * self.width as usize;
            for p in &self.pixels[row + x0..row + x1] {
                r += p.r as u32;
                g += p.g as u32;
                b += p.b as u32;
            }
        }
        let n = ((x1 - x0) * (y1 - y0)) as u32;
        Rgb::new(((r + n / 2) / n) as u8, ((g + n / 2) / n) as u8, ((b + n / 2) / n) as u8)
    }

    /// Intersect `rect` with the canvas as `(x0, y0, x1, y1)` half-open bounds.
    fn clip(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        let x0 = (rect.x as i64).max(0);
        let y0 = (rect.y as i64).max(0);
        let x1 = (rect.x as i64 + rect.w as i64).min(self.width as i64);
        let y1 = (rect.y as i64 + rect.h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }
}

impl Surface for PixelCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        let width = self.width as usize;

        for y in y0..y1 {
            let row = &mut self.pixels[y * width + x0..y * width + x1];
            if color.a == 255 {
                row.fill(Rgb::new(color.r, color.g, color.b));
            } else {
                for p in row {
                    *p = color.over(*p);
                }
            }
        }
    }
}
