// Core types shared by the drawing, scene and export steps.

use crate::error::Error;

/// Straight (non-premultiplied) 8-bit RGBA colour, packed as 0xAARRGGBB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent black: what every canvas pixel starts as.
    pub const TRANSPARENT: Color = Color(0x00_00_00_00);

    /// Opaque colour from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(0xFF_00_00_00 | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Unpack to the [r, g, b, a] byte order PNG wants.
    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        let px = self.0;
        [
            ((px >> 16) & 0xFF) as u8,
            ((px >> 8) & 0xFF) as u8,
            (px & 0xFF) as u8,
            (px >> 24) as u8,
        ]
    }

    #[inline]
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

/// The drawing target. Row-major, one packed colour per pixel.
pub struct Canvas {
    pub width: usize,      // pixels per row
    pub height: usize,     // number of rows
    pub pixels: Vec<u32>,  // length = width * height, each 0xAARRGGBB
}

impl Canvas {
    /// Allocate a canvas with every pixel transparent (alpha = 0).
    /// Allocation is fallible so running out of memory surfaces as an Error.
    pub fn new_transparent(width: usize, height: usize) -> Result<Self, Error> {
        let len = width
            .checked_mul(height)
            .ok_or_else(|| Error::CanvasAlloc(format!("{width}x{height} overflows usize")))?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|e| Error::CanvasAlloc(format!("{width}x{height}: {e}")))?;
        pixels.resize(len, Color::TRANSPARENT.0);

        Ok(Self { width, height, pixels })
    }

    /// Read one pixel; None when (x,y) falls outside the canvas.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Color(self.pixels[y * self.width + x]))
    }

    /// Count pixels that any shape has touched (alpha above zero).
    pub fn opaque_pixels(&self) -> usize {
        self.pixels.iter().filter(|&&p| Color(p).alpha() > 0).count()
    }
}

/// One satellite: where it sits on its orbit and what it looks like.
#[derive(Clone, Copy, Debug)]
pub struct Planet {
    pub distance: f64,  // orbit radius, pixels from the canvas centre
    pub angle_deg: f64, // 0° = +x, growing clockwise on screen (y points down)
    pub color: Color,
}
