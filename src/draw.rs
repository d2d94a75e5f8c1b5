// Software drawing utilities for the icon canvas.
// Visual effects provided here:
// 1) Single pixels, clipped to the canvas.
// 2) Thin circle outlines (the orbit rings).
// 3) Solid discs (the sun and the planets).

use crate::types::{Canvas, Color};

/// Put a pixel on the canvas if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) is replaced by `color` (no blending).
#[inline]
pub fn put_pixel(canvas: &mut Canvas, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= canvas.width || y >= canvas.height {
        return;
    }
    let idx = y * canvas.width + x;
    canvas.pixels[idx] = color.0;
}

/// Integer pixel range covering [c - r, c + r], used to scan a bounding box.
#[inline]
fn span(c: f64, r: f64) -> std::ops::RangeInclusive<i32> {
    ((c - r).floor() as i32)..=((c + r).ceil() as i32)
}

/// Draw a filled disc centered at (cx,cy); the centre may be fractional.
/// A pixel is covered when its centre lies within `radius` of (cx,cy).
/// Visual: a solid round dot, no outline.
pub fn fill_circle(canvas: &mut Canvas, cx: f64, cy: f64, radius: f64, color: Color) {
    if radius < 0.0 {
        return;
    }
    let r2 = radius * radius;

    // Scan just the bounding box
    for y in span(cy, radius) {
        for x in span(cx, radius) {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if dx * dx + dy * dy <= r2 {
                put_pixel(canvas, x, y, color);
            }
        }
    }
}

/// Draw a 1-pixel circle outline centered at (cx,cy), leaving the inside untouched.
/// A pixel is on the ring when its distance to the centre is within half a pixel of `radius`.
/// Visual: a thin round line, like an orbit path.
pub fn stroke_circle(canvas: &mut Canvas, cx: f64, cy: f64, radius: f64, color: Color) {
    if radius <= 0.0 {
        return;
    }
    let inner = (radius - 0.5).max(0.0);
    let outer = radius + 0.5;
    let (inner2, outer2) = (inner * inner, outer * outer);

    for y in span(cy, outer) {
        for x in span(cx, outer) {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let d2 = dx * dx + dy * dy;
            if d2 >= inner2 && d2 < outer2 {
                put_pixel(canvas, x, y, color);
            }
        }
    }
}
