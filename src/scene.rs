// The icon itself: a gold sun, three faint orbit rings, three coloured planets.
// Visual expectation: after `render_scene`, the canvas holds the finished icon
// on a transparent background, ready for `export::save_png`.

use crate::draw::{fill_circle, stroke_circle};
use crate::error::Error;
use crate::types::{Canvas, Color, Planet};
use log::debug;

pub const ICON_SIZE: usize = 256;
pub const CENTER: (f64, f64) = (128.0, 128.0);

/* --- Orbits --- Visual: thin light-gray circles, drawn first so everything sits on top. */
pub const ORBIT_RADII: [f64; 3] = [70.0, 90.0, 110.0];
pub const ORBIT_COLOR: Color = Color::rgb(0xCC, 0xCC, 0xCC);

/* --- Sun --- */
pub const SUN_RADIUS: f64 = 50.0;
pub const SUN_COLOR: Color = Color::rgb(0xFF, 0xD7, 0x00);

/* --- Planets --- Visual: one small disc sitting on each orbit. */
pub const PLANET_RADIUS: f64 = 10.0;
pub const PLANETS: [Planet; 3] = [
    Planet { distance: 70.0, angle_deg: 0.0, color: Color::rgb(0x00, 0x00, 0xFF) },
    Planet { distance: 90.0, angle_deg: 120.0, color: Color::rgb(0x00, 0xFF, 0x00) },
    Planet { distance: 110.0, angle_deg: 240.0, color: Color::rgb(0xFF, 0x00, 0x00) },
];

/// Polar (distance, degrees) around the icon centre -> canvas coordinates.
pub fn polar_to_xy(distance: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    (CENTER.0 + distance * theta.cos(), CENTER.1 + distance * theta.sin())
}

/// Paint the whole icon onto `canvas`, back to front.
pub fn render_scene(canvas: &mut Canvas) {
    let (cx, cy) = CENTER;

    for r in ORBIT_RADII {
        stroke_circle(canvas, cx, cy, r, ORBIT_COLOR);
    }
    debug!("orbits drawn: {:?}", ORBIT_RADII);

    fill_circle(canvas, cx, cy, SUN_RADIUS, SUN_COLOR);

    for planet in PLANETS.iter() {
        let (x, y) = polar_to_xy(planet.distance, planet.angle_deg);
        fill_circle(canvas, x, y, PLANET_RADIUS, planet.color);
        debug!("planet at ({x:.2}, {y:.2}) color {:#010x}", planet.color.0);
    }
}

/// Allocate a transparent icon-sized canvas and render the scene into it.
pub fn build_icon() -> Result<Canvas, Error> {
    let mut canvas = Canvas::new_transparent(ICON_SIZE, ICON_SIZE)?;
    render_scene(&mut canvas);
    debug!("{} of {} pixels painted", canvas.opaque_pixels(), canvas.pixels.len());
    Ok(canvas)
}
