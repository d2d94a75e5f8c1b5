// Renders the orrery icon once and writes it next to wherever you run this.
// What you get: `icon.png`, 256x256 RGBA with a gold sun, three gray orbit rings,
// and a blue, green and red planet on transparent background.
// No arguments; running it again simply overwrites the file.

mod draw;
mod error;
mod export;
mod scene;
mod types;

use error::Error;
use log::{debug, info};
use std::path::Path;

const OUTPUT_PATH: &str = "icon.png";

/// Build the icon and write it to `path` as PNG.
fn render_icon(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let canvas = scene::build_icon()?;
    if let Some(sun) = canvas.get(canvas.width / 2, canvas.height / 2) {
        debug!("centre pixel {:#010x}", sun.0);
    }
    export::save_png(&canvas, path)?;
    info!("wrote {}x{} icon to {}", canvas.width, canvas.height, path.display());
    Ok(())
}

fn main() -> Result<(), Error> {
    // Quiet by default; RUST_LOG=debug shows each drawing step.
    env_logger::init();

    render_icon(OUTPUT_PATH)
}
