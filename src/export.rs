// Turns the packed canvas into an `image` RGBA buffer and writes it as PNG.
// Visual expectation: the file opens in any viewer as a 256x256 icon on a
// transparent (checkerboard) background.

use crate::error::Error;
use crate::types::{Canvas, Color};
use image::{ImageError, ImageFormat, RgbaImage};
use std::path::Path;

/// Repack 0xAARRGGBB pixels into the byte-per-channel layout `image` expects.
pub fn to_rgba_image(canvas: &Canvas) -> Result<RgbaImage, Error> {
    let mut raw = Vec::with_capacity(canvas.pixels.len() * 4);
    for &px in &canvas.pixels {
        raw.extend_from_slice(&Color(px).to_rgba());
    }

    RgbaImage::from_raw(canvas.width as u32, canvas.height as u32, raw).ok_or_else(|| {
        Error::Encode(format!(
            "pixel buffer does not match {}x{}",
            canvas.width, canvas.height
        ))
    })
}

/// Encode `canvas` as RGBA PNG and write it to `path`.
/// An existing file is truncated and replaced; nothing is cleaned up on failure.
pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let img = to_rgba_image(canvas)?;

    img.save_with_format(path, ImageFormat::Png).map_err(|e| match e {
        ImageError::IoError(io) => Error::Write(format!("{}: {io}", path.display())),
        other => Error::Encode(format!("{}: {other}", path.display())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::put_pixel;
    use std::path::PathBuf;

    fn temp_png(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("orrery-icon-{}-{name}.png", std::process::id()))
    }

    #[test]
    fn to_rgba_image_keeps_channel_order_and_alpha() {
        let mut c = Canvas::new_transparent(2, 1).unwrap();
        put_pixel(&mut c, 1, 0, Color::rgb(1, 2, 3));

        let img = to_rgba_image(&c).unwrap();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [1, 2, 3, 255]);
    }

    #[test]
    fn mismatched_buffer_is_an_encode_error() {
        let c = Canvas { width: 3, height: 3, pixels: vec![0; 4] };
        assert!(matches!(to_rgba_image(&c), Err(Error::Encode(_))));
    }

    #[test]
    fn save_png_writes_decodable_rgba() {
        let path = temp_png("rgba");
        let mut c = Canvas::new_transparent(5, 4).unwrap();
        put_pixel(&mut c, 2, 3, Color::rgb(0xFF, 0xD7, 0x00));
        save_png(&c, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        let rgba = decoded.to_rgba8();
        assert_eq!(rgba.dimensions(), (5, 4));
        assert_eq!(rgba.get_pixel(2, 3).0, [0xFF, 0xD7, 0x00, 0xFF]);
        assert_eq!(rgba.get_pixel(0, 0).0[3], 0);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let c = Canvas::new_transparent(1, 1).unwrap();
        let path = std::env::temp_dir()
            .join("orrery-icon-no-such-dir")
            .join("nested")
            .join("icon.png");
        assert!(matches!(save_png(&c, &path), Err(Error::Write(_))));
    }
}
