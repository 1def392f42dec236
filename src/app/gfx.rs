// src/app/gfx.rs
use eframe::egui::{self as eg, ColorImage, TextureHandle};

use crate::model::PosterFile;

const PREVIEW_MAX_W: u32 = 240;
const PREVIEW_MAX_H: u32 = 360;

/// Upload an RGBA image to a GPU texture. (UI thread only)
pub fn upload_rgba(
    ctx: &eg::Context,
    w: u32,
    h: u32,
    bytes: &[u8],
    name: &str,
) -> TextureHandle {
    let img = ColorImage::from_rgba_unmultiplied([w as usize, h as usize], bytes);
    ctx.load_texture(name.to_string(), img, eg::TextureOptions::LINEAR)
}

/// Decode the selected poster into a small RGBA thumbnail.
pub fn decode_preview(poster: &PosterFile) -> Result<(u32, u32, Vec<u8>), String> {
    let bytes = poster
        .read_bytes()
        .map_err(|e| format!("read {}: {e}", poster.name))?;
    let img = image::load_from_memory(&bytes).map_err(|e| format!("decode {}: {e}", poster.name))?;
    let thumb = img.thumbnail(PREVIEW_MAX_W, PREVIEW_MAX_H).to_rgba8();
    let (w, h) = thumb.dimensions();
    Ok((w, h, thumb.into_raw()))
}

/// (UI thread only)
pub fn load_preview(ctx: &eg::Context, poster: &PosterFile) -> Result<TextureHandle, String> {
    let (w, h, rgba) = decode_preview(poster)?;
    Ok(upload_rgba(ctx, w, h, &rgba, &format!("poster-preview:{}", poster.name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([200, 10, 10, 255]));
        let mut out = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn preview_is_scaled_down_keeping_aspect() {
        let poster = PosterFile::from_bytes("big.png", Arc::from(png_bytes(1000, 1500)));
        let (w, h, rgba) = decode_preview(&poster).unwrap();
        assert_eq!((w, h), (240, 360));
        assert_eq!(rgba.len(), (w * h * 4) as usize);
    }

    #[test]
    fn non_image_has_no_preview() {
        let poster = PosterFile::from_bytes("notes.txt", Arc::from(&b"hello"[..]));
        assert!(decode_preview(&poster).is_err());
    }
}
