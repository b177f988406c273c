//! Letterbox compositing
//!
//! Fits the downloaded satellite image into the screen area between the
//! top and bottom margins, centered on a black canvas of exactly the
//! screen dimensions. Whichever axis overflows the placement box more is
//! scaled to fit exactly; the other axis follows the aspect ratio.

use crate::error::{GeowallError, GeowallResult};
use image::imageops::{self, FilterType};
use image::{GenericImageView, RgbImage};

/// Screen geometry the composed wallpaper must match
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Pixels reserved at the top of the screen (menu bar, status bar)
    pub top_margin: u32,
    /// Pixels reserved at the bottom (taskbar, dock)
    pub bottom_margin: u32,
}

impl Geometry {
    /// Width of the placement box
    pub fn box_width(&self) -> u32 {
        self.screen_width
    }

    /// Height of the placement box (screen minus margins)
    pub fn box_height(&self) -> u32 {
        self.screen_height
            .saturating_sub(self.top_margin)
            .saturating_sub(self.bottom_margin)
    }
}

/// Decode `raw` and letterbox it onto a black screen-sized canvas
///
/// The output is always exactly `screen_width x screen_height` regardless
/// of the source aspect ratio. Decode failure propagates; there are no
/// other error conditions.
pub fn compose(raw: &[u8], geometry: &Geometry) -> GeowallResult<RgbImage> {
    let decoded =
        image::load_from_memory(raw).map_err(|source| GeowallError::Decode { source })?;
    let (old_width, old_height) = decoded.dimensions();

    let (new_width, new_height) = fit_dimensions(
        old_width,
        old_height,
        geometry.box_width(),
        geometry.box_height(),
    );

    let resized = decoded
        .resize_exact(new_width, new_height, FilterType::CatmullRom)
        .to_rgb8();

    // A fresh RgbImage is zero-filled, i.e. solid black
    let mut canvas = RgbImage::new(geometry.screen_width, geometry.screen_height);

    let paste_x = round_half((geometry.box_width() as i64) - (new_width as i64));
    let paste_y =
        round_half((geometry.box_height() as i64) - (new_height as i64)) + geometry.top_margin as i64;
    imageops::replace(&mut canvas, &resized, paste_x, paste_y);

    Ok(canvas)
}

/// Pick the scaled dimensions for the placement box
///
/// The axis with the larger overflow relative to the box is clamped to
/// the box; the other axis preserves aspect ratio, rounded to nearest.
fn fit_dimensions(old_width: u32, old_height: u32, box_width: u32, box_height: u32) -> (u32, u32) {
    let width_overflow = old_width as i64 - box_width as i64;
    let height_overflow = old_height as i64 - box_height as i64;

    if width_overflow > height_overflow {
        let new_height = (old_height as f64 / old_width as f64 * box_width as f64).round() as u32;
        (box_width, new_height.max(1))
    } else {
        let new_width = (old_width as f64 / old_height as f64 * box_height as f64).round() as u32;
        (new_width.max(1), box_height.max(1))
    }
}

/// round(n / 2) for possibly-negative offsets
fn round_half(n: i64) -> i64 {
    (n as f64 / 2.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::Rgb;

    fn geometry() -> Geometry {
        Geometry {
            screen_width: 800,
            screen_height: 600,
            top_margin: 50,
            bottom_margin: 100,
        }
    }

    fn encode_png(img: &RgbImage) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_with_encoder(PngEncoder::new(&mut buf)).unwrap();
        buf
    }

    fn solid(width: u32, height: u32, pixel: Rgb<u8>) -> Vec<u8> {
        encode_png(&RgbImage::from_fn(width, height, |_, _| pixel))
    }

    #[test]
    fn output_is_exactly_screen_sized() {
        let geometry = geometry();
        for (w, h) in [(100, 100), (3000, 500), (500, 3000), (1, 1)] {
            let composed = compose(&solid(w, h, Rgb([200, 10, 10])), &geometry).unwrap();
            assert_eq!(composed.dimensions(), (800, 600), "source {}x{}", w, h);
        }
    }

    #[test]
    fn wide_source_fills_box_width() {
        // Box is 800x450; a 1600x400 source overflows width far more than height
        let composed = compose(&solid(1600, 400, Rgb([255, 255, 255])), &geometry()).unwrap();
        // Scaled to 800x200, pasted at x=0, y=round((450-200)/2)+50 = 175
        assert_eq!(composed.get_pixel(0, 175), &Rgb([255, 255, 255]));
        assert_eq!(composed.get_pixel(799, 175), &Rgb([255, 255, 255]));
        // Above and below the pasted band stays black
        assert_eq!(composed.get_pixel(400, 100), &Rgb([0, 0, 0]));
        assert_eq!(composed.get_pixel(400, 500), &Rgb([0, 0, 0]));
    }

    #[test]
    fn tall_source_fills_box_height() {
        // 400x1600 source overflows height more than width
        let composed = compose(&solid(400, 1600, Rgb([255, 255, 255])), &geometry()).unwrap();
        // Scaled to round(400/1600*450)=113 x 450, pasted at
        // x=round((800-113)/2)=344, y=0+50
        assert_eq!(composed.get_pixel(400, 50), &Rgb([255, 255, 255]));
        assert_eq!(composed.get_pixel(400, 499), &Rgb([255, 255, 255]));
        // Left and right of the band stays black
        assert_eq!(composed.get_pixel(100, 275), &Rgb([0, 0, 0]));
        assert_eq!(composed.get_pixel(700, 275), &Rgb([0, 0, 0]));
    }

    #[test]
    fn fit_clamps_the_axis_with_larger_overflow() {
        // Wider-relative: width clamps, height derived
        assert_eq!(fit_dimensions(1600, 400, 800, 450), (800, 200));
        // Taller-relative: height clamps, width derived
        assert_eq!(fit_dimensions(400, 1600, 800, 450), (113, 450));
        // Square source in a square-ish box: equal overflow goes to the
        // height branch
        assert_eq!(fit_dimensions(1000, 1000, 500, 500), (500, 500));
    }

    #[test]
    fn margins_offset_the_paste_down() {
        // A source matching the box exactly lands at y = top_margin
        let composed = compose(&solid(800, 450, Rgb([9, 9, 9])), &geometry()).unwrap();
        assert_eq!(composed.get_pixel(0, 49), &Rgb([0, 0, 0]));
        assert_eq!(composed.get_pixel(0, 50), &Rgb([9, 9, 9]));
        assert_eq!(composed.get_pixel(0, 499), &Rgb([9, 9, 9]));
        assert_eq!(composed.get_pixel(0, 500), &Rgb([0, 0, 0]));
    }

    #[test]
    fn malformed_bytes_fail_to_decode() {
        let err = compose(b"not an image", &geometry()).unwrap_err();
        assert!(matches!(err, GeowallError::Decode { .. }));
    }
}
