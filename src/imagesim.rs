use anyhow::Result;
use image::{Rgb, RgbImage};

use crate::color::Color;
use crate::cvd::{self, DeficiencyType};

/// Render a CVD-simulated copy of an image for side-by-side comparison.
/// The transform matrix is derived once for the image and applied per
/// pixel, with each output channel clipped to the 8-bit display range.
pub fn simulate_image(
    src: &RgbImage,
    deficiency: DeficiencyType,
    severity: i32,
) -> Result<RgbImage> {
    let m = cvd::deficiency_matrix(deficiency, severity)?;

    let mut out = RgbImage::new(src.width(), src.height());
    for (x, y, pixel) in src.enumerate_pixels() {
        let color = Color::from_srgb8(pixel[0], pixel[1], pixel[2]);
        let (r, g, b) = cvd::simulate_with_matrix(&color, &m)?.to_rgb8()?;
        out.put_pixel(x, y, Rgb([r, g, b]));
    }

    Ok(out)
}
