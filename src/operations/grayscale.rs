use image::{DynamicImage, GrayImage};

use crate::{
    error::{ErrorKind, GrayError},
    image::Image,
    wg_err,
};

/// Converts the image to 8-bit grayscale using the luminosity method:
/// a weighted average of the RGB channels by approximate human perceptual
/// sensitivity, see <https://en.wikipedia.org/wiki/Grayscale>.
///
/// `image.pixels.grayscale()` uses the same Rec. 709 coefficients but rounds,
/// while previously generated files were produced with truncation,
/// so the transform is spelled out here instead.
pub fn grayscale(image: &mut Image) -> Result<(), GrayError> {
    let rgb = match &image.pixels {
        DynamicImage::ImageRgb8(pixels) => pixels,
        other => {
            return Err(wg_err!(
                ErrorKind::InvalidMode,
                "image is not in RGB mode: {:?}",
                other.color()
            ))
        }
    };

    let mut gray = GrayImage::new(rgb.width(), rgb.height());
    // Both pixel iterators run in row-major order, so the output lands
    // at the same coordinates without any index math.
    for (src, dst) in rgb.pixels().zip(gray.pixels_mut()) {
        dst.0 = [luminance_avg(src.0[0], src.0[1], src.0[2])];
    }

    image.pixels = DynamicImage::ImageLuma8(gray);
    Ok(())
}

/// Weighted average of the given RGB values, truncated toward zero.
///
/// Truncation means pure white maps to 254: the weights sum to slightly
/// less than 1.0 in double precision.
fn luminance_avg(r: u8, g: u8, b: u8) -> u8 {
    (f64::from(r) * 0.2126 + f64::from(g) * 0.7152 + f64::from(b) * 0.0722) as u8
}
