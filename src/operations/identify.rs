use image::ColorType;

use crate::image::Image;

// https://imagemagick.org/script/command-line-options.php#identify
pub fn identify(image: &Image) -> String {
    let mut parts = Vec::new();

    if let Some(format) = image.format {
        parts.push(format.extensions_str()[0].to_uppercase());
    }

    parts.push(format!(
        "{}x{}",
        image.pixels.width(),
        image.pixels.height()
    ));

    let color = image.pixels.color();
    parts.push(format!(
        "{}-bit",
        color.bits_per_pixel() / u16::from(color.channel_count())
    ));
    parts.push(colorspace(color).to_owned());

    parts.join(" ")
}

fn colorspace(color: ColorType) -> &'static str {
    use ColorType::*;
    match color {
        L8 | L16 | La8 | La16 => "Gray",
        Rgb8 | Rgba8 | Rgb16 | Rgba16 | Rgb32F | Rgba32F => "sRGB",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat};
    use quickcheck_macros::quickcheck;
    use std::num::NonZeroU8;

    #[quickcheck]
    // u8::MAX * u8::MAX is a large enough space for
    // quickcheck to explore and verify and still runs quickly
    fn identify_rgb(width: NonZeroU8, height: NonZeroU8) -> bool {
        let width = u32::from(width.get());
        let height = u32::from(height.get());
        let image = Image {
            format: Some(ImageFormat::Png),
            pixels: DynamicImage::new_rgb8(width, height),
        };
        identify(&image) == format!("PNG {width}x{height} 8-bit sRGB")
    }

    #[test]
    fn identify_without_format() {
        // may happen when the decoder recognized the bytes but the reader did not record a format
        let image = Image {
            format: None,
            pixels: DynamicImage::new_luma8(4, 2),
        };
        assert_eq!(identify(&image), "4x2 8-bit Gray");
    }
}
