#![no_main]

use std::num::NonZeroU8;

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgb_data: Vec<u8>,
}

impl StructuredImage {
    fn to_png(&self) -> Vec<u8> {
        use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};

        let mut bytes = Vec::new();
        let encoder = PngEncoder::new_with_quality(
            &mut bytes,
            image::codecs::png::CompressionType::Fast,
            image::codecs::png::FilterType::NoFilter,
        );
        encoder
            .write_image(
                &self.rgb_data,
                u32::from(self.width.get()),
                u32::from(self.height.get()),
                ExtendedColorType::Rgb8,
            )
            .expect("failed to encode image as PNG");
        bytes
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgb_data_len = width.get() as usize * height.get() as usize * 3;
        let rgb_data = unstructured.bytes(rgb_data_len)?;

        Ok(Self {
            width,
            height,
            rgb_data: rgb_data.to_vec(),
        })
    }
}

fuzz_target!(|input: StructuredImage| {
    let converted = wondergray::convert::convert_to_grayscale(&input.to_png())
        .expect("conversion of a valid RGB PNG must succeed");

    let output = image::load_from_memory(&converted).expect("output must decode");

    // Contract: dimensions are preserved.
    assert_eq!(output.width(), u32::from(input.width.get()));
    assert_eq!(output.height(), u32::from(input.height.get()));

    // Contract: every output pixel is the truncated weighted sum of the input pixel.
    let gray = output.as_luma8().expect("output must be 8-bit grayscale");
    for (rgb, luma) in input.rgb_data.chunks_exact(3).zip(gray.as_raw()) {
        let expected = (f64::from(rgb[0]) * 0.2126
            + f64::from(rgb[1]) * 0.7152
            + f64::from(rgb[2]) * 0.0722) as u8;
        assert_eq!(*luma, expected);
    }
});
