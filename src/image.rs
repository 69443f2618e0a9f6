use image::{DynamicImage, ImageFormat};

#[derive(Debug, Clone)]
pub struct Image {
    /// Container format detected from the input bytes.
    /// Re-encoding uses this, so a PNG stays a PNG even behind a misleading extension.
    pub format: Option<ImageFormat>,
    pub pixels: DynamicImage,
}
