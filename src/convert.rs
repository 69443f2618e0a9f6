//! The decode -> grayscale -> re-encode pipelines behind the public entry points.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use crate::{
    decode, encode, error::GrayError, filename_utils::insert_suffix_before_extension_in_path,
    operations,
};

/// Inserted into output filenames, before the extension.
const OUTPUT_SUFFIX: &str = "_grayscale";

/// Converts an RGB image file to grayscale and saves the result to disk.
///
/// The output lands next to the input as `{stem}_grayscale{extension}`,
/// re-encoded in the input's detected container format regardless of what
/// the extension claims. An existing file at that path is overwritten.
///
/// Returns the path of the resulting grayscale file.
pub fn convert_file_to_grayscale(path: &Path) -> Result<PathBuf, GrayError> {
    let mut image = decode::decode_file(path)?;
    operations::grayscale(&mut image)?;

    let out_path = PathBuf::from(insert_suffix_before_extension_in_path(
        path.as_os_str(),
        OsStr::new(OUTPUT_SUFFIX),
    ));
    encode::encode_file(&image, &out_path)?;
    Ok(out_path)
}

/// Converts the image in the given buffer to grayscale,
/// returning the re-encoded bytes in the same container format as the input.
pub fn convert_to_grayscale(buffer: &[u8]) -> Result<Vec<u8>, GrayError> {
    let mut image = decode::decode_buffer(buffer)?;
    operations::grayscale(&mut image)?;
    encode::encode_buffer(&image)
}
