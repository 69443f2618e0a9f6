use std::{
    fs::File,
    io::{BufWriter, Cursor, Write},
    path::Path,
};

use image::ImageFormat;

use crate::{
    error::{ErrorKind, GrayError},
    image::Image,
    wg_err, wg_try,
};

/// Encodes `image` to a file at `path` in the format recorded at decode time.
pub fn encode_file(image: &Image, path: &Path) -> Result<(), GrayError> {
    let format = encoding_format(image)?;

    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path).map_err(|err| {
        wg_err!(
            ErrorKind::Io,
            "unable to open image `{}': {}",
            path.display(),
            err
        )
    })?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);
    wg_try!(ErrorKind::Encode, image.pixels.write_to(&mut writer, format));

    // The buffers are flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    wg_try!(ErrorKind::Io, writer.flush());
    Ok(())
}

/// Encodes `image` into a fresh in-memory buffer in the format recorded at decode time.
pub fn encode_buffer(image: &Image) -> Result<Vec<u8>, GrayError> {
    let format = encoding_format(image)?;

    // Some of the encoders require Seek, which a plain Vec doesn't implement.
    let mut writer = Cursor::new(Vec::new());
    wg_try!(ErrorKind::Encode, image.pixels.write_to(&mut writer, format));
    Ok(writer.into_inner())
}

fn encoding_format(image: &Image) -> Result<ImageFormat, GrayError> {
    image
        .format
        .ok_or_else(|| wg_err!(ErrorKind::Encode, "no encode delegate for this image format"))
}
