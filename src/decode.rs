use std::{
    io::{BufRead, Cursor, Seek},
    path::Path,
};

use image::ImageReader;

use crate::{
    error::{ErrorKind, GrayError},
    image::Image,
    wg_err, wg_try,
};

/// Decodes the file at `path`, guessing the format from the file contents.
pub fn decode_file(path: &Path) -> Result<Image, GrayError> {
    let reader = ImageReader::open(path).map_err(|err| {
        wg_err!(
            ErrorKind::Io,
            "unable to open image `{}': {}",
            path.display(),
            err
        )
    })?;
    decode_reader(reader)
}

/// Decodes an in-memory buffer, guessing the format from its contents.
pub fn decode_buffer(buffer: &[u8]) -> Result<Image, GrayError> {
    decode_reader(ImageReader::new(Cursor::new(buffer)))
}

fn decode_reader<R: BufRead + Seek>(reader: ImageReader<R>) -> Result<Image, GrayError> {
    // The format is always guessed from the content, never from the file extension,
    // so that re-encoding can preserve the real container format.
    let reader = wg_try!(ErrorKind::Io, reader.with_guessed_format());
    let format = reader.format();
    let pixels = wg_try!(ErrorKind::Decode, reader.decode());
    Ok(Image { format, pixels })
}
