use std::path::Path;

use rescale_image::Image;

use crate::error::IoError;
use crate::jpeg::{read_image_jpeg_rgba8, write_image_jpeg_rgba8};
use crate::png::{read_image_png_rgba8, write_image_png_rgba8};

/// The supported image formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageFormat {
    Jpeg,
    Png,
}

fn format_from_extension(file_path: &Path) -> Result<ImageFormat, IoError> {
    let ext = file_path
        .extension()
        .ok_or_else(|| IoError::InvalidFileExtension(file_path.to_path_buf()))?;

    if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
        Ok(ImageFormat::Jpeg)
    } else if ext.eq_ignore_ascii_case("png") {
        Ok(ImageFormat::Png)
    } else {
        Err(IoError::InvalidFileExtension(file_path.to_path_buf()))
    }
}

/// Reads a JPEG or PNG image from the given file path as rgba8.
///
/// The format is selected by the file extension (`.jpg`, `.jpeg`, `.png`,
/// case-insensitive).
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A RGBA image with four channels (rgba8).
pub fn read_image_any_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    let file_path = file_path.as_ref();
    match format_from_extension(file_path)? {
        ImageFormat::Jpeg => read_image_jpeg_rgba8(file_path),
        ImageFormat::Png => read_image_png_rgba8(file_path),
    }
}

/// Writes a rgba8 image to the given file path as JPEG or PNG.
///
/// The format is selected by the file extension; JPEG is written at maximum
/// quality, matching the fidelity of the resampled buffer as closely as the
/// codec allows.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `image` - The image to write.
pub fn write_image_any_rgba8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 4>,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    match format_from_extension(file_path)? {
        ImageFormat::Jpeg => write_image_jpeg_rgba8(file_path, image, 100),
        ImageFormat::Png => write_image_png_rgba8(file_path, image),
    }
}
