use std::{fs, path::Path};

use jpeg_encoder::{ColorType, Encoder};
use rescale_image::{Image, ImageSize};

use crate::error::IoError;
use crate::png::{expand_gray_to_rgba, expand_rgb_to_rgba};

/// Read a JPEG image with four channels (rgba8).
///
/// JPEG has no alpha channel; decoded RGB (or grayscale) data is expanded
/// with an opaque alpha channel.
///
/// # Arguments
///
/// - `file_path` - The path to the JPEG file.
///
/// # Returns
///
/// A RGBA image with four channels (rgba8).
pub fn read_image_jpeg_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let jpeg_data = fs::read(file_path)?;
    let mut decoder = zune_jpeg::JpegDecoder::new(jpeg_data);
    decoder.decode_headers()?;

    let image_info = decoder.info().ok_or_else(|| {
        IoError::JpegDecodingError(zune_jpeg::errors::DecodeErrors::Format(String::from(
            "Failed to find image info from its metadata",
        )))
    })?;

    let image_size = ImageSize {
        width: image_info.width as usize,
        height: image_info.height as usize,
    };

    let img_data = decoder.decode()?;

    // the decoder emits RGB for color images and a single plane for
    // grayscale ones
    let num_pixels = image_size.width * image_size.height;
    let rgba = match img_data.len() / num_pixels {
        4 => img_data,
        3 => expand_rgb_to_rgba(&img_data),
        1 => expand_gray_to_rgba(&img_data),
        channels => {
            return Err(IoError::JpegDecodingError(
                zune_jpeg::errors::DecodeErrors::Format(format!(
                    "Unsupported number of channels: {}",
                    channels
                )),
            ))
        }
    };

    Ok(Image::new(image_size, rgba)?)
}

/// Writes the given JPEG _(rgba8)_ data to the given file path.
///
/// The alpha channel is dropped by the encoder; JPEG stores no alpha.
///
/// # Arguments
///
/// - `file_path` - The path to the JPEG image.
/// - `image` - The image containing the JPEG image data.
/// - `quality` - The quality of the JPEG encoding, range from 0 (lowest) to 100 (highest)
pub fn write_image_jpeg_rgba8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 4>,
    quality: u8,
) -> Result<(), IoError> {
    let image_size = image.size();
    let encoder = Encoder::new_file(file_path, quality)?;
    encoder.encode(
        image.as_slice(),
        image_size.width as u16,
        image_size.height as u16,
        ColorType::Rgba,
    )?;
    Ok(())
}
