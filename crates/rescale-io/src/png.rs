use std::{fs::File, path::Path};

use png::{BitDepth, ColorType, Decoder, Encoder};
use rescale_image::{Image, ImageSize};

use crate::error::IoError;

/// Read a PNG image with four channels (rgba8).
///
/// RGB files are expanded with an opaque alpha channel; other color types
/// are rejected.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A RGBA image with four channels (rgba8).
pub fn read_image_png_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    let (buf, size, color_type) = read_png_impl(file_path)?;

    let buf = match color_type {
        ColorType::Rgba => buf,
        ColorType::Rgb => expand_rgb_to_rgba(&buf),
        ColorType::Grayscale => expand_gray_to_rgba(&buf),
        _ => {
            return Err(IoError::PngDecodeError(format!(
                "Unsupported color type: {:?}",
                color_type
            )))
        }
    };

    Ok(Image::new(size, buf)?)
}

/// Writes the given PNG _(rgba8)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image containing the PNG image data.
pub fn write_image_png_rgba8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 4>,
) -> Result<(), IoError> {
    write_png_impl(
        file_path,
        image.as_slice(),
        image.size(),
        BitDepth::Eight,
        ColorType::Rgba,
    )
}

// utility function to read the png file
fn read_png_impl(
    file_path: impl AsRef<Path>,
) -> Result<(Vec<u8>, ImageSize, ColorType), IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let file = File::open(file_path)?;
    let mut reader = Decoder::new(file)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::PngDecodeError(format!(
            "Unsupported bit depth: {:?}",
            info.bit_depth
        )));
    }

    buf.truncate(info.buffer_size());

    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };

    Ok((buf, size, info.color_type))
}

fn write_png_impl(
    file_path: impl AsRef<Path>,
    image_data: &[u8],
    image_size: ImageSize,
    depth: BitDepth,
    color_type: ColorType,
) -> Result<(), IoError> {
    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(file, image_size.width as u32, image_size.height as u32);
    encoder.set_color(color_type);
    encoder.set_depth(depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image_data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}

pub(crate) fn expand_rgb_to_rgba(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len() / 3 * 4);
    for rgb in buf.chunks_exact(3) {
        out.extend_from_slice(rgb);
        out.push(255);
    }
    out
}

pub(crate) fn expand_gray_to_rgba(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len() * 4);
    for &g in buf {
        out.extend_from_slice(&[g, g, g, 255]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoError;

    #[test]
    fn read_write_png_rgba8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");

        let size = ImageSize {
            width: 8,
            height: 5,
        };
        let data: Vec<u8> = (0..8 * 5 * 4).map(|i| (i % 256) as u8).collect();
        let image = Image::<u8, 4>::new(size, data)?;

        write_image_png_rgba8(&file_path, &image)?;
        let image_back = read_image_png_rgba8(&file_path)?;

        assert_eq!(image_back.size(), size);
        assert_eq!(image_back.as_slice(), image.as_slice());
        Ok(())
    }

    #[test]
    fn read_png_rgb8_expands_alpha() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("rgb.png");

        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let rgb: Vec<u8> = vec![
            10, 20, 30, 40, 50, 60, //
            70, 80, 90, 100, 110, 120,
        ];
        write_png_impl(&file_path, &rgb, size, BitDepth::Eight, ColorType::Rgb)?;

        let image = read_image_png_rgba8(&file_path)?;
        assert_eq!(image.num_channels(), 4);
        assert_eq!(image.pixel(0, 0)?, &[10, 20, 30, 255]);
        assert_eq!(image.pixel(1, 1)?, &[100, 110, 120, 255]);
        Ok(())
    }

    #[test]
    fn read_missing_png() {
        let res = read_image_png_rgba8("/definitely/not/here.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }
}
