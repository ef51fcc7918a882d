use rescale_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `src` - The source image container.
/// * `u` - The x index of the source pixel to copy.
/// * `v` - The y index of the source pixel to copy.
///
/// # Returns
///
/// The copied pixel values.
///
/// The integer mapping guarantees `u < src.cols()` and `v < src.rows()`,
/// so no boundary handling is needed here.
pub(crate) fn nearest_pixel<const C: usize>(src: &Image<u8, C>, u: usize, v: usize) -> [u8; C] {
    let base = (v * src.cols() + u) * C;

    let mut pixel = [0u8; C];
    pixel.copy_from_slice(&src.as_slice()[base..base + C]);

    pixel
}

#[cfg(test)]
mod tests {
    use super::*;
    use rescale_image::{ImageError, ImageSize};

    #[test]
    fn copies_the_addressed_pixel() -> Result<(), ImageError> {
        let src = Image::<u8, 2>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![10, 11, 20, 21, 30, 31, 40, 41],
        )?;

        assert_eq!(nearest_pixel(&src, 0, 0), [10, 11]);
        assert_eq!(nearest_pixel(&src, 1, 0), [20, 21]);
        assert_eq!(nearest_pixel(&src, 0, 1), [30, 31]);
        assert_eq!(nearest_pixel(&src, 1, 1), [40, 41]);

        Ok(())
    }
}
