use rescale_image::{Image, ImageSize};

use crate::error::ResizeError;
use crate::interpolation::{interpolate_pixel, CoordMapper, InterpolationMode};
use crate::parallel::{self, ExecutionStrategy};

/// Resize an image to a new size.
///
/// The function resamples the source image into a newly allocated output
/// buffer using the specified interpolation mode. Output pixels are computed
/// independently, so the pixel range can be fanned out across workers; every
/// output pixel is written exactly once by exactly one worker.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `new_size` - The target size of the output image.
/// * `interpolation` - The interpolation mode to use.
/// * `strategy` - The execution strategy for the pixel loop.
///
/// # Returns
///
/// The resampled image with the new size.
///
/// # Errors
///
/// Fails before any pixel is processed when the target size is zero, when
/// bicubic is requested for a source smaller than 4x4, or when the worker
/// configuration is invalid.
///
/// # Example
///
/// ```
/// use rescale_image::{Image, ImageSize};
/// use rescale_imgproc::interpolation::InterpolationMode;
/// use rescale_imgproc::parallel::ExecutionStrategy;
/// use rescale_imgproc::resize::resize;
///
/// let image = Image::<u8, 4>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 4],
/// )
/// .unwrap();
///
/// let resized = resize(
///     &image,
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     InterpolationMode::Bilinear,
///     ExecutionStrategy::Serial,
/// )
/// .unwrap();
///
/// assert_eq!(resized.num_channels(), 4);
/// assert_eq!(resized.size().width, 2);
/// assert_eq!(resized.size().height, 3);
/// ```
pub fn resize<const C: usize>(
    src: &Image<u8, C>,
    new_size: ImageSize,
    interpolation: InterpolationMode,
    strategy: ExecutionStrategy,
) -> Result<Image<u8, C>, ResizeError> {
    if new_size.width == 0 || new_size.height == 0 {
        return Err(ResizeError::InvalidImageSize(new_size.width, new_size.height));
    }

    // the bicubic spline needs 4 support points per axis
    if interpolation == InterpolationMode::Bicubic && (src.width() < 4 || src.height() < 4) {
        return Err(ResizeError::SourceTooSmall(src.width(), src.height()));
    }

    let mapper = CoordMapper::new(src.size(), new_size);

    let mut dst = Image::from_size_val(new_size, 0u8)?;

    let dst_cols = new_size.width;
    let num_pixels = new_size.width * new_size.height;

    parallel::for_each_span(
        dst.as_slice_mut(),
        C,
        num_pixels,
        strategy,
        |first, span| {
            for (i, pixel) in span.chunks_exact_mut(C).enumerate() {
                let idx = first + i;
                let x = idx % dst_cols;
                let y = idx / dst_cols;

                let value = interpolate_pixel(src, &mapper, x, y, interpolation);
                pixel.copy_from_slice(&value);
            }
        },
    )?;

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const GREEN: [u8; 4] = [0, 255, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const YELLOW: [u8; 4] = [255, 255, 0, 255];

    fn corners_2x2() -> Image<u8, 4> {
        let mut data = Vec::with_capacity(2 * 2 * 4);
        for color in [RED, GREEN, BLUE, YELLOW] {
            data.extend_from_slice(&color);
        }
        Image::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            data,
        )
        .unwrap()
    }

    fn pixel(img: &Image<u8, 4>, x: usize, y: usize) -> [u8; 4] {
        let mut out = [0u8; 4];
        out.copy_from_slice(img.pixel(x, y).unwrap());
        out
    }

    fn assert_pixel_near(got: [u8; 4], want: [u8; 4], x: usize, y: usize) {
        for c in 0..4 {
            let diff = got[c].abs_diff(want[c]);
            assert!(
                diff <= 1,
                "pixel ({x}, {y}) channel {c}: got {:?}, want {:?} (±1)",
                got,
                want
            );
        }
    }

    #[test]
    fn nearest_upscale_produces_uniform_blocks() -> Result<(), ResizeError> {
        let src = corners_2x2();
        let dst = resize(
            &src,
            ImageSize {
                width: 6,
                height: 6,
            },
            InterpolationMode::Nearest,
            ExecutionStrategy::Serial,
        )?;

        // four exact 3x3 blocks matching the source corners
        for y in 0..6 {
            for x in 0..6 {
                let want = match (x / 3, y / 3) {
                    (0, 0) => RED,
                    (1, 0) => GREEN,
                    (0, 1) => BLUE,
                    _ => YELLOW,
                };
                assert_eq!(pixel(&dst, x, y), want, "pixel ({x}, {y})");
            }
        }
        Ok(())
    }

    #[test]
    fn bilinear_upscale_matches_weighted_averages() -> Result<(), ResizeError> {
        let src = corners_2x2();
        let dst = resize(
            &src,
            ImageSize {
                width: 6,
                height: 6,
            },
            InterpolationMode::Bilinear,
            ExecutionStrategy::Serial,
        )?;

        // 2x2 corner blocks reproduce the source exactly
        for (bx, by, want) in [(0, 0, RED), (4, 0, GREEN), (0, 4, BLUE), (4, 4, YELLOW)] {
            for y in 0..2 {
                for x in 0..2 {
                    assert_eq!(pixel(&dst, bx + x, by + y), want, "corner ({bx}, {by})");
                }
            }
        }

        // edge blends at the 1-in-3 and 2-in-3 points
        for y in 0..2 {
            assert_pixel_near(pixel(&dst, 2, y), [170, 85, 0, 255], 2, y);
            assert_pixel_near(pixel(&dst, 3, y), [85, 170, 0, 255], 3, y);
            assert_pixel_near(pixel(&dst, 2, y + 4), [85, 85, 170, 255], 2, y + 4);
            assert_pixel_near(pixel(&dst, 3, y + 4), [170, 170, 85, 255], 3, y + 4);
        }
        for x in 0..2 {
            assert_pixel_near(pixel(&dst, x, 2), [170, 0, 85, 255], x, 2);
            assert_pixel_near(pixel(&dst, x, 3), [85, 0, 170, 255], x, 3);
            assert_pixel_near(pixel(&dst, x + 4, 2), [85, 255, 0, 255], x + 4, 2);
            assert_pixel_near(pixel(&dst, x + 4, 3), [170, 255, 0, 255], x + 4, 3);
        }

        // center blends over all four corners
        assert_pixel_near(pixel(&dst, 2, 2), [141, 85, 56, 255], 2, 2);
        assert_pixel_near(pixel(&dst, 3, 2), [113, 170, 28, 255], 3, 2);
        assert_pixel_near(pixel(&dst, 2, 3), [113, 85, 113, 255], 2, 3);
        assert_pixel_near(pixel(&dst, 3, 3), [141, 170, 56, 255], 3, 3);

        Ok(())
    }

    #[test]
    fn bicubic_rejects_small_sources() {
        for (w, h) in [(3, 5), (5, 3), (1, 1)] {
            let src = Image::<u8, 4>::from_size_val(
                ImageSize {
                    width: w,
                    height: h,
                },
                0,
            )
            .unwrap();

            let res = resize(
                &src,
                ImageSize {
                    width: 8,
                    height: 8,
                },
                InterpolationMode::Bicubic,
                ExecutionStrategy::Serial,
            );
            assert!(
                matches!(res, Err(ResizeError::SourceTooSmall(sw, sh) ) if sw == w && sh == h),
                "{w}x{h} source must be rejected"
            );
        }
    }

    #[test]
    fn zero_target_size_is_rejected() {
        let src = corners_2x2();
        let res = resize(
            &src,
            ImageSize {
                width: 0,
                height: 6,
            },
            InterpolationMode::Nearest,
            ExecutionStrategy::Serial,
        );
        assert!(matches!(res, Err(ResizeError::InvalidImageSize(0, 6))));
    }

    #[test]
    fn resampling_to_the_same_size_is_identity() -> Result<(), ResizeError> {
        let size = ImageSize {
            width: 7,
            height: 5,
        };
        let data: Vec<u8> = (0..7 * 5 * 4).map(|i| ((i * 37 + 11) % 256) as u8).collect();
        let src = Image::<u8, 4>::new(size, data)?;

        for mode in [
            InterpolationMode::Nearest,
            InterpolationMode::Bilinear,
            InterpolationMode::Bicubic,
        ] {
            let dst = resize(&src, size, mode, ExecutionStrategy::Serial)?;
            assert_eq!(dst.as_slice(), src.as_slice(), "{mode} identity");
        }
        Ok(())
    }

    #[test]
    fn parallel_and_serial_results_are_identical() -> Result<(), ResizeError> {
        let size = ImageSize {
            width: 9,
            height: 7,
        };
        let data: Vec<u8> = (0..9 * 7 * 4).map(|i| ((i * 73 + 5) % 256) as u8).collect();
        let src = Image::<u8, 4>::new(size, data)?;

        let new_size = ImageSize {
            width: 23,
            height: 11,
        };

        for mode in [
            InterpolationMode::Nearest,
            InterpolationMode::Bilinear,
            InterpolationMode::Bicubic,
        ] {
            let serial = resize(&src, new_size, mode, ExecutionStrategy::Serial)?;
            let fixed = resize(&src, new_size, mode, ExecutionStrategy::Fixed(4))?;
            let parallel = resize(&src, new_size, mode, ExecutionStrategy::Parallel)?;

            assert_eq!(serial.as_slice(), fixed.as_slice(), "{mode} fixed");
            assert_eq!(serial.as_slice(), parallel.as_slice(), "{mode} parallel");
        }
        Ok(())
    }

    #[test]
    fn bicubic_overshoot_is_clamped_not_wrapped() -> Result<(), ResizeError> {
        // columns [0, 255, 255, 0]: the spline exceeds 255 between the two
        // bright columns, and a wrapping conversion would produce a dark value
        let row: [u8; 4] = [0, 255, 255, 0];
        let data: Vec<u8> = (0..4 * 4).map(|i| row[i % 4]).collect();
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            data,
        )?;

        let dst = resize(
            &src,
            ImageSize {
                width: 8,
                height: 8,
            },
            InterpolationMode::Bicubic,
            ExecutionStrategy::Serial,
        )?;

        // (3, 4) maps to (1.25, 1.75): interior on both axes, x spline value
        // 278.9 before clamping
        assert_eq!(dst.pixel(3, 4).unwrap(), &[255]);
        Ok(())
    }

    #[test]
    fn bicubic_undershoot_is_clamped_not_wrapped() -> Result<(), ResizeError> {
        let row: [u8; 4] = [255, 0, 0, 255];
        let data: Vec<u8> = (0..4 * 4).map(|i| row[i % 4]).collect();
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            data,
        )?;

        let dst = resize(
            &src,
            ImageSize {
                width: 8,
                height: 8,
            },
            InterpolationMode::Bicubic,
            ExecutionStrategy::Serial,
        )?;

        assert_eq!(dst.pixel(3, 4).unwrap(), &[0]);
        Ok(())
    }

    #[test]
    fn downscale_smoke() -> Result<(), ResizeError> {
        let src = Image::<u8, 4>::from_size_val(
            ImageSize {
                width: 64,
                height: 48,
            },
            200,
        )?;

        for mode in [
            InterpolationMode::Nearest,
            InterpolationMode::Bilinear,
            InterpolationMode::Bicubic,
        ] {
            let dst = resize(
                &src,
                ImageSize {
                    width: 17,
                    height: 13,
                },
                mode,
                ExecutionStrategy::Parallel,
            )?;
            assert_eq!(dst.size().width, 17);
            assert_eq!(dst.size().height, 13);
            // constant image stays constant under every kernel
            assert!(dst.as_slice().iter().all(|&v| v == 200));
        }
        Ok(())
    }
}
