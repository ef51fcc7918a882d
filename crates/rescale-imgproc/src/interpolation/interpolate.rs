use std::str::FromStr;

use rescale_image::Image;

use super::bicubic::bicubic_pixel;
use super::bilinear::bilinear_pixel;
use super::coords::CoordMapper;
use super::nearest::nearest_pixel;
use crate::error::ResizeError;

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    #[default]
    Nearest,
    /// Bilinear interpolation
    Bilinear,
    /// Bicubic (Catmull-Rom) interpolation
    Bicubic,
}

impl std::fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            InterpolationMode::Nearest => "nearestneighbor",
            InterpolationMode::Bilinear => "bilinear",
            InterpolationMode::Bicubic => "bicubic",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for InterpolationMode {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearestneighbor" => Ok(InterpolationMode::Nearest),
            "bilinear" => Ok(InterpolationMode::Bilinear),
            "bicubic" => Ok(InterpolationMode::Bicubic),
            _ => Err(ResizeError::UnknownInterpolation(s.to_string())),
        }
    }
}

/// Kernel dispatch for interpolating one output pixel.
///
/// # Arguments
///
/// * `src` - The source image container.
/// * `mapper` - The coordinate mapper built for this resample.
/// * `x` - The x coordinate of the output pixel.
/// * `y` - The y coordinate of the output pixel.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel values.
pub fn interpolate_pixel<const C: usize>(
    src: &Image<u8, C>,
    mapper: &CoordMapper,
    x: usize,
    y: usize,
    interpolation: InterpolationMode,
) -> [u8; C] {
    match interpolation {
        InterpolationMode::Nearest => {
            let (u, v) = mapper.map_nearest(x, y);
            nearest_pixel(src, u, v)
        }
        InterpolationMode::Bilinear => {
            let (u, v) = mapper.map(x, y);
            bilinear_pixel(src, u, v)
        }
        InterpolationMode::Bicubic => {
            let (u, v) = mapper.map(x, y);
            bicubic_pixel(src, u, v)
        }
    }
}

/// Read one source pixel as per-channel f64 values.
pub(crate) fn pixel_f64<const C: usize>(src: &Image<u8, C>, x: usize, y: usize) -> [f64; C] {
    let base = (y * src.cols() + x) * C;
    let p = &src.as_slice()[base..base + C];

    let mut out = [0.0; C];
    for (o, &v) in out.iter_mut().zip(p.iter()) {
        *o = v as f64;
    }
    out
}

/// Round to nearest and clamp a channel value to `[0, 255]`.
///
/// Overshoot saturates at 255 and undershoot at 0; values never wrap.
pub(crate) fn round_clamp_u8(v: f64) -> u8 {
    if v > 255.0 {
        255
    } else if v < 0.0 {
        0
    } else {
        v.round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_str() {
        assert_eq!(
            "nearestneighbor".parse::<InterpolationMode>().unwrap(),
            InterpolationMode::Nearest
        );
        assert_eq!(
            "bilinear".parse::<InterpolationMode>().unwrap(),
            InterpolationMode::Bilinear
        );
        assert_eq!(
            "bicubic".parse::<InterpolationMode>().unwrap(),
            InterpolationMode::Bicubic
        );
        assert!(matches!(
            "lanczos".parse::<InterpolationMode>(),
            Err(ResizeError::UnknownInterpolation(_))
        ));
    }

    #[test]
    fn mode_display_roundtrip() {
        for mode in [
            InterpolationMode::Nearest,
            InterpolationMode::Bilinear,
            InterpolationMode::Bicubic,
        ] {
            assert_eq!(mode.to_string().parse::<InterpolationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn clamp_saturates() {
        assert_eq!(round_clamp_u8(-31.875), 0);
        assert_eq!(round_clamp_u8(0.4), 0);
        assert_eq!(round_clamp_u8(127.5), 128);
        assert_eq!(round_clamp_u8(254.6), 255);
        assert_eq!(round_clamp_u8(286.875), 255);
    }
}
