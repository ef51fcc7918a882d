use rescale_image::Image;

use super::interpolate::{pixel_f64, round_clamp_u8};

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `src` - The source image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
///
/// Coordinates outside `[0, size - 1]` are clamped per axis to the nearest
/// edge; an axis clamped this way degenerates to a copy along that axis.
pub(crate) fn bilinear_pixel<const C: usize>(src: &Image<u8, C>, u: f64, v: f64) -> [u8; C] {
    let (cols, rows) = (src.cols(), src.rows());

    let out_u = u < 0.0 || u > (cols - 1) as f64;
    let out_v = v < 0.0 || v > (rows - 1) as f64;

    // both axes out: copy the nearest corner pixel
    if out_u && out_v {
        let iu = if u < 0.0 { 0 } else { cols - 1 };
        let iv = if v < 0.0 { 0 } else { rows - 1 };

        let base = (iv * cols + iu) * C;
        let mut pixel = [0u8; C];
        pixel.copy_from_slice(&src.as_slice()[base..base + C]);
        return pixel;
    }

    // x out of bounds: blend the two vertical neighbors at the clamped column
    if out_u {
        let iu = if u < 0.0 { 0 } else { cols - 1 };

        let nv = v.floor();
        let iv0 = nv as usize;
        let iv1 = if iv0 + 1 < rows { iv0 + 1 } else { iv0 };

        let p0 = pixel_f64(src, iu, iv0);
        let p1 = pixel_f64(src, iu, iv1);

        return finish(weighted_average(&p0, &p1, nv, v));
    }

    // y out of bounds: blend the two horizontal neighbors at the clamped row
    if out_v {
        let iv = if v < 0.0 { 0 } else { rows - 1 };

        let nu = u.floor();
        let iu0 = nu as usize;
        let iu1 = if iu0 + 1 < cols { iu0 + 1 } else { iu0 };

        let p0 = pixel_f64(src, iu0, iv);
        let p1 = pixel_f64(src, iu1, iv);

        return finish(weighted_average(&p0, &p1, nu, u));
    }

    // both in bounds: separable blend over the 2x2 neighborhood, x then y
    let nu = u.floor();
    let iu0 = nu as usize;
    let iu1 = if iu0 + 1 < cols { iu0 + 1 } else { iu0 };

    let nv = v.floor();
    let iv0 = nv as usize;
    let iv1 = if iv0 + 1 < rows { iv0 + 1 } else { iv0 };

    let top = weighted_average(
        &pixel_f64(src, iu0, iv0),
        &pixel_f64(src, iu1, iv0),
        nu,
        u,
    );
    let bottom = weighted_average(
        &pixel_f64(src, iu0, iv1),
        &pixel_f64(src, iu1, iv1),
        nu,
        u,
    );

    finish(weighted_average(&top, &bottom, nv, v))
}

/// Weighted average of two points per channel, `(n+1-t)*p0 + (t-n)*p1`,
/// where `n` is the largest integer no larger than `t`.
fn weighted_average<const C: usize>(p0: &[f64; C], p1: &[f64; C], n: f64, t: f64) -> [f64; C] {
    let w1 = t - n;
    let w0 = 1.0 - w1;

    let mut out = [0.0; C];
    for ((o, &a), &b) in out.iter_mut().zip(p0.iter()).zip(p1.iter()) {
        *o = w0 * a + w1 * b;
    }
    out
}

fn finish<const C: usize>(p: [f64; C]) -> [u8; C] {
    let mut out = [0u8; C];
    for (o, &v) in out.iter_mut().zip(p.iter()) {
        *o = round_clamp_u8(v);
    }
    out
}
