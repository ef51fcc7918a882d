use rescale_image::Image;

use super::interpolate::{pixel_f64, round_clamp_u8};

/// Kernel for bicubic (Catmull-Rom) interpolation
///
/// # Arguments
///
/// * `src` - The source image container, at least 4x4.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
///
/// The spline needs 4 support points (`n-1..n+2`) per axis, so an axis is
/// only interpolated when its coordinate lies in the interior
/// `[1, size - 2]`; outside it the axis is clamped by the four-way edge
/// rule.
pub(crate) fn bicubic_pixel<const C: usize>(src: &Image<u8, C>, u: f64, v: f64) -> [u8; C] {
    let (cols, rows) = (src.cols(), src.rows());

    let out_u = u < 1.0 || u > (cols - 2) as f64;
    let out_v = v < 1.0 || v > (rows - 2) as f64;

    // both axes outside the interior: copy the clamped edge pixel
    if out_u && out_v {
        let iu = clamp_edge(u, cols);
        let iv = clamp_edge(v, rows);

        let base = (iv * cols + iu) * C;
        let mut pixel = [0u8; C];
        pixel.copy_from_slice(&src.as_slice()[base..base + C]);
        return pixel;
    }

    // x outside: spline along y only, at the clamped column
    if out_u {
        let iu = clamp_edge(u, cols);

        let floor_v = v.floor();
        let frac_v = v - floor_v;
        let iv = floor_v as usize;

        let mut support = [[0.0; C]; 4];
        for (i, p) in support.iter_mut().enumerate() {
            *p = pixel_f64(src, iu, (iv + i - 1).min(rows - 1));
        }

        return finish(spline(frac_v, &support));
    }

    // y outside: spline along x only, at the clamped row
    if out_v {
        let iv = clamp_edge(v, rows);

        let floor_u = u.floor();
        let frac_u = u - floor_u;
        let iu = floor_u as usize;

        let mut support = [[0.0; C]; 4];
        for (j, p) in support.iter_mut().enumerate() {
            *p = pixel_f64(src, (iu + j - 1).min(cols - 1), iv);
        }

        return finish(spline(frac_u, &support));
    }

    // both in the interior: x spline per row, then y spline over the rows
    let floor_u = u.floor();
    let frac_u = u - floor_u;
    let iu = floor_u as usize;

    let floor_v = v.floor();
    let frac_v = v - floor_v;
    let iv = floor_v as usize;

    let mut intermediate = [[0.0; C]; 4];
    for (i, row) in intermediate.iter_mut().enumerate() {
        let y = (iv + i - 1).min(rows - 1);

        let mut support = [[0.0; C]; 4];
        for (j, p) in support.iter_mut().enumerate() {
            *p = pixel_f64(src, (iu + j - 1).min(cols - 1), y);
        }

        *row = spline(frac_u, &support);
    }

    finish(spline(frac_v, &intermediate))
}

/// Clamp an out-of-interior coordinate to one of the four edge indices.
///
/// The thresholds {0.5, 1, size - 1.5} are load-bearing for round-trip
/// results; do not normalize them.
fn clamp_edge(t: f64, size: usize) -> usize {
    if t < 0.5 {
        0
    } else if t < 1.0 {
        1
    } else if t <= size as f64 - 1.5 {
        size - 2
    } else {
        size - 1
    }
}

/// Evaluate the Catmull-Rom spline through 4 points at fraction `u`.
///
/// `p` holds the channel values at `n-1`, `n`, `n+1` and `n+2`:
/// `f(u) = 0.5*[(-p0+3p1-3p2+p3)u^3 + (2p0-5p1+4p2-p3)u^2 + (-p0+p2)u + 2p1]`.
fn catmull_rom(u: f64, p: &[f64; 4]) -> f64 {
    let u2 = u * u;
    let u3 = u2 * u;

    let term1 = (-p[0] + 3.0 * p[1] - 3.0 * p[2] + p[3]) * u3;
    let term2 = (2.0 * p[0] - 5.0 * p[1] + 4.0 * p[2] - p[3]) * u2;
    let term3 = (-p[0] + p[2]) * u;
    let term4 = 2.0 * p[1];

    0.5 * (term1 + term2 + term3 + term4)
}

/// Run the spline per channel over 4 support pixels.
fn spline<const C: usize>(u: f64, support: &[[f64; C]; 4]) -> [f64; C] {
    let mut out = [0.0; C];
    for (c, o) in out.iter_mut().enumerate() {
        let p = [support[0][c], support[1][c], support[2][c], support[3][c]];
        *o = catmull_rom(u, &p);
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
