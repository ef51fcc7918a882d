use rescale_image::ImageSize;

/// Maps output pixel indices to source-space coordinates.
///
/// The mapper is built once per resample from the source and output sizes
/// and is a pure function of its inputs afterwards. Nearest-neighbor uses
/// the integer mapping; the fractional kernels use the half-pixel centered
/// mapping.
#[derive(Debug, Clone, Copy)]
pub struct CoordMapper {
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
    scale_x: f64,
    scale_y: f64,
    offset_x: f64,
    offset_y: f64,
}

impl CoordMapper {
    /// Create a mapper for resampling `src` to `dst`.
    pub fn new(src: ImageSize, dst: ImageSize) -> Self {
        let scale_x = dst.width as f64 / src.width as f64;
        let scale_y = dst.height as f64 / src.height as f64;

        Self {
            src_width: src.width,
            src_height: src.height,
            dst_width: dst.width,
            dst_height: dst.height,
            scale_x,
            scale_y,
            offset_x: half_pixel_offset(scale_x),
            offset_y: half_pixel_offset(scale_y),
        }
    }

    /// Map an output pixel to its nearest source pixel.
    ///
    /// Computed as `x * src_w / dst_w` with truncating integer division,
    /// which is floor(x / scale_x) without float error. The result is always
    /// a valid source index, so nearest-neighbor needs no boundary handling.
    pub fn map_nearest(&self, x: usize, y: usize) -> (usize, usize) {
        (
            x * self.src_width / self.dst_width,
            y * self.src_height / self.dst_height,
        )
    }

    /// Map an output pixel to a fractional source-space coordinate.
    ///
    /// Used by the bilinear and bicubic kernels; applies the half-pixel
    /// centering offset per axis. The result may fall outside the source
    /// bounds, which the kernels handle with their edge policies.
    pub fn map(&self, x: usize, y: usize) -> (f64, f64) {
        (
            x as f64 / self.scale_x - self.offset_x,
            y as f64 / self.scale_y - self.offset_y,
        )
    }
}

/// Half-pixel centering term, `(k - 1) / (2k)` for scale factor `k`.
fn half_pixel_offset(scale: f64) -> f64 {
    (scale - 1.0) / (2.0 * scale)
}
