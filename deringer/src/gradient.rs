use crate::convolve::{convolve_separable, KERNEL_LEN};
use crate::grid::PaddedGrid;

/// Farid-Simoncelli 5-tap smoothing (interpolator) kernel.
pub const SMOOTH_KERNEL: [f64; KERNEL_LEN] =
    [0.037659, 0.249153, 0.426375, 0.249153, 0.037659];

/// Matching 5-tap first-derivative kernel.
pub const DERIV_KERNEL: [f64; KERNEL_LEN] =
    [0.109604, 0.276691, 0.0, -0.276691, -0.109604];

/// Floor added to the gradient magnitude before normalization, so flat
/// regions divide by epsilon instead of zero.
pub const NORM_EPSILON: f64 = 1e-6;

/// Per-pixel unit direction field of the image gradient.
///
/// Both grids have the image's logical size and no margin; each (dx, dy)
/// pair is an approximate unit vector along the local gradient, or a
/// near-zero vector where the image is flat.
#[derive(Debug)]
pub struct GradientField {
    pub dx: PaddedGrid,
    pub dy: PaddedGrid,
}

impl GradientField {
    /// Differentiate `image` along both axes and normalize per pixel.
    ///
    /// `image` must carry a margin of at least 2 (the kernel radius).
    pub fn compute(image: &PaddedGrid) -> Self {
        let mut dx = convolve_separable(image, &SMOOTH_KERNEL, &DERIV_KERNEL);
        let mut dy = convolve_separable(image, &DERIV_KERNEL, &SMOOTH_KERNEL);

        for y in 0..image.height() as i32 {
            for x in 0..image.width() as i32 {
                let gx = dx.get(x, y);
                let gy = dy.get(x, y);
                let norm = 1.0 / ((gx * gx + gy * gy).sqrt() + NORM_EPSILON);
                dx.set(x, y, gx * norm);
                dy.set(x, y, gy * norm);
            }
        }
        Self { dx, dy }
    }
}
