#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "parallel")]
use rayon::slice::ParallelSliceMut;

use crate::error::FilterError;
use crate::gradient::GradientField;
use crate::grid::{quantize, PaddedGrid};
use crate::sample::directional_mean;

/// Largest accepted estimation window, in pixels.
pub const MAX_FILTER_WINDOW: u32 = 100;

/// Image-grid margin. Sampling can overshoot the nominal window reach by one
/// pixel per axis through rounding, so the margin keeps two spare pixels
/// beyond the largest window.
const GRID_MARGIN: usize = MAX_FILTER_WINDOW as usize + 2;

const _: () = assert!(GRID_MARGIN >= MAX_FILTER_WINDOW as usize + 2);

/// Gibbs ringing suppressor for a single-channel image.
///
/// Construction copies the image into a padded grid and computes a
/// unit-normalized gradient direction per pixel. Processing then replaces
/// each pixel with the directional mean (forward or backward along that
/// direction) that deviates least from the observed value, pulling
/// overshoot near sharp edges back toward the undisturbed side.
///
/// The instance is immutable after construction; [`process_image`] may be
/// called repeatedly with different windows. Multi-channel images are the
/// caller's concern (apply per channel), as is any follow-up smoothing.
///
/// [`process_image`]: GibbsRemovalFilter::process_image
#[derive(Debug)]
pub struct GibbsRemovalFilter {
    width: usize,
    height: usize,
    image: PaddedGrid,
    gradient: GradientField,
}

impl GibbsRemovalFilter {
    /// Build a filter over a row-major width*height u16 image.
    pub fn new(image_data: &[u16], width: u32, height: u32) -> Result<Self, FilterError> {
        if image_data.is_empty() {
            return Err(FilterError::EmptyImage);
        }
        let w = width as usize;
        let h = height as usize;
        if image_data.len() != w * h {
            return Err(FilterError::SizeMismatch {
                len: image_data.len(),
                width,
                height,
            });
        }

        let mut image = PaddedGrid::new(w, h, GRID_MARGIN);
        image.load_from(image_data);
        let gradient = GradientField::compute(&image);

        Ok(Self {
            width: w,
            height: h,
            image,
            gradient,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Filter the image into `output`, averaging up to `window` samples on
    /// each side of every pixel.
    ///
    /// Validation happens before any pixel work; on error `output` is left
    /// untouched. With `window = 0` the image passes through unchanged.
    pub fn process_image(&self, window: u32, output: &mut [u16]) -> Result<(), FilterError> {
        if window > MAX_FILTER_WINDOW {
            return Err(FilterError::WindowOutOfRange(window));
        }
        let expected = self.width * self.height;
        if output.len() != expected {
            return Err(FilterError::OutputSizeMismatch {
                len: output.len(),
                expected,
            });
        }

        #[cfg(feature = "parallel")]
        output
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| self.process_row(y, window, row));

        #[cfg(not(feature = "parallel"))]
        for (y, row) in output.chunks_mut(self.width).enumerate() {
            self.process_row(y, window, row);
        }

        Ok(())
    }

    /// Allocating convenience wrapper around [`process_image`].
    ///
    /// [`process_image`]: GibbsRemovalFilter::process_image
    pub fn process(&self, window: u32) -> Result<Vec<u16>, FilterError> {
        let mut out = vec![0u16; self.width * self.height];
        self.process_image(window, &mut out)?;
        Ok(out)
    }

    fn process_row(&self, y: usize, window: u32, row: &mut [u16]) {
        let y = y as i32;
        for (xi, out) in row.iter_mut().enumerate() {
            let x = xi as i32;
            let kx = self.gradient.dx.get(x, y);
            let ky = self.gradient.dy.get(x, y);
            let original = self.image.get(x, y);

            let forward = directional_mean(&self.image, x, y, window, kx, ky);
            let backward = directional_mean(&self.image, x, y, window, -kx, -ky);

            // strict comparison: an exact tie falls to the backward sample
            let chosen = if (forward - original).abs() < (backward - original).abs() {
                forward
            } else {
                backward
            };
            *out = quantize(chosen);
        }
    }
}
