use crate::grid::PaddedGrid;

/// Tap count of the fixed convolution kernels.
pub const KERNEL_LEN: usize = 5;

/// Kernel half-width; also the minimum margin of a convolution source.
pub const KERNEL_RADIUS: usize = KERNEL_LEN / 2;

/// Convolve `src` with the separable 5x5 kernel `col * row^T`.
///
/// Runs a vertical pass with `col` into a margin-2 temporary, then a
/// horizontal pass with `row` into a margin-0 result of the same logical
/// size. Equivalent to the full 5x5 convolution at 10 instead of 25
/// multiply-adds per sample. `src` must carry a margin of at least 2.
pub fn convolve_separable(
    src: &PaddedGrid,
    col: &[f64; KERNEL_LEN],
    row: &[f64; KERNEL_LEN],
) -> PaddedGrid {
    assert!(
        src.margin() >= KERNEL_RADIUS,
        "convolution source margin {} is below the kernel radius {}",
        src.margin(),
        KERNEL_RADIUS
    );

    let w = src.width() as i32;
    let h = src.height() as i32;
    let r = KERNEL_RADIUS as i32;

    // The vertical pass also covers the two-column horizontal margin, so the
    // horizontal pass sees a full window on the first and last columns.
    let mut tmp = PaddedGrid::new(src.width(), src.height(), KERNEL_RADIUS);
    for y in 0..h {
        for x in -r..w + r {
            let mut acc = 0.0;
            for (k, &kv) in col.iter().enumerate() {
                acc += kv * src.get(x, y + k as i32 - r);
            }
            tmp.set(x, y, acc);
        }
    }

    let mut dst = PaddedGrid::new(src.width(), src.height(), 0);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, &kv) in row.iter().enumerate() {
                acc += kv * tmp.get(x + k as i32 - r, y);
            }
            dst.set(x, y, acc);
        }
    }
    dst
}
