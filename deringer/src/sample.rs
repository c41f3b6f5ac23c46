use crate::grid::PaddedGrid;

/// Mean of the samples met while walking up to `window` steps out of (x, y)
/// along the direction (kx, ky).
///
/// Each step lands on the rounded coordinate `(x + kx*i, y + ky*i)`.
/// Consecutive steps that round to the pixel already visited are counted
/// once, and steps that never leave the origin pixel are not counted at all;
/// with nothing collected the origin pixel's own value comes back unchanged.
///
/// The caller guarantees that `window` steps (plus one pixel of rounding
/// overshoot per axis) stay inside the grid's margin.
pub fn directional_mean(
    grid: &PaddedGrid,
    x: i32,
    y: i32,
    window: u32,
    kx: f64,
    ky: f64,
) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u32;
    let mut prev = (x, y);

    for i in 1..=window {
        let sx = (f64::from(x) + kx * f64::from(i)).round() as i32;
        let sy = (f64::from(y) + ky * f64::from(i)).round() as i32;
        if (sx, sy) != prev {
            sum += grid.get(sx, sy);
            count += 1;
            prev = (sx, sy);
        }
    }

    if count == 0 {
        grid.get(x, y)
    } else {
        sum / f64::from(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_grid(values: &[f64]) -> PaddedGrid {
        let mut g = PaddedGrid::new(values.len(), 1, 4);
        for (x, &v) in values.iter().enumerate() {
            g.set(x as i32, 0, v);
        }
        g
    }

    #[test]
    fn zero_window_returns_origin_value() {
        let g = row_grid(&[10.0, 20.0, 30.0]);
        assert_eq!(directional_mean(&g, 1, 0, 0, 1.0, 0.0), 20.0);
    }

    #[test]
    fn zero_direction_returns_origin_value() {
        let g = row_grid(&[10.0, 20.0, 30.0]);
        // every step rounds back onto the origin, so nothing is collected
        assert_eq!(directional_mean(&g, 1, 0, 100, 0.0, 0.0), 20.0);
    }

    #[test]
    fn unit_step_averages_distinct_pixels() {
        let g = row_grid(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let mean = directional_mean(&g, 1, 0, 3, 1.0, 0.0);
        assert!((mean - (30.0 + 40.0 + 50.0) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn negative_direction_walks_into_padding() {
        let g = row_grid(&[10.0, 20.0, 30.0]);
        // steps from x = 0 land on the zero padding at x = -1, -2
        let mean = directional_mean(&g, 0, 0, 2, -1.0, 0.0);
        assert_eq!(mean, 0.0);
    }

    #[test]
    fn fractional_direction_deduplicates_repeats() {
        let g = row_grid(&[0.0, 100.0, 200.0, 300.0, 400.0, 500.0]);
        // kx = 0.4: i=1 rounds to the origin, i=2,3 round to x=1, i=4,5
        // round to x=2 -- two distinct samples
        let mean = directional_mean(&g, 0, 0, 5, 0.4, 0.0);
        assert!((mean - 150.0).abs() < 1e-12);
    }

    #[test]
    fn diagonal_direction_rounds_both_axes() {
        let mut g = PaddedGrid::new(4, 4, 4);
        for y in 0..4 {
            for x in 0..4 {
                g.set(x, y, (10 * y + x) as f64);
            }
        }
        let k = std::f64::consts::FRAC_1_SQRT_2;
        // i=1: (0.71, 0.71) -> (1, 1); i=2: (1.41, 1.41) -> (1, 1) dup;
        // i=3: (2.12, 2.12) -> (2, 2)
        let mean = directional_mean(&g, 0, 0, 3, k, k);
        assert!((mean - (11.0 + 22.0) / 2.0).abs() < 1e-12);
    }
}
