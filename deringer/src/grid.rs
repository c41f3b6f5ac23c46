/// 2D buffer of f64 samples with a border margin on every side.
///
/// Logical coordinate (x, y) with `x in [0, width)`, `y in [0, height)` maps
/// to a physical offset shifted by `margin` in both axes, so reads and writes
/// anywhere in `[-margin, width + margin) x [-margin, height + margin)` land
/// inside the allocation without per-access range checks. Callers size the
/// margin at construction so no access ever exceeds it; debug builds assert
/// the range.
#[derive(Debug, Clone)]
pub struct PaddedGrid {
    width: usize,
    height: usize,
    margin: usize,
    stride: usize,
    buf: Vec<f64>,
}

impl PaddedGrid {
    /// Create a zero-filled grid with the given logical size and margin.
    pub fn new(width: usize, height: usize, margin: usize) -> Self {
        let stride = width + 2 * margin;
        let rows = height + 2 * margin;
        Self {
            width,
            height,
            margin,
            stride,
            buf: vec![0.0; stride * rows],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn margin(&self) -> usize {
        self.margin
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(
            x >= -(self.margin as i32) && x < (self.width + self.margin) as i32,
            "x = {} outside padded range of width {} margin {}",
            x,
            self.width,
            self.margin
        );
        debug_assert!(
            y >= -(self.margin as i32) && y < (self.height + self.margin) as i32,
            "y = {} outside padded range of height {} margin {}",
            y,
            self.height,
            self.margin
        );
        (y + self.margin as i32) as usize * self.stride + (x + self.margin as i32) as usize
    }

    /// Get the sample at logical (x, y); padded coordinates are valid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> f64 {
        self.buf[self.index(x, y)]
    }

    /// Set the sample at logical (x, y); padded coordinates are valid.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, val: f64) {
        let i = self.index(x, y);
        self.buf[i] = val;
    }

    /// Copy a width*height row-major buffer into the logical region.
    ///
    /// The padding border is left untouched (zero after construction).
    pub fn load_from(&mut self, data: &[u16]) {
        assert_eq!(data.len(), self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                self.set(x as i32, y as i32, f64::from(data[y * self.width + x]));
            }
        }
    }

    /// Copy the logical region out, quantizing each sample to u16.
    pub fn store_to(&self, out: &mut [u16]) {
        assert_eq!(out.len(), self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out[y * self.width + x] = quantize(self.get(x as i32, y as i32));
            }
        }
    }
}

/// Round to nearest, then clamp to the u16 sample range.
#[inline]
pub fn quantize(v: f64) -> u16 {
    v.round().clamp(0.0, 65535.0) as u16
}
