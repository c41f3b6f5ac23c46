use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("image data is empty")]
    EmptyImage,

    #[error("image data holds {len} samples, expected width*height for {width}x{height}")]
    SizeMismatch { len: usize, width: u32, height: u32 },

    #[error("output buffer holds {len} samples, expected {expected}")]
    OutputSizeMismatch { len: usize, expected: usize },

    #[error("estimation window {window} exceeds the maximum of {max}", window = .0, max = crate::filter::MAX_FILTER_WINDOW)]
    WindowOutOfRange(u32),
}
