pub mod error;
pub mod grid;
pub mod convolve;
pub mod gradient;
pub mod sample;
pub mod filter;
