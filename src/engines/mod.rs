//! Transform engine implementations.

pub mod fftlog;
