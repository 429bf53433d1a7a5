//! Special functions and log-grid utilities shared by the transform engines.

pub mod gamma;
pub mod log_grid;

pub use gamma::{
    GAMMA_RATIO_ASYMPTOTIC_CUTOFF, gamma_complex, gamma_ratio, gamma_ratio_asymptotic,
    gamma_ratio_direct, gamma_ratios,
};
pub use log_grid::{log_extrapolate, log_spacing, logspace, validate_samples, zero_pad};
