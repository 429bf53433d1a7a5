//! Module `engines::fftlog`.
//!
//! Generalized FFTLog: `F(y) = ∫₀^∞ f(x) K(xy) dx/x` for `K` a spherical Bessel function
//! `j_ell`, its first two derivatives, or (through [`HankelEngine`]) a cylindrical `J_n`.
//!
//! References: Hamilton (2000) for FFTLog, Fang et al. (2020, arXiv:1911.11947) for the
//! generalized kernels, McEwen et al. (2016, arXiv:1603.04826) Eq. (C1) for the window.
//!
//! Primary API surface: [`FftlogEngine`], [`HankelEngine`], and the one-shot
//! [`fftlog_transform`], [`hankel_transform`], [`fftlog_into`].
//!
//! Numerical considerations: the input is treated as periodic in `ln x` after biasing by
//! `x^-nu`; choose `nu` so the biased function is small at both ends, and use log
//! extrapolation or zero padding to push the periodic seam away from the returned range. The
//! window trades high-frequency ringing against resolution of sharp features.
//!
//! When to use: dense output grids from a single log-uniform input sampling. For a handful of
//! `y` values, or inputs that are not smooth in `ln x`, direct quadrature is more robust.

mod fft_core;

pub mod engine;
pub mod hankel;
pub mod kernel;
pub mod window;

pub use engine::{FftlogEngine, fftlog_into, fftlog_transform};
pub use hankel::{HankelEngine, hankel_transform};
pub use kernel::bessel_moment_kernel;
pub use window::{c_window, window_cutoff};
