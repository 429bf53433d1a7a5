//! `fftlog` computes integral transforms of log-sampled functions against Bessel kernels:
//!
//! - spherical: `F(y) = ∫₀^∞ f(x) j_ℓ(xy) dx/x`, plus the first two derivatives of `j_ℓ`
//! - cylindrical (Hankel): `F(y) = ∫₀^∞ f(x) J_n(xy) dx/x`
//!
//! It uses the generalized FFTLog algorithm: bias `f` by a power law, take one real FFT,
//! multiply each mode by the analytic Mellin moment of the kernel (a complex Gamma ratio),
//! and invert onto the reciprocal grid `y = (ℓ+1)/x`. Cost is `O(N log N)` for all `N`
//! output points.
//!
//! Numerical considerations:
//! - Inputs must be log-uniformly sampled; only positivity and monotonicity are checked.
//! - The bias power `nu` must sit in the kernel's stable range (`-ℓ < nu < 2` spherical,
//!   `0.5 - n < nu < 2` Hankel). Outside it a warning is logged and non-finite results are
//!   reported as [`core::TransformError::NumericalInstability`].
//! - Log extrapolation, zero padding and the spectral window suppress the artifacts of the
//!   implicit periodicity in `ln x`.
//!
//! # Feature Flags
//! - `parallel`: evaluates [`engines::fftlog::FftlogEngine::transform_many`] orders with Rayon.
//!
//! # Quick Start
//! Spherical transform of `f(x) = x`, whose exact value is `π / (2y)`:
//! ```rust
//! use fftlog::prelude::*;
//!
//! let x = logspace(-4.0, 4.0, 512);
//! let out = fftlog_transform(&x, &x, 0.0, FftlogConfig::new(1.0)).unwrap();
//! for (y, fy) in out.iter() {
//!     assert!((fy * y - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
//! }
//! ```
//!
//! Hankel transform of `f(x) = x` with `J_0`, exactly `1 / y`:
//! ```rust
//! use fftlog::prelude::*;
//!
//! let x = logspace(-4.0, 4.0, 512);
//! let out = hankel_transform(&x, &x, 0.0, FftlogConfig::new(1.5)).unwrap();
//! for (y, fy) in out.iter() {
//!     assert!((fy * y - 1.0).abs() < 1e-10);
//! }
//! ```
//!
//! Several orders over one input share the forward FFT:
//! ```rust
//! use fftlog::prelude::*;
//!
//! let x = logspace(-3.0, 2.0, 256);
//! let fx: Vec<f64> = x.iter().map(|v| v * v * (-v).exp()).collect();
//! let engine = FftlogEngine::new(&x, &fx, FftlogConfig::default()).unwrap();
//! let outs = engine.transform_many(&[0.0, 1.0, 2.0], BesselDerivative::Zeroth).unwrap();
//! assert_eq!(outs.len(), 3);
//! assert!(outs.iter().all(|o| o.len() == x.len()));
//! ```

pub mod core;
pub mod engines;
pub mod math;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::engines::fftlog::{
        FftlogEngine, HankelEngine, fftlog_into, fftlog_transform, hankel_transform,
    };
    pub use crate::math::logspace;
}
