use std::f64::consts::PI;

use log::debug;

use super::engine::FftlogEngine;
use crate::core::{FftlogConfig, TransformError, TransformResult, Transformed};
use crate::math::log_grid::validate_samples;

/// Cylindrical Bessel (Hankel) transforms `F(y) = ∫ f(x) J_n(xy) dx/x`.
///
/// Uses `J_n(t) = sqrt(2t/π) j_{n-1/2}(t)`: the wrapped spherical engine runs on
/// `sqrt(x)·f(x)` with `ell = n - 1/2` and its output is rescaled by `sqrt(2y/π)`.
/// The stable bias range is `0.5 - n < nu < 2`; outside it the wrapped engine logs a warning.
#[derive(Debug, Clone)]
pub struct HankelEngine {
    inner: FftlogEngine,
}

impl HankelEngine {
    pub fn new(x: &[f64], fx: &[f64], config: FftlogConfig) -> TransformResult<Self> {
        validate_samples(x, fx)?;
        let scaled: Vec<f64> = x.iter().zip(fx).map(|(&xi, &fi)| xi.sqrt() * fi).collect();
        Ok(Self {
            inner: FftlogEngine::new(x, &scaled, config)?,
        })
    }

    /// The spherical engine over `sqrt(x)·f(x)`.
    pub fn spherical(&self) -> &FftlogEngine {
        &self.inner
    }

    /// `F(y) = ∫ f(x) J_n(xy) dx/x` on `y = (n + 1/2)/x`.
    pub fn transform(&self, n: f64) -> TransformResult<Transformed> {
        if !n.is_finite() || n <= -0.5 {
            return Err(TransformError::Configuration(format!(
                "Hankel order must be finite and > -0.5, got {n}"
            )));
        }
        // The wrapped engine checks nu against (-ell, 2) = (0.5 - n, 2) and warns itself.
        debug!("hankel transform: n={n} via spherical ell={}", n - 0.5);
        let mut out = self.inner.transform(n - 0.5)?;
        for (fy, &y) in out.fy.iter_mut().zip(&out.y) {
            *fy *= (2.0 * y / PI).sqrt();
        }
        Ok(out)
    }
}

/// One-shot cylindrical transform `F(y) = ∫ f(x) J_n(xy) dx/x`.
pub fn hankel_transform(
    x: &[f64],
    fx: &[f64],
    n: f64,
    config: FftlogConfig,
) -> TransformResult<Transformed> {
    HankelEngine::new(x, fx, config)?.transform(n)
}
