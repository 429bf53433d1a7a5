use serde::{Deserialize, Serialize};

use super::{TransformError, TransformResult};

/// Default bias power.
pub const DEFAULT_NU: f64 = 1.01;
/// Default fraction of the half spectrum that is tapered.
pub const DEFAULT_C_WINDOW_WIDTH: f64 = 0.25;

/// Settings shared by every FFTLog transform over one sampled function.
///
/// `nu` is the power-law bias `f(x) / x^nu` applied before the forward FFT. It must sit inside
/// the stable range of the requested kernel (roughly `-ell < nu < 2` for `j_ell`,
/// `0.5 - n < nu < 2` for `J_n`); values outside it are logged but not rejected, and usually
/// surface as [`TransformError::NumericalInstability`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FftlogConfig {
    /// Bias power.
    pub nu: f64,
    /// Log-extrapolated samples prepended below `x[0]`.
    pub n_extrap_low: usize,
    /// Log-extrapolated samples appended above `x[N-1]`.
    pub n_extrap_high: usize,
    /// Fraction of the half spectrum smoothed by the one-sided window, in `[0, 1]`.
    pub c_window_width: f64,
    /// Zero-valued samples added on each side after extrapolation.
    pub n_pad: usize,
}

impl Default for FftlogConfig {
    fn default() -> Self {
        Self {
            nu: DEFAULT_NU,
            n_extrap_low: 0,
            n_extrap_high: 0,
            c_window_width: DEFAULT_C_WINDOW_WIDTH,
            n_pad: 0,
        }
    }
}

impl FftlogConfig {
    /// Default configuration with the given bias power.
    pub fn new(nu: f64) -> Self {
        Self {
            nu,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_extrapolation(mut self, n_extrap_low: usize, n_extrap_high: usize) -> Self {
        self.n_extrap_low = n_extrap_low;
        self.n_extrap_high = n_extrap_high;
        self
    }

    #[must_use]
    pub fn with_c_window_width(mut self, c_window_width: f64) -> Self {
        self.c_window_width = c_window_width;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, n_pad: usize) -> Self {
        self.n_pad = n_pad;
        self
    }

    /// Checks the scalar settings; array-dependent checks happen at engine construction.
    pub fn validate(&self) -> TransformResult<()> {
        if !self.nu.is_finite() {
            return Err(TransformError::Configuration(format!(
                "nu must be finite, got {}",
                self.nu
            )));
        }
        if !self.c_window_width.is_finite() || !(0.0..=1.0).contains(&self.c_window_width) {
            return Err(TransformError::Configuration(format!(
                "c_window_width must lie in [0, 1], got {}",
                self.c_window_width
            )));
        }
        Ok(())
    }
}

/// Which derivative of the spherical Bessel function the kernel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BesselDerivative {
    /// `j_ell(xy)`.
    #[default]
    Zeroth,
    /// `j'_ell(xy)`.
    First,
    /// `j''_ell(xy)`.
    Second,
}

impl BesselDerivative {
    /// Integer selector used by flat-array callers.
    pub fn order(self) -> i32 {
        match self {
            Self::Zeroth => 0,
            Self::First => 1,
            Self::Second => 2,
        }
    }

    /// Open interval of `nu` for which the biased Mellin integral converges for a generic
    /// (non-integer) order. For small integer orders the polynomial prefactor of the derivative
    /// kernels cancels the lower Gamma pole and the bound is looser.
    pub fn stable_nu_range(self, ell: f64) -> (f64, f64) {
        (self.order() as f64 - ell, 2.0)
    }
}

impl TryFrom<i32> for BesselDerivative {
    type Error = TransformError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zeroth),
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            other => Err(TransformError::Configuration(format!(
                "derivative selector must be 0, 1 or 2, got {other}"
            ))),
        }
    }
}

/// Transform output on the reciprocal log grid, sorted by increasing `y`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transformed {
    /// Output grid.
    pub y: Vec<f64>,
    /// `F(y)` aligned index-for-index with `y`.
    pub fy: Vec<f64>,
}

impl Transformed {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Iterates `(y, F(y))` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.y.iter().copied().zip(self.fy.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.y, self.fy)
    }
}
