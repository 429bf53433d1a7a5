use std::f64::consts::PI;

use log::{debug, warn};
use num_complex::Complex;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::fft_core::{irfft, rfft};
use super::kernel::bessel_moment_kernel;
use super::window::{c_window, window_cutoff};
use crate::core::{BesselDerivative, FftlogConfig, TransformError, TransformResult, Transformed};
use crate::math::log_grid::{log_extrapolate, log_spacing, validate_samples, zero_pad};

/// Immutable FFTLog state for one sampled function.
///
/// Construction extends the samples, biases them by `x^-nu`, and stores the windowed Fourier
/// coefficients. Every transform call then builds its order-dependent kernel and output grid
/// from scratch, so one engine can serve any number of orders (from any number of threads).
#[derive(Debug, Clone)]
pub struct FftlogEngine {
    x: Vec<f64>,
    fx: Vec<f64>,
    dlnx: f64,
    config: FftlogConfig,
    trim_front: usize,
    trim_back: usize,
    c_m: Vec<Complex<f64>>,
    eta_m: Vec<f64>,
}

impl FftlogEngine {
    /// Builds the working grid from log-uniform samples `x` and values `fx`.
    pub fn new(x: &[f64], fx: &[f64], config: FftlogConfig) -> TransformResult<Self> {
        config.validate()?;
        validate_samples(x, fx)?;
        let dlnx = log_spacing(x)?;

        let x_ext = log_extrapolate(x, config.n_extrap_low, config.n_extrap_high)?;
        let fx_ext = log_extrapolate(fx, config.n_extrap_low, config.n_extrap_high)?;
        let mut x_work = log_extrapolate(&x_ext, config.n_pad, config.n_pad)?;
        let mut fx_work = zero_pad(&fx_ext, config.n_pad);

        // Output is reversed relative to x: the high side is trimmed from the front.
        let mut low = config.n_extrap_low + config.n_pad;
        let mut high = config.n_extrap_high + config.n_pad;
        if x_work.len() % 2 == 1 {
            if high > 0 || low == 0 {
                x_work.pop();
                fx_work.pop();
                high = high.saturating_sub(1);
            } else {
                x_work.remove(0);
                fx_work.remove(0);
                low -= 1;
            }
        }

        let n = x_work.len();
        if n < 2 {
            return Err(TransformError::Configuration(format!(
                "working array has {n} samples after padding and the even-length trim"
            )));
        }

        let c_m = biased_coefficients(&x_work, &fx_work, config.nu, config.c_window_width)?;
        let eta_m = (0..c_m.len())
            .map(|m| 2.0 * PI / (n as f64 * dlnx) * m as f64)
            .collect();

        debug!(
            "fftlog engine: n_input={} n_work={} trim_front={} trim_back={} nu={} n_cut={}",
            x.len(),
            n,
            high,
            low,
            config.nu,
            window_cutoff(config.c_window_width, n)
        );

        Ok(Self {
            x: x_work,
            fx: fx_work,
            dlnx,
            config,
            trim_front: high,
            trim_back: low,
            c_m,
            eta_m,
        })
    }

    pub fn config(&self) -> &FftlogConfig {
        &self.config
    }

    /// Working (extended, even-length) x grid.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Working f(x) values, aligned with [`Self::x`].
    pub fn fx(&self) -> &[f64] {
        &self.fx
    }

    /// Working length N.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn dlnx(&self) -> f64 {
        self.dlnx
    }

    /// Mode indices `m = 0..=N/2` and the windowed coefficients `c_m`.
    pub fn coefficients(&self) -> (Vec<usize>, &[Complex<f64>]) {
        ((0..self.c_m.len()).collect(), &self.c_m)
    }

    /// `eta_m = 2π m / (N dlnx)`.
    pub fn eta_m(&self) -> &[f64] {
        &self.eta_m
    }

    /// `F(y) = ∫ f(x) j_ell(xy) dx/x` on `y = (ell+1)/x`.
    pub fn transform(&self, ell: f64) -> TransformResult<Transformed> {
        self.transform_derivative(ell, BesselDerivative::Zeroth)
    }

    /// `F(y) = ∫ f(x) j'_ell(xy) dx/x`.
    pub fn transform_dj(&self, ell: f64) -> TransformResult<Transformed> {
        self.transform_derivative(ell, BesselDerivative::First)
    }

    /// `F(y) = ∫ f(x) j''_ell(xy) dx/x`.
    pub fn transform_ddj(&self, ell: f64) -> TransformResult<Transformed> {
        self.transform_derivative(ell, BesselDerivative::Second)
    }

    /// Transform against `j_ell` or one of its first two derivatives.
    pub fn transform_derivative(
        &self,
        ell: f64,
        derivative: BesselDerivative,
    ) -> TransformResult<Transformed> {
        if !ell.is_finite() || ell <= -1.0 {
            return Err(TransformError::Configuration(format!(
                "order must be finite and > -1 for a positive output grid, got {ell}"
            )));
        }
        let (nu_min, nu_max) = derivative.stable_nu_range(ell);
        let nu = self.config.nu;
        if nu <= nu_min || nu >= nu_max {
            warn!(
                "nu={nu} outside the stable range ({nu_min}, {nu_max}) for ell={ell}, \
                 derivative={}",
                derivative.order()
            );
        }
        debug!("fftlog transform: ell={ell} derivative={}", derivative.order());

        let n = self.len();
        let y: Vec<f64> = self.x.iter().rev().map(|&xi| (ell + 1.0) / xi).collect();

        let z: Vec<Complex<f64>> = self.eta_m.iter().map(|&eta| Complex::new(nu, eta)).collect();
        let kernel = bessel_moment_kernel(ell, &z, derivative);
        let ln_x0_y0 = (self.x[0] * y[0]).ln();

        let h_m: Vec<Complex<f64>> = self
            .c_m
            .iter()
            .zip(&self.eta_m)
            .zip(&kernel)
            .map(|((&c, &eta), &g)| (c * Complex::new(0.0, -eta * ln_x0_y0).exp() * g).conj())
            .collect();

        let inverse = irfft(&h_m, n)?;
        let norm = PI.sqrt() / 4.0;
        let fy: Vec<f64> = inverse
            .iter()
            .zip(&y)
            .map(|(&v, &yk)| v * yk.powf(-nu) * norm)
            .collect();

        let keep = self.trim_front..n - self.trim_back;
        let out = Transformed {
            y: y[keep.clone()].to_vec(),
            fy: fy[keep].to_vec(),
        };
        if let Some(idx) = out.fy.iter().position(|v| !v.is_finite()) {
            return Err(TransformError::NumericalInstability(format!(
                "non-finite F(y) at y={} (ell={ell}, nu={nu}, derivative={}); check nu against \
                 ({nu_min}, {nu_max})",
                out.y[idx],
                derivative.order()
            )));
        }
        Ok(out)
    }

    /// Transforms for several orders sharing this engine's coefficients, in input order.
    pub fn transform_many(
        &self,
        ells: &[f64],
        derivative: BesselDerivative,
    ) -> TransformResult<Vec<Transformed>> {
        #[cfg(feature = "parallel")]
        let out = ells
            .par_iter()
            .map(|&ell| self.transform_derivative(ell, derivative))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let out = ells
            .iter()
            .map(|&ell| self.transform_derivative(ell, derivative))
            .collect();
        out
    }
}

/// `rfft(f(x) · x^-nu)` tapered by the one-sided window.
fn biased_coefficients(
    x: &[f64],
    fx: &[f64],
    nu: f64,
    c_window_width: f64,
) -> TransformResult<Vec<Complex<f64>>> {
    let biased: Vec<f64> = x.iter().zip(fx).map(|(&xi, &fi)| fi * xi.powf(-nu)).collect();
    let mut c_m = rfft(&biased)?;
    let weights = c_window(c_m.len(), window_cutoff(c_window_width, x.len()));
    for (c, w) in c_m.iter_mut().zip(weights) {
        *c *= w;
    }
    Ok(c_m)
}

/// One-shot spherical transform `F(y) = ∫ f(x) j_ell(xy) dx/x`.
pub fn fftlog_transform(
    x: &[f64],
    fx: &[f64],
    ell: f64,
    config: FftlogConfig,
) -> TransformResult<Transformed> {
    FftlogEngine::new(x, fx, config)?.transform(ell)
}

/// Flat-array entry point: writes `y` and `F(y)` into caller buffers of length `x.len()`.
///
/// This is the layout a native wrapper hands over (contiguous `f64` buffers, explicit lengths,
/// scalar parameters, an integer derivative selector). Buffers are untouched on error. When the
/// working grid cannot keep every input sample (odd length without padding) the call fails
/// with `InvalidInput` instead of writing a shorter result.
#[allow(clippy::too_many_arguments)]
pub fn fftlog_into(
    x: &[f64],
    fx: &[f64],
    ell: f64,
    config: FftlogConfig,
    derivative: i32,
    y_out: &mut [f64],
    fy_out: &mut [f64],
) -> TransformResult<()> {
    let derivative = BesselDerivative::try_from(derivative)?;
    if y_out.len() != x.len() || fy_out.len() != x.len() {
        return Err(TransformError::InvalidInput(format!(
            "output buffers must hold {} samples (y: {}, F(y): {})",
            x.len(),
            y_out.len(),
            fy_out.len()
        )));
    }

    let out = FftlogEngine::new(x, fx, config)?.transform_derivative(ell, derivative)?;
    if out.len() != x.len() {
        return Err(TransformError::InvalidInput(format!(
            "odd sample count {} without padding yields {} outputs",
            x.len(),
            out.len()
        )));
    }
    y_out.copy_from_slice(&out.y);
    fy_out.copy_from_slice(&out.fy);
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::log_grid::logspace;

    fn decaying_samples(n: usize) -> (Vec<f64>, Vec<f64>) {
        let x = logspace(-3.0, 2.0, n);
        let fx = x.iter().map(|v| v * v * (-v).exp()).collect();
        (x, fx)
    }

    #[test]
    fn working_grid_is_even_and_trim_restores_input_length() {
        let (x, fx) = decaying_samples(64);
        for (low, high, pad) in [(0, 0, 0), (3, 0, 0), (0, 5, 0), (7, 4, 0), (2, 3, 6), (1, 0, 2)] {
            let config = FftlogConfig::new(1.01)
                .with_extrapolation(low, high)
                .with_padding(pad);
            let engine = FftlogEngine::new(&x, &fx, config).unwrap();
            assert_eq!(engine.len() % 2, 0);
            assert_eq!(engine.transform(0.0).unwrap().len(), x.len());
        }
    }

    #[test]
    fn odd_input_without_padding_loses_trailing_sample() {
        let (x, fx) = decaying_samples(63);
        let engine = FftlogEngine::new(&x, &fx, FftlogConfig::default()).unwrap();
        assert_eq!(engine.len(), 62);
        assert_eq!(engine.transform(0.0).unwrap().len(), 62);
    }

    #[test]
    fn coefficients_follow_half_spectrum_layout() {
        let (x, fx) = decaying_samples(64);
        let engine = FftlogEngine::new(&x, &fx, FftlogConfig::default()).unwrap();
        let (m, c_m) = engine.coefficients();
        assert_eq!(m.len(), 33);
        assert_eq!(c_m.len(), 33);
        assert_eq!(m[32], 32);
        let eta = engine.eta_m();
        assert_relative_eq!(eta[1], 2.0 * PI / (64.0 * engine.dlnx()), max_relative = 1e-14);
    }

    #[test]
    fn output_grid_is_reciprocal_and_increasing() {
        let (x, fx) = decaying_samples(64);
        let out = fftlog_transform(&x, &fx, 1.0, FftlogConfig::default()).unwrap();
        assert!(out.y.windows(2).all(|w| w[1] > w[0]));
        assert_relative_eq!(out.y[0] * x[63], 2.0, max_relative = 1e-14);
    }

    #[test]
    fn order_at_or_below_minus_one_is_rejected() {
        let (x, fx) = decaying_samples(16);
        let engine = FftlogEngine::new(&x, &fx, FftlogConfig::default()).unwrap();
        assert!(matches!(
            engine.transform(-1.0),
            Err(TransformError::Configuration(_))
        ));
        assert!(engine.transform(f64::NAN).is_err());
    }

    #[test]
    fn flat_api_checks_buffers_and_selector() {
        let (x, fx) = decaying_samples(32);
        let mut y = vec![0.0; 32];
        let mut fy = vec![0.0; 31];
        assert!(matches!(
            fftlog_into(&x, &fx, 0.0, FftlogConfig::default(), 0, &mut y, &mut fy),
            Err(TransformError::InvalidInput(_))
        ));
        let mut fy = vec![0.0; 32];
        assert!(matches!(
            fftlog_into(&x, &fx, 0.0, FftlogConfig::default(), 5, &mut y, &mut fy),
            Err(TransformError::Configuration(_))
        ));
        assert!(y.iter().all(|&v| v == 0.0));
        fftlog_into(&x, &fx, 0.0, FftlogConfig::default(), 1, &mut y, &mut fy).unwrap();
        assert!(y.iter().all(|&v| v > 0.0));
    }
}
