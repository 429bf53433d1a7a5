use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use num_complex::Complex;
use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};

use crate::core::{TransformError, TransformResult};

#[derive(Clone)]
struct RealFftPlan {
    forward: Arc<dyn RealToComplex<f64>>,
    inverse: Arc<dyn ComplexToReal<f64>>,
}

// Plans are immutable once built; every call below owns its input, output and scratch buffers.
// One plan pair is kept per distinct working length for the life of the process and nothing
// is evicted, so memory grows with the number of different lengths transformed.
static REAL_FFT_CACHE: OnceLock<Mutex<HashMap<usize, RealFftPlan>>> = OnceLock::new();

fn real_plan(n: usize) -> TransformResult<RealFftPlan> {
    let cache = REAL_FFT_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = cache
        .lock()
        .map_err(|_| TransformError::Configuration("real FFT plan cache poisoned".to_string()))?;
    if let Some(plan) = guard.get(&n) {
        return Ok(plan.clone());
    }

    let mut planner = RealFftPlanner::<f64>::new();
    let plan = RealFftPlan {
        forward: planner.plan_fft_forward(n),
        inverse: planner.plan_fft_inverse(n),
    };
    guard.insert(n, plan.clone());
    Ok(plan)
}

fn check_even_length(n: usize) -> TransformResult<()> {
    if n < 2 || n % 2 != 0 {
        return Err(TransformError::Configuration(format!(
            "real FFT length must be even and >= 2, got {n}"
        )));
    }
    Ok(())
}

/// Forward real-to-complex DFT, `N/2 + 1` bins, unnormalized (`X_m = sum_k x_k e^{-2πikm/N}`).
pub(crate) fn rfft(values: &[f64]) -> TransformResult<Vec<Complex<f64>>> {
    let n = values.len();
    check_even_length(n)?;

    let plan = real_plan(n)?;
    let mut input = values.to_vec();
    let mut half_spectrum = plan.forward.make_output_vec();
    let mut scratch = plan.forward.make_scratch_vec();
    plan.forward
        .process_with_scratch(&mut input, &mut half_spectrum, &mut scratch)
        .map_err(|err| TransformError::Configuration(err.to_string()))?;
    Ok(half_spectrum)
}

/// Inverse of [`rfft`] for an output of length `n`, normalized by `1/n`.
///
/// The imaginary parts of the DC and Nyquist bins are discarded, as a Hermitian spectrum
/// requires them to be zero.
pub(crate) fn irfft(half_spectrum: &[Complex<f64>], n: usize) -> TransformResult<Vec<f64>> {
    check_even_length(n)?;
    if half_spectrum.len() != n / 2 + 1 {
        return Err(TransformError::Configuration(format!(
            "half spectrum must hold {} bins for n = {n}, got {}",
            n / 2 + 1,
            half_spectrum.len()
        )));
    }

    let plan = real_plan(n)?;
    let mut input = half_spectrum.to_vec();
    input[0].im = 0.0;
    input[n / 2].im = 0.0;

    let mut output = plan.inverse.make_output_vec();
    let mut scratch = plan.inverse.make_scratch_vec();
    plan.inverse
        .process_with_scratch(&mut input, &mut output, &mut scratch)
        .map_err(|err| TransformError::Configuration(err.to_string()))?;

    let inv_n = 1.0 / n as f64;
    for v in &mut output {
        *v *= inv_n;
    }
    Ok(output)
}
