//! Module `math::log_grid`.
//!
//! Validation and extension of log-uniformly sampled sequences.
//!
//! The FFT treats the sampled function as periodic in `ln x`. Continuing the samples as a power
//! law past each end (and optionally padding with zeros) pushes the wrap-around seam away from
//! the region whose transform is returned.

use crate::core::{TransformError, TransformResult};

/// `n` points spaced uniformly in `log10` between `10^start` and `10^stop` inclusive.
pub fn logspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![10f64.powf(start)];
    }
    let step = (stop - start) / (n as f64 - 1.0);
    (0..n)
        .map(|i| 10f64.powf(start + i as f64 * step))
        .collect()
}

/// `ln(x[1] / x[0])`, the log spacing the transform assumes for the whole grid.
pub fn log_spacing(x: &[f64]) -> TransformResult<f64> {
    if x.len() < 2 {
        return Err(TransformError::InvalidInput(format!(
            "need at least 2 samples, got {}",
            x.len()
        )));
    }
    Ok((x[1] / x[0]).ln())
}

/// Boundary checks on a sampled function.
///
/// Log-uniformity itself is not verified; only positivity, strict monotonicity and finiteness.
pub fn validate_samples(x: &[f64], fx: &[f64]) -> TransformResult<()> {
    if x.len() != fx.len() {
        return Err(TransformError::InvalidInput(format!(
            "x and f(x) lengths differ ({} vs {})",
            x.len(),
            fx.len()
        )));
    }
    if x.len() < 2 {
        return Err(TransformError::InvalidInput(format!(
            "need at least 2 samples, got {}",
            x.len()
        )));
    }
    if let Some(idx) = x.iter().position(|v| !v.is_finite() || *v <= 0.0) {
        return Err(TransformError::InvalidInput(format!(
            "x[{idx}] = {} must be finite and positive",
            x[idx]
        )));
    }
    if let Some(idx) = x.windows(2).position(|w| w[1] <= w[0]) {
        return Err(TransformError::InvalidInput(format!(
            "x must be strictly increasing (x[{}] = {} >= x[{}] = {})",
            idx,
            x[idx],
            idx + 1,
            x[idx + 1]
        )));
    }
    if let Some(idx) = fx.iter().position(|v| !v.is_finite()) {
        return Err(TransformError::InvalidInput(format!(
            "f(x)[{idx}] = {} is not finite",
            fx[idx]
        )));
    }
    Ok(())
}

fn boundary_log_step(a: f64, b: f64, side: &str) -> TransformResult<f64> {
    let ratio = b / a;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(TransformError::InvalidInput(format!(
            "cannot extrapolate {side} end in log space: boundary samples {a} and {b} must be \
             non-zero with the same sign"
        )));
    }
    Ok(ratio.ln())
}

/// Extends `values` by `n_low` samples below and `n_high` above, continuing the constant log
/// ratio of the two outermost samples on each side.
///
/// Applied to `x` this continues the log-uniform grid; applied to `f(x)` it continues the local
/// power law, which is only as good as that approximation near each boundary.
pub fn log_extrapolate(values: &[f64], n_low: usize, n_high: usize) -> TransformResult<Vec<f64>> {
    let n = values.len();
    if n < 2 {
        return Err(TransformError::InvalidInput(format!(
            "need at least 2 samples to extrapolate, got {n}"
        )));
    }

    let mut out = Vec::with_capacity(n + n_low + n_high);
    if n_low > 0 {
        let step = boundary_log_step(values[0], values[1], "low")?;
        out.extend((1..=n_low).rev().map(|k| values[0] * (-step * k as f64).exp()));
    }
    out.extend_from_slice(values);
    if n_high > 0 {
        let step = boundary_log_step(values[n - 2], values[n - 1], "high")?;
        out.extend((1..=n_high).map(|k| values[n - 1] * (step * k as f64).exp()));
    }
    Ok(out)
}

/// Adds `n_pad` zeros on each side.
pub fn zero_pad(values: &[f64], n_pad: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len() + 2 * n_pad);
    out.resize(n_pad, 0.0);
    out.extend_from_slice(values);
    out.resize(values.len() + 2 * n_pad, 0.0);
    out
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn extrapolation_continues_log_spacing_on_both_sides() {
        let x = logspace(-1.0, 1.0, 5);
        let ext = log_extrapolate(&x, 2, 3).unwrap();
        assert_eq!(ext.len(), 10);
        let dlnx = (x[1] / x[0]).ln();
        for w in ext.windows(2) {
            assert_relative_eq!((w[1] / w[0]).ln(), dlnx, epsilon = 1e-12);
        }
        assert_eq!(&ext[2..7], x.as_slice());
    }

    #[test]
    fn extrapolation_continues_power_law_exactly() {
        let x = logspace(0.0, 2.0, 11);
        let fx: Vec<f64> = x.iter().map(|v| 3.0 * v.powf(-1.5)).collect();
        let xe = log_extrapolate(&x, 4, 4).unwrap();
        let fe = log_extrapolate(&fx, 4, 4).unwrap();
        for (xv, fv) in xe.iter().zip(fe.iter()) {
            assert_relative_eq!(*fv, 3.0 * xv.powf(-1.5), max_relative = 1e-12);
        }
    }

    #[test]
    fn extrapolation_handles_negative_same_sign_boundaries() {
        let fx = [-1.0, -2.0, -4.0];
        let ext = log_extrapolate(&fx, 1, 1).unwrap();
        assert_relative_eq!(ext[0], -0.5, epsilon = 1e-15);
        assert_relative_eq!(ext[4], -8.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_counts_leave_sequence_untouched() {
        let fx = [0.0, 1.0, 0.0];
        assert_eq!(log_extrapolate(&fx, 0, 0).unwrap(), fx.to_vec());
    }

    #[test]
    fn extrapolation_rejects_zero_or_sign_change_at_boundary() {
        let fx = [1.0, 2.0, 0.0];
        assert!(log_extrapolate(&fx, 1, 0).is_ok());
        assert!(matches!(
            log_extrapolate(&fx, 0, 1),
            Err(TransformError::InvalidInput(_))
        ));
        assert!(log_extrapolate(&[-1.0, 1.0, 2.0], 1, 0).is_err());
    }

    #[test]
    fn validation_catches_each_input_defect() {
        let x = logspace(0.0, 1.0, 4);
        let fx = vec![1.0; 4];
        assert!(validate_samples(&x, &fx).is_ok());
        assert!(validate_samples(&x, &fx[..3]).is_err());
        assert!(validate_samples(&x[..1], &fx[..1]).is_err());
        assert!(validate_samples(&[1.0, 1.0, 2.0, 3.0], &fx).is_err());
        assert!(validate_samples(&[-1.0, 1.0, 2.0, 3.0], &fx).is_err());
        assert!(validate_samples(&x, &[1.0, f64::NAN, 1.0, 1.0]).is_err());
    }

    #[test]
    fn zero_pad_adds_symmetric_zeros() {
        assert_eq!(zero_pad(&[1.0, 2.0], 2), vec![0.0, 0.0, 1.0, 2.0, 0.0, 0.0]);
        assert_eq!(zero_pad(&[1.0, 2.0], 0), vec![1.0, 2.0]);
    }

    #[test]
    fn logspace_hits_endpoints() {
        let x = logspace(-4.0, 4.0, 9);
        assert_relative_eq!(x[0], 1e-4, max_relative = 1e-14);
        assert_relative_eq!(x[4], 1.0, max_relative = 1e-14);
        assert_relative_eq!(x[8], 1e4, max_relative = 1e-14);
    }
}
