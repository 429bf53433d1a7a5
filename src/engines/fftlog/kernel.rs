use num_complex::Complex;

use crate::core::BesselDerivative;
use crate::math::gamma::gamma_ratio;

/// Fourier-space kernel for mode exponents `z = nu + i·eta_m`.
///
/// With the `sqrt(pi)/4` normalization applied after the inverse FFT, each entry equals the
/// Mellin moment `∫ t^(z-1) j_ell^(k)(t) dt` of the spherical Bessel function or its k-th
/// derivative:
///
/// - `k = 0`: `2^z · Γ((ell+z)/2) / Γ((3+ell-z)/2)`
/// - `k = 1`: `-(z-1)/2 · 2^z · Γ((ell+z-1)/2) / Γ((4+ell-z)/2)`
/// - `k = 2`: `(z-1)(z-2)/4 · 2^z · Γ((ell+z-2)/2) / Γ((5+ell-z)/2)`
///
/// The derivative forms follow from integrating the `k = 0` moment by parts.
pub fn bessel_moment_kernel(
    ell: f64,
    z: &[Complex<f64>],
    derivative: BesselDerivative,
) -> Vec<Complex<f64>> {
    let mu = ell + 0.5;
    let shift = 1.5 + derivative.order() as f64;

    z.iter()
        .map(|&zj| {
            let base = Complex::new(2.0, 0.0).powc(zj) * gamma_ratio(mu, zj - shift);
            match derivative {
                BesselDerivative::Zeroth => base,
                BesselDerivative::First => -(zj - 1.0) / 2.0 * base,
                BesselDerivative::Second => (zj - 1.0) * (zj - 2.0) / 4.0 * base,
            }
        })
        .collect()
}
