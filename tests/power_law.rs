// Power-law inputs `f(x) = x^nu` bias to a constant, so only the DC mode survives and the
// transform reduces to the kernel's Mellin moment. These cases are exact to rounding.

use approx::assert_relative_eq;
use fftlog::math::gamma_complex;
use fftlog::prelude::*;
use num_complex::Complex;
use std::f64::consts::PI;

fn gamma(x: f64) -> f64 {
    gamma_complex(Complex::new(x, 0.0)).re
}

/// `∫ x^p j_ell(xy) dx/x`.
fn spherical_power_law(ell: f64, p: f64, y: f64) -> f64 {
    y.powf(-p) * PI.sqrt() * 2f64.powf(p - 2.0) * gamma((ell + p) / 2.0)
        / gamma((3.0 + ell - p) / 2.0)
}

/// `∫ x^p J_n(xy) dx/x`.
fn cylindrical_power_law(n: f64, p: f64, y: f64) -> f64 {
    y.powf(-p) * 2f64.powf(p - 1.0) * gamma((n + p) / 2.0) / gamma((n - p) / 2.0 + 1.0)
}

#[test]
fn spherical_power_laws_are_exact() {
    let x = logspace(-3.0, 3.0, 256);
    for (ell, nu) in [(0.0, 1.2), (1.0, 0.5), (2.0, -0.5), (0.5, 1.0)] {
        let fx: Vec<f64> = x.iter().map(|v| v.powf(nu)).collect();
        let out = fftlog_transform(&x, &fx, ell, FftlogConfig::new(nu)).unwrap();
        assert_eq!(out.len(), x.len());
        for (y, fy) in out.iter() {
            assert_relative_eq!(fy, spherical_power_law(ell, nu, y), max_relative = 1e-10);
        }
    }
}

#[test]
fn spherical_power_laws_survive_extrapolation_and_padding() {
    let x = logspace(-3.0, 3.0, 200);
    let nu = 1.2;
    let fx: Vec<f64> = x.iter().map(|v| v.powf(nu)).collect();

    let extrapolated = FftlogConfig::new(nu).with_extrapolation(37, 64);
    let out = fftlog_transform(&x, &fx, 0.0, extrapolated).unwrap();
    assert_eq!(out.len(), x.len());
    for (y, fy) in out.iter() {
        assert_relative_eq!(fy, spherical_power_law(0.0, nu, y), max_relative = 1e-10);
    }
}

#[test]
fn derivative_kernels_are_exact_for_power_laws() {
    // ∫ x^p j_ell'(xy) dx/x
    //   = -(p-1)/2 · 2^p Γ((ell+p-1)/2) / Γ((4+ell-p)/2) · sqrt(π)/4 · y^-p
    let x = logspace(-3.0, 3.0, 256);
    let (ell, nu) = (2.0, 0.5);
    let fx: Vec<f64> = x.iter().map(|v| v.powf(nu)).collect();
    let engine = FftlogEngine::new(&x, &fx, FftlogConfig::new(nu)).unwrap();
    let out = engine.transform_dj(ell).unwrap();
    for (y, fy) in out.iter() {
        let exact = -(nu - 1.0) / 2.0 * 2f64.powf(nu) * gamma((ell + nu - 1.0) / 2.0)
            / gamma((4.0 + ell - nu) / 2.0)
            * PI.sqrt()
            / 4.0
            * y.powf(-nu);
        assert_relative_eq!(fy, exact, max_relative = 1e-10);
    }
}

#[test]
fn cylindrical_power_laws_are_exact() {
    let x = logspace(-3.0, 3.0, 256);
    for (n, nu) in [(0.0, 1.0), (1.0, 0.5), (2.0, 0.0)] {
        // sqrt(x)·f(x) = x^nu for the wrapped spherical engine.
        let p = nu - 0.5;
        let fx: Vec<f64> = x.iter().map(|v| v.powf(p)).collect();
        let out = hankel_transform(&x, &fx, n, FftlogConfig::new(nu)).unwrap();
        for (y, fy) in out.iter() {
            assert_relative_eq!(fy, cylindrical_power_law(n, p, y), max_relative = 1e-10);
        }
    }
}
