use std::f64::consts::PI;

/// Number of trailing Fourier modes tapered for a half spectrum of length `n / 2 + 1`.
///
/// `floor(c_window_width * n / 2)`; with `c_window_width` in `[0, 1]` this never exceeds the
/// last mode index `n / 2`.
pub fn window_cutoff(c_window_width: f64, n: usize) -> usize {
    (c_window_width * n as f64 / 2.0).floor() as usize
}

/// One-sided window over mode indices `0..n_modes`, tapering the last `n_cut` of them.
///
/// Weights are 1 up to `n_last - n_cut` and follow `θ - sin(2πθ)/(2π)` above it, with
/// `θ = (n_last - n) / (n_cut - 1)`, a C¹ rolloff reaching 0 at the last mode (McEwen et al.
/// 2016, Eq. C1). When the taper spans a single mode (`n_cut == 1`) that mode gets the θ → 0
/// limit, weight 0. `n_cut` beyond the last index tapers the whole spectrum except mode 0.
pub fn c_window(n_modes: usize, n_cut: usize) -> Vec<f64> {
    let mut weights = vec![1.0; n_modes];
    let n_last = n_modes.saturating_sub(1);
    let n_cut = n_cut.min(n_last);
    if n_cut == 0 {
        return weights;
    }

    let n_right = n_last - n_cut;
    let span = (n_cut - 1) as f64;

    for (idx, w) in weights.iter_mut().enumerate().skip(n_right + 1) {
        let theta = if span > 0.0 {
            (n_last - idx) as f64 / span
        } else {
            0.0
        };
        *w = theta - (2.0 * PI * theta).sin() / (2.0 * PI);
    }
    weights
}
