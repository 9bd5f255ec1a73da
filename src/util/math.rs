use num_traits::Float;

/// Computes the root mean square of a sample window.  An empty window has an
/// RMS of zero.
///
/// # Examples
///
/// ```
/// use bode_rs::util::math::rms;
///
/// let samples = vec![1.0_f64, -1.0, 1.0, -1.0];
/// assert_eq!(rms(&samples), 1.0);
/// ```
pub fn rms<T>(samples: &[T]) -> T
where
    T: Float,
{
    if samples.is_empty() {
        return T::zero();
    }
    let sum = samples.iter().fold(T::zero(), |acc, &x| acc + x * x);
    (sum / T::from(samples.len()).unwrap()).sqrt()
}

/// Computes the full cross-correlation of two real sequences.
///
/// The output has `a.len() + b.len() - 1` elements; element `k` is the
/// correlation at lag `k - (b.len() - 1)`, so negative lags come first and
/// the zero-lag term sits at index `b.len() - 1`.
///
/// # Examples
///
/// ```
/// use bode_rs::util::math::xcorr;
///
/// let a = vec![1.0, 2.0, 3.0];
/// let b = vec![0.0, 1.0, 0.5];
/// assert_eq!(xcorr(&a, &b), vec![0.5, 2.0, 3.5, 3.0, 0.0]);
/// ```
pub fn xcorr(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return vec![];
    }
    let mut out = Vec::with_capacity(a.len() + b.len() - 1);
    for k in 0..a.len() + b.len() - 1 {
        let lag = k as isize - (b.len() as isize - 1);
        let start = if lag > 0 { lag as usize } else { 0 };
        let stop = a.len().min((b.len() as isize + lag).max(0) as usize);
        let mut sum = 0.0;
        for j in start..stop {
            sum += a[j] * b[(j as isize - lag) as usize];
        }
        out.push(sum);
    }
    out
}

/// Returns the index of the first maximum element, or `None` for an empty
/// slice.  Ties resolve to the earliest index.
pub fn peak_index(samples: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &x) in samples.iter().enumerate() {
        match best {
            Some((_, max)) if x <= max => (),
            _ => best = Some((i, x)),
        }
    }
    best.map(|(i, _)| i)
}

/// Generates `points` values logarithmically spaced from `10^start_decade`
/// to `10^stop_decade`, endpoints included.
///
/// # Examples
///
/// ```
/// use bode_rs::util::math::logspace;
///
/// let freqs = logspace(1.0, 4.0, 4);
/// assert_eq!(freqs.len(), 4);
/// assert!((freqs[0] - 10.0).abs() < 1e-9);
/// assert!((freqs[3] - 10_000.0).abs() < 1e-6);
/// ```
pub fn logspace(start_decade: f64, stop_decade: f64, points: usize) -> Vec<f64> {
    match points {
        0 => vec![],
        1 => vec![10.0_f64.powf(start_decade)],
        _ => {
            let span = (stop_decade - start_decade) / (points - 1) as f64;
            (0..points)
                .map(|i| 10.0_f64.powf(start_decade + i as f64 * span))
                .collect()
        }
    }
}
