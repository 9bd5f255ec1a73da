//! Generators for the test sequences used by the analyzers.

use crate::signal::SignalError;
use std::f64::consts::PI;

/// Minimum number of samples a sinusoid must span for the steady-state
/// window to be usable.
pub const MIN_SAMPLES: usize = 20;

/// Generates an ideal unit step applied at `t = 0`: every sample is `1.0`,
/// with `ceil(duration / sample_period)` samples in total.
///
/// # Arguments
///
/// * `sample_period` - Sample period in seconds.
/// * `duration` - Length of the sequence in seconds.
///
/// # Examples
///
/// ```
/// use bode_rs::signal::source::unit_step;
///
/// let step = unit_step(1e-4, 0.01).unwrap();
/// assert_eq!(step.len(), 100);
/// assert!(step.iter().all(|&x| x == 1.0));
/// ```
pub fn unit_step(
    sample_period: f64,
    duration: f64,
) -> Result<Vec<f64>, SignalError> {
    if !(sample_period > 0.0)
        || !(duration > 0.0)
        || !sample_period.is_finite()
        || !duration.is_finite()
    {
        return Err(SignalError::InvalidParameter);
    }
    let num_samples = (duration / sample_period).ceil() as usize;
    Ok(vec![1.0; num_samples])
}

/// Generates `sin(2 * PI * frequency * t)` sampled at
/// `t = k * sample_period` and spanning `num_periods` full periods.
///
/// The sequence has `N = ceil(num_periods / frequency / sample_period)`
/// samples.  Fewer than 20 samples cannot support reliable steady-state
/// estimation, so such requests fail with
/// [`SignalError::InsufficientSamples`] rather than returning a sequence the
/// analyzers would silently mismeasure.
///
/// # Arguments
///
/// * `frequency` - Sinusoid frequency in Hz.
/// * `sample_period` - Sample period in seconds.
/// * `num_periods` - Number of full periods to span.
///
/// # Examples
///
/// ```
/// use bode_rs::signal::source::sinusoid;
///
/// let sine = sinusoid(1000.0, 1e-4, 10).unwrap();
/// assert_eq!(sine.len(), 100);
/// assert_eq!(sine[0], 0.0);
/// ```
pub fn sinusoid(
    frequency: f64,
    sample_period: f64,
    num_periods: u32,
) -> Result<Vec<f64>, SignalError> {
    if !(frequency > 0.0)
        || !(sample_period > 0.0)
        || !frequency.is_finite()
        || !sample_period.is_finite()
        || num_periods == 0
    {
        return Err(SignalError::InvalidParameter);
    }
    let num_samples =
        (f64::from(num_periods) / frequency / sample_period).ceil() as usize;
    if num_samples < MIN_SAMPLES {
        return Err(SignalError::InsufficientSamples);
    }
    Ok((0..num_samples)
        .map(|k| (2.0 * PI * frequency * k as f64 * sample_period).sin())
        .collect())
}

#[cfg(test)]
mod test {
    use crate::signal::source::{sinusoid, unit_step};
    use crate::signal::SignalError;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_unit_step_length() {
        // 0.01 s at 1e-4 s per sample is exactly 100 samples.
        assert_eq!(unit_step(1e-4, 0.01).unwrap().len(), 100);
        // A fractional sample count rounds up.
        assert_eq!(unit_step(1e-4, 0.01005).unwrap().len(), 101);
    }

    #[test]
    fn test_unit_step_rejects_bad_parameters() {
        assert_eq!(unit_step(0.0, 0.01), Err(SignalError::InvalidParameter));
        assert_eq!(unit_step(1e-4, -1.0), Err(SignalError::InvalidParameter));
    }

    #[test]
    fn test_sinusoid_samples() {
        let sine = sinusoid(100.0, 1e-4, 10).unwrap();
        assert_eq!(sine.len(), 1000);
        // One full period is 100 samples here; spot check the quadrature
        // points of the first period.
        assert_approx_eq!(sine[0], 0.0);
        assert_approx_eq!(sine[25], 1.0);
        assert_approx_eq!(sine[50], 0.0, 1e-9);
        assert_approx_eq!(sine[75], -1.0);
    }

    #[test]
    fn test_sinusoid_too_short() {
        // 10 periods of 10 kHz at 1 ms per sample is 10 samples.
        assert_eq!(
            sinusoid(10_000.0, 1e-3, 10),
            Err(SignalError::InsufficientSamples)
        );
    }

    #[test]
    fn test_sinusoid_rejects_zero_frequency() {
        // Zero frequency has no finite period to span.
        assert_eq!(
            sinusoid(0.0, 1e-4, 10),
            Err(SignalError::InvalidParameter)
        );
    }
}
