//! Swept-sine frequency-response analysis.
//!
//! For each requested frequency the filter is reset, driven with a
//! multi-period sinusoid, and the trailing half of the response is treated as
//! the steady-state window.  Magnitude comes from the RMS ratio of the output
//! and input windows; phase comes from the lag at which their full
//! cross-correlation peaks.
//!
//! Two approximations are inherited from the measurement design and
//! deliberately preserved:
//!
//! * The transient is assumed to decay within the first half of the
//!   10-period test signal.  Filters that settle more slowly than that will
//!   leak transient energy into the measurement.
//! * The lag-based phase estimate is only meaningful while the true phase
//!   shift stays within a half period of wrap, and the window must span
//!   enough periods to disambiguate lag aliasing.  It is an estimate, not an
//!   exact value.

use crate::analysis::AnalysisError;
use crate::filter::{FilterConfig, FilterUnit};
use crate::signal::source::sinusoid;
use crate::signal::SignalError;
use crate::util::math::{logspace, peak_index, rms, xcorr};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Number of full periods each test sinusoid spans.
pub const SWEEP_PERIODS: u32 = 10;

/// Input windows with an RMS at or below this are considered silent and
/// report [`FLOOR_DB`] instead of a ratio.
pub const RMS_FLOOR: f64 = 1e-10;

/// Floor sentinel reported for a silent input window.  Not a measured value.
pub const FLOOR_DB: f64 = -100.0;

/// One measured point of a frequency sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Test frequency in Hz.
    pub frequency: f64,
    /// Magnitude ratio of output to input in dB.
    pub magnitude_db: f64,
    /// Phase shift of the output relative to the input in degrees.
    pub phase_deg: f64,
}

/// Why a requested frequency is absent from the measured points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The frequency lies above the Nyquist limit for the sample period.
    AboveNyquist,
    /// The 10-period test signal would be shorter than 20 samples.
    InsufficientSamples,
    /// The frequency is zero or non-finite, so no finite test signal exists.
    DegenerateFrequency,
    /// The filter faulted while streaming this point's test signal.
    StepFault,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let desc = match *self {
            SkipReason::AboveNyquist => "frequency above the Nyquist limit",
            SkipReason::InsufficientSamples => {
                "test signal shorter than the 20 sample minimum"
            }
            SkipReason::DegenerateFrequency => {
                "frequency is zero or non-finite"
            }
            SkipReason::StepFault => "filter step faulted",
        };
        write!(f, "{}", desc)
    }
}

/// The outcome of a frequency sweep.
///
/// `points` holds one entry per successfully measured frequency, in the
/// ascending order of the request.  `skipped` records every omitted
/// frequency with its reason, so a skip is never mistaken for a measured
/// near-zero magnitude.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrequencySweep {
    pub points: Vec<SweepPoint>,
    pub skipped: Vec<(f64, SkipReason)>,
}

/// The canonical sweep: 50 frequencies logarithmically spaced from 10 Hz to
/// 10 kHz.
///
/// # Examples
///
/// ```
/// use bode_rs::analysis::frequency_response::default_frequencies;
///
/// let freqs = default_frequencies();
/// assert_eq!(freqs.len(), 50);
/// assert!((freqs[0] - 10.0).abs() < 1e-9);
/// ```
pub fn default_frequencies() -> Vec<f64> {
    logspace(1.0, 4.0, 50)
}

/// Magnitude of a steady-state window pair in dB, with the silent-input
/// floor applied.
pub fn magnitude_db(input: &[f64], output: &[f64]) -> f64 {
    let input_rms = rms(input);
    if input_rms <= RMS_FLOOR {
        return FLOOR_DB;
    }
    20.0 * (rms(output) / input_rms).log10()
}

/// Phase of a steady-state window pair in degrees, estimated from the lag at
/// which the full cross-correlation of output against input peaks.
pub fn phase_deg(
    input: &[f64],
    output: &[f64],
    frequency: f64,
    sample_period: f64,
) -> f64 {
    let correlation = xcorr(output, input);
    let peak = peak_index(&correlation).unwrap_or(0);
    let delay_samples = peak as isize - (input.len() as isize - 1);
    (-2.0 * PI * frequency * delay_samples as f64 * sample_period).to_degrees()
}

/// Measures the filter's magnitude and phase response over the given
/// frequencies.
///
/// `frequencies` must be sorted ascending; the measured points then come out
/// ascending as well, as a subsequence of the request.  Frequencies above
/// the Nyquist limit, frequencies whose test signal is too short, and points
/// where the filter faulted are omitted from `points` and recorded in
/// `skipped`.  Each point is measured independently on freshly reset filter
/// state, so filter memory from one frequency never corrupts the next.
///
/// The whole sweep aborts only when the configuration itself is unusable or
/// the filter cannot be constructed.
///
/// # Arguments
///
/// * `config` - Configuration for the filter under test.
/// * `frequencies` - Ascending test frequencies in Hz.
///
/// # Examples
///
/// ```
/// use bode_rs::analysis::frequency_response::{default_frequencies, sweep};
/// use bode_rs::filter::iir::FirstOrderIir;
/// use bode_rs::filter::{FilterConfig, FilterKind};
///
/// let config = FilterConfig {
///     cutoff_hz: 1000.0,
///     sample_period: 1e-4,
///     kind: FilterKind::Lowpass,
/// };
/// let result = sweep::<FirstOrderIir>(&config, &default_frequencies()).unwrap();
/// assert!(result.points.len() <= 50);
/// ```
pub fn sweep<F>(
    config: &FilterConfig,
    frequencies: &[f64],
) -> Result<FrequencySweep, AnalysisError>
where
    F: FilterUnit,
{
    config.validate().map_err(|_| {
        AnalysisError::Configuration(
            "cutoff frequency and sample period must be positive and finite",
        )
    })?;
    if frequencies.is_empty() {
        return Err(AnalysisError::Configuration("frequency sweep is empty"));
    }
    let nyquist = config.nyquist();
    if frequencies.iter().all(|&f| f > nyquist) {
        return Err(AnalysisError::Configuration(
            "frequency sweep lies entirely above the Nyquist limit",
        ));
    }

    let mut unit = F::initialize(config)?;
    let mut points = Vec::with_capacity(frequencies.len());
    let mut skipped = Vec::new();

    for &frequency in frequencies {
        if frequency > nyquist {
            tracing::debug!(frequency, nyquist, "skipping point above Nyquist");
            skipped.push((frequency, SkipReason::AboveNyquist));
            continue;
        }
        let input =
            match sinusoid(frequency, config.sample_period, SWEEP_PERIODS) {
                Ok(input) => input,
                Err(err) => {
                    let reason = match err {
                        SignalError::InsufficientSamples => {
                            SkipReason::InsufficientSamples
                        }
                        SignalError::InvalidParameter => {
                            SkipReason::DegenerateFrequency
                        }
                    };
                    tracing::debug!(frequency, %err, "skipping point");
                    skipped.push((frequency, reason));
                    continue;
                }
            };

        // Fresh transient for every frequency.
        unit.reset();
        let mut output = Vec::with_capacity(input.len());
        let mut faulted = false;
        for &u in &input {
            match unit.step(u) {
                Ok(y) => output.push(y),
                Err(err) => {
                    tracing::warn!(frequency, %err, "skipping faulted point");
                    faulted = true;
                    break;
                }
            }
        }
        if faulted {
            skipped.push((frequency, SkipReason::StepFault));
            continue;
        }

        // Trailing half of the response is the steady-state window.
        let steady_start = input.len() / 2;
        let input_steady = &input[steady_start..];
        let output_steady = &output[steady_start..];
        points.push(SweepPoint {
            frequency,
            magnitude_db: magnitude_db(input_steady, output_steady),
            phase_deg: phase_deg(
                input_steady,
                output_steady,
                frequency,
                config.sample_period,
            ),
        });
    }

    Ok(FrequencySweep { points, skipped })
}

#[cfg(test)]
mod test {
    use crate::analysis::frequency_response::{
        magnitude_db, sweep, SkipReason, FLOOR_DB,
    };
    use crate::analysis::AnalysisError;
    use crate::filter::iir::FirstOrderIir;
    use crate::filter::{FilterConfig, FilterError, FilterKind, FilterUnit};
    use assert_approx_eq::assert_approx_eq;

    fn lowpass() -> FilterConfig {
        FilterConfig {
            cutoff_hz: 1000.0,
            sample_period: 1e-4,
            kind: FilterKind::Lowpass,
        }
    }

    #[test]
    fn test_nyquist_exclusion() {
        let frequencies = [10.0, 100.0, 1000.0, 5000.0, 10_000.0];
        let result = sweep::<FirstOrderIir>(&lowpass(), &frequencies).unwrap();
        assert_eq!(result.points.len(), 4);
        assert_eq!(result.skipped, vec![(10_000.0, SkipReason::AboveNyquist)]);
        let measured: Vec<f64> =
            result.points.iter().map(|p| p.frequency).collect();
        assert_eq!(measured, vec![10.0, 100.0, 1000.0, 5000.0]);
    }

    #[test]
    fn test_at_nyquist_hits_silence_floor() {
        // Exactly at Nyquist the sampled sinusoid is numerically zero, so
        // the point reports the floor sentinel rather than dividing by a
        // vanishing RMS.
        let result = sweep::<FirstOrderIir>(&lowpass(), &[5000.0]).unwrap();
        assert_eq!(result.points[0].magnitude_db, FLOOR_DB);
    }

    #[test]
    fn test_silent_window_reports_floor() {
        let zeros = vec![0.0; 50];
        let output = vec![1.0; 50];
        assert_eq!(magnitude_db(&zeros, &output), FLOOR_DB);
    }

    #[test]
    fn test_sweep_entirely_above_nyquist() {
        match sweep::<FirstOrderIir>(&lowpass(), &[6000.0, 10_000.0]) {
            Err(AnalysisError::Configuration(_)) => (),
            other => panic!("expected configuration error, got {:?}", other),
        }
        match sweep::<FirstOrderIir>(&lowpass(), &[]) {
            Err(AnalysisError::Configuration(_)) => (),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_frequency_skipped() {
        // Zero frequency has no finite test signal; the point is skipped,
        // never divided through.
        let result =
            sweep::<FirstOrderIir>(&lowpass(), &[0.0, 100.0]).unwrap();
        assert_eq!(result.points.len(), 1);
        assert_eq!(result.points[0].frequency, 100.0);
        assert_eq!(
            result.skipped,
            vec![(0.0, SkipReason::DegenerateFrequency)]
        );
    }

    #[test]
    fn test_repeat_measurement_matches() {
        let first = sweep::<FirstOrderIir>(&lowpass(), &[500.0]).unwrap();
        let second = sweep::<FirstOrderIir>(&lowpass(), &[500.0]).unwrap();
        assert_approx_eq!(
            first.points[0].magnitude_db,
            second.points[0].magnitude_db
        );
        assert_approx_eq!(
            first.points[0].phase_deg,
            second.points[0].phase_deg
        );
    }

    /// A filter that faults on every step, to check that faults skip points
    /// instead of aborting the sweep.
    struct AlwaysFaulting;

    impl FilterUnit for AlwaysFaulting {
        fn initialize(_: &FilterConfig) -> Result<Self, FilterError> {
            Ok(AlwaysFaulting)
        }

        fn step(&mut self, _: f64) -> Result<f64, FilterError> {
            Err(FilterError::Step("internal fault"))
        }

        fn reset(&mut self) {}
    }

    #[test]
    fn test_step_fault_skips_point_only() {
        let result =
            sweep::<AlwaysFaulting>(&lowpass(), &[100.0, 1000.0]).unwrap();
        assert!(result.points.is_empty());
        assert_eq!(
            result.skipped,
            vec![
                (100.0, SkipReason::StepFault),
                (1000.0, SkipReason::StepFault)
            ]
        );
    }
}
