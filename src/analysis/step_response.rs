//! Step-response analysis: settling behavior and rise time.

use crate::analysis::AnalysisError;
use crate::filter::{FilterConfig, FilterUnit};
use crate::signal::source::unit_step;
use serde::{Deserialize, Serialize};

/// Fraction of the settling value whose first crossing defines the rise
/// time, the conventional single-time-constant metric for first-order
/// systems.
pub const RISE_FRACTION: f64 = 0.63;

/// The recorded and reduced response of a filter to a unit step.
///
/// `time`, `input`, and `output` always have equal length, one entry per
/// generated sample with `time[k] = k * sample_period`.  The structure is
/// plain data for a downstream reporter; nothing here renders or persists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepResponse {
    /// Sample instants in seconds.
    pub time: Vec<f64>,
    /// The unit-step input sequence.
    pub input: Vec<f64>,
    /// The filter output sequence, same length and ordering as the input.
    pub output: Vec<f64>,
    /// The raw final output sample.  No extrapolation or averaging.
    pub steady_state: f64,
    /// Time in seconds at which the output first reaches
    /// `RISE_FRACTION * steady_state`, or `None` if it never does.  A
    /// never-crossed threshold is deliberately not reported as zero, since
    /// zero is a valid and very different rise time.
    pub rise_time: Option<f64>,
}

/// Drives a freshly initialized filter with a unit step and reduces the
/// response.
///
/// The input streams through the filter strictly in order; a faulted `step`
/// call aborts the whole run with [`AnalysisError::Step`] rather than
/// producing a partial result.
///
/// # Arguments
///
/// * `config` - Configuration for the filter under test.
/// * `duration` - Length of the step input in seconds.
///
/// # Examples
///
/// ```
/// use bode_rs::analysis::step_response::step_response;
/// use bode_rs::filter::iir::FirstOrderIir;
/// use bode_rs::filter::{FilterConfig, FilterKind};
///
/// let config = FilterConfig {
///     cutoff_hz: 1000.0,
///     sample_period: 1e-4,
///     kind: FilterKind::Lowpass,
/// };
/// let result = step_response::<FirstOrderIir>(&config, 0.01).unwrap();
/// assert_eq!(result.output.len(), 100);
/// assert!((result.steady_state - 1.0).abs() < 1e-6);
/// ```
pub fn step_response<F>(
    config: &FilterConfig,
    duration: f64,
) -> Result<StepResponse, AnalysisError>
where
    F: FilterUnit,
{
    config.validate().map_err(|_| {
        AnalysisError::Configuration(
            "cutoff frequency and sample period must be positive and finite",
        )
    })?;
    let input = unit_step(config.sample_period, duration).map_err(|_| {
        AnalysisError::Configuration("step duration must be positive and finite")
    })?;

    let mut unit = F::initialize(config)?;
    let mut output = Vec::with_capacity(input.len());
    for &u in &input {
        output.push(unit.step(u)?);
    }

    let steady_state = *output.last().unwrap_or(&0.0);
    let threshold = RISE_FRACTION * steady_state;
    let rise_time = output
        .iter()
        .position(|&y| y >= threshold)
        .map(|idx| idx as f64 * config.sample_period);
    let time = (0..input.len())
        .map(|k| k as f64 * config.sample_period)
        .collect();

    Ok(StepResponse {
        time,
        input,
        output,
        steady_state,
        rise_time,
    })
}
