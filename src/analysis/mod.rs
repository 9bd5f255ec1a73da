//! Analyzers that reduce recorded filter responses to quantitative metrics.
//!
//! Two measurements are provided, both driving the filter strictly one
//! sample at a time through the [`FilterUnit`](crate::filter::FilterUnit)
//! trait:
//!
//! * [`step_response`](step_response::step_response) - settling value and
//!   63% rise time from a unit-step input.
//! * [`frequency_response`](frequency_response::sweep) - magnitude (dB) and
//!   phase (degrees) per frequency from a swept-sine input, an empirical
//!   Bode analyzer built on steady-state RMS ratios and cross-correlation
//!   delay estimation.
//!
//! Everything here is single threaded and fully sequential.  The filter is
//! stateful, so sample `i`'s output depends on every earlier sample having
//! been applied in order; the per-sample call into the filter is a strict
//! ordering requirement, not an optimization choice.  Independent analyses
//! may run in parallel only on separate filter instances.

use crate::filter::FilterError;
use std::error;
use std::fmt;

pub mod frequency_response;
pub mod step_response;

/// Errors that abort an analysis outright.
///
/// Per-point conditions during a frequency sweep (a frequency above Nyquist,
/// a too-short test signal, a faulted `step` call) are not represented here;
/// they skip the affected point and are reported through
/// [`frequency_response::SkipReason`].
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisError {
    /// The filter configuration or the analysis request is unusable.
    Configuration(&'static str),
    /// The filter unit could not be constructed.
    Initialization(&'static str),
    /// A `step` call faulted during a step-response run.
    Step(&'static str),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AnalysisError::Configuration(desc) => {
                write!(f, "Analysis error: invalid configuration: {}", desc)
            }
            AnalysisError::Initialization(desc) => {
                write!(f, "Analysis error: filter initialization failed: {}", desc)
            }
            AnalysisError::Step(desc) => {
                write!(f, "Analysis error: filter step failed: {}", desc)
            }
        }
    }
}

impl error::Error for AnalysisError {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}

impl From<FilterError> for AnalysisError {
    fn from(err: FilterError) -> AnalysisError {
        match err {
            FilterError::Initialization(desc) => {
                AnalysisError::Initialization(desc)
            }
            FilterError::Step(desc) => AnalysisError::Step(desc),
        }
    }
}
