//! The filter under test and the seam used to drive it.
//!
//! Everything in this crate measures a filter empirically, from the outside:
//! samples go in one at a time, samples come out one at a time, and no
//! assumption is made about the recursion or coefficients inside.  That
//! contract is captured by the [`FilterUnit`] trait.  The analyzers only ever
//! talk to the trait, so the same measurement code runs against the bundled
//! in-process IIR simulation, an FFI wrapper around a compiled filter binary,
//! or anything else that can step a sample.
//!
//! A `FilterUnit` is stateful and exclusively owned: `step` mutates internal
//! memory, so exactly one analyzer drives a given instance at a time.  `reset`
//! returns the memory to zero without touching the configuration and is
//! idempotent.

use serde::{Deserialize, Serialize};
use std::error;
use std::fmt;

pub mod iir;

/// Errors raised by a filter under test.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterError {
    /// The unit could not be constructed from the given configuration.
    Initialization(&'static str),
    /// A single `step` call faulted inside the unit.
    Step(&'static str),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FilterError::Initialization(desc) => {
                write!(f, "Filter initialization failed: {}", desc)
            }
            FilterError::Step(desc) => {
                write!(f, "Filter step failed: {}", desc)
            }
        }
    }
}

impl error::Error for FilterError {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}

/// The filter response shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    Lowpass,
    Highpass,
}

/// Configuration for a filter under test.
///
/// Immutable once created and owned by the caller.  For any frequency tested
/// below Nyquist the sample period must satisfy
/// `sample_period < 1 / (2 * cutoff_hz)`.
///
/// # Examples
///
/// ```
/// use bode_rs::filter::{FilterConfig, FilterKind};
///
/// let config = FilterConfig {
///     cutoff_hz: 1000.0,
///     sample_period: 1e-4,
///     kind: FilterKind::Lowpass,
/// };
/// assert_eq!(config.nyquist(), 5000.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Cutoff frequency in Hz.
    pub cutoff_hz: f64,
    /// Sample period in seconds.
    pub sample_period: f64,
    /// Lowpass or highpass response.
    pub kind: FilterKind,
}

impl FilterConfig {
    /// Returns the Nyquist limit `1 / (2 * sample_period)`, the highest
    /// frequency distinguishable at this sample rate.
    pub fn nyquist(&self) -> f64 {
        1.0 / (2.0 * self.sample_period)
    }

    /// Checks that the cutoff frequency and sample period are positive,
    /// finite values.
    pub fn validate(&self) -> Result<(), FilterError> {
        if !(self.cutoff_hz > 0.0) || !self.cutoff_hz.is_finite() {
            return Err(FilterError::Initialization(
                "cutoff frequency must be positive and finite",
            ));
        }
        if !(self.sample_period > 0.0) || !self.sample_period.is_finite() {
            return Err(FilterError::Initialization(
                "sample period must be positive and finite",
            ));
        }
        Ok(())
    }
}

/// A stateful discrete-time filter driven one sample at a time.
///
/// Implementors own whatever internal memory the recursion needs.  The
/// analyzers in this crate never inspect that memory; they only construct a
/// unit from a [`FilterConfig`], stream samples through [`step`], and zero it
/// with [`reset`] between measurements.
///
/// [`step`]: FilterUnit::step
/// [`reset`]: FilterUnit::reset
pub trait FilterUnit: Sized {
    /// Constructs a unit with zeroed state from the configuration.
    fn initialize(config: &FilterConfig) -> Result<Self, FilterError>;

    /// Applies one input sample and returns the corresponding output sample.
    fn step(&mut self, input: f64) -> Result<f64, FilterError>;

    /// Zeroes the internal memory, preserving the configuration.  Idempotent.
    fn reset(&mut self);
}
