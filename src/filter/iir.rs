//! In-process simulation of a first-order IIR filter.
//!
//! This is the reference filter the analyzers are exercised against: a
//! single-pole lowpass/highpass discretized with
//! `a = x / (x + 1)` where `x = 2 * PI * Ts * fc`, so
//!
//! * lowpass:  `y[n] = a * u[n] + (1 - a) * y[n - 1]`
//! * highpass: `y[n] = (1 - a) * (u[n] - u[n - 1] + y[n - 1])`
//!
//! Assume initial state of 0's.  Any other filter can stand in for it through
//! the `FilterUnit` trait.

use crate::filter::{FilterConfig, FilterError, FilterKind, FilterUnit};
use std::f64::consts::PI;

/// Computes the recursion coefficient `a` for a given sample period and
/// cutoff frequency.  Result is on the interval (0, 1) for positive inputs.
///
/// # Arguments
///
/// * `sample_period` - Sample period in seconds.
/// * `cutoff_hz` - Cutoff frequency in Hz.
///
/// # Examples
///
/// ```
/// use bode_rs::filter::iir::coefficient;
///
/// let a = coefficient(1e-4, 1000.0);
/// assert!(a > 0.0 && a < 1.0);
/// ```
pub fn coefficient(sample_period: f64, cutoff_hz: f64) -> f64 {
    let x = 2.0 * PI * sample_period * cutoff_hz;
    x / (x + 1.0)
}

/// A first-order IIR filter with lowpass and highpass forms.
///
/// # Examples
///
/// ```
/// use bode_rs::filter::{FilterConfig, FilterKind, FilterUnit};
/// use bode_rs::filter::iir::FirstOrderIir;
///
/// let config = FilterConfig {
///     cutoff_hz: 1000.0,
///     sample_period: 1e-4,
///     kind: FilterKind::Lowpass,
/// };
/// let mut filt = FirstOrderIir::initialize(&config).unwrap();
/// let y = filt.step(1.0).unwrap();
/// assert!(y > 0.0 && y < 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct FirstOrderIir {
    a: f64,
    kind: FilterKind,
    y_prev: f64,
    u_prev: f64,
}

impl FirstOrderIir {
    /// Returns the recursion coefficient `a` in use.
    pub fn coefficient(&self) -> f64 {
        self.a
    }
}

impl FilterUnit for FirstOrderIir {
    fn initialize(config: &FilterConfig) -> Result<FirstOrderIir, FilterError> {
        config.validate()?;
        Ok(FirstOrderIir {
            a: coefficient(config.sample_period, config.cutoff_hz),
            kind: config.kind,
            y_prev: 0.0,
            u_prev: 0.0,
        })
    }

    fn step(&mut self, input: f64) -> Result<f64, FilterError> {
        if !input.is_finite() {
            return Err(FilterError::Step("input sample is not finite"));
        }
        let a = self.a;
        let u = input;
        let y = match self.kind {
            FilterKind::Lowpass => a * u + (1.0 - a) * self.y_prev,
            FilterKind::Highpass => {
                (1.0 - a) * (u - self.u_prev + self.y_prev)
            }
        };
        self.y_prev = y;
        self.u_prev = u;
        Ok(y)
    }

    fn reset(&mut self) {
        self.y_prev = 0.0;
        self.u_prev = 0.0;
    }
}
