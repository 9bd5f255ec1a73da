//! Deterministic test signal generation.
//!
//! The analyzers drive the filter under test with synthetic sequences built
//! here: an ideal unit step for settling analysis and multi-period sinusoids
//! for swept-sine analysis.  Generation is a pure function of the parameters;
//! there is no state and no randomness.

use std::error;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum SignalError {
    /// The requested sequence is shorter than the 20-sample minimum needed
    /// for steady-state estimation.
    InsufficientSamples,
    /// A parameter is non-positive or non-finite.
    InvalidParameter,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let desc = match *self {
            SignalError::InsufficientSamples => {
                "Generated signal is shorter than the 20 sample minimum"
            }
            SignalError::InvalidParameter => {
                "Signal parameters must be positive and finite"
            }
        };
        write!(f, "Signal error: {}", desc)
    }
}

impl error::Error for SignalError {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}

/// Test sequence generators.
pub mod source;
