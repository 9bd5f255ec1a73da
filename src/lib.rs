//! Empirical characterization of discrete-time filters.
//!
//! This crate drives a black-box filter sample by sample with synthetic test
//! signals and reduces the recorded response to quantitative metrics: settling
//! behavior and rise time from a unit step, magnitude and phase per frequency
//! from a swept sine.  The filter under test is only ever touched through the
//! [`filter::FilterUnit`] trait, so anything that can step one sample at a
//! time can be measured.

pub mod analysis;
pub mod filter;
pub mod signal;
pub mod util;
