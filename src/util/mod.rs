//! Helper functions shared by the analyzers.

/// Some basic math functions used elsewhere in the project
pub mod math;
