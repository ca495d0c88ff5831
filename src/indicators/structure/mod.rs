//! Price structure: pivot points

pub mod pivots;

pub use pivots::*;
