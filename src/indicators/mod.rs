//! Technical analysis engine.
//!
//! Pure functions over a chronological `&[f64]` price series. Insufficient
//! history is reported as `None`, never as an error or a sentinel value.

pub mod analysis;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

pub use analysis::*;
