//! Result presentation
//!
//! - `text`: console report
//! - `json`: machine-readable report
//! - `csv`: step-indexed head positions
//! - `chart`: terminal charts

pub mod chart;
pub mod csv;
pub mod json;
pub mod text;
