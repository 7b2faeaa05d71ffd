//! Computation layer for the form widgets.
//!
//! Each engine is a small set of pure functions. Callers own all interactive
//! state (form values, the current counter value) and re-invoke the engines on
//! every change; nothing is cached between calls.

pub mod bmi;
pub mod counter;
pub mod text;

pub use bmi::{bmi_scale, classify, compute_bmi, compute_bmi_from_input, parse_measurement};
pub use counter::{apply, apply_all, decrement, increment, reset};
pub use text::{WORDS_PER_MINUTE, analyze, insights};
