//! CLI library components for the widgets front end.

pub mod input;
pub mod logging;
pub mod report;
pub mod summary;
