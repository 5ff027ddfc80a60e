//! Small helpers shared across the service layer.

pub mod emoji;
pub mod parse;
