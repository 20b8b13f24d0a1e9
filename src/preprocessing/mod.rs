//! Image preprocessing module
//!
//! Prepares a decoded image for recognition: grayscale conversion followed
//! by fixed-cutoff binarization.

pub mod pipeline;
pub mod steps;

pub use pipeline::Pipeline;
