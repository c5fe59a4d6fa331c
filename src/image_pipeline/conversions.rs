//! Pipeline conversions module
//!
//! This module contains the orchestration logic for the grayscale conversion.

mod ppm_to_grayscale;
mod timing;


pub use ppm_to_grayscale::GrayscalePipeline;
pub use timing::{PipelineTimings, Stage, StepTiming, Timer};
