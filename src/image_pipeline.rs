//! Image processing pipeline module
//!
//! This module converts plain-text PPM images to grayscale, with separate
//! modules for PPM reading and writing, the pixel transform, and the
//! conversion orchestration that ties them together.

pub mod common;
pub mod conversions;
pub mod grayscale;
pub mod naming;
pub mod ppm;

pub use common::{
    ConversionError,
    Result,
};

pub use ppm::{
    PpmImage,
    PpmImageReader,
    PlainPpmReader,
    PpmImageWriter,
    PlainPpmWriter,
    ConversionConfig,
    ConversionConfigBuilder,
};

pub use grayscale::{grayscale, gray_one_row};

pub use naming::grayscale_output_name;

pub use conversions::{
    GrayscalePipeline,
    PipelineTimings,
    Stage,
    StepTiming,
    Timer,
};
