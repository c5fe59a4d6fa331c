//! PPM reading and writing module
//!
//! This module provides parsing and serialization of the plain-text (P3)
//! variant of the Portable Pixmap format.

mod reader;
mod plain_ppm_reader;
mod writer;
mod plain_ppm_writer;
pub mod types;

pub use reader::PpmImageReader;
pub use plain_ppm_reader::PlainPpmReader;
pub use writer::PpmImageWriter;
pub use plain_ppm_writer::PlainPpmWriter;
pub use types::{PpmImage, ConversionConfig, ConversionConfigBuilder};
