use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::ppm::types::{PpmImage, ConversionConfig};

pub trait PpmImageReader {
    fn read_ppm(&self, data: &[u8], config: &ConversionConfig) -> Result<PpmImage>;
}
