use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::ppm::types::PpmImage;

pub trait PpmImageWriter {
    fn write_ppm(&self, image: &PpmImage, output: &mut dyn Write) -> Result<()>;
}
