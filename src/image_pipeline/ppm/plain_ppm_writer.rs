use std::io::{BufWriter, Write};
use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::ppm::types::PpmImage;
use crate::image_pipeline::ppm::writer::PpmImageWriter;

/// Format tag written at the top of every output file.
pub const PLAIN_PPM_TAG: &str = "P3";

pub struct PlainPpmWriter;

impl PpmImageWriter for PlainPpmWriter {
    fn write_ppm(&self, image: &PpmImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PPM image: {}x{}, {} rows", image.width, image.height, image.rows.len());

        let mut out = BufWriter::new(output);

        writeln!(out, "{}", PLAIN_PPM_TAG)?;
        writeln!(out, "{} {}", image.width, image.height)?;
        writeln!(out, "{}", image.max_value)?;

        for row in &image.rows {
            for value in row {
                write!(out, "{} ", value)?;
            }
            writeln!(out)?;
        }

        out.flush()?;

        debug!("PPM encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::ppm::{ConversionConfig, PlainPpmReader, PpmImageReader};

    fn sample() -> PpmImage {
        PpmImage {
            width: 2,
            height: 2,
            max_value: 255,
            rows: vec![vec![1, 2, 3, 4, 5, 6], vec![7, 8, 9, 10, 11, 12]],
        }
    }

    #[test]
    fn test_layout() {
        let mut output = Vec::new();
        PlainPpmWriter.write_ppm(&sample(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "P3\n2 2\n255\n1 2 3 4 5 6 \n7 8 9 10 11 12 \n"
        );
    }

    #[test]
    fn test_output_reads_back_with_same_shape() {
        let mut output = Vec::new();
        PlainPpmWriter.write_ppm(&sample(), &mut output).unwrap();

        let image = PlainPpmReader.read_ppm(&output, &ConversionConfig::default()).unwrap();
        assert_eq!((image.width, image.height, image.max_value), (2, 2, 255));
        assert_eq!(image.rows.len(), 2);
    }

    #[test]
    fn test_header_only_for_empty_image() {
        let image = PpmImage { width: 0, height: 0, max_value: 0, rows: Vec::new() };
        let mut output = Vec::new();
        PlainPpmWriter.write_ppm(&image, &mut output).unwrap();

        assert_eq!(output, b"P3\n0 0\n0\n");
    }
}
