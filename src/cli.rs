//! Interactive driver: prompt for a file name, convert it, report progress.

use std::io::{BufRead, Write};

use anyhow::{Context, anyhow};
use tracing::warn;

use crate::image_pipeline::{ConversionConfig, GrayscalePipeline, Stage, Timer, grayscale_output_name};

pub const PROMPT: &str = "PPM image file> ";

/// Runs one conversion, reading the file name from `input` and writing the
/// prompt and progress transcript to `output`.
pub fn run(input: &mut dyn BufRead, output: &mut dyn Write) -> anyhow::Result<()> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("failed to read the file name")?;
    let filename = line
        .split_whitespace()
        .next()
        .ok_or_else(|| anyhow!("no PPM file name given"))?;

    let pipeline = GrayscalePipeline::new(ConversionConfig::default());

    writeln!(output, "Reading '{}'...", filename)?;
    let mut image = pipeline
        .read_file(filename)
        .with_context(|| format!("could not read '{}'", filename))?;

    writeln!(output, "Converting to grayscale...")?;
    let timer = Timer::start(Stage::Grayscale);
    pipeline.transform(&mut image);
    let (_, duration) = timer.stop();
    writeln!(output, "time: {} us", duration.as_micros())?;

    let output_name = grayscale_output_name(filename);
    if output_name == filename {
        warn!("'{}' has no .ppm extension, overwriting the input", filename);
    }

    writeln!(output, "Writing '{}'...", output_name)?;
    pipeline
        .write_file(&output_name, &image)
        .with_context(|| format!("could not write '{}'", output_name))?;

    writeln!(output, "done")?;
    Ok(())
}
