use tracing::{debug, info, instrument, warn};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    conversions::timing::{PipelineTimings, Stage, Timer},
    grayscale::grayscale,
    ppm::{ConversionConfig, PlainPpmReader, PlainPpmWriter, PpmImage, PpmImageReader, PpmImageWriter},
};

/// Read, convert to grayscale, write.
///
/// The stages are exposed individually ([`read_file`](Self::read_file),
/// [`transform`](Self::transform), [`write_file`](Self::write_file)) for
/// callers that report progress between them, and combined in
/// [`convert_file`](Self::convert_file).
pub struct GrayscalePipeline<R: PpmImageReader, W: PpmImageWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl GrayscalePipeline<PlainPpmReader, PlainPpmWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: PlainPpmReader,
            writer: PlainPpmWriter,
            config,
        }
    }
}

impl<R: PpmImageReader, W: PpmImageWriter> GrayscalePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, image: &PpmImage) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if image.width <= 0 || image.height <= 0 {
            return Err(ConversionError::InvalidDimensions(image.width, image.height));
        }

        if i64::try_from(image.rows.len()).ok() != Some(image.height) {
            warn!(
                "Image declares {} rows but {} were read",
                image.height,
                image.rows.len()
            );
            return Err(ConversionError::RowCountMismatch {
                expected: image.height,
                actual: image.rows.len(),
            });
        }

        Ok(())
    }

    fn dump_pixels(&self, image: &PpmImage) {
        if !self.config.dump_pixels {
            return;
        }

        debug!(
            width = image.width,
            height = image.height,
            max_value = image.max_value,
            "PPM header"
        );
        for (index, row) in image.rows.iter().enumerate() {
            debug!(row = index, "{:?}", row);
        }
    }

    fn decode_timed(&self, input_data: &[u8], timings: &mut PipelineTimings) -> Result<PpmImage> {
        let timer = Timer::start(Stage::ParsePpm);
        let image = {
            let _span = tracing::info_span!("parse_ppm").entered();
            self.reader.read_ppm(input_data, &self.config)?
        };
        timings.record(timer);

        let timer = Timer::start(Stage::ValidateDimensions);
        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width,
                height = image.height
            ).entered();
            self.validate_dimensions(&image)?;
        }
        timings.record(timer);

        self.dump_pixels(&image);
        Ok(image)
    }

    /// Parses an in-memory PPM image and applies the configured validation.
    pub fn decode(&self, input_data: &[u8]) -> Result<PpmImage> {
        self.decode_timed(input_data, &mut PipelineTimings::new())
    }

    /// Converts the image to grayscale in place.
    pub fn transform(&self, image: &mut PpmImage) {
        let _span = tracing::info_span!("grayscale", rows = image.rows.len()).entered();
        grayscale(image);
    }

    pub fn encode(&self, image: &PpmImage, output: &mut dyn Write) -> Result<()> {
        let _span = tracing::info_span!("encode_ppm").entered();
        self.writer.write_ppm(image, output)
    }

    #[instrument(skip(self, input_path))]
    pub fn read_file<P: AsRef<Path>>(&self, input_path: P) -> Result<PpmImage> {
        let input_path = input_path.as_ref();
        info!(input = %input_path.display(), "Reading PPM file");

        let input_data = read_input(input_path)?;
        self.decode(&input_data)
    }

    /// Creates (or truncates) `output_path` and writes the image to it.
    #[instrument(skip(self, output_path, image))]
    pub fn write_file<P: AsRef<Path>>(&self, output_path: P, image: &PpmImage) -> Result<()> {
        let output_path = output_path.as_ref();
        info!(output = %output_path.display(), "Writing PPM file");

        let mut output_file = create_output(output_path)?;
        self.encode(image, &mut output_file)
    }

    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input_data, output).map(|_| ())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert_with_timings(
        &self,
        input_data: &[u8],
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting PPM to grayscale conversion");

        let mut image = self.decode_timed(input_data, &mut timings)?;

        let timer = Timer::start(Stage::Grayscale);
        self.transform(&mut image);
        timings.record(timer);

        let timer = Timer::start(Stage::EncodePpm);
        self.encode(&image, output)?;
        timings.record(timer);

        info!(
            width = image.width,
            height = image.height,
            rows = image.rows.len(),
            "Conversion complete in {} us",
            timings.total_duration().as_micros()
        );
        Ok(timings)
    }

    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        self.convert_file_with_timings(input_path, output_path).map(|_| ())
    }

    /// Converts a file on disk. The output file is only created once the
    /// input has been parsed, so a malformed input never truncates it.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let timer = Timer::start(Stage::ReadInputFile);
        let input_data = read_input(input_path)?;
        timings.record(timer);

        let mut image = self.decode_timed(&input_data, &mut timings)?;

        let timer = Timer::start(Stage::Grayscale);
        self.transform(&mut image);
        timings.record(timer);

        let timer = Timer::start(Stage::CreateOutputFile);
        let mut output_file = create_output(output_path)?;
        timings.record(timer);

        let timer = Timer::start(Stage::EncodePpm);
        self.encode(&image, &mut output_file)?;
        timings.record(timer);

        timings.log_summary();
        Ok(timings)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

fn read_input(input_path: &Path) -> Result<Vec<u8>> {
    let _span = tracing::info_span!("read_input_file").entered();
    std::fs::read(input_path).map_err(|e| {
        ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
    })
}

fn create_output(output_path: &Path) -> Result<File> {
    let _span = tracing::info_span!("create_output_file").entered();
    File::create(output_path).map_err(|e| {
        ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
    })
}
