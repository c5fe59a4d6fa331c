//! PPM image and conversion configuration types

/// Number of interleaved channel values per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Decoded plain-text PPM image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpmImage {
    /// Width of the image in pixels, as declared by the header. Not
    /// validated, so it may be zero or negative.
    pub width: i64,
    /// Height of the image in pixels, as declared by the header
    pub height: i64,
    /// Declared maximum channel value (e.g. 255)
    pub max_value: i64,
    /// Pixel rows, top row first. Each row holds `width * 3` interleaved
    /// R, G, B values. The number of rows may differ from `height` for
    /// malformed input.
    pub rows: Vec<Vec<i64>>,
}

impl PpmImage {
    /// Number of complete pixels in one row; zero for a non-positive width.
    pub fn pixels_per_row(&self) -> usize {
        pixels_per_row(self.width)
    }

    /// Number of channel values in one complete row; zero for a
    /// non-positive width.
    pub fn row_len(&self) -> usize {
        row_len(self.width)
    }
}

pub(crate) fn pixels_per_row(width: i64) -> usize {
    usize::try_from(width).unwrap_or(0)
}

pub(crate) fn row_len(width: i64) -> usize {
    pixels_per_row(width).saturating_mul(CHANNELS)
}

/// Configuration for PPM to grayscale conversion
#[derive(Debug, Clone, Default)]
pub struct ConversionConfig {
    /// Reject zero dimensions and a row count that differs from the header
    pub validate_dimensions: bool,
    /// Fail on a trailing partial row instead of dropping it
    pub strict_rows: bool,
    /// Emit the decoded header and every row at debug level
    pub dump_pixels: bool,
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    validate_dimensions: Option<bool>,
    strict_rows: Option<bool>,
    dump_pixels: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn strict_rows(mut self, strict: bool) -> Self {
        self.strict_rows = Some(strict);
        self
    }

    pub fn dump_pixels(mut self, enable: bool) -> Self {
        self.dump_pixels = Some(enable);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            strict_rows: self.strict_rows.unwrap_or(default.strict_rows),
            dump_pixels: self.dump_pixels.unwrap_or(default.dump_pixels),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_preserve_lenient_parsing() {
        let config = ConversionConfig::default();

        assert!(!config.validate_dimensions);
        assert!(!config.strict_rows);
        assert!(!config.dump_pixels);
    }

    #[test]
    fn test_config_builder() {
        let config = ConversionConfig::builder()
            .validate_dimensions(true)
            .strict_rows(true)
            .build();

        assert!(config.validate_dimensions);
        assert!(config.strict_rows);
        assert!(!config.dump_pixels);
    }

    #[test]
    fn test_row_len() {
        let image = PpmImage { width: 4, height: 1, max_value: 255, rows: Vec::new() };
        assert_eq!(image.pixels_per_row(), 4);
        assert_eq!(image.row_len(), 12);
    }

    #[test]
    fn test_row_len_for_non_positive_width() {
        let image = PpmImage { width: -2, height: 1, max_value: 255, rows: Vec::new() };
        assert_eq!(image.pixels_per_row(), 0);
        assert_eq!(image.row_len(), 0);
    }
}
