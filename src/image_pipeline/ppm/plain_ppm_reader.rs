//! Plain-text PPM reader.
//!
//! The input is treated as a stream of whitespace-separated tokens; line
//! layout carries no meaning. Any Unicode whitespace separates tokens,
//! including vertical tab, NEL and no-break space. The first four tokens form
//! the header (format tag, width, height, max value) and every following
//! token is a channel value. All integers are 64-bit and signed.

use tracing::{debug, warn};
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::ppm::reader::PpmImageReader;
use crate::image_pipeline::ppm::types::{self, PpmImage, ConversionConfig};

/// Reader for P3 (ASCII) PPM images.
///
/// The format tag is read and discarded without validation, so any tag is
/// accepted as long as the remaining tokens parse.
pub struct PlainPpmReader;

impl PpmImageReader for PlainPpmReader {
    /// Parses a P3 PPM image from its raw bytes.
    ///
    /// Channel values are grouped into rows of `width * 3`. A trailing
    /// partial row is dropped unless `config.strict_rows` is set, in which
    /// case it is reported as [`ConversionError::IncompleteRow`]. With a
    /// width of zero or less no row ever completes.
    ///
    /// # Errors
    ///
    /// * [`ConversionError::MissingHeaderField`] if the data ends inside the header
    /// * [`ConversionError::ParseError`] for any token that is not an integer
    fn read_ppm(&self, data: &[u8], config: &ConversionConfig) -> Result<PpmImage> {
        debug!("Parsing PPM image, {} bytes", data.len());

        // Invalid UTF-8 becomes U+FFFD, which fails to parse as an integer.
        let text = String::from_utf8_lossy(data);

        // Positions are 1-based so they line up with the token count a
        // reader would see in an editor.
        let mut tokens = text
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| (index + 1, token));

        tokens.next().ok_or(ConversionError::MissingHeaderField("format tag"))?;
        let width = header_field(tokens.next(), "width")?;
        let height = header_field(tokens.next(), "height")?;
        let max_value = header_field(tokens.next(), "max value")?;

        debug!("Header: {}x{}, max value {}", width, height, max_value);

        let row_len = types::row_len(width);
        let mut rows = Vec::new();
        let mut row = Vec::new();

        // With row_len 0 no row ever completes, so every value ends up in
        // the discarded trailing row.
        for (position, token) in tokens {
            row.push(parse_token(position, token)?);
            if row.len() == row_len {
                rows.push(std::mem::replace(&mut row, Vec::with_capacity(row_len)));
            }
        }

        if !row.is_empty() {
            if config.strict_rows {
                return Err(ConversionError::IncompleteRow {
                    expected: row_len,
                    actual: row.len(),
                });
            }
            warn!(
                "Dropping trailing partial row: {} of {} values",
                row.len(),
                row_len
            );
        }

        debug!("Parsed {} rows", rows.len());

        Ok(PpmImage {
            width,
            height,
            max_value,
            rows,
        })
    }
}

fn header_field(token: Option<(usize, &str)>, field: &'static str) -> Result<i64> {
    let (position, token) = token.ok_or(ConversionError::MissingHeaderField(field))?;
    parse_token(position, token)
}

fn parse_token(position: usize, token: &str) -> Result<i64> {
    token.parse().map_err(|_| ConversionError::ParseError {
        position,
        token: token.to_owned(),
    })
}
