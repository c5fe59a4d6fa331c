//! Unweighted grayscale conversion
//!
//! Every pixel's three channels are replaced by their truncated integer
//! average. The image is modified in place.

use tracing::debug;
use crate::image_pipeline::ppm::types::{PpmImage, CHANNELS};

/// Converts one row of interleaved R, G, B values to grayscale.
///
/// Only the first `width` complete pixels are touched, so a short row never
/// reads out of bounds.
pub fn gray_one_row(width: usize, row: &mut [i64]) {
    for pixel in row.chunks_exact_mut(CHANNELS).take(width) {
        let sum: i128 = pixel.iter().map(|&channel| i128::from(channel)).sum();
        // The mean of three i64 values always fits back into an i64.
        let avg = (sum / CHANNELS as i128) as i64;
        pixel.fill(avg);
    }
}

/// Converts the whole image to grayscale. Dimensions and max value are left as is.
pub fn grayscale(image: &mut PpmImage) {
    debug!("Converting {} rows to grayscale", image.rows.len());

    let width = image.pixels_per_row();
    for row in &mut image.rows {
        gray_one_row(width, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_pixel(r: i64, g: i64, b: i64) -> PpmImage {
        PpmImage { width: 1, height: 1, max_value: 255, rows: vec![vec![r, g, b]] }
    }

    #[test]
    fn test_exact_average() {
        let mut image = single_pixel(10, 20, 30);
        grayscale(&mut image);

        assert_eq!(image.rows[0], vec![20, 20, 20]);
    }

    #[test]
    fn test_average_truncates() {
        let mut image = single_pixel(10, 10, 11);
        grayscale(&mut image);

        assert_eq!(image.rows[0], vec![10, 10, 10]);
    }

    #[test]
    fn test_idempotent() {
        let mut image = single_pixel(30, 60, 90);
        grayscale(&mut image);
        assert_eq!(image.rows[0], vec![60, 60, 60]);

        let once = image.clone();
        grayscale(&mut image);
        assert_eq!(image, once);
    }

    #[test]
    fn test_header_untouched() {
        let mut image = PpmImage {
            width: 2,
            height: 5,
            max_value: 15,
            rows: vec![vec![15, 0, 0, 3, 6, 9]],
        };
        grayscale(&mut image);

        assert_eq!((image.width, image.height, image.max_value), (2, 5, 15));
        assert_eq!(image.rows[0], vec![5, 5, 5, 6, 6, 6]);
    }

    #[test]
    fn test_row_helper_respects_width() {
        let mut row = vec![0, 3, 6, 9, 9, 9, 1];
        gray_one_row(1, &mut row);

        assert_eq!(row, vec![3, 3, 3, 9, 9, 9, 1]);
    }

    #[test]
    fn test_max_channel_values_do_not_overflow() {
        let mut row = vec![i64::MAX, i64::MAX, i64::MAX];
        gray_one_row(1, &mut row);

        assert_eq!(row, vec![i64::MAX; 3]);
    }

    #[test]
    fn test_channels_beyond_32_bits() {
        let mut image = single_pixel(3_000_000_000, 0, 0);
        grayscale(&mut image);

        assert_eq!(image.rows[0], vec![1_000_000_000; 3]);
    }

    #[test]
    fn test_negative_channels_truncate_toward_zero() {
        let mut image = single_pixel(-1, -1, -2);
        grayscale(&mut image);

        assert_eq!(image.rows[0], vec![-1, -1, -1]);
    }
}
