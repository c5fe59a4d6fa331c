/// Extension searched for in the input name.
const PPM_EXTENSION: &str = ".ppm";

/// Replacement for the first occurrence of [`PPM_EXTENSION`].
const GRAYSCALE_EXTENSION: &str = "-grayscale.ppm";

/// Derives the output file name for a grayscale conversion.
///
/// Only the first `.ppm` is replaced. A name without `.ppm` comes back
/// unchanged, which means the conversion overwrites its input.
pub fn grayscale_output_name(input: &str) -> String {
    input.replacen(PPM_EXTENSION, GRAYSCALE_EXTENSION, 1)
}
