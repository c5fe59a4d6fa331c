use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Invalid integer {token:?} at token {position}")]
    ParseError { position: usize, token: String },

    #[error("PPM header ended before the {0} field")]
    MissingHeaderField(&'static str),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(i64, i64),

    #[error("Image declares {expected} rows but contains {actual}")]
    RowCountMismatch { expected: i64, actual: usize },

    #[error("Last row has {actual} values, expected {expected}")]
    IncompleteRow { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
