use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Both sides of a grid must be positive.
    #[error("Invalid dimensions {rows}x{cols}: both sides must be positive.")]
    InvalidDimensions { rows: usize, cols: usize },
    /// Probability of a cell being alive must lie within `[0, 1]`.
    #[error("Invalid fill rate {0}: expected a probability within [0, 1].")]
    InvalidFillRate(f64),
    /// A configuration override could not be parsed.
    #[error("Invalid value {value:?} for {key}.")]
    InvalidConfig { key: &'static str, value: String },
    /// Unknown cell symbol in a plaintext pattern.
    #[error("Unexpected symbol {symbol:?} on line {line} of the pattern.")]
    ParsePattern { line: usize, symbol: char },
}

pub type Result<T> = std::result::Result<T, Error>;
