use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum PaddingError {
    /// A symbol at or beyond the declared input length is nonzero, so the declared length
    /// understates the actual content.
    #[error("input has a nonzero symbol at position {position}, past its declared length")]
    TrailingData { position: usize },
    /// There is no room left for both padding marker bits.
    #[error(
        "input length {input_length} leaves no room for two padding bits within {padded_length} symbols"
    )]
    CapacityExceeded {
        input_length: usize,
        padded_length: usize,
    },
    #[error("declared input length {input_length} exceeds the input buffer of {capacity} symbols")]
    LengthExceedsInput { input_length: usize, capacity: usize },
    #[error("symbol {symbol} at position {position} is not a bit")]
    NonBinarySymbol { position: usize, symbol: u8 },
    #[error("a padding run needs at least two symbols, got {0}")]
    RunTooShort(usize),
    #[error("rate {0} is too small to hold the two padding bits")]
    RateTooSmall(usize),
    /// A tampered test vector needs a symbol after the message to corrupt.
    #[error("input of length {input_length} has no trailing symbol to tamper with")]
    NoTrailingCapacity { input_length: usize },
    #[error("padded sequence does not end with a 1 0* 1 padding run")]
    MalformedPadding,
}
