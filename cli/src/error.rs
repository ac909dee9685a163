use rhopi_keccak_offsets::OffsetError;
use rhopi_padding::PaddingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Offsets(#[from] OffsetError),
    #[error(transparent)]
    Padding(#[from] PaddingError),
    #[error("message of {message_length} bits does not fit an input buffer of {input_size}")]
    MessageTooLong {
        message_length: usize,
        input_size: usize,
    },
    #[error("failed to serialize test vector")]
    Json(#[from] serde_json::Error),
}
