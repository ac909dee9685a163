use alloc::vec::Vec;

use tracing::instrument;

use crate::{MIN_PADDING, PaddingError};

fn check_binary(symbols: &[u8]) -> Result<(), PaddingError> {
    match symbols.iter().position(|&symbol| symbol > 1) {
        Some(position) => Err(PaddingError::NonBinarySymbol {
            position,
            symbol: symbols[position],
        }),
        None => Ok(()),
    }
}

/// Appends `1, 0, ..., 0, 1` of total length `len` to `out`. Requires `len >= 2`.
fn extend_with_run(out: &mut Vec<u8>, len: usize) {
    debug_assert!(len >= MIN_PADDING);
    out.push(1);
    out.extend(core::iter::repeat_n(0, len - MIN_PADDING));
    out.push(1);
}

/// Builds a padding run of length `len`: a `1`, then `len - 2` zeros, then a final `1`.
pub fn padding_run(len: usize) -> Result<Vec<u8>, PaddingError> {
    if len < MIN_PADDING {
        return Err(PaddingError::RunTooShort(len));
    }
    let mut run = Vec::with_capacity(len);
    extend_with_run(&mut run, len);
    Ok(run)
}

/// Pads the first `input_length` symbols of `input` to exactly `padded_length` symbols.
///
/// `input` is a fixed-capacity buffer: every symbol from `input_length` on must be zero. The
/// result is `input[..input_length]` followed by a padding run filling the remaining
/// `padded_length - input_length` positions, which must be at least two.
#[instrument(level = "debug", skip(input))]
pub fn pad(
    input: &[u8],
    input_length: usize,
    padded_length: usize,
) -> Result<Vec<u8>, PaddingError> {
    if input_length > input.len() {
        return Err(PaddingError::LengthExceedsInput {
            input_length,
            capacity: input.len(),
        });
    }
    check_binary(&input[..input_length])?;
    if let Some(offset) = input[input_length..].iter().position(|&symbol| symbol != 0) {
        return Err(PaddingError::TrailingData {
            position: input_length + offset,
        });
    }

    let run_length = padded_length
        .checked_sub(input_length)
        .filter(|&len| len >= MIN_PADDING)
        .ok_or(PaddingError::CapacityExceeded {
            input_length,
            padded_length,
        })?;

    let mut padded = Vec::with_capacity(padded_length);
    padded.extend_from_slice(&input[..input_length]);
    extend_with_run(&mut padded, run_length);
    Ok(padded)
}

/// Pads a whole message to the shortest multiple of `rate` that fits it and both padding bits,
/// as the sponge does before absorbing.
pub fn pad_to_multiple(message: &[u8], rate: usize) -> Result<Vec<u8>, PaddingError> {
    if rate < MIN_PADDING {
        return Err(PaddingError::RateTooSmall(rate));
    }
    let padded_length = (message.len() + MIN_PADDING).next_multiple_of(rate);
    pad(message, message.len(), padded_length)
}

/// Strips a trailing `1 0* 1` padding run, returning the message it was appended to.
pub fn unpad(padded: &[u8]) -> Result<&[u8], PaddingError> {
    check_binary(padded)?;
    match padded.split_last() {
        Some((&1, rest)) => rest
            .iter()
            .rposition(|&symbol| symbol == 1)
            .map(|start| &padded[..start])
            .ok_or(PaddingError::MalformedPadding),
        _ => Err(PaddingError::MalformedPadding),
    }
}
