//! Plain-text rendering of the offset tables, and test-vector assembly.

use core::fmt::Display;

use itertools::Itertools;
use rhopi_keccak_offsets::{RoundOffsets, triangular_offsets};
use rhopi_padding::PaddingVector;

use crate::error::CliError;

/// Formats values as `[a, b, c]`.
pub fn format_list<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    format!("[{}]", values.into_iter().join(", "))
}

pub fn offsets_report(offsets: &RoundOffsets) -> String {
    [
        "For the rho/pi step, read lanes using the offsets".to_string(),
        format_list(offsets.read_offsets()),
        "then write the values using the offsets".to_string(),
        format_list(offsets.write_offsets()),
        String::new(),
        "Each lane must be rotated by".to_string(),
        format_list(triangular_offsets()),
        "which modulo the lane length is".to_string(),
        format_list(offsets.rotations()),
    ]
    .join("\n")
}

/// Places `message` at the front of a zeroed buffer of `input_size` symbols and builds the
/// padding test vector for it.
pub fn build_vector(
    message: &[u8],
    input_size: usize,
    input_length: Option<usize>,
    padded_length: usize,
    tamper: bool,
) -> Result<PaddingVector, CliError> {
    if message.len() > input_size {
        return Err(CliError::MessageTooLong {
            message_length: message.len(),
            input_size,
        });
    }
    let mut input = vec![0u8; input_size];
    input[..message.len()].copy_from_slice(message);
    let input_length = input_length.unwrap_or(message.len());

    let vector = if tamper {
        PaddingVector::tampered(input, input_length, padded_length)?
    } else {
        PaddingVector::honest(input, input_length, padded_length)?
    };
    Ok(vector)
}

#[cfg(test)]
mod tests {
    use rhopi_keccak_offsets::generate_round_offsets;
    use rhopi_padding::PaddingError;

    use super::*;

    #[test]
    fn test_format_list() {
        assert_eq!(format_list([1, 10, 7]), "[1, 10, 7]");
        assert_eq!(format_list(Vec::<u32>::new()), "[]");
    }

    #[test]
    fn test_offsets_report() {
        let report = offsets_report(&generate_round_offsets());
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[1].starts_with("[1, 10, 7, 11, 17,"));
        assert!(lines[3].starts_with("[6, 1, 10, 7,"));
        assert!(lines[6].ends_with("276, 300]"));
        assert!(lines[8].ends_with("61, 20, 44]"));
    }

    #[test]
    fn test_build_vector() {
        let vector = build_vector(&[0, 0], 10, None, 10, false).unwrap();
        assert_eq!(vector.input_length, 2);
        assert_eq!(vector.ret, vec![0, 0, 1, 0, 0, 0, 0, 0, 0, 1]);

        let tampered = build_vector(&[0, 0], 10, None, 10, true).unwrap();
        assert_eq!(tampered.input[2], 1);
        assert!(!tampered.is_consistent());
    }

    #[test]
    fn test_build_vector_errors() {
        assert!(matches!(
            build_vector(&[1, 1, 1], 2, None, 10, false),
            Err(CliError::MessageTooLong { .. })
        ));
        assert!(matches!(
            build_vector(&[1], 10, Some(9), 10, false),
            Err(CliError::Padding(PaddingError::CapacityExceeded { .. }))
        ));
    }
}
