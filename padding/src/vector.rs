use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::{PaddingError, pad};

/// Inputs and expected output handed to a padding circuit's prover.
///
/// Serialises as `{ "input": [...], "input_length": n, "return": [...] }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddingVector {
    pub input: Vec<u8>,
    pub input_length: usize,
    #[serde(rename = "return")]
    pub ret: Vec<u8>,
}

impl PaddingVector {
    /// A vector whose expected output is the correct padding of `input`.
    pub fn honest(
        input: Vec<u8>,
        input_length: usize,
        padded_length: usize,
    ) -> Result<Self, PaddingError> {
        let ret = pad(&input, input_length, padded_length)?;
        Ok(Self {
            input,
            input_length,
            ret,
        })
    }

    /// A vector a sound circuit must reject.
    ///
    /// The expected output is computed from the well-formed `input`, then a `1` is written just
    /// past the declared length so the input no longer matches `input_length`.
    pub fn tampered(
        input: Vec<u8>,
        input_length: usize,
        padded_length: usize,
    ) -> Result<Self, PaddingError> {
        let mut vector = Self::honest(input, input_length, padded_length)?;
        let slot = vector
            .input
            .get_mut(input_length)
            .ok_or(PaddingError::NoTrailingCapacity { input_length })?;
        *slot = 1;
        Ok(vector)
    }

    pub fn padded_length(&self) -> usize {
        self.ret.len()
    }

    /// Whether `ret` is exactly the padding of `input` under `input_length`.
    pub fn is_consistent(&self) -> bool {
        pad(&self.input, self.input_length, self.padded_length()).is_ok_and(|ret| ret == self.ret)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    const INPUT_SIZE: usize = 10;
    const BLOCK_SIZE: usize = 10;

    #[test]
    fn test_honest_vector() {
        let vector = PaddingVector::honest(vec![0; INPUT_SIZE], 2, BLOCK_SIZE).unwrap();
        assert_eq!(vector.ret, vec![0, 0, 1, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(vector.padded_length(), BLOCK_SIZE);
        assert!(vector.is_consistent());
    }

    #[test]
    fn test_tampered_vector() {
        let vector = PaddingVector::tampered(vec![0; INPUT_SIZE], 2, BLOCK_SIZE).unwrap();
        assert_eq!(vector.input[2], 1);
        assert_eq!(vector.ret, vec![0, 0, 1, 0, 0, 0, 0, 0, 0, 1]);
        assert!(!vector.is_consistent());
        assert_eq!(
            pad(&vector.input, vector.input_length, BLOCK_SIZE),
            Err(PaddingError::TrailingData { position: 2 })
        );
    }

    #[test]
    fn test_tampered_needs_trailing_symbol() {
        assert_eq!(
            PaddingVector::tampered(vec![1, 0], 2, 4),
            Err(PaddingError::NoTrailingCapacity { input_length: 2 })
        );
    }

    #[test]
    fn test_json_shape() {
        let vector = PaddingVector::honest(vec![1, 0, 0, 0], 1, 4).unwrap();
        let json = serde_json::to_value(&vector).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input": [1, 0, 0, 0],
                "input_length": 1,
                "return": [1, 1, 0, 1],
            })
        );
        let parsed: PaddingVector = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, vector);
    }
}
