use thiserror::Error;

/// Errors produced while indexing the state array or validating a set of round offsets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum OffsetError {
    /// A coordinate component was not in `[0, 5)`.
    #[error("lane coordinate ({x}, {y}) is outside the 5x5 state array")]
    OutOfRange { x: usize, y: usize },
    #[error("flat index {0} is outside the 25-lane state array")]
    FlatIndexOutOfRange(usize),
    #[error("step {0} is outside the 24-step rho traversal")]
    StepOutOfRange(usize),
    /// The read offsets are not exactly the flat indices `1..=24`.
    #[error("read offsets do not visit every non-origin lane exactly once")]
    ReadOffsetsMismatch,
    /// Two traversal steps write to the same lane, so one of the rotated lanes would be lost.
    #[error("write offset {offset} is targeted by more than one traversal step")]
    DuplicateWriteOffset { offset: usize },
    /// The origin lane is never rotated or moved, so no step may write to it.
    #[error("traversal step {step} writes to the origin lane")]
    WritesOrigin { step: usize },
}
