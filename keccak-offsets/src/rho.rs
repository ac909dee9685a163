use core::array;

use rhopi_util::{modulo, triangular_number};

use crate::{LANE_BITS, NUM_STEPS, OffsetError, STATE_WIDTH, lane_traversal};

/// The unreduced rho offset of traversal step `step`, `(step + 1)(step + 2) / 2`.
#[inline]
const fn triangular_offset(step: usize) -> u64 {
    triangular_number(step as u64 + 1)
}

#[inline]
const fn rotation_for_step(step: usize) -> u32 {
    modulo(triangular_offset(step) as i64, LANE_BITS as u64) as u32
}

/// The left-rotation applied by rho to the lane visited at traversal step `step`.
pub const fn rho_rotation(step: usize) -> Result<u32, OffsetError> {
    if step < NUM_STEPS {
        Ok(rotation_for_step(step))
    } else {
        Err(OffsetError::StepOutOfRange(step))
    }
}

/// Rotation amounts for every traversal step, each in `[0, 64)`.
pub fn rho_rotations() -> [u32; NUM_STEPS] {
    array::from_fn(rotation_for_step)
}

/// The triangular numbers `1, 3, 6, ..., 300` before reduction modulo the lane length.
pub fn triangular_offsets() -> [u64; NUM_STEPS] {
    array::from_fn(triangular_offset)
}

/// Rotation amounts laid out over the state array, indexed `[x][y]`. The origin is not rotated.
pub fn rho_offset_grid() -> [[u32; STATE_WIDTH]; STATE_WIDTH] {
    let mut grid = [[0; STATE_WIDTH]; STATE_WIDTH];
    for (step, coord) in lane_traversal().enumerate() {
        grid[coord.x()][coord.y()] = rotation_for_step(step);
    }
    grid
}
