use rhopi_util::modulo;

use crate::traversal::advance;
use crate::{LaneCoord, OffsetError, STATE_WIDTH};

/// A remapping of lane coordinates performed by the pi step.
///
/// Kept to a single function of one coordinate so a candidate remapping can be swapped into
/// [`generate_round_offsets_with`](crate::generate_round_offsets_with) and checked on its own.
pub trait PiMapping {
    fn remap(&self, coord: LaneCoord) -> LaneCoord;
}

impl<F> PiMapping for F
where
    F: Fn(LaneCoord) -> LaneCoord,
{
    fn remap(&self, coord: LaneCoord) -> LaneCoord {
        self(coord)
    }
}

/// `(x, y) -> (x + 3y mod 5, x)`.
///
/// This is the remapping used by [`generate_round_offsets`](crate::generate_round_offsets) and
/// reproduces the published offset tables. Note that it is the coordinate pi *reads* lane
/// `(x, y)` of its output from, not the coordinate lane `(x, y)` is moved to, so offsets built
/// with it do not yield Keccak-f when used as write targets. See [`ScatterPi`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GatherPi;

impl PiMapping for GatherPi {
    fn remap(&self, coord: LaneCoord) -> LaneCoord {
        let x = modulo((coord.x() + 3 * coord.y()) as i64, STATE_WIDTH as u64) as usize;
        LaneCoord::new_reduced(x, coord.x())
    }
}

/// `(x, y) -> (y, 2x + 3y mod 5)`, the destination of lane `(x, y)` under pi.
///
/// This is the inverse of [`GatherPi`] and coincides with the rho traversal recurrence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScatterPi;

impl PiMapping for ScatterPi {
    fn remap(&self, coord: LaneCoord) -> LaneCoord {
        advance(coord)
    }
}

/// Applies [`GatherPi`] to a raw coordinate pair.
pub fn pi_map(x: usize, y: usize) -> Result<(usize, usize), OffsetError> {
    let coord = LaneCoord::new(x, y)?;
    Ok(GatherPi.remap(coord).into())
}
