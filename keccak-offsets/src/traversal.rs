use core::iter::FusedIterator;

use rhopi_util::modulo;

use crate::{LaneCoord, NUM_STEPS, STATE_WIDTH};

/// The first lane visited by the rho traversal.
pub const TRAVERSAL_SEED: LaneCoord = LaneCoord::new_reduced(1, 0);

/// Applies one step of the recurrence `(x, y) <- (y, 2x + 3y mod 5)`.
#[inline]
pub(crate) const fn advance(coord: LaneCoord) -> LaneCoord {
    let next_y = modulo((2 * coord.x() + 3 * coord.y()) as i64, STATE_WIDTH as u64) as usize;
    LaneCoord::new_reduced(coord.y(), next_y)
}

/// The 24 non-origin lanes, in the order the rho step assigns rotation amounts to them.
///
/// Every call to [`lane_traversal`] starts again from [`TRAVERSAL_SEED`], and the iterator is
/// `Clone`, so the sequence can be replayed as often as needed.
#[derive(Clone, Debug)]
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct LaneTraversal {
    next: LaneCoord,
    remaining: usize,
}

pub const fn lane_traversal() -> LaneTraversal {
    LaneTraversal {
        next: TRAVERSAL_SEED,
        remaining: NUM_STEPS,
    }
}

impl Iterator for LaneTraversal {
    type Item = LaneCoord;

    fn next(&mut self) -> Option<LaneCoord> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let coord = self.next;
        self.next = advance(coord);
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LaneTraversal {}

impl FusedIterator for LaneTraversal {}

/// The traversal as a fixed-size array, built as a fold over the recurrence from the seed.
pub fn lane_traversal_array() -> [LaneCoord; NUM_STEPS] {
    let (_, sequence) = (0..NUM_STEPS).fold(
        (TRAVERSAL_SEED, [LaneCoord::ORIGIN; NUM_STEPS]),
        |(coord, mut sequence), step| {
            sequence[step] = coord;
            (advance(coord), sequence)
        },
    );
    sequence
}
