use core::mem;

use tracing::instrument;

use crate::{
    GatherPi, NUM_LANES, NUM_STEPS, OffsetError, PiMapping, lane_traversal_array, rho_rotations,
};

/// Where one traversal step reads its lane from, and where the rotated lane is written.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OffsetPair {
    pub read: usize,
    pub write: usize,
}

/// Everything a permutation needs to perform the combined rho/pi step in traversal order:
/// at step `t`, read lane `pairs[t].read`, rotate it left by `rotations[t]` and store it at
/// `pairs[t].write`. The origin lane is copied through unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOffsets {
    pairs: [OffsetPair; NUM_STEPS],
    rotations: [u32; NUM_STEPS],
}

impl RoundOffsets {
    pub const fn pairs(&self) -> &[OffsetPair; NUM_STEPS] {
        &self.pairs
    }

    pub fn read_offsets(&self) -> [usize; NUM_STEPS] {
        self.pairs.map(|pair| pair.read)
    }

    pub fn write_offsets(&self) -> [usize; NUM_STEPS] {
        self.pairs.map(|pair| pair.write)
    }

    pub const fn rotations(&self) -> &[u32; NUM_STEPS] {
        &self.rotations
    }

    /// Iterates over `(pair, rotation)` in traversal order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (OffsetPair, u32)> + '_ {
        self.pairs.iter().copied().zip(self.rotations.iter().copied())
    }

    /// Checks that the read offsets visit every non-origin lane exactly once.
    pub fn check_read_offsets(&self) -> Result<(), OffsetError> {
        let mut seen = [false; NUM_LANES];
        for pair in &self.pairs {
            // 24 distinct indices from 1..25 are necessarily all of them.
            if pair.read == 0 || mem::replace(&mut seen[pair.read], true) {
                return Err(OffsetError::ReadOffsetsMismatch);
            }
        }
        Ok(())
    }

    /// Checks that no two steps write to the same lane and that none overwrites the origin.
    ///
    /// This only holds if the pi remapping the offsets were built with is a bijection fixing
    /// the origin, so it is reported rather than assumed.
    pub fn check_write_offsets(&self) -> Result<(), OffsetError> {
        let mut seen = [false; NUM_LANES];
        for (step, pair) in self.pairs.iter().enumerate() {
            if pair.write == 0 {
                return Err(OffsetError::WritesOrigin { step });
            }
            if mem::replace(&mut seen[pair.write], true) {
                return Err(OffsetError::DuplicateWriteOffset { offset: pair.write });
            }
        }
        Ok(())
    }
}

/// Generates the rho/pi offsets for one round, using [`GatherPi`] for the write offsets.
pub fn generate_round_offsets() -> RoundOffsets {
    generate_round_offsets_with(&GatherPi)
}

/// Generates the rho/pi offsets for one round, computing write offsets with the given remapping.
#[instrument(name = "generate rho/pi offsets", level = "debug", skip_all)]
pub fn generate_round_offsets_with<P: PiMapping + ?Sized>(pi: &P) -> RoundOffsets {
    let pairs = lane_traversal_array().map(|coord| OffsetPair {
        read: coord.flat_index(),
        write: pi.remap(coord).flat_index(),
    });
    RoundOffsets {
        pairs,
        rotations: rho_rotations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LaneCoord, ScatterPi};

    const READ: [usize; NUM_STEPS] = [
        1, 10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6,
    ];

    #[test]
    fn test_read_offsets() {
        let offsets = generate_round_offsets();
        assert_eq!(offsets.read_offsets(), READ);
        assert_eq!(offsets.check_read_offsets(), Ok(()));

        let mut sorted = offsets.read_offsets();
        sorted.sort_unstable();
        assert!(sorted.into_iter().eq(1..NUM_LANES));
    }

    #[test]
    fn test_gather_write_offsets() {
        let offsets = generate_round_offsets();
        assert_eq!(
            offsets.write_offsets(),
            [
                6, 1, 10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22,
                9
            ]
        );
        assert_eq!(offsets.check_write_offsets(), Ok(()));
    }

    #[test]
    fn test_scatter_write_offsets() {
        let offsets = generate_round_offsets_with(&ScatterPi);
        assert_eq!(offsets.read_offsets(), READ);
        assert_eq!(offsets.check_write_offsets(), Ok(()));
        // Each lane moves to the lane visited by the next step.
        for step in 0..NUM_STEPS {
            assert_eq!(offsets.write_offsets()[step], READ[(step + 1) % NUM_STEPS]);
        }
        assert_ne!(offsets, generate_round_offsets());
    }

    #[test]
    fn test_rotations_attached() {
        let offsets = generate_round_offsets();
        assert_eq!(offsets.rotations(), &rho_rotations());
        assert_eq!(offsets.iter().len(), NUM_STEPS);
        let (first, rotation) = offsets.iter().next().unwrap();
        assert_eq!(first, OffsetPair { read: 1, write: 6 });
        assert_eq!(rotation, 1);
    }

    #[test]
    fn test_duplicate_write_reported() {
        let collapse = |coord: LaneCoord| LaneCoord::new(coord.x(), 1).unwrap();
        let offsets = generate_round_offsets_with(&collapse);
        assert!(matches!(
            offsets.check_write_offsets(),
            Err(OffsetError::DuplicateWriteOffset { .. })
        ));
        assert_eq!(offsets.check_read_offsets(), Ok(()));
    }

    #[test]
    fn test_origin_write_reported() {
        let to_origin = |_: LaneCoord| LaneCoord::ORIGIN;
        let offsets = generate_round_offsets_with(&to_origin);
        assert_eq!(
            offsets.check_write_offsets(),
            Err(OffsetError::WritesOrigin { step: 0 })
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_round_offsets(), generate_round_offsets());
    }
}
