use core::fmt;

use crate::{NUM_LANES, OffsetError, STATE_WIDTH};

/// The `(x, y)` position of one lane in the 5x5 state array.
///
/// Both components are always in `[0, 5)`; the only ways to build one are the checked
/// constructors and the remappings in this crate, which reduce modulo 5.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneCoord {
    x: usize,
    y: usize,
}

impl LaneCoord {
    /// The lane at `(0, 0)`, which rho and pi both leave in place.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: usize, y: usize) -> Result<Self, OffsetError> {
        if x < STATE_WIDTH && y < STATE_WIDTH {
            Ok(Self { x, y })
        } else {
            Err(OffsetError::OutOfRange { x, y })
        }
    }

    /// Callers must have already reduced both components modulo 5.
    pub(crate) const fn new_reduced(x: usize, y: usize) -> Self {
        debug_assert!(x < STATE_WIDTH && y < STATE_WIDTH);
        Self { x, y }
    }

    pub const fn from_flat_index(index: usize) -> Result<Self, OffsetError> {
        if index < NUM_LANES {
            Ok(Self {
                x: index % STATE_WIDTH,
                y: index / STATE_WIDTH,
            })
        } else {
            Err(OffsetError::FlatIndexOutOfRange(index))
        }
    }

    #[inline]
    pub const fn x(self) -> usize {
        self.x
    }

    #[inline]
    pub const fn y(self) -> usize {
        self.y
    }

    /// The position of this lane in the flattened, row-major state `[u64; 25]`, i.e. `5 y + x`.
    #[inline]
    pub const fn flat_index(self) -> usize {
        STATE_WIDTH * self.y + self.x
    }

    pub const fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// All 25 coordinates, in increasing flat-index order.
    pub fn all() -> impl ExactSizeIterator<Item = Self> + Clone {
        (0..NUM_LANES).map(|index| Self {
            x: index % STATE_WIDTH,
            y: index / STATE_WIDTH,
        })
    }
}

impl fmt::Display for LaneCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<LaneCoord> for (usize, usize) {
    fn from(coord: LaneCoord) -> Self {
        (coord.x, coord.y)
    }
}

impl TryFrom<(usize, usize)> for LaneCoord {
    type Error = OffsetError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

/// Converts a lane's `(x, y)` coordinates to its index in the flattened state array.
pub const fn to_flat_index(x: usize, y: usize) -> Result<usize, OffsetError> {
    match LaneCoord::new(x, y) {
        Ok(coord) => Ok(coord.flat_index()),
        Err(err) => Err(err),
    }
}

/// Inverse of [`to_flat_index`].
pub const fn from_flat_index(index: usize) -> Result<(usize, usize), OffsetError> {
    match LaneCoord::from_flat_index(index) {
        Ok(coord) => Ok((coord.x, coord.y)),
        Err(err) => Err(err),
    }
}
