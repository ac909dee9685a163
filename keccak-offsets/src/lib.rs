//! Lane offsets for the rho and pi steps of the Keccak-f\[1600\] permutation.
//!
//! Nothing here touches lane values. The crate only produces the coordinates, flat indices and
//! rotation amounts that a permutation implementation needs to perform the combined rho/pi step
//! with a single pass over the 24 non-origin lanes.

#![no_std]

mod coords;
mod error;
mod offsets;
mod pi;
mod rho;
mod traversal;

pub use coords::*;
pub use error::*;
pub use offsets::*;
pub use pi::*;
pub use rho::*;
pub use traversal::*;

/// Number of lanes along each side of the state array.
pub const STATE_WIDTH: usize = 5;
/// Total number of lanes in the state array.
pub const NUM_LANES: usize = STATE_WIDTH * STATE_WIDTH;
/// Bits per lane.
pub const LANE_BITS: u32 = 64;
/// Number of lanes the rho/pi traversal visits, i.e. every lane but the origin.
pub const NUM_STEPS: usize = NUM_LANES - 1;
