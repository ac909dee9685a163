//! The `pad10*1` padding rule used by the Keccak sponge, over sequences of bit symbols.
//!
//! A padded message is the message followed by a `1`, as many `0`s as needed, and a final `1`,
//! so that the total length reaches the sponge's rate (or a multiple of it).

#![no_std]

extern crate alloc;

mod error;
mod pad;
mod vector;

pub use error::*;
pub use pad::*;
pub use vector::*;

/// The smallest possible padding run, `[1, 1]`.
pub const MIN_PADDING: usize = 2;
