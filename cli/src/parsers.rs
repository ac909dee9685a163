//! Command line value types.
//!
//! Enum options accept the whole name or any prefix which uniquely determines the choice, plus a
//! few short aliases.

use clap::ValueEnum;
use clap::builder::PossibleValue;
use rhopi_keccak_offsets::{GatherPi, PiMapping, ScatterPi};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PiOptions {
    Gather,
    Scatter,
}

impl PiOptions {
    pub fn mapping(self) -> &'static dyn PiMapping {
        match self {
            PiOptions::Gather => &GatherPi,
            PiOptions::Scatter => &ScatterPi,
        }
    }
}

/// Produce a PossibleValue for an enum variant.
///
/// Any prefix of `base` at least `min_unique_base_prefix` long is allowed, as is any prefix of
/// an alias at least as long as the alias's own minimum.
fn get_aliases(
    base: &'static str,
    min_unique_base_prefix: usize,
    alias: Option<Vec<(&'static str, usize)>>,
) -> PossibleValue {
    let base_prefixes = (min_unique_base_prefix..base.len()).map(|i| &base[..i]);
    match alias {
        None => PossibleValue::new(base).aliases(base_prefixes),
        Some(vec) => PossibleValue::new(base).aliases(base_prefixes.chain(
            vec.into_iter().flat_map(|(alias, min_unique)| {
                (min_unique..alias.len() + 1).map(|i| &alias[..i])
            }),
        )),
    }
}

impl ValueEnum for PiOptions {
    fn value_variants<'a>() -> &'a [Self] {
        &[PiOptions::Gather, PiOptions::Scatter]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            PiOptions::Gather => get_aliases("gather", 1, Some(vec![("inverse", 3)])),
            PiOptions::Scatter => get_aliases("scatter", 1, Some(vec![("forward", 3)])),
        })
    }
}

/// A message written as a string of `0`s and `1`s, e.g. `1011`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bits(pub Vec<u8>);

pub fn parse_bits(s: &str) -> Result<Bits, String> {
    s.chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => Err(format!("'{other}' is not a bit")),
        })
        .collect::<Result<_, _>>()
        .map(Bits)
}
