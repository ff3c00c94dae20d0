use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Characteristic
///
/// Semantic tag describing a notable property of a test value (being zero,
/// maximal, negative, non-finite, ...). The catalog builder treats tags as
/// opaque: no ordering or numeric meaning is attached to the variants.
///
/// `Ord` exists only so tags can live in deterministic set storage.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum Characteristic {
    Decimal,
    Infinity,
    LargeValue,
    MaxValue,
    Nan,
    Negative,
    NonEmpty,
    One,
    TinyValue,
    Zero,
}
