//! A batch of material.

use crate::Composition;

/// A quantity of material with a fixed composition.
///
/// Materials are plain values: the exchange moves them between traders by
/// ownership, so a batch is never visible to two traders at once.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    pub quantity:    f64,
    pub composition: Composition,
}

impl Material {
    pub fn new(quantity: f64, composition: Composition) -> Self {
        Self { quantity, composition }
    }
}
