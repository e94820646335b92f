//! Isotopic (or grade) composition of a material batch.

use std::collections::BTreeMap;

/// Nuclide identifier in `ZZZAAAMMMM` form, e.g. `922350000` for U-235.
pub type NuclideId = u32;

/// An ordered nuclide → fraction map.
///
/// Fractions are stored as given; call [`normalized`][Self::normalized] when
/// they must sum to one.  Ordering by nuclide id keeps equality and output
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Composition(BTreeMap<NuclideId, f64>);

impl Composition {
    fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// A copy whose fractions sum to one.  Empty or all-zero compositions are
    /// returned unchanged.
    pub fn normalized(&self) -> Composition {
        let total = self.total();
        if total <= 0.0 {
            return self.clone();
        }
        Composition(self.0.iter().map(|(&n, &f)| (n, f / total)).collect())
    }
}

impl FromIterator<(NuclideId, f64)> for Composition {
    fn from_iter<I: IntoIterator<Item = (NuclideId, f64)>>(iter: I) -> Self {
        Composition(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(NuclideId, f64); N]> for Composition {
    fn from(entries: [(NuclideId, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}
