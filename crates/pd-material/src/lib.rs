//! `pd-material` — what the traders exchange and where a trader keeps it.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`composition`] | `Composition` — nuclide id → fraction map             |
//! | [`material`]    | `Material` — a quantity with a composition            |
//! | [`buffer`]      | `ResBuf` — capacity-bounded FIFO of material batches  |
//! | [`error`]       | `MaterialError`, `MaterialResult<T>`                  |
//!
//! Quantities are plain `f64` in the simulation's mass unit.  Capacity checks
//! tolerate an absolute error of [`EPS_RSRC`] so that accumulated rounding
//! never makes an exactly-full buffer reject its last batch.

pub mod buffer;
pub mod composition;
pub mod error;
pub mod material;


pub use buffer::ResBuf;
pub use composition::{Composition, NuclideId};
pub use error::{MaterialError, MaterialResult};
pub use material::Material;

/// Absolute tolerance for resource quantity comparisons.
pub const EPS_RSRC: f64 = 1e-6;
