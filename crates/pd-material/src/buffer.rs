//! `ResBuf` — a capacity-bounded FIFO of material batches.
//!
//! The buffer is owned outright by one trader.  It never splits or merges
//! batches: `push` stores the batch as given and `pop` returns the oldest one
//! whole.

use std::collections::VecDeque;

use crate::{EPS_RSRC, Material, MaterialError, MaterialResult};

/// Capacity-bounded material store.
#[derive(Clone, Debug, PartialEq)]
pub struct ResBuf {
    capacity: f64,
    quantity: f64,
    batches:  VecDeque<Material>,
}

impl ResBuf {
    /// Create an empty buffer.  `capacity` must be positive and finite.
    pub fn new(capacity: f64) -> MaterialResult<Self> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(MaterialError::InvalidCapacity(capacity));
        }
        Ok(Self { capacity, quantity: 0.0, batches: VecDeque::new() })
    }

    /// Total quantity currently held.
    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Remaining room before the buffer is full.
    #[inline]
    pub fn space(&self) -> f64 {
        (self.capacity - self.quantity).max(0.0)
    }

    /// Number of batches held.
    #[inline]
    pub fn count(&self) -> usize {
        self.batches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Store `mat` as a new batch.
    ///
    /// Fails without modifying the buffer if the batch would overflow it.
    pub fn push(&mut self, mat: Material) -> MaterialResult<()> {
        if mat.quantity < 0.0 {
            return Err(MaterialError::NegativeQuantity(mat.quantity));
        }
        if mat.quantity - self.space() > EPS_RSRC {
            return Err(MaterialError::CapacityExceeded {
                pushed: mat.quantity,
                space:  self.space(),
            });
        }
        self.quantity += mat.quantity;
        self.batches.push_back(mat);
        Ok(())
    }

    /// Store every batch in `mats`, or none of them.
    ///
    /// Fails without modifying the buffer if any batch is negative or the
    /// batches together would overflow it.
    pub fn push_all(&mut self, mats: Vec<Material>) -> MaterialResult<()> {
        if let Some(bad) = mats.iter().find(|m| m.quantity < 0.0) {
            return Err(MaterialError::NegativeQuantity(bad.quantity));
        }
        let pushed: f64 = mats.iter().map(|m| m.quantity).sum();
        if pushed - self.space() > EPS_RSRC {
            return Err(MaterialError::CapacityExceeded { pushed, space: self.space() });
        }
        for mat in mats {
            self.quantity += mat.quantity;
            self.batches.push_back(mat);
        }
        Ok(())
    }

    /// Remove and return the oldest batch.
    pub fn pop(&mut self) -> MaterialResult<Material> {
        let mat = self.batches.pop_front().ok_or(MaterialError::Empty)?;
        self.quantity -= mat.quantity;
        if self.batches.is_empty() {
            // Drop rounding residue so an empty buffer reports exactly zero.
            self.quantity = 0.0;
        }
        Ok(mat)
    }

    /// Remove and return the `n` oldest batches, oldest first.
    ///
    /// Fails without modifying the buffer if fewer than `n` are held.
    pub fn pop_n(&mut self, n: usize) -> MaterialResult<Vec<Material>> {
        if n > self.batches.len() {
            return Err(MaterialError::Empty);
        }
        (0..n).map(|_| self.pop()).collect()
    }

    /// The batch `pop` would return next.
    pub fn peek(&self) -> Option<&Material> {
        self.batches.front()
    }
}
