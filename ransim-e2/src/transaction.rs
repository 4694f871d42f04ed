//! E2AP transaction identifier pool
//!
//! Identifiers correlate an outstanding request with its response. The pool
//! is shared by every request path of a control session, so the bitmap sits
//! behind a mutex.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use bitvec::prelude::*;

use ransim_common::E2ToolkitConfig;

use crate::error::{E2Error, Result};

/// An allocated transaction identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(u32);

impl TransactionId {
    /// Returns the numeric value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TransactionId> for i64 {
    fn from(id: TransactionId) -> Self {
        i64::from(id.0)
    }
}

/// First-fit pool of identifiers in `[0, capacity)`.
pub struct TransactionIdPool {
    capacity: usize,
    bits: Mutex<BitVec<u64, Lsb0>>,
}

impl TransactionIdPool {
    /// Creates an empty pool.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            bits: Mutex::new(BitVec::repeat(false, capacity)),
        }
    }

    /// Creates a pool sized by `transaction_id_capacity`.
    pub fn from_config(config: &E2ToolkitConfig) -> Self {
        Self::new(config.transaction_id_capacity)
    }

    // Every mutation is a single bit flip, a poisoned bitmap is still consistent.
    fn lock(&self) -> MutexGuard<'_, BitVec<u64, Lsb0>> {
        self.bits.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Allocates the lowest free identifier.
    ///
    /// Returns [`E2Error::ResourceExhausted`] when every identifier is in use;
    /// callers should hold back the request rather than spin.
    pub fn new_id(&self) -> Result<TransactionId> {
        let mut bits = self.lock();
        let exhausted = E2Error::ResourceExhausted {
            capacity: self.capacity,
        };

        let Some(idx) = bits.first_zero() else {
            tracing::warn!(capacity = self.capacity, "transaction identifier pool exhausted");
            return Err(exhausted);
        };
        let value = u32::try_from(idx).map_err(|_| exhausted)?;

        bits.set(idx, true);
        tracing::trace!(id = value, "allocated transaction id");
        Ok(TransactionId(value))
    }

    /// Returns an identifier to the pool.
    ///
    /// Out-of-range values and identifiers that are already free are ignored.
    pub fn release(&self, id: impl Into<i64>) {
        let id = id.into();
        let Some(idx) = self.index(id) else {
            tracing::trace!(id, capacity = self.capacity, "ignoring release of out-of-range id");
            return;
        };
        self.lock().set(idx, false);
        tracing::trace!(id, "released transaction id");
    }

    /// Returns true if `id` is currently allocated.
    pub fn is_allocated(&self, id: impl Into<i64>) -> bool {
        match self.index(id.into()) {
            Some(idx) => self.lock()[idx],
            None => false,
        }
    }

    /// Size of the identifier namespace.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of identifiers currently allocated.
    pub fn in_use(&self) -> usize {
        self.lock().count_ones()
    }

    fn index(&self, id: i64) -> Option<usize> {
        usize::try_from(id).ok().filter(|&idx| idx < self.capacity)
    }
}

impl fmt::Debug for TransactionIdPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionIdPool")
            .field("capacity", &self.capacity)
            .field("in_use", &self.in_use())
            .finish()
    }
}
