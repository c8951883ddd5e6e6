// src/unit/mod.rs

use crate::autograd::graph::NodeId;
use crate::ops::traits::NeuronScalar;
use crate::unit_data::UnitData;
use std::sync::{Arc, RwLock};

mod traits;

/// A scalar node of the circuit: a value and its accumulated gradient.
///
/// `Unit` uses `Arc<RwLock<UnitData>>` internally to allow for:
/// 1.  **Shared Ownership:** the gate that produced a unit and the gates that
///     consume it hold clones of the same handle (cheap clones).
/// 2.  **Interior Mutability:** `backward` calls accumulate into `grad` through
///     a shared reference, and the driver updates leaf values the same way.
///
/// No validation is performed; non-finite values are stored as-is.
pub struct Unit<T: NeuronScalar = f64> {
    /// Arc for shared ownership, RwLock for interior mutability of UnitData.
    pub(crate) data: Arc<RwLock<UnitData<T>>>,
}

impl<T: NeuronScalar> Unit<T> {
    /// Creates a new unit holding `value` with a zero gradient.
    pub fn new(value: T) -> Self {
        Self::with_grad(value, T::zero())
    }

    /// Creates a new unit with an explicit initial gradient.
    pub fn with_grad(value: T, grad: T) -> Self {
        Unit {
            data: Arc::new(RwLock::new(UnitData::new(value, grad))),
        }
    }

    /// Acquires a read lock on the unit's data.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn read_data(&self) -> std::sync::RwLockReadGuard<'_, UnitData<T>> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the unit's data.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, UnitData<T>> {
        self.data.write().expect("RwLock poisoned")
    }

    pub fn value(&self) -> T {
        self.read_data().value
    }

    pub fn grad(&self) -> T {
        self.read_data().grad
    }

    pub fn set_value(&self, value: T) {
        self.write_data().value = value;
    }

    /// Overwrites the gradient. Used to seed the circuit output with `1.0`.
    pub fn set_grad(&self, grad: T) {
        self.write_data().grad = grad;
    }

    /// Adds `delta` to the accumulated gradient.
    pub fn acc_grad(&self, delta: T) {
        self.write_data().grad += delta;
    }

    /// Resets the gradient to zero before a fresh backward pass.
    pub fn zero_grad(&self) {
        self.write_data().grad = T::zero();
    }

    /// Returns a stable identifier for this unit's shared storage.
    ///
    /// Two handles share an id iff they point at the same `UnitData`.
    pub fn node_id(&self) -> NodeId<T> {
        Arc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles refer to the same storage.
    pub fn same_node(&self, other: &Unit<T>) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
#[path = "unit_test.rs"]
mod tests;
