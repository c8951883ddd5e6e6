// src/unit_data.rs
use crate::ops::traits::NeuronScalar;

/// Internal storage for a [`Unit`](crate::Unit).
///
/// Holds the forward value and the gradient accumulated by backward passes.
/// It is wrapped in `Arc<RwLock<UnitData>>` by the `Unit` struct so that the
/// gate producing a unit and every gate consuming it share the same storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitData<T: NeuronScalar> {
    /// The scalar computed by the forward pass (or set directly on a leaf).
    pub(crate) value: T,
    /// d(circuit output) / d(this unit), summed over every consumer.
    pub(crate) grad: T,
}

impl<T: NeuronScalar> UnitData<T> {
    pub(crate) fn new(value: T, grad: T) -> Self {
        UnitData { value, grad }
    }
}
