// src/unit/traits.rs

use crate::ops::traits::NeuronScalar;
use crate::unit::Unit;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

impl<T: NeuronScalar> Clone for Unit<T> {
    /// Shallow clone: the new handle shares the same value and gradient.
    fn clone(&self) -> Self {
        Unit {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: NeuronScalar> Debug for Unit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ud = self.read_data();
        write!(f, "Unit(value={:?}, grad={:?})", ud.value, ud.grad)
    }
}

impl<T: NeuronScalar> Display for Unit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ud = self.read_data();
        write!(f, "{} (grad {})", ud.value, ud.grad)
    }
}

impl<T: NeuronScalar> PartialEq for Unit<T> {
    /// Units are equal when they share storage or hold identical value and grad.
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.data, &other.data) {
            return true;
        }
        *self.read_data() == *other.read_data()
    }
}
