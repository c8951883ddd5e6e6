use crate::ops::traits::NeuronScalar;
use crate::unit::Unit;

/// Checks that a unit's gradient is within `tolerance` of `expected_grad`.
/// Panics with both values on mismatch.
pub fn check_unit_near<T: NeuronScalar>(actual: &Unit<T>, expected_grad: f64, tolerance: f64) {
    let grad = actual.grad().to_f64_lossy();
    let diff = (grad - expected_grad).abs();
    if !(diff <= tolerance) {
        panic!(
            "Gradient mismatch for {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, grad, expected_grad, diff, tolerance
        );
    }
}

/// Checks that a unit's value is within `tolerance` of `expected_value`.
pub fn check_value_near<T: NeuronScalar>(actual: &Unit<T>, expected_value: f64, tolerance: f64) {
    let value = actual.value().to_f64_lossy();
    let diff = (value - expected_value).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch for {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, value, expected_value, diff, tolerance
        );
    }
}
