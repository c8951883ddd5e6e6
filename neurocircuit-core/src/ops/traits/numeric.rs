use num_traits::{Float, NumAssignOps, NumCast};
use std::fmt::{Debug, Display};

/// A trait representing the scalar types a circuit can carry.
///
/// This trait bounds the types (like `f32`, `f64`) that can be stored in a
/// [`Unit`](crate::Unit) and flow through the gates. It ensures the type
/// supports the arithmetic, the exponential used by the sigmoid, and the
/// thread-safety bounds required by the gate trait objects.
pub trait NeuronScalar:
    Float // Includes Num + Copy + exp() + is_infinite() etc.
    + NumAssignOps // AddAssign for gradient accumulation
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Widens the value to `f64` for error reports and logging.
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Narrows an `f64` literal (step sizes, epsilons) to this type.
    fn from_f64_lossy(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }
}

impl NeuronScalar for f32 {}
impl NeuronScalar for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    // Function requiring NeuronScalar bound
    fn process_scalar<T: NeuronScalar>(value: T) -> f64 {
        value.to_f64_lossy()
    }

    #[test]
    fn test_f32_impl_neuron_scalar() {
        assert_eq!(process_scalar(1.5f32), 1.5);
    }

    #[test]
    fn test_f64_impl_neuron_scalar() {
        assert_eq!(process_scalar(-3.0f64), -3.0);
        assert_eq!(f64::from_f64_lossy(0.01), 0.01);
    }
}
