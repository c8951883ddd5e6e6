use crate::error::NeuroCircuitError;
use crate::ops::traits::NeuronScalar;
use crate::unit::Unit;

/// The base trait for differentiable circuits.
///
/// A module owns its gates and its leaf units. It can run a forward pass,
/// propagate a gradient seeded on the output back to the leaves, and expose
/// those leaves as named parameters for optimizers and the gradient checker.
pub trait Module<T: NeuronScalar>: std::fmt::Debug {
    /// Performs a forward pass and returns the output unit.
    ///
    /// # Errors
    /// Any gate error, e.g. `ArithmeticOverflow` from an activation.
    fn forward(&mut self) -> Result<Unit<T>, NeuroCircuitError>;

    /// Runs every gate's backward in reverse creation order.
    ///
    /// The output gradient must have been seeded by the caller.
    fn backward(&self) -> Result<(), NeuroCircuitError>;

    /// Resets the gradient of every unit the module knows about.
    fn zero_grad(&self);

    /// Returns the leaf units along with their names.
    fn named_parameters(&self) -> Vec<(String, Unit<T>)>;

    /// Returns the leaf units.
    fn parameters(&self) -> Vec<Unit<T>> {
        self.named_parameters().into_iter().map(|(_, u)| u).collect()
    }
}
