use crate::error::NeuroCircuitError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating leaf units based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `NeuroCircuitError` otherwise.
    fn step(&mut self) -> Result<(), NeuroCircuitError>;

    /// Clears the gradients of all units managed by the optimizer.
    ///
    /// Call this before every backward pass after the first, otherwise
    /// gradients from the previous pass are added to the new ones.
    fn zero_grad(&mut self);
}
