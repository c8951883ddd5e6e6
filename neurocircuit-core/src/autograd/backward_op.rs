use crate::autograd::graph::NodeId;
use crate::error::NeuroCircuitError;
use crate::ops::traits::NeuronScalar;
use crate::unit::Unit;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a gate.
///
/// Every gate keeps the units it saw during its most recent `forward` call.
/// `forward` itself is an inherent method because its arity differs between
/// gates (two inputs for multiply/add, one for sigmoid); what the backward
/// machinery needs is uniform and lives here.
///
/// The trait requires `Debug + Send + Sync` bounds so that gates can be held
/// as `&dyn BackwardOp<T>` in creation-ordered sequences and printed in traces.
pub trait BackwardOp<T: NeuronScalar>: Debug + Send + Sync {
    /// Distributes the gradient held by this gate's output onto its inputs.
    ///
    /// Implements the chain rule for the specific gate:
    /// for each input \( u_i \), `u_i.grad += d(utop)/d(u_i) * utop.grad`.
    /// Contributions are **added**, so a unit feeding several gates collects
    /// the sum of all of them.
    ///
    /// # Errors
    /// * `BackwardBeforeForward` if no `forward` call has populated the gate.
    /// * `ArithmeticOverflow` if the local derivative cannot be evaluated.
    fn backward(&self) -> Result<(), NeuroCircuitError>;

    /// Returns identifiers for the input units of the most recent forward call,
    /// in argument order. Empty before the first forward.
    fn inputs(&self) -> Vec<NodeId<T>>;

    /// Returns the output unit of the most recent forward call, if any.
    fn output(&self) -> Option<Unit<T>>;

    /// Short human-readable gate name used in errors and logs.
    fn name(&self) -> &'static str;
}
