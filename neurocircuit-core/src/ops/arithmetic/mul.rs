use crate::autograd::{backward_op::BackwardOp, graph::NodeId};
use crate::error::NeuroCircuitError;
use crate::ops::traits::NeuronScalar;
use crate::ops::{require_forward, upstream_grad, BinaryGateState};
use crate::unit::Unit;
use log::debug;

/// Multiplication gate: `utop = u0 * u1`.
#[derive(Debug)]
pub struct MultiplyGate<T: NeuronScalar = f64> {
    state: Option<BinaryGateState<T>>,
}

impl<T: NeuronScalar> MultiplyGate<T> {
    pub fn new() -> Self {
        MultiplyGate { state: None }
    }

    /// Computes `u0.value * u1.value` into a fresh unit with zero gradient.
    ///
    /// The gate keeps handles to `u0`, `u1` and the returned unit until the
    /// next call; `backward` uses them.
    pub fn forward(&mut self, u0: &Unit<T>, u1: &Unit<T>) -> Unit<T> {
        let utop = Unit::new(u0.value() * u1.value());
        debug!("MultiplyGate: forward {} * {} = {}", u0.value(), u1.value(), utop.value());
        self.state = Some(BinaryGateState {
            u0: u0.clone(),
            u1: u1.clone(),
            utop: utop.clone(),
        });
        utop
    }
}

impl<T: NeuronScalar> Default for MultiplyGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NeuronScalar> BackwardOp<T> for MultiplyGate<T> {
    fn backward(&self) -> Result<(), NeuroCircuitError> {
        let state = require_forward(&self.state, self.name())?;
        let grad_output = upstream_grad(&state.utop, self.name());

        // Read both values before writing: u0 and u1 may be the same unit.
        let v0 = state.u0.value();
        let v1 = state.u1.value();
        // d(u0*u1)/du0 = u1, d(u0*u1)/du1 = u0
        state.u0.acc_grad(v1 * grad_output);
        state.u1.acc_grad(v0 * grad_output);
        debug!("MultiplyGate: backward grad_output={}", grad_output);
        Ok(())
    }

    fn inputs(&self) -> Vec<NodeId<T>> {
        self.state.as_ref().map(BinaryGateState::input_ids).unwrap_or_default()
    }

    fn output(&self) -> Option<Unit<T>> {
        self.state.as_ref().map(|s| s.utop.clone())
    }

    fn name(&self) -> &'static str {
        "MultiplyGate"
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
