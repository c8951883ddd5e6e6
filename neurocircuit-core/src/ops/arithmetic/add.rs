use crate::autograd::{backward_op::BackwardOp, graph::NodeId};
use crate::error::NeuroCircuitError;
use crate::ops::traits::NeuronScalar;
use crate::ops::{require_forward, upstream_grad, BinaryGateState};
use crate::unit::Unit;
use log::debug;

/// Addition gate: `utop = u0 + u1`.
#[derive(Debug)]
pub struct AddGate<T: NeuronScalar = f64> {
    state: Option<BinaryGateState<T>>,
}

impl<T: NeuronScalar> AddGate<T> {
    pub fn new() -> Self {
        AddGate { state: None }
    }

    /// Computes `u0.value + u1.value` into a fresh unit with zero gradient.
    pub fn forward(&mut self, u0: &Unit<T>, u1: &Unit<T>) -> Unit<T> {
        let utop = Unit::new(u0.value() + u1.value());
        debug!("AddGate: forward {} + {} = {}", u0.value(), u1.value(), utop.value());
        self.state = Some(BinaryGateState {
            u0: u0.clone(),
            u1: u1.clone(),
            utop: utop.clone(),
        });
        utop
    }
}

impl<T: NeuronScalar> Default for AddGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NeuronScalar> BackwardOp<T> for AddGate<T> {
    fn backward(&self) -> Result<(), NeuroCircuitError> {
        let state = require_forward(&self.state, self.name())?;
        let grad_output = upstream_grad(&state.utop, self.name());

        // The local derivative of a sum is 1 for each addend.
        state.u0.acc_grad(T::one() * grad_output);
        state.u1.acc_grad(T::one() * grad_output);
        debug!("AddGate: backward grad_output={}", grad_output);
        Ok(())
    }

    fn inputs(&self) -> Vec<NodeId<T>> {
        self.state.as_ref().map(BinaryGateState::input_ids).unwrap_or_default()
    }

    fn output(&self) -> Option<Unit<T>> {
        self.state.as_ref().map(|s| s.utop.clone())
    }

    fn name(&self) -> &'static str {
        "AddGate"
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
