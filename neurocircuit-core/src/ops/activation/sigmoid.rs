use crate::autograd::{backward_op::BackwardOp, graph::NodeId};
use crate::error::NeuroCircuitError;
use crate::ops::traits::NeuronScalar;
use crate::ops::{require_forward, upstream_grad, UnaryGateState};
use crate::unit::Unit;
use log::debug;

/// The logistic function `1 / (1 + exp(-x))`.
///
/// # Errors
/// `ArithmeticOverflow` when `exp(-x)` is infinite (very negative `x`, or
/// `x = -inf`). The result is not clamped to zero.
pub fn sigmoid<T: NeuronScalar>(x: T) -> Result<T, NeuroCircuitError> {
    let e = (-x).exp();
    if e.is_infinite() {
        return Err(NeuroCircuitError::ArithmeticOverflow {
            operation: "sigmoid".to_string(),
            input: x.to_f64_lossy(),
        });
    }
    Ok(T::one() / (T::one() + e))
}

/// Sigmoid activation gate: `utop = sigmoid(u0)`.
#[derive(Debug)]
pub struct SigmoidGate<T: NeuronScalar = f64> {
    state: Option<UnaryGateState<T>>,
}

impl<T: NeuronScalar> SigmoidGate<T> {
    pub fn new() -> Self {
        SigmoidGate { state: None }
    }

    /// Computes `sigmoid(u0.value)` into a fresh unit with zero gradient.
    ///
    /// On overflow the previous record is dropped, so a later `backward`
    /// fails instead of reusing stale units.
    pub fn forward(&mut self, u0: &Unit<T>) -> Result<Unit<T>, NeuroCircuitError> {
        self.state = None;
        let utop = Unit::new(sigmoid(u0.value())?);
        debug!("SigmoidGate: forward sigmoid({}) = {}", u0.value(), utop.value());
        self.state = Some(UnaryGateState {
            u0: u0.clone(),
            utop: utop.clone(),
        });
        Ok(utop)
    }
}

impl<T: NeuronScalar> Default for SigmoidGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NeuronScalar> BackwardOp<T> for SigmoidGate<T> {
    fn backward(&self) -> Result<(), NeuroCircuitError> {
        let state = require_forward(&self.state, self.name())?;
        let grad_output = upstream_grad(&state.utop, self.name());

        // Recomputed from the input, not read back from utop.
        let s = sigmoid(state.u0.value())?;
        let derivative = s * (T::one() - s);
        state.u0.acc_grad(derivative * grad_output);
        debug!("SigmoidGate: backward local derivative={}", derivative);
        Ok(())
    }

    fn inputs(&self) -> Vec<NodeId<T>> {
        self.state.as_ref().map(UnaryGateState::input_ids).unwrap_or_default()
    }

    fn output(&self) -> Option<Unit<T>> {
        self.state.as_ref().map(|s| s.utop.clone())
    }

    fn name(&self) -> &'static str {
        "SigmoidGate"
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
