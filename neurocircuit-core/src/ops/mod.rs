//! # Gate Operations Module (`ops`)
//!
//! The differentiable gates a circuit is wired from.
//!
//! ## Structure:
//!
//! - **Gate structs** (`MultiplyGate`, `AddGate`, `SigmoidGate`): `forward` is an
//!   inherent method that computes a fresh output unit and records the units it
//!   saw; `backward` comes from the
//!   [`BackwardOp`](../autograd/backward_op/trait.BackwardOp.html) trait and
//!   reads that record.
//! - **Traits (`ops::traits`):** the `NeuronScalar` bound shared by every gate.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: multiply and add.
//! - [`activation`]: sigmoid.

pub mod traits;

pub mod activation;
pub mod arithmetic;

use crate::autograd::graph::NodeId;
use crate::error::NeuroCircuitError;
use crate::ops::traits::NeuronScalar;
use crate::unit::Unit;
use log::warn;

/// Units recorded by a two-input gate during `forward`.
#[derive(Debug, Clone)]
pub(crate) struct BinaryGateState<T: NeuronScalar> {
    pub(crate) u0: Unit<T>,
    pub(crate) u1: Unit<T>,
    pub(crate) utop: Unit<T>,
}

/// Units recorded by a one-input gate during `forward`.
#[derive(Debug, Clone)]
pub(crate) struct UnaryGateState<T: NeuronScalar> {
    pub(crate) u0: Unit<T>,
    pub(crate) utop: Unit<T>,
}

impl<T: NeuronScalar> BinaryGateState<T> {
    pub(crate) fn input_ids(&self) -> Vec<NodeId<T>> {
        vec![self.u0.node_id(), self.u1.node_id()]
    }
}

impl<T: NeuronScalar> UnaryGateState<T> {
    pub(crate) fn input_ids(&self) -> Vec<NodeId<T>> {
        vec![self.u0.node_id()]
    }
}

/// Returns the recorded state or the precondition error for `gate`.
pub(crate) fn require_forward<'a, S>(
    state: &'a Option<S>,
    gate: &str,
) -> Result<&'a S, NeuroCircuitError> {
    state
        .as_ref()
        .ok_or_else(|| NeuroCircuitError::BackwardBeforeForward {
            gate: gate.to_string(),
        })
}

/// Reads the gradient flowing into a gate's output.
///
/// A zero here almost always means the output was never seeded or the gate
/// consuming it has not run its backward yet.
pub(crate) fn upstream_grad<T: NeuronScalar>(utop: &Unit<T>, gate: &str) -> T {
    let grad = utop.grad();
    if grad.is_zero() {
        warn!("{}: upstream gradient is zero, inputs receive no contribution", gate);
    }
    grad
}
