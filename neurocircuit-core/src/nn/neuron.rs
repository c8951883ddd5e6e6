use crate::autograd::backward_op::BackwardOp;
use crate::autograd::graph::backward_in_reverse;
use crate::error::NeuroCircuitError;
use crate::nn::module::Module;
use crate::ops::activation::SigmoidGate;
use crate::ops::arithmetic::{AddGate, MultiplyGate};
use crate::ops::traits::NeuronScalar;
use crate::unit::Unit;
use log::debug;

/// Initial values of the five circuit inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeuronInputs<T: NeuronScalar = f64> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub x: T,
    pub y: T,
}

impl<T: NeuronScalar> Default for NeuronInputs<T> {
    /// `a=1, b=2, c=-3, x=-1, y=3`, for which the neuron outputs `sigmoid(2)`.
    fn default() -> Self {
        NeuronInputs {
            a: T::from_f64_lossy(1.0),
            b: T::from_f64_lossy(2.0),
            c: T::from_f64_lossy(-3.0),
            x: T::from_f64_lossy(-1.0),
            y: T::from_f64_lossy(3.0),
        }
    }
}

/// A single neuron wired from gates: `sigmoid(a*x + b*y + c)`.
///
/// The gates are created once and reused by every forward pass; only the
/// input values change between passes.
#[derive(Debug)]
pub struct NeuronCircuit<T: NeuronScalar = f64> {
    a: Unit<T>,
    b: Unit<T>,
    c: Unit<T>,
    x: Unit<T>,
    y: Unit<T>,
    mul_ax: MultiplyGate<T>,
    mul_by: MultiplyGate<T>,
    add_axpby: AddGate<T>,
    add_axpbypc: AddGate<T>,
    sigmoid: SigmoidGate<T>,
}

impl<T: NeuronScalar> NeuronCircuit<T> {
    /// Creates the circuit with leaf units holding `inputs` and zero gradients.
    pub fn new(inputs: NeuronInputs<T>) -> Self {
        NeuronCircuit {
            a: Unit::new(inputs.a),
            b: Unit::new(inputs.b),
            c: Unit::new(inputs.c),
            x: Unit::new(inputs.x),
            y: Unit::new(inputs.y),
            mul_ax: MultiplyGate::new(),
            mul_by: MultiplyGate::new(),
            add_axpby: AddGate::new(),
            add_axpbypc: AddGate::new(),
            sigmoid: SigmoidGate::new(),
        }
    }

    /// The gates in the order their forward calls happen.
    pub fn gates(&self) -> Vec<&dyn BackwardOp<T>> {
        vec![
            &self.mul_ax as &dyn BackwardOp<T>,
            &self.mul_by,
            &self.add_axpby,
            &self.add_axpbypc,
            &self.sigmoid,
        ]
    }

    /// Output unit of the latest forward pass.
    pub fn output(&self) -> Option<Unit<T>> {
        self.sigmoid.output()
    }

    pub fn a(&self) -> &Unit<T> {
        &self.a
    }

    pub fn b(&self) -> &Unit<T> {
        &self.b
    }

    pub fn c(&self) -> &Unit<T> {
        &self.c
    }

    pub fn x(&self) -> &Unit<T> {
        &self.x
    }

    pub fn y(&self) -> &Unit<T> {
        &self.y
    }
}

impl<T: NeuronScalar> Module<T> for NeuronCircuit<T> {
    /// Runs the circuit and returns the output unit `s`.
    ///
    /// Re-runnable: unchanged input values give a bit-identical output.
    fn forward(&mut self) -> Result<Unit<T>, NeuroCircuitError> {
        let ax = self.mul_ax.forward(&self.a, &self.x);
        let by = self.mul_by.forward(&self.b, &self.y);
        let axpby = self.add_axpby.forward(&ax, &by);
        let axpbypc = self.add_axpbypc.forward(&axpby, &self.c);
        let s = self.sigmoid.forward(&axpbypc)?;
        debug!("NeuronCircuit: forward output {}", s.value());
        Ok(s)
    }

    /// Propagates the gradient already seeded on the output back to the inputs.
    ///
    /// Gates run in reverse creation order: sigmoid, the two adds, then the two
    /// multiplies.
    fn backward(&self) -> Result<(), NeuroCircuitError> {
        backward_in_reverse(&self.gates())
    }

    /// Zeroes the gradient of every input and every intermediate unit.
    fn zero_grad(&self) {
        for unit in self.parameters() {
            unit.zero_grad();
        }
        for gate in self.gates() {
            if let Some(out) = gate.output() {
                out.zero_grad();
            }
        }
    }

    /// The five leaf units, in the order `a, b, c, x, y`.
    fn named_parameters(&self) -> Vec<(String, Unit<T>)> {
        vec![
            ("a".to_string(), self.a.clone()),
            ("b".to_string(), self.b.clone()),
            ("c".to_string(), self.c.clone()),
            ("x".to_string(), self.x.clone()),
            ("y".to_string(), self.y.clone()),
        ]
    }
}

impl<T: NeuronScalar> Default for NeuronCircuit<T> {
    fn default() -> Self {
        Self::new(NeuronInputs::default())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
