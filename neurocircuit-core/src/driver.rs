//! # Gradient-ascent demonstration
//!
//! Runs the neuron forward, backpropagates from the output, nudges every input
//! along its gradient and runs forward again to show the output went up.

use crate::error::NeuroCircuitError;
use crate::nn::module::Module;
use crate::nn::neuron::{NeuronCircuit, NeuronInputs};
use crate::ops::traits::NeuronScalar;
use crate::optim::{Optimizer, SgdOptimizer};
use crate::unit::Unit;
use log::{debug, info};

/// Largest number of decimals `f64` can meaningfully round to.
const MAX_PRECISION: u32 = 15;

/// Hyperparameters of the demonstration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverConfig {
    /// Scale of the gradient step applied to every input.
    pub step_size: f64,
    /// Decimal places of the reported outputs.
    pub precision: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            step_size: 0.01,
            precision: 4,
        }
    }
}

impl DriverConfig {
    pub fn validate(&self) -> Result<(), NeuroCircuitError> {
        if !self.step_size.is_finite() || self.step_size < 0.0 {
            return Err(NeuroCircuitError::InvalidConfiguration(format!(
                "step_size must be finite and non-negative, got {}",
                self.step_size
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(NeuroCircuitError::InvalidConfiguration(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, self.precision
            )));
        }
        Ok(())
    }
}

/// Rounds to `decimals` places from the exact binary value, so `0.10955`
/// (stored as `0.109549999...`) becomes `0.1095`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// One report line, e.g. `circuit output: 0.8808`.
pub fn format_output(value: f64, decimals: u32) -> String {
    format!("circuit output: {}", round_to(value, decimals))
}

/// Outcome of one forward/backward/update cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// Circuit output before the update.
    pub output: f64,
    /// Gradient of the output with respect to each input, in `a, b, c, x, y` order.
    pub gradients: Vec<(String, f64)>,
}

/// Outcome of the two-pass demonstration.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub baseline: f64,
    pub improved: f64,
    pub gradients: Vec<(String, f64)>,
    pub precision: u32,
}

impl DemoReport {
    /// The two lines the program prints, baseline first.
    pub fn lines(&self) -> [String; 2] {
        [
            format_output(self.baseline, self.precision),
            format_output(self.improved, self.precision),
        ]
    }
}

/// Owns the neuron and the optimizer that moves its inputs.
#[derive(Debug)]
pub struct Driver<T: NeuronScalar = f64> {
    circuit: NeuronCircuit<T>,
    optimizer: SgdOptimizer<T>,
    config: DriverConfig,
}

impl<T: NeuronScalar> Driver<T> {
    /// Builds the circuit from `inputs` and an ascending optimizer over its
    /// five leaves.
    pub fn new(inputs: NeuronInputs<T>, config: DriverConfig) -> Result<Self, NeuroCircuitError> {
        config.validate()?;
        let circuit = NeuronCircuit::new(inputs);
        let optimizer = SgdOptimizer::new(circuit.named_parameters(), config.step_size, true)?;
        Ok(Driver {
            circuit,
            optimizer,
            config,
        })
    }

    pub fn circuit(&self) -> &NeuronCircuit<T> {
        &self.circuit
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Runs the circuit forward and returns the output value.
    pub fn forward(&mut self) -> Result<f64, NeuroCircuitError> {
        Ok(self.circuit.forward()?.value().to_f64_lossy())
    }

    /// Forward, seed `1.0`, backward in reverse gate order, then one ascent
    /// update of every input.
    ///
    /// All gradients are zeroed before the backward pass, so the cycle can be
    /// repeated without stale contributions piling up.
    pub fn step(&mut self) -> Result<StepReport, NeuroCircuitError> {
        let out = self.circuit.forward()?;
        self.backward_and_update(&out)
    }

    /// Backward from `out`, the output of the latest forward pass, then one
    /// ascent update.
    fn backward_and_update(&mut self, out: &Unit<T>) -> Result<StepReport, NeuroCircuitError> {
        let output = out.value().to_f64_lossy();

        // Covers the leaves the optimizer holds as well.
        self.circuit.zero_grad();
        out.set_grad(T::one());
        self.circuit.backward()?;

        let gradients: Vec<(String, f64)> = self
            .circuit
            .named_parameters()
            .into_iter()
            .map(|(name, unit)| (name, unit.grad().to_f64_lossy()))
            .collect();
        debug!("Driver: gradients {:?}", gradients);

        self.optimizer.step()?;
        Ok(StepReport { output, gradients })
    }

    /// The two-pass demonstration: baseline output, one ascent step, improved
    /// output.
    pub fn run_demo(&mut self) -> Result<DemoReport, NeuroCircuitError> {
        let StepReport { output, gradients } = self.step()?;
        info!("pass 1: circuit output {}", output);
        let improved = self.forward()?;
        info!("pass 2: circuit output {}", improved);
        Ok(DemoReport {
            baseline: output,
            improved,
            gradients,
            precision: self.config.precision,
        })
    }

    /// Runs `iterations` ascent steps and returns the output before the first
    /// step followed by the output after each step (`iterations + 1` values).
    ///
    /// The forward pass that reports an iteration's output also feeds the
    /// next iteration's backward pass.
    pub fn run_iterations(&mut self, iterations: usize) -> Result<Vec<f64>, NeuroCircuitError> {
        let mut outputs = Vec::with_capacity(iterations + 1);
        let mut out = self.circuit.forward()?;
        outputs.push(out.value().to_f64_lossy());
        for i in 0..iterations {
            self.backward_and_update(&out)?;
            out = self.circuit.forward()?;
            let after = out.value().to_f64_lossy();
            info!("iteration {}: circuit output {}", i + 1, after);
            outputs.push(after);
        }
        Ok(outputs)
    }
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
