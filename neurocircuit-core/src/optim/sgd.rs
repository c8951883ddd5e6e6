use crate::error::NeuroCircuitError;
use crate::ops::traits::NeuronScalar;
use crate::optim::optimizer_trait::Optimizer;
use crate::unit::Unit;
use log::debug;

/// Implements plain (momentum-free) gradient descent over scalar units.
///
/// With `maximize = true` the update follows the gradient instead of opposing
/// it (`value += step_size * grad`), which is what the neuron demonstration
/// uses to push the circuit output up.
#[derive(Debug)]
pub struct SgdOptimizer<T: NeuronScalar = f64> {
    params: Vec<(String, Unit<T>)>,
    step_size: T,
    maximize: bool,
}

impl<T: NeuronScalar> SgdOptimizer<T> {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: named units to update.
    /// * `step_size`: learning rate, must be finite and non-negative.
    /// * `maximize`: ascend the gradient instead of descending it.
    pub fn new(
        params: impl IntoIterator<Item = (String, Unit<T>)>,
        step_size: f64,
        maximize: bool,
    ) -> Result<Self, NeuroCircuitError> {
        if !step_size.is_finite() || step_size < 0.0 {
            return Err(NeuroCircuitError::InvalidConfiguration(format!(
                "step_size must be finite and non-negative, got {}",
                step_size
            )));
        }
        Ok(SgdOptimizer {
            params: params.into_iter().collect(),
            step_size: T::from_f64_lossy(step_size),
            maximize,
        })
    }

    pub fn step_size(&self) -> T {
        self.step_size
    }

    pub fn maximize(&self) -> bool {
        self.maximize
    }

    pub fn params(&self) -> &[(String, Unit<T>)] {
        &self.params
    }
}

impl<T: NeuronScalar> Optimizer for SgdOptimizer<T> {
    /// Updates every unit by `step_size * grad` (added when maximizing,
    /// subtracted otherwise).
    ///
    /// A non-finite gradient aborts the step before any unit is touched.
    fn step(&mut self) -> Result<(), NeuroCircuitError> {
        if let Some((name, unit)) = self.params.iter().find(|(_, u)| !u.grad().is_finite()) {
            return Err(NeuroCircuitError::NonFiniteValue {
                unit: name.clone(),
                value: unit.grad().to_f64_lossy(),
            });
        }

        for (name, unit) in self.params.iter() {
            let delta = self.step_size * unit.grad();
            let updated = if self.maximize {
                unit.value() + delta
            } else {
                unit.value() - delta
            };
            debug!("SgdOptimizer: {} {} -> {}", name, unit.value(), updated);
            unit.set_value(updated);
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        debug!("SgdOptimizer: zero_grad() called");
        for (_, unit) in self.params.iter() {
            unit.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
