use crate::error::NeuroCircuitError;
use crate::nn::module::Module;
use crate::ops::traits::NeuronScalar;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input '{input_name}' (index {input_index}): Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        input_name: String,
        analytical_grad: f64, // Use f64 for precision
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(NeuroCircuitError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(NeuroCircuitError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Output+: {output_plus:?}, Output-: {output_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        output_plus: f64,
        output_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Epsilon must be finite and positive, got {0}")]
    InvalidEpsilon(f64),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// 1. Zeroes all gradients, runs `forward`, seeds the output gradient with `1`
///    and runs `backward` to get the analytical gradient of every parameter.
/// 2. For each parameter `u`, evaluates the output at `u ± epsilon` and
///    compares `(f(u+ε) - f(u-ε)) / 2ε` with `u.grad` using `tolerance` both
///    as absolute floor and maximum relative difference.
///
/// Parameter values are restored and a final forward pass is run, so the
/// module is left in the state of step 1 (gradients included).
pub fn check_grad<T, M>(module: &mut M, epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    T: NeuronScalar,
    M: Module<T>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }
    let eps = T::from_f64_lossy(epsilon);
    let two = 2.0f64;

    // --- 1. Initial Forward and Backward Pass ---
    module.zero_grad();
    let output = module.forward().map_err(GradCheckError::ForwardPassError)?;
    output.set_grad(T::one());
    module.backward().map_err(GradCheckError::BackwardPassError)?;

    let params = module.named_parameters();
    let analytical_grads: Vec<f64> = params.iter().map(|(_, u)| u.grad().to_f64_lossy()).collect();

    // --- 2. Iterate through Inputs ---
    for (i, (name, unit)) in params.iter().enumerate() {
        let analytical = analytical_grads[i];
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical,
            });
        }

        let original = unit.value();

        unit.set_value(original + eps);
        let plus = module.forward();
        unit.set_value(original - eps);
        let minus = module.forward();
        unit.set_value(original);

        let output_plus = plus.map_err(GradCheckError::ForwardPassError)?.value().to_f64_lossy();
        let output_minus = minus.map_err(GradCheckError::ForwardPassError)?.value().to_f64_lossy();
        let numerical = (output_plus - output_minus) / (two * epsilon);

        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                output_plus,
                output_minus,
            });
        }

        debug!(
            "check_grad: {} analytical={} numerical={}",
            name, analytical, numerical
        );

        if !relative_eq!(analytical, numerical, epsilon = tolerance, max_relative = tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                input_name: name.clone(),
                analytical_grad: analytical,
                numerical_grad: numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    module.forward().map_err(GradCheckError::ForwardPassError)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::neuron::{NeuronCircuit, NeuronInputs};
    use crate::unit::Unit;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rand_distr::Normal;

    /// A module whose backward deliberately doubles the true gradient.
    #[derive(Debug)]
    struct WrongSquare {
        x: Unit<f64>,
        out: Option<Unit<f64>>,
    }

    impl Module<f64> for WrongSquare {
        fn forward(&mut self) -> Result<Unit<f64>, NeuroCircuitError> {
            let out = Unit::new(self.x.value() * self.x.value());
            self.out = Some(out.clone());
            Ok(out)
        }

        fn backward(&self) -> Result<(), NeuroCircuitError> {
            let out = self.out.as_ref().ok_or(NeuroCircuitError::BackwardBeforeForward {
                gate: "WrongSquare".to_string(),
            })?;
            self.x.acc_grad(4.0 * self.x.value() * out.grad());
            Ok(())
        }

        fn zero_grad(&self) {
            self.x.zero_grad();
        }

        fn named_parameters(&self) -> Vec<(String, Unit<f64>)> {
            vec![("x".to_string(), self.x.clone())]
        }
    }

    #[test]
    fn test_check_grad_neuron_default_inputs() {
        let mut circuit: NeuronCircuit = NeuronCircuit::default();
        let result = check_grad(&mut circuit, 1e-6, 1e-4);
        assert!(result.is_ok(), "{:?}", result);
        // Parameters restored.
        assert_eq!(circuit.a().value(), 1.0);
        assert_eq!(circuit.y().value(), 3.0);
    }

    #[test]
    fn test_check_grad_neuron_random_inputs() {
        let mut rng = StdRng::seed_from_u64(42);
        let normal = Normal::new(0.0, 1.0).expect("valid normal distribution");
        for _ in 0..20 {
            let mut circuit = NeuronCircuit::new(NeuronInputs {
                a: rng.sample(normal),
                b: rng.sample(normal),
                c: rng.sample(normal),
                x: rng.sample(normal),
                y: rng.sample(normal),
            });
            let result = check_grad(&mut circuit, 1e-6, 1e-4);
            assert!(result.is_ok(), "{:?}", result);
        }
    }

    #[test]
    fn test_check_grad_detects_wrong_backward() {
        let mut module = WrongSquare {
            x: Unit::new(3.0),
            out: None,
        };
        match check_grad(&mut module, 1e-6, 1e-4) {
            Err(GradCheckError::GradientMismatch {
                input_index,
                input_name,
                analytical_grad,
                numerical_grad,
                ..
            }) => {
                assert_eq!(input_index, 0);
                assert_eq!(input_name, "x");
                assert!((analytical_grad - 12.0).abs() < 1e-9);
                assert!((numerical_grad - 6.0).abs() < 1e-4);
            }
            other => panic!("expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_rejects_bad_epsilon() {
        let mut circuit: NeuronCircuit = NeuronCircuit::default();
        assert_eq!(
            check_grad(&mut circuit, 0.0, 1e-4),
            Err(GradCheckError::InvalidEpsilon(0.0))
        );
    }

    #[test]
    fn test_check_grad_forward_error() {
        let mut circuit = NeuronCircuit::new(NeuronInputs {
            a: 0.0_f64,
            b: 0.0,
            c: -2000.0,
            x: 0.0,
            y: 0.0,
        });
        assert!(matches!(
            check_grad(&mut circuit, 1e-6, 1e-4),
            Err(GradCheckError::ForwardPassError(NeuroCircuitError::ArithmeticOverflow { .. }))
        ));
    }
}
