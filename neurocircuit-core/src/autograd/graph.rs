use crate::autograd::backward_op::BackwardOp;
use crate::error::NeuroCircuitError;
use crate::ops::traits::NeuronScalar;
use crate::unit_data::UnitData;
use log::debug;
use std::collections::HashMap;
use std::sync::RwLock;

/// Identity of a unit inside the circuit: the address of its shared storage.
/// Only compared and hashed, never dereferenced.
pub type NodeId<T> = *const RwLock<UnitData<T>>;

/// Checks that `gates` (in creation order) form a topological order.
///
/// A gate may only consume leaves or the outputs of gates that come *before*
/// it. Running backward in reverse over a sequence that breaks this rule would
/// read a gradient that has not been written yet.
///
/// Gates that have not been forwarded contribute no edges.
pub fn check_creation_order<T: NeuronScalar>(
    gates: &[&dyn BackwardOp<T>],
) -> Result<(), NeuroCircuitError> {
    let produced_at: HashMap<NodeId<T>, usize> = gates
        .iter()
        .enumerate()
        .filter_map(|(pos, gate)| gate.output().map(|out| (out.node_id(), pos)))
        .collect();

    for (pos, gate) in gates.iter().enumerate() {
        for input in gate.inputs() {
            if let Some(&producer) = produced_at.get(&input) {
                if producer >= pos {
                    return Err(NeuroCircuitError::GraphOrderViolation {
                        gate: gate.name().to_string(),
                        position: pos,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Runs `backward` on every gate, last-created first.
///
/// The caller seeds the final output's gradient beforehand and is responsible
/// for zeroing gradients left over from a previous pass.
pub fn backward_in_reverse<T: NeuronScalar>(
    gates: &[&dyn BackwardOp<T>],
) -> Result<(), NeuroCircuitError> {
    check_creation_order(gates)?;
    for (pos, gate) in gates.iter().enumerate().rev() {
        debug!("backward_in_reverse: gate {} ({})", pos, gate.name());
        gate.backward()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::activation::SigmoidGate;
    use crate::ops::arithmetic::{AddGate, MultiplyGate};
    use crate::unit::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn test_backward_in_reverse_chain() -> Result<(), NeuroCircuitError> {
        let a = Unit::new(2.0_f64);
        let b = Unit::new(3.0_f64);
        let c = Unit::new(-1.0_f64);
        let mut mul = MultiplyGate::new();
        let mut add = AddGate::new();
        let ab = mul.forward(&a, &b);
        let out = add.forward(&ab, &c);
        out.set_grad(1.0);

        backward_in_reverse(&[&mul as &dyn BackwardOp<f64>, &add])?;

        assert_relative_eq!(a.grad(), 3.0);
        assert_relative_eq!(b.grad(), 2.0);
        assert_relative_eq!(c.grad(), 1.0);
        Ok(())
    }

    #[test]
    fn test_out_of_order_sequence_is_rejected() -> Result<(), NeuroCircuitError> {
        let x = Unit::new(0.5_f64);
        let y = Unit::new(1.5_f64);
        let mut add = AddGate::new();
        let mut sig = SigmoidGate::new();
        let sum = add.forward(&x, &y);
        sig.forward(&sum)?;

        // Sigmoid consumes the add output, so it must come after it.
        let err = backward_in_reverse(&[&sig as &dyn BackwardOp<f64>, &add]).unwrap_err();
        assert_eq!(
            err,
            NeuroCircuitError::GraphOrderViolation {
                gate: "SigmoidGate".to_string(),
                position: 0,
            }
        );
        // Nothing ran.
        assert_eq!(x.grad(), 0.0);
        Ok(())
    }

    #[test]
    fn test_unforwarded_gate_fails_fast() {
        let add: AddGate<f64> = AddGate::new();
        let err = backward_in_reverse(&[&add as &dyn BackwardOp<f64>]).unwrap_err();
        assert_eq!(
            err,
            NeuroCircuitError::BackwardBeforeForward {
                gate: "AddGate".to_string()
            }
        );
    }
}
