//! # neurocircuit-core
//!
//! Reverse-mode differentiation through a single artificial neuron built
//! from scalar gates: `sigmoid(a*x + b*y + c)`.
//!
//! - [`Unit`]: a shared scalar carrying a value and an accumulated gradient.
//! - [`ops`]: the multiply, add and sigmoid gates.
//! - [`nn::NeuronCircuit`]: the fixed wiring of the neuron.
//! - [`optim::SgdOptimizer`]: the gradient step.
//! - [`driver::Driver`]: the two-pass gradient-ascent demonstration.

pub mod autograd;
pub mod driver;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod unit;
pub mod unit_data;
pub mod utils;

pub mod error;

// Re-export the core types so they are reachable as `neurocircuit_core::Unit`
pub use error::NeuroCircuitError;
pub use ops::traits::NeuronScalar;
pub use unit::Unit;
// Re-export traits required by public functions/structs
pub use num_traits;
