//! # Activation Functions
//!
//! Non-linear gates. Only the logistic sigmoid is needed by the neuron.

pub mod sigmoid;

pub use sigmoid::{sigmoid, SigmoidGate};
