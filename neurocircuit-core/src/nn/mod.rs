// src/nn/mod.rs
//! Circuits built from gates.

pub mod module; // Trait Module
pub mod neuron; // The single-neuron circuit

// Re-export common items
pub use module::Module;
pub use neuron::{NeuronCircuit, NeuronInputs};
