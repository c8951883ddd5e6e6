// neurocircuit-core/src/optim/mod.rs

//! Optimizers for the circuit's leaf units.
//!
//! This module provides the `Optimizer` trait and `SgdOptimizer`, a plain
//! gradient step that can ascend (the neuron demonstration) or descend.

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
