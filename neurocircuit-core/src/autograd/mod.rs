//! # Autograd
//!
//! Reverse-mode differentiation over an explicit, creation-ordered sequence of
//! gates. Each gate implements [`BackwardOp`]; [`graph::backward_in_reverse`]
//! walks the sequence backwards, and [`grad_check`] verifies the analytical
//! gradients against central finite differences.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{backward_in_reverse, NodeId};
