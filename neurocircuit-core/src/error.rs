use thiserror::Error;

/// Custom error type for the NeuroCircuit crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuroCircuitError {
    /// An intermediate result of `operation` overflowed to infinity.
    /// The value is reported as `f64` whatever the unit's scalar type.
    #[error("Arithmetic overflow in {operation} for input {input}")]
    ArithmeticOverflow { operation: String, input: f64 },

    #[error("Backward called on {gate} before a matching forward pass")]
    BackwardBeforeForward { gate: String },

    #[error("Gate {gate} at position {position} consumes a unit produced later in the sequence")]
    GraphOrderViolation { gate: String, position: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Non-finite value {value} found on unit '{unit}'")]
    NonFiniteValue { unit: String, value: f64 },
}
