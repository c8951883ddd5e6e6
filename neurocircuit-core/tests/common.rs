use neurocircuit_core::driver::{Driver, DriverConfig};
use neurocircuit_core::nn::{NeuronCircuit, NeuronInputs};

// Shared setup for the integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn default_circuit() -> NeuronCircuit<f64> {
    init_logger();
    NeuronCircuit::new(NeuronInputs::default())
}

#[allow(dead_code)]
pub(crate) fn default_driver() -> Driver<f64> {
    init_logger();
    Driver::new(NeuronInputs::default(), DriverConfig::default()).expect("Default driver creation failed")
}
