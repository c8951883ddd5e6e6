//! Single-neuron backpropagation demonstration.
//!
//! Runs `sigmoid(a*x + b*y + c)` with `a=1, b=2, c=-3, x=-1, y=3`,
//! backpropagates, takes one gradient-ascent step of size 0.01 and prints the
//! circuit output before and after:
//!
//! ```text
//! circuit output: 0.8808
//! circuit output: 0.8826
//! ```
//!
//! Set `RUST_LOG=debug` to trace every gate on stderr.

use neurocircuit_core::driver::{Driver, DriverConfig};
use neurocircuit_core::nn::NeuronInputs;
use neurocircuit_core::NeuroCircuitError;

fn main() -> Result<(), NeuroCircuitError> {
    let _ = env_logger::try_init();

    let mut driver: Driver<f64> = Driver::new(NeuronInputs::default(), DriverConfig::default())?;
    let report = driver.run_demo()?;
    for line in report.lines() {
        println!("{}", line);
    }
    Ok(())
}
