use super::*;
use approx::assert_abs_diff_eq;

fn default_driver() -> Driver<f64> {
    Driver::new(NeuronInputs::default(), DriverConfig::default()).expect("default driver")
}

#[test]
fn test_default_config() {
    let config = DriverConfig::default();
    assert_eq!(config.step_size, 0.01);
    assert_eq!(config.precision, 4);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_config() {
    let bad_step = DriverConfig {
        step_size: f64::NAN,
        ..DriverConfig::default()
    };
    assert!(matches!(
        Driver::new(NeuronInputs::<f64>::default(), bad_step),
        Err(NeuroCircuitError::InvalidConfiguration(_))
    ));

    let bad_precision = DriverConfig {
        precision: 16,
        ..DriverConfig::default()
    };
    assert!(bad_precision.validate().is_err());
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(0.8807970779778823, 4), 0.8808);
    assert_eq!(round_to(0.8825501816218984, 4), 0.8826);
    assert_eq!(round_to(-0.10499, 3), -0.105);
    assert_eq!(round_to(1.0, 4), 1.0);
}

#[test]
fn test_round_to_just_below_tie() {
    // Both literals sit slightly below the decimal tie in binary.
    assert_eq!(round_to(0.10955, 4), 0.1095);
    assert_eq!(round_to(0.62525, 4), 0.6252);
    assert_eq!(format_output(0.10955, 4), "circuit output: 0.1095");
}

#[test]
fn test_format_output() {
    assert_eq!(format_output(0.8807970779778823, 4), "circuit output: 0.8808");
    assert_eq!(format_output(0.5, 4), "circuit output: 0.5");
}

#[test]
fn test_step_reports_gradients() -> Result<(), NeuroCircuitError> {
    let mut driver = default_driver();
    let report = driver.step()?;
    assert_abs_diff_eq!(report.output, 0.8807970779778823, epsilon = 1e-12);

    let expected = [
        ("a", -0.105),
        ("b", 0.315),
        ("c", 0.105),
        ("x", 0.105),
        ("y", 0.210),
    ];
    for ((name, grad), (expected_name, expected_grad)) in report.gradients.iter().zip(expected) {
        assert_eq!(name, expected_name);
        assert_abs_diff_eq!(*grad, expected_grad, epsilon = 1e-3);
    }

    // Ascent: a moved against its (negative) gradient sign, b along it.
    assert!(driver.circuit().a().value() < 1.0);
    assert!(driver.circuit().b().value() > 2.0);
    Ok(())
}

#[test]
fn test_run_demo_improves_output() -> Result<(), NeuroCircuitError> {
    let mut driver = default_driver();
    let report = driver.run_demo()?;
    assert!(report.improved > report.baseline);
    assert_abs_diff_eq!(report.baseline, 0.8807970779778823, epsilon = 1e-12);
    assert_abs_diff_eq!(report.improved, 0.8825501816218984, epsilon = 1e-9);
    assert_abs_diff_eq!(report.improved, 0.8825, epsilon = 1e-4);

    let [first, second] = report.lines();
    assert_eq!(first, "circuit output: 0.8808");
    assert_eq!(second, "circuit output: 0.8826");
    Ok(())
}

#[test]
fn test_run_iterations_is_monotonic() -> Result<(), NeuroCircuitError> {
    let mut driver = default_driver();
    let outputs = driver.run_iterations(10)?;
    assert_eq!(outputs.len(), 11);
    for pair in outputs.windows(2) {
        assert!(pair[1] > pair[0], "{:?}", outputs);
    }
    Ok(())
}

#[test]
fn test_run_iterations_matches_demo_for_one_step() -> Result<(), NeuroCircuitError> {
    let demo = default_driver().run_demo()?;
    let outputs = default_driver().run_iterations(1)?;
    assert_eq!(outputs, vec![demo.baseline, demo.improved]);
    Ok(())
}

#[test]
fn test_repeated_steps_do_not_accumulate_gradients() -> Result<(), NeuroCircuitError> {
    let config = DriverConfig {
        step_size: 0.0,
        ..DriverConfig::default()
    };
    let mut driver = Driver::new(NeuronInputs::<f64>::default(), config)?;
    let first = driver.step()?;
    let second = driver.step()?;
    assert_eq!(first, second);
    for (unit, (_, grad)) in driver.circuit().parameters().iter().zip(&first.gradients) {
        assert_eq!(unit.grad(), *grad);
    }
    Ok(())
}

#[test]
fn test_run_iterations_matches_step_then_forward() -> Result<(), NeuroCircuitError> {
    let mut manual = default_driver();
    let mut expected = vec![manual.forward()?];
    for _ in 0..5 {
        manual.step()?;
        expected.push(manual.forward()?);
    }

    let outputs = default_driver().run_iterations(5)?;
    assert_eq!(outputs, expected);
    Ok(())
}

#[test]
fn test_run_iterations_zero() -> Result<(), NeuroCircuitError> {
    let outputs = default_driver().run_iterations(0)?;
    assert_eq!(outputs.len(), 1);
    Ok(())
}

#[test]
fn test_zero_step_size_keeps_output() -> Result<(), NeuroCircuitError> {
    let config = DriverConfig {
        step_size: 0.0,
        ..DriverConfig::default()
    };
    let mut driver = Driver::new(NeuronInputs::<f64>::default(), config)?;
    let report = driver.run_demo()?;
    assert_eq!(report.baseline.to_bits(), report.improved.to_bits());
    Ok(())
}

#[test]
fn test_overflowing_inputs_abort_demo() {
    let inputs = NeuronInputs {
        a: 0.0_f64,
        b: 0.0,
        c: -1.0e4,
        x: 0.0,
        y: 0.0,
    };
    let mut driver = Driver::new(inputs, DriverConfig::default()).expect("valid config");
    assert!(matches!(
        driver.run_demo(),
        Err(NeuroCircuitError::ArithmeticOverflow { .. })
    ));
}
