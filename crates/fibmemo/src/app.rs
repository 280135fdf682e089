//! Application entry point and dispatch.

use std::time::{Duration, Instant};

use anyhow::Result;
use num_bigint::BigUint;
use tracing::debug;

use fibmemo_core::registry::{CalculatorFactory, DefaultFactory};

use crate::config::AppConfig;
use crate::output::{format_result, write_to_file};
use crate::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    debug!(
        version = %version::full_version(),
        n = config.n,
        algo = %config.algo,
        "starting"
    );

    let factory = DefaultFactory::new();
    let calculator = factory.get(&config.algo)?;

    let start = Instant::now();
    let value = calculator.calculate(config.n)?;
    let duration = start.elapsed();

    present(config, calculator.name(), &value, duration);

    if let Some(ref path) = config.output {
        write_to_file(path, &value)?;
    }

    Ok(())
}

fn present(config: &AppConfig, algorithm: &str, value: &BigUint, duration: Duration) {
    if config.quiet {
        println!("{value}");
        return;
    }

    println!("Algorithm: {algorithm}");
    if config.verbose {
        println!("Duration: {duration:.3?}");
    }
    if config.details {
        println!("Result bits: {}", value.bits());
        println!("Result digits: {}", value.to_string().len());
    }
    println!("F({}) = {}", config.n, format_result(value, config.verbose));
}
