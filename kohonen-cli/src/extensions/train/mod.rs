//! Contains functionality to configure and run a training from the command line.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/train/run_test.rs"]
mod run_test;

use kohonen::prelude::*;

pub mod config;
pub mod formats;
pub mod interruption;

use self::config::TrainParams;

/// Creates a random network and a random dataset as specified by parameters, then trains the
/// network on it. Returns the trained network with training report.
pub fn run_training(params: &TrainParams, environment: &Environment) -> GenericResult<(Network, TrainingReport)> {
    let random = environment.random.as_ref();

    let (network, duration) = Timer::measure_duration(|| {
        Network::new_random(params.grid_size, params.dimension, random)
            .map(|network| (network, generate_random_dataset(params.inputs, params.dimension, random)))
    });
    let (mut network, dataset) = network?;

    (environment.logger)(&format!(
        "created {0}x{0} network and {1} inputs in {2}ms",
        params.grid_size,
        dataset.len(),
        duration.as_millis()
    ));

    let report = train(&mut network, dataset.as_slice(), &params.training, environment)?;

    (environment.logger)(&format!("{} ms", report.duration.as_millis()));

    Ok((network, report))
}
