#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/schedule_test.rs"]
mod schedule_test;

use super::*;
use crate::utils::{Environment, SomError, Timer};
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Specifies how training inputs are picked from the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    /// Inputs are taken in order: `dataset[iteration % dataset.len()]`.
    Sequential,
    /// Same as `Sequential`, but training stops once the rounded radius drops below one.
    /// With the radius time constant `iterations / ln(initial_radius)` the decayed radius stays
    /// above one for every iteration, so the run is identical to `Sequential`.
    SequentialWithEarlyStop,
    /// Inputs are drawn uniformly at random.
    Random,
}

/// Training schedule parameters. Immutable for the duration of one training run.
#[derive(Clone, Debug)]
pub struct TrainingConfig {
    /// Total amount of iterations.
    pub iterations: usize,
    /// Initial neighbourhood radius in grid units, must be greater than one.
    pub initial_radius: Float,
    /// Initial learning rate.
    pub learning_rate: Float,
    /// Input selection mode.
    pub selection: SelectionMode,
}

/// Specifies why training has stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminationReason {
    /// All iterations were run.
    Completed,
    /// Rounded radius has decayed below one in `SequentialWithEarlyStop` mode. It is not
    /// reported by the current radius schedule which keeps the radius above one.
    EarlyStop,
    /// Environment quota was reached.
    QuotaReached,
}

/// Keeps information about a finished training run.
#[derive(Clone, Debug)]
pub struct TrainingReport {
    /// Amount of iterations which updated the network.
    pub iterations: usize,
    /// A termination reason.
    pub termination: TerminationReason,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

impl TrainingConfig {
    /// Checks that parameters define a sane schedule.
    pub fn validate(&self) -> Result<(), SomError> {
        if self.iterations == 0 {
            return Err(SomError::Configuration("amount of iterations must be positive".to_string()));
        }

        // NOTE ln(radius) <= 0 gives non-positive or infinite time constant
        if !self.initial_radius.is_finite() || self.initial_radius <= 1. {
            return Err(SomError::Configuration(format!(
                "initial radius must be greater than 1, got {}",
                self.initial_radius
            )));
        }

        if !self.learning_rate.is_finite() || self.learning_rate <= 0. {
            return Err(SomError::Configuration(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }

        Ok(())
    }

    /// Returns time constant used to decay the radius.
    pub fn time_constant(&self) -> Float {
        time_constant(self.iterations, self.initial_radius)
    }
}

impl Display for SelectionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SelectionMode::Sequential => "sequential",
            SelectionMode::SequentialWithEarlyStop => "sequential-early-stop",
            SelectionMode::Random => "random",
        };

        write!(f, "{name}")
    }
}

/// Exponentially decays the initial value: `initial * exp(-iteration / time_constant)`.
pub fn decay(initial: Float, iteration: usize, time_constant: Float) -> Float {
    initial * (-(iteration as Float) / time_constant).exp()
}

/// Returns time constant for radius decay: `total_iterations / ln(initial_radius)`.
/// Expects `initial_radius > 1`.
pub fn time_constant(total_iterations: usize, initial_radius: Float) -> Float {
    total_iterations as Float / initial_radius.ln()
}

/// Trains network on the dataset according to the schedule. All parameters and inputs are
/// validated before the first update, so the network is left untouched on error.
pub fn train<I: Input>(
    network: &mut Network,
    dataset: &[I],
    config: &TrainingConfig,
    environment: &Environment,
) -> Result<TrainingReport, SomError> {
    config.validate()?;

    if dataset.is_empty() {
        return Err(SomError::EmptyDataset);
    }

    dataset.iter().try_for_each(|input| network.check_dimension(input.weights()))?;

    let max_index = i32::try_from(dataset.len() - 1)
        .map_err(|_| SomError::Configuration(format!("dataset is too large: {} inputs", dataset.len())))?;

    let timer = Timer::start();
    let (rows, cols) = network.shape();
    let time_constant = config.time_constant();
    let log_every = (config.iterations / 10).max(1);

    (environment.logger)(&format!(
        "training {rows}x{cols} network on {} inputs: {} iterations, initial radius {}, learning rate {}, {} selection",
        dataset.len(),
        config.iterations,
        config.initial_radius,
        config.learning_rate,
        config.selection
    ));

    let mut termination = TerminationReason::Completed;
    let mut iterations = 0;

    for iteration in 0..config.iterations {
        if environment.quota.as_ref().is_some_and(|quota| quota.is_reached()) {
            termination = TerminationReason::QuotaReached;
            break;
        }

        let radius = decay(config.initial_radius, iteration, time_constant).round() as usize;
        if radius < 1 && config.selection == SelectionMode::SequentialWithEarlyStop {
            termination = TerminationReason::EarlyStop;
            break;
        }

        let learning_rate = decay(config.learning_rate, iteration, config.iterations as Float);

        let input = match config.selection {
            SelectionMode::Sequential | SelectionMode::SequentialWithEarlyStop => &dataset[iteration % dataset.len()],
            SelectionMode::Random => &dataset[environment.random.uniform_int(0, max_index) as usize],
        };

        let bmu = network.find_bmu(input.weights())?;
        network.update_neighborhood(input.weights(), bmu, radius, learning_rate)?;
        iterations += 1;

        if iteration % log_every == 0 {
            (environment.logger)(&format!(
                "[{}ms] iteration {iteration}: radius {radius}, learning rate {learning_rate:.5}, bmu {bmu}",
                timer.elapsed_millis()
            ));
        }
    }

    let duration = timer.elapsed();

    (environment.logger)(&format!(
        "training finished in {}ms after {iterations} iterations ({termination:?})",
        duration.as_millis()
    ));

    Ok(TrainingReport { iterations, termination, duration })
}
