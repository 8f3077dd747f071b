//! Training configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/train/config_test.rs"]
mod config_test;

use kohonen::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::str::FromStr;

/// Default grid size (grid is size x size).
pub const DEFAULT_GRID_SIZE: usize = 50;
/// Default dimension of inputs, the first three dimensions are shown as RGB.
pub const DEFAULT_DIMENSION: usize = 3;
/// Default amount of training iterations.
pub const DEFAULT_ITERATIONS: usize = 1000;
/// Default amount of generated inputs.
pub const DEFAULT_INPUTS: usize = 5;
/// Default initial neighbourhood radius.
pub const DEFAULT_INITIAL_RADIUS: Float = 25.;
/// Default initial learning rate.
pub const DEFAULT_LEARNING_RATE: Float = 0.1;

/// A training configuration, all values are optional.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Grid size. Default is 50.
    pub grid_size: Option<usize>,
    /// Dimension of inputs. Default is 3.
    pub dimension: Option<usize>,
    /// Amount of training iterations. Default is 1000.
    pub iterations: Option<usize>,
    /// Amount of random inputs. Default is 5.
    pub inputs: Option<usize>,
    /// Initial neighbourhood radius. Default is 25.
    pub initial_radius: Option<Float>,
    /// Initial learning rate. Default is 0.1.
    pub learning_rate: Option<Float>,
    /// Input selection type. Default is sequential.
    pub selection: Option<SelectionType>,
    /// A random seed. If not set, the run is not repeatable.
    pub seed: Option<u64>,
    /// Max training time in seconds.
    pub max_time: Option<usize>,
}

/// Specifies input selection type.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
pub enum SelectionType {
    /// Inputs are taken in order.
    #[serde(rename = "sequential")]
    Sequential,
    /// Inputs are taken in order with a stop check on the radius. The radius schedule never
    /// shrinks below one, so it trains the same way as `sequential`.
    #[serde(rename = "sequential-early-stop")]
    SequentialEarlyStop,
    /// Inputs are taken randomly.
    #[serde(rename = "random")]
    Random,
}

/// Training parameters with all defaults applied.
#[derive(Clone, Debug)]
pub struct TrainParams {
    /// Grid size.
    pub grid_size: usize,
    /// Dimension of inputs.
    pub dimension: usize,
    /// Amount of random inputs.
    pub inputs: usize,
    /// Training schedule.
    pub training: TrainingConfig,
    /// A random seed.
    pub seed: Option<u64>,
    /// Max training time in seconds.
    pub max_time: Option<usize>,
}

impl Config {
    /// Returns a new config where values set in `other` override values of this one.
    pub fn merge(self, other: Config) -> Config {
        Config {
            grid_size: other.grid_size.or(self.grid_size),
            dimension: other.dimension.or(self.dimension),
            iterations: other.iterations.or(self.iterations),
            inputs: other.inputs.or(self.inputs),
            initial_radius: other.initial_radius.or(self.initial_radius),
            learning_rate: other.learning_rate.or(self.learning_rate),
            selection: other.selection.or(self.selection),
            seed: other.seed.or(self.seed),
            max_time: other.max_time.or(self.max_time),
        }
    }
}

impl TryFrom<Config> for TrainParams {
    type Error = GenericError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        let params = TrainParams {
            grid_size: config.grid_size.unwrap_or(DEFAULT_GRID_SIZE),
            dimension: config.dimension.unwrap_or(DEFAULT_DIMENSION),
            inputs: config.inputs.unwrap_or(DEFAULT_INPUTS),
            training: TrainingConfig {
                iterations: config.iterations.unwrap_or(DEFAULT_ITERATIONS),
                initial_radius: config.initial_radius.unwrap_or(DEFAULT_INITIAL_RADIUS),
                learning_rate: config.learning_rate.unwrap_or(DEFAULT_LEARNING_RATE),
                selection: config.selection.unwrap_or(SelectionType::Sequential).into(),
            },
            seed: config.seed,
            max_time: config.max_time,
        };

        params.training.validate()?;

        if params.inputs == 0 {
            return Err(SomError::EmptyDataset.into());
        }

        Ok(params)
    }
}

impl FromStr for SelectionType {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sequential" => Ok(SelectionType::Sequential),
            "sequential-early-stop" => Ok(SelectionType::SequentialEarlyStop),
            "random" => Ok(SelectionType::Random),
            _ => Err(format!("unknown selection type: '{value}'").into()),
        }
    }
}

impl From<SelectionType> for SelectionMode {
    fn from(value: SelectionType) -> Self {
        match value {
            SelectionType::Sequential => SelectionMode::Sequential,
            SelectionType::SequentialEarlyStop => SelectionMode::SequentialWithEarlyStop,
            SelectionType::Random => SelectionMode::Random,
        }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
