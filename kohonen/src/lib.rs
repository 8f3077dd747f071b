//! This crate implements a training engine for Self-Organizing Maps (SOM, Kohonen maps): a
//! two-dimensional grid of prototype vectors which is iteratively adapted so that nearby grid
//! cells come to represent similar regions of an input vector space.
//!
//! A typical usage:
//!
//! ```
//! use kohonen::prelude::*;
//!
//! let environment = Environment::new_repeatable(42);
//! let mut network = Network::new_random(8, 3, environment.random.as_ref()).unwrap();
//! let dataset = generate_random_dataset(5, 3, environment.random.as_ref());
//!
//! let config = TrainingConfig {
//!     iterations: 100,
//!     initial_radius: 4.,
//!     learning_rate: 0.1,
//!     selection: SelectionMode::Sequential,
//! };
//!
//! let report = train(&mut network, dataset.as_slice(), &config, &environment).unwrap();
//! assert_eq!(report.iterations, 100);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod utils;
