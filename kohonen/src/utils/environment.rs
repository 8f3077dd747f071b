#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{DefaultRandom, Float, Random, Timer};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the training.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Specifies a computational quota for the training. It is checked between iterations,
/// so training can be interrupted without leaving a partially updated neighbourhood.
pub trait Quota {
    /// Returns true when the quota is reached.
    fn is_reached(&self) -> bool;
}

/// A quota which is reached when given amount of time has elapsed.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// A global execution quota.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(
        random: Arc<dyn Random + Send + Sync>,
        quota: Option<Arc<dyn Quota + Send + Sync>>,
        logger: InfoLogger,
    ) -> Self {
        Self { random, quota, logger }
    }

    /// Creates an instance of `Environment` with repeatable random sequence, no quota and
    /// a logger which writes into stdout.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_repeatable(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), None, Arc::new(|msg| println!("{msg}")))
    }
}
