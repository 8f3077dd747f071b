#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/data_test.rs"]
mod data_test;

use crate::utils::{Float, Random};

/// Generates `count` inputs of given dimension, every value is drawn uniformly from `[0, 1)`.
pub fn generate_random_dataset(count: usize, dimension: usize, random: &(dyn Random)) -> Vec<Vec<Float>> {
    (0..count).map(|_| (0..dimension).map(|_| random.uniform_real(0., 1.)).collect()).collect()
}
