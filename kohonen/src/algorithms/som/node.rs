#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/node_test.rs"]
mod node_test;

use crate::algorithms::math::squared_euclidean_distance;
use crate::utils::Float;
use std::fmt::{Display, Formatter};

/// Represents a node in network: a prototype vector of fixed dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    weights: Vec<Float>,
}

/// Coordinate of the node as (row, col).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Coordinate(pub usize, pub usize);

impl Node {
    /// Creates a new instance of `Node`.
    pub fn new(weights: Vec<Float>) -> Self {
        Self { weights }
    }

    /// Returns weights of the node.
    pub fn weights(&self) -> &[Float] {
        self.weights.as_slice()
    }

    /// Returns node's dimension.
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Adjusts the weights of the node towards the target:
    /// `w[i] += influence * (target[i] - w[i])`.
    pub fn adjust(&mut self, target: &[Float], influence: Float) {
        debug_assert!(self.weights.len() == target.len());

        self.weights.iter_mut().zip(target.iter()).for_each(|(weight, &value)| {
            *weight += influence * (value - *weight);
        });
    }

    /// Returns squared euclidean distance to the given weights.
    pub fn distance(&self, weights: &[Float]) -> Float {
        debug_assert!(self.weights.len() == weights.len());

        squared_euclidean_distance(self.weights.iter().copied(), weights.iter().copied())
    }
}

impl Coordinate {
    /// Returns row index.
    pub fn row(&self) -> usize {
        self.0
    }

    /// Returns column index.
    pub fn col(&self) -> usize {
        self.1
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}
