#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/network_test.rs"]
mod network_test;

use super::*;
use crate::algorithms::math::squared_grid_distance;
use crate::utils::{compare_floats, Random, SomError};
use std::cmp::Ordering;

/// A Self Organizing Map: a fixed grid of nodes stored in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Network {
    /// Data dimension.
    dimension: usize,
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
}

impl Network {
    /// Creates a square `size` x `size` network, every weight is drawn uniformly from `[0, 1)`.
    pub fn new_random(size: usize, dimension: usize, random: &(dyn Random)) -> Result<Self, SomError> {
        Self::new_random_with_shape(size, size, dimension, random)
    }

    /// Creates a `rows` x `cols` network, every weight is drawn uniformly from `[0, 1)`.
    /// Weights are drawn in row-major node order.
    pub fn new_random_with_shape(
        rows: usize,
        cols: usize,
        dimension: usize,
        random: &(dyn Random),
    ) -> Result<Self, SomError> {
        Self::validate_shape(rows, cols, dimension)?;

        let nodes = (0..rows * cols)
            .map(|_| Node::new((0..dimension).map(|_| random.uniform_real(0., 1.)).collect()))
            .collect();

        Ok(Self { dimension, rows, cols, nodes })
    }

    /// Creates a `rows` x `cols` network from given weights which are specified in row-major order.
    pub fn from_weights(rows: usize, cols: usize, weights: Vec<Vec<Float>>) -> Result<Self, SomError> {
        let dimension = weights.first().map_or(0, |weights| weights.len());
        Self::validate_shape(rows, cols, dimension)?;

        if weights.len() != rows * cols {
            return Err(SomError::Configuration(format!(
                "expected {} weight vectors for {rows}x{cols} grid, got {}",
                rows * cols,
                weights.len()
            )));
        }

        if let Some(weights) = weights.iter().find(|weights| weights.len() != dimension) {
            return Err(SomError::DimensionMismatch { expected: dimension, actual: weights.len() });
        }

        Ok(Self { dimension, rows, cols, nodes: weights.into_iter().map(Node::new).collect() })
    }

    /// Finds the best matching unit within the map for the given input. Nodes are scanned in
    /// row-major order and the first one with minimal distance wins.
    pub fn find_bmu(&self, input: &[Float]) -> Result<Coordinate, SomError> {
        self.check_dimension(input)?;

        let (idx, _) = self.nodes.iter().map(|node| node.distance(input)).enumerate().fold(
            (0, Float::MAX),
            |(best_idx, best_distance), (idx, distance)| match compare_floats(distance, best_distance) {
                Ordering::Less => (idx, distance),
                _ => (best_idx, best_distance),
            },
        );

        Ok(self.to_coordinate(idx))
    }

    /// Moves nodes within `radius` (inclusive) around `bmu` towards the input. The influence
    /// decays as gaussian of the grid distance with sigma equal to the radius. The scan window
    /// is clamped to the grid, there is no wraparound.
    pub fn update_neighborhood(
        &mut self,
        input: &[Float],
        bmu: Coordinate,
        radius: usize,
        learning_rate: Float,
    ) -> Result<(), SomError> {
        self.check_dimension(input)?;

        if !self.contains(&bmu) {
            return Err(SomError::Configuration(format!(
                "bmu {bmu} is outside of {}x{} grid",
                self.rows, self.cols
            )));
        }

        // NOTE radius is not clamped to the grid as it also defines the kernel width
        let radius_sqr = (radius as Float).powi(2);
        let double_sigma_sqr = 2. * radius_sqr;

        let row_range = bmu.row().saturating_sub(radius)..=bmu.row().saturating_add(radius).min(self.rows - 1);
        let col_range = bmu.col().saturating_sub(radius)..=bmu.col().saturating_add(radius).min(self.cols - 1);

        for row in row_range {
            for col in col_range.clone() {
                let distance_sqr = squared_grid_distance((row, col), (bmu.row(), bmu.col()));
                if distance_sqr as Float > radius_sqr {
                    continue;
                }

                // NOTE kernel is exactly 1 at bmu, it keeps radius of zero well defined
                let influence = if distance_sqr == 0 {
                    learning_rate
                } else {
                    learning_rate * (-(distance_sqr as Float) / double_sigma_sqr).exp()
                };

                self.nodes[row * self.cols + col].adjust(input, influence);
            }
        }

        Ok(())
    }

    /// Returns weights of the node at given position.
    pub fn weights(&self, row: usize, col: usize) -> Option<&[Float]> {
        self.node(Coordinate(row, col)).map(|node| node.weights())
    }

    /// Finds node by its coordinate.
    pub fn node(&self, coordinate: Coordinate) -> Option<&Node> {
        if self.contains(&coordinate) {
            self.nodes.get(coordinate.0 * self.cols + coordinate.1)
        } else {
            None
        }
    }

    /// Iterates over coordinates and their nodes in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Node)> + '_ {
        self.nodes.iter().enumerate().map(move |(idx, node)| (self.to_coordinate(idx), node))
    }

    /// Returns a total amount of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns shape of the network as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns data dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Checks whether input has the same dimension as the network.
    pub fn check_dimension(&self, input: &[Float]) -> Result<(), SomError> {
        if input.len() == self.dimension {
            Ok(())
        } else {
            Err(SomError::DimensionMismatch { expected: self.dimension, actual: input.len() })
        }
    }

    fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.0 < self.rows && coordinate.1 < self.cols
    }

    fn to_coordinate(&self, idx: usize) -> Coordinate {
        Coordinate(idx / self.cols, idx % self.cols)
    }

    fn validate_shape(rows: usize, cols: usize, dimension: usize) -> Result<(), SomError> {
        match (rows, cols, dimension) {
            (0, _, _) | (_, 0, _) => {
                Err(SomError::Configuration(format!("grid size must be positive, got {rows}x{cols}")))
            }
            (_, _, 0) => Err(SomError::Configuration("dimension must be positive".to_string())),
            _ => Ok(()),
        }
    }
}
