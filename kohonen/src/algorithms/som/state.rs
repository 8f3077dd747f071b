#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/state_test.rs"]
mod state_test;

use super::*;
use crate::algorithms::math::get_mean_iter;
use std::fmt::{Display, Formatter, Result, Write};

/// Represents state of the network.
pub struct NetworkState {
    /// Shape of the network as (rows, cols, num of weights).
    pub shape: (usize, usize, usize),
    /// Nodes of the network in row-major order.
    pub nodes: Vec<NodeState>,
}

/// Contains information about network node state.
pub struct NodeState {
    /// Node coordinate in network.
    pub coordinate: Coordinate,
    /// Unified distance to neighbors.
    pub unified_distance: Float,
    /// Node weights.
    pub weights: Vec<Float>,
}

/// Gets network state.
pub fn get_network_state(network: &Network) -> NetworkState {
    let (rows, cols) = network.shape();

    let nodes = network
        .iter()
        .map(|(coordinate, node)| {
            let Coordinate(row, col) = coordinate;

            let neighbours = [
                row.checked_sub(1).map(|row| Coordinate(row, col)),
                Some(Coordinate(row + 1, col)),
                col.checked_sub(1).map(|col| Coordinate(row, col)),
                Some(Coordinate(row, col + 1)),
            ];

            let unified_distance = get_mean_iter(
                neighbours
                    .into_iter()
                    .flatten()
                    .filter_map(|coordinate| network.node(coordinate))
                    .map(|neighbour| node.distance(neighbour.weights()).sqrt()),
            );

            NodeState { coordinate, unified_distance, weights: node.weights().to_vec() }
        })
        .collect();

    NetworkState { shape: (rows, cols, network.dimension()), nodes }
}

impl Display for NetworkState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // NOTE serialize state in simple representation which can be embedded
        // to json as string and then easily parsed.
        let nodes = self.nodes.iter().fold(String::new(), |mut res, n| {
            let Coordinate(row, col) = n.coordinate;
            let weights = n.weights.iter().map(|w| format!("{w:.7}")).collect::<Vec<_>>().join(",");

            // NOTE writing to String cannot fail
            let _ = write!(&mut res, "({row},{col},{:.7},[{weights}]),", n.unified_distance);

            res
        });

        write!(f, "({},{},{},[{}])", self.shape.0, self.shape.1, self.shape.2, nodes)
    }
}
