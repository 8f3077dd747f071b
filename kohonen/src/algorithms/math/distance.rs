#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use crate::utils::Float;

/// Calculates squared euclidean distance between two vectors: D = sum((x - y)^2).
/// Extra elements of the longer vector are ignored, so callers are responsible for
/// checking that dimensions match.
pub fn squared_euclidean_distance<A, B>(a: A, b: B) -> Float
where
    A: Iterator<Item = Float>,
    B: Iterator<Item = Float>,
{
    a.zip(b).fold(Float::default(), |acc, (a, b)| {
        let diff = a - b;
        acc + diff * diff
    })
}

/// Calculates squared distance between two cells in grid coordinate units.
pub fn squared_grid_distance(a: (usize, usize), b: (usize, usize)) -> usize {
    let (dr, dc) = (a.0.abs_diff(b.0), a.1.abs_diff(b.1));

    dr * dr + dc * dc
}
