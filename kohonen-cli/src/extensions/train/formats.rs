//! Output formats of the trained network.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/train/formats_test.rs"]
mod formats_test;

use kohonen::prelude::*;
use std::io::Write;

/// Writes network state as a single line.
pub fn write_state<W: Write>(writer: &mut W, network: &Network) -> GenericResult<()> {
    writeln!(writer, "{}", get_network_state(network)).map_err(|err| format!("cannot write state: '{err}'"))?;

    Ok(())
}

/// Writes network as rows of hex colors built from the first three weights of each node.
pub fn write_rgb<W: Write>(writer: &mut W, network: &Network) -> GenericResult<()> {
    if network.dimension() < 3 {
        return Err(format!("rgb format requires at least 3 dimensions, got {}", network.dimension()).into());
    }

    let (rows, cols) = network.shape();

    (0..rows).try_for_each(|row| {
        let line = (0..cols)
            .filter_map(|col| network.weights(row, col).and_then(to_rgb))
            .map(|(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(writer, "{line}").map_err(|err| format!("cannot write rgb: '{err}'").into())
    })
}

/// Maps first three weights to RGB color, weights are expected to be in `[0, 1]` range and
/// clamped otherwise. Returns `None` if there are less than three weights.
pub fn to_rgb(weights: &[Float]) -> Option<(u8, u8, u8)> {
    let channel = |value: Float| (value.clamp(0., 1.) * 255.) as u8;

    match weights {
        [r, g, b, ..] => Some((channel(*r), channel(*g), channel(*b))),
        _ => None,
    }
}
