//! Provides implementation of a classic Self Organizing Map with a fixed rectangular grid.

use crate::utils::Float;

mod data;
pub use self::data::*;

mod network;
pub use self::network::*;

mod node;
pub use self::node::*;

mod schedule;
pub use self::schedule::*;

mod state;
pub use self::state::*;

/// Represents an input for network.
pub trait Input {
    /// Returns weights.
    fn weights(&self) -> &[Float];
}

impl Input for [Float] {
    fn weights(&self) -> &[Float] {
        self
    }
}

impl Input for Vec<Float> {
    fn weights(&self) -> &[Float] {
        self.as_slice()
    }
}

impl<const N: usize> Input for [Float; N] {
    fn weights(&self) -> &[Float] {
        self.as_slice()
    }
}

impl<I: Input + ?Sized> Input for &I {
    fn weights(&self) -> &[Float] {
        (**self).weights()
    }
}
