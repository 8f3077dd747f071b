//! This module contains the SOM algorithm and the math it is built on.

pub mod math;
pub mod som;
