//! A command line interface library for the self-organizing map training engine.
//!
//! Command line arguments and config files are turned into training parameters here, so the
//! binary only deals with argument parsing and output streams.

#![warn(missing_docs)]

pub use kohonen;

pub mod extensions;
