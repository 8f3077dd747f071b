/// Alias to a scalar floating type.
///
/// NOTE: input data is usually normalized to `[0, 1)`, `f64` keeps weights stable over long runs
/// with tiny learning rates.
pub type Float = f64;
