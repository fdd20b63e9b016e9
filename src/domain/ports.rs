/// Source of the uniform draws used to perturb an estimate.
///
/// Implementations live in `infrastructure::simulation`. Production code uses
/// an unseeded generator; tests pin the draws with a seeded or fixed source.
pub trait NoiseSource: Send + Sync {
    /// Next uniform sample in `[0, 1)`.
    fn next_unit(&self) -> f64;
}
