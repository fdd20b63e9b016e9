use crate::domain::ports::NoiseSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Unseeded source backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngNoise;

impl NoiseSource for ThreadRngNoise {
    fn next_unit(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible source: the same seed yields the same sequence of draws.
pub struct SeededNoise {
    rng: Mutex<StdRng>,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn next_unit(&self) -> f64 {
        // A poisoned lock still holds a usable generator
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random::<f64>()
    }
}

/// Returns the same draw every time, for exact-value tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedNoise {
    value: f64,
}

impl FixedNoise {
    /// Clamps `value` into `[0, 1)`; NaN becomes 0.
    pub fn new(value: f64) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0 - f64::EPSILON)
        };
        Self { value }
    }

    /// Draw of 0.5: no price perturbation, mid-range confidence.
    pub fn midpoint() -> Self {
        Self::new(0.5)
    }
}

impl NoiseSource for FixedNoise {
    fn next_unit(&self) -> f64 {
        self.value
    }
}
