pub mod noise_model;

pub use noise_model::{FixedNoise, SeededNoise, ThreadRngNoise};
