pub mod errors;
pub mod ports;
pub mod valuation;
