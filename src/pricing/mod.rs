//! Order pricing

pub mod engine;

pub use engine::{PricedOrder, PricingEngine};
