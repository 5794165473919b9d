pub mod composer;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod units;
pub mod writer;

pub use crate::composer::{compose, Edge};
pub use crate::config::MarginConfig;
pub use crate::error::MarginError;
pub use crate::pipeline::add_margin;
pub use crate::units::MarginSummary;
