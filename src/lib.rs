pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod taxonomy;

pub use analysis::InsightEngine;
pub use config::{Config, EngineConfig};
pub use error::{Error, Result};
pub use models::{Insights, UserData};
