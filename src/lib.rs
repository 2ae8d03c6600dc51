pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use crate::core::{
    engine::{MatchEngine, RunSummary},
    pipeline::MatchPipeline,
};
pub use utils::error::{MatchError, Result};
