pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::ProbeFileConfig, CliConfig};
pub use core::{engine::ProbeEngine, probe::HttpProbe};
pub use domain::model::{PayloadShape, ProbeReport};
pub use utils::error::{ProbeError, Result};
