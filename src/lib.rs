pub mod assets;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{cli::LocalStorage, toml_config::HubConfig};
pub use core::render::PageRenderer;
pub use utils::error::{HubError, Result};
