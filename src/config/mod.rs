pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::args::{CliConfig, Command};

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::HubConfig;
    use crate::utils::error::{HubError, Result};
    use crate::utils::validation::{validate_path, Validate};
    use clap::{Parser, Subcommand};
    use std::net::SocketAddr;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "apps-hub")]
    #[command(about = "Launcher page for externally hosted apps")]
    pub struct CliConfig {
        /// Path to TOML hub configuration (built-in catalog when omitted)
        #[arg(short, long, global = true)]
        pub config: Option<String>,

        /// Override the logo path from the configuration
        #[arg(long, global = true)]
        pub logo: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Render the page to a file
        Render {
            #[arg(long, default_value = "./output")]
            output: String,

            #[arg(long, default_value = "index.html")]
            file_name: String,

            /// Print the page instead of writing it
            #[arg(long)]
            stdout: bool,
        },
        /// Serve the page over HTTP
        Serve {
            #[arg(long, default_value = "127.0.0.1:8501")]
            bind: String,
        },
        /// Validate the configuration and print a summary
        Check {
            /// Print the resolved card list as JSON
            #[arg(long)]
            json: bool,
        },
    }

    impl CliConfig {
        /// 載入 TOML 配置並套用命令列覆蓋
        pub fn load_hub_config(&self) -> Result<HubConfig> {
            let mut config = match &self.config {
                Some(path) => HubConfig::from_file(path)?,
                None => HubConfig::default(),
            };

            if let Some(logo) = &self.logo {
                config.logo.path = Some(logo.clone());
            }

            Ok(config)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validate_path("--config", path)?;
            }
            if let Some(logo) = &self.logo {
                validate_path("--logo", logo)?;
            }

            match &self.command {
                Command::Render {
                    output, file_name, ..
                } => {
                    validate_path("--output", output)?;
                    validate_path("--file-name", file_name)?;
                }
                Command::Serve { bind } => {
                    bind.parse::<SocketAddr>()
                        .map_err(|e| HubError::InvalidConfigValueError {
                            field: "--bind".to_string(),
                            value: bind.clone(),
                            reason: e.to_string(),
                        })?;
                }
                Command::Check { .. } => {}
            }

            Ok(())
        }
    }

}
