use crate::config::toml_config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool, environment: Environment) -> &'static str {
    match (verbose, environment) {
        (true, _) => "apps_hub=debug,tower_http=debug,info",
        (false, Environment::Development) => "apps_hub=debug,info",
        (false, Environment::Production) => "apps_hub=warn",
    }
}

pub fn init_cli_logger(verbose: bool, environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, environment)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        // stdout carries rendered pages and JSON
        .with_writer(std::io::stderr);

    match environment {
        Environment::Development => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .init(),
        // Production logs go to a collector, JSON keeps them parseable
        Environment::Production => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init(),
    }
}
