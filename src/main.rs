use apps_hub::core::logo::load_logo;
use apps_hub::core::Storage;
use apps_hub::utils::{logger, validation::Validate};
use apps_hub::{server, CliConfig, Command, HubConfig, LocalStorage, PageRenderer};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入配置
    let config = match cli.load_hub_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.environment);

    tracing::info!("Starting apps-hub ({:?})", config.environment);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = cli.validate().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = match &cli.command {
        Command::Render {
            output,
            file_name,
            stdout,
        } => render(&config, output, file_name, *stdout).await,
        Command::Serve { bind } => {
            let renderer = Arc::new(PageRenderer::new(&config, LocalStorage::new(".".to_string())));
            server::serve(renderer, bind).await
        }
        Command::Check { json } => check(&config, *json).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ apps-hub failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}

async fn render(
    config: &HubConfig,
    output: &str,
    file_name: &str,
    to_stdout: bool,
) -> apps_hub::Result<()> {
    let renderer = PageRenderer::new(config, LocalStorage::new(".".to_string()));

    if to_stdout {
        return renderer.write_page(&mut std::io::stdout().lock()).await;
    }

    let page = renderer.render_page().await;

    let storage = LocalStorage::new(output.to_string());
    storage.write_file(file_name, page.as_bytes()).await?;

    tracing::info!("✅ Rendered {} cards", renderer.cards().len());
    println!("📁 Page saved to: {}/{}", output, file_name);
    Ok(())
}

async fn check(config: &HubConfig, json: bool) -> apps_hub::Result<()> {
    let cards = config.cards();

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    let chrome = config.site_chrome();
    println!("✅ Configuration is valid");
    println!("📋 Title: {}", chrome.title);
    println!("📋 Cards ({}):", cards.len());
    for (i, card) in cards.iter().enumerate() {
        println!("   {}. {} → {}", i + 1, card.title, card.url);
    }

    match config.logo_path() {
        Some(path) => match load_logo(&LocalStorage::new(".".to_string()), path).await {
            Ok(logo) => println!("🖼️ Logo: {} ({} base64 chars)", path, logo.data.len()),
            Err(e) => println!("⚠️ Logo: {} (fallback glyph will be used)", e),
        },
        None => println!("🖼️ Logo: none configured, using {}", chrome.fallback_glyph),
    }

    Ok(())
}
