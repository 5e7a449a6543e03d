use anyhow::Result;
use apps_hub::core::{CardDescriptor, CardIcon};
use apps_hub::utils::validation::validate_url;
use apps_hub::{HubConfig, LocalStorage, PageRenderer};
use tempfile::TempDir;

fn storage_in(dir: &TempDir) -> LocalStorage {
    LocalStorage::new(dir.path().to_string_lossy().to_string())
}

fn config_with_logo(path: Option<&str>) -> HubConfig {
    let mut config = HubConfig::default();
    config.logo.path = path.map(str::to_string);
    config
}

fn scenario_cards() -> Vec<CardDescriptor> {
    [
        ("Dashboard", "📊", "https://btg-dashboard.streamlit.app/"),
        ("Subrecipe Guide", "📋", "https://btg-subrecipe-guide.streamlit.app/"),
        ("Asset Tagging", "🏷️", "https://btg-asset-tagging.streamlit.app/"),
        ("BOM Explosion", "💥", "https://btg-bom-explosion.streamlit.app/"),
    ]
    .into_iter()
    .map(|(title, icon, url)| {
        CardDescriptor::new(
            title,
            format!("{} description", title),
            CardIcon::Emoji(icon.to_string()),
            url,
        )
    })
    .collect()
}

/// 取出每張卡片的標題與連結，依出現順序
fn extract_cards(html: &str) -> Vec<(String, String)> {
    html.split(r#"<div class="app-card">"#)
        .skip(1)
        .map(|chunk| {
            let title = between(chunk, r#"<h2 class="app-title">"#, "</h2>");
            let href = between(chunk, r#"<a class="launch-button" href=""#, "\"");
            (title, href)
        })
        .collect()
}

fn between(haystack: &str, start: &str, end: &str) -> String {
    let from = haystack.find(start).map(|i| i + start.len()).unwrap_or(0);
    let rest = &haystack[from..];
    rest[..rest.find(end).unwrap_or(rest.len())].to_string()
}

#[tokio::test]
async fn test_header_without_logo_file_uses_fallback_glyph() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let renderer = PageRenderer::new(&config_with_logo(Some("logo.png")), storage_in(&temp_dir));

    let header = renderer.render_header(Some("logo.png")).await;
    assert!(header.contains(r#"<span class="hub-logo-fallback" aria-hidden="true">🚀</span>"#));
    assert!(!header.contains("<img"));

    let no_path = renderer.render_header(None).await;
    assert!(no_path.contains("hub-logo-fallback"));
    Ok(())
}

#[tokio::test]
async fn test_header_with_corrupted_logo_uses_fallback_glyph() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("logo.png"), b"\x89PNG\r\n\x1a\ntruncated")?;

    let renderer = PageRenderer::new(&config_with_logo(Some("logo.png")), storage_in(&temp_dir));
    let header = renderer.render_header(Some("logo.png")).await;

    assert!(header.contains("hub-logo-fallback"));
    assert!(!header.contains("data:image/png;base64,"));
    Ok(())
}

#[tokio::test]
async fn test_header_embeds_valid_logo_as_png() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let image = image::RgbImage::from_pixel(4, 4, image::Rgb([255, 165, 0]));
    image.save(temp_dir.path().join("logo.jpg"))?;

    let renderer = PageRenderer::new(&config_with_logo(Some("logo.jpg")), storage_in(&temp_dir));
    let header = renderer.render_header(Some("logo.jpg")).await;

    let src = between(&header, r#"<img class="hub-logo" src=""#, "\"");
    let encoded = src.strip_prefix("data:image/png;base64,").unwrap_or_default();
    assert!(!encoded.is_empty());
    assert!(!header.contains("hub-logo-fallback"));
    Ok(())
}

#[tokio::test]
async fn test_page_with_logo_is_byte_stable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let image = image::RgbaImage::from_pixel(8, 8, image::Rgba([255, 215, 0, 255]));
    image.save(temp_dir.path().join("logo.png"))?;

    let config = config_with_logo(Some("logo.png"));
    let renderer = PageRenderer::new(&config, storage_in(&temp_dir));
    let first = renderer.render_page().await;
    let second = renderer.render_page().await;

    assert!(first.contains(r#"<img class="hub-logo" src="data:image/png;base64,"#));
    assert_eq!(first, second);

    // 重新載入同一檔案也得到相同輸出
    let fresh = PageRenderer::new(&config, storage_in(&temp_dir));
    assert_eq!(first, fresh.render_page().await);
    Ok(())
}

#[tokio::test]
async fn test_card_grid_preserves_order_and_targets() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let renderer = PageRenderer::new(&HubConfig::default(), storage_in(&temp_dir));
    let cards = scenario_cards();

    let grid = renderer.render_card_grid(&cards);
    let rendered = extract_cards(&grid);

    assert_eq!(rendered.len(), 4);
    let titles: Vec<&str> = rendered.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(
        titles,
        ["Dashboard", "Subrecipe Guide", "Asset Tagging", "BOM Explosion"]
    );
    for ((_, href), card) in rendered.iter().zip(&cards) {
        assert_eq!(href, &card.url);
        assert!(validate_url("href", href).is_ok());
    }
    assert_eq!(grid.matches(r#"target="_blank""#).count(), 4);
    assert_eq!(grid.matches(r#"<span class="status-badge">Active</span>"#).count(), 4);
    Ok(())
}

#[tokio::test]
async fn test_full_page_structure_and_idempotence() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let renderer = PageRenderer::new(&HubConfig::default(), storage_in(&temp_dir));

    let first = renderer.render_page().await;
    let second = renderer.render_page().await;
    assert_eq!(first, second);

    assert!(first.starts_with("<!DOCTYPE html>"));
    assert!(first.contains("<title>BTG Apps Hub</title>"));
    assert!(first.contains(r#"<style data-version="#));
    assert!(first.contains(".app-card {"));

    let header_at = first.find(r#"<header class="main-header">"#).unwrap();
    let grid_at = first.find(r#"<section class="card-grid""#).unwrap();
    let footer_at = first.find(r#"<footer class="custom-footer">"#).unwrap();
    assert!(header_at < grid_at && grid_at < footer_at);

    let titles: Vec<String> = extract_cards(&first).into_iter().map(|(t, _)| t).collect();
    assert_eq!(
        titles,
        [
            "Commission Calculator",
            "Subrecipe Guide",
            "Asset Tagging",
            "BOM Explosion"
        ]
    );
    assert!(first.contains("&copy; 2025 BTG Apps Hub. All rights reserved."));
    Ok(())
}

#[tokio::test]
async fn test_page_uses_configured_chrome() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = HubConfig::from_toml_str(
        r#"
[site]
title = "Kitchen Hub"
columns = 2
launch_label = "Open"
footer_note = "Powered by Streamlit"

[[cards]]
title = "Subrecipe Guide"
description = "Recipes & subrecipes."
icon = { emoji = "📋" }
url = "https://btg-subrecipe-guide.streamlit.app/"
"#,
    )?;

    let renderer = PageRenderer::new(&config, storage_in(&temp_dir));
    let page = renderer.render_page().await;

    assert!(page.contains("<span>Kitchen Hub</span>"));
    assert!(page.contains("--hub-columns: 2;"));
    assert!(page.contains(">Open</a>"));
    assert!(page.contains("Recipes &amp; subrecipes."));
    assert!(page.contains("<p>Powered by Streamlit</p>"));
    assert_eq!(extract_cards(&page).len(), 1);
    Ok(())
}
