use crate::assets::{STYLESHEET, STYLESHEET_VERSION};
use crate::config::toml_config::HubConfig;
use crate::core::logo::LogoCache;
use crate::domain::model::{CardDescriptor, CardIcon, EncodedLogo, SiteChrome};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::Write;
use url::form_urlencoded;

/// 組裝 hub 頁面：header、卡片網格、footer
pub struct PageRenderer<S: Storage> {
    chrome: SiteChrome,
    cards: Vec<CardDescriptor>,
    logo_path: Option<String>,
    storage: S,
    logo_cache: LogoCache,
}

impl<S: Storage> PageRenderer<S> {
    pub fn new(config: &HubConfig, storage: S) -> Self {
        Self {
            chrome: config.site_chrome(),
            cards: config.cards(),
            logo_path: config.logo_path().map(str::to_string),
            storage,
            logo_cache: LogoCache::new(config.logo_cache_ttl()),
        }
    }

    pub fn chrome(&self) -> &SiteChrome {
        &self.chrome
    }

    pub fn cards(&self) -> &[CardDescriptor] {
        &self.cards
    }

    pub fn logo_path(&self) -> Option<&str> {
        self.logo_path.as_deref()
    }

    /// Never fails: any logo problem degrades to the fallback glyph.
    pub async fn render_header(&self, logo_path: Option<&str>) -> String {
        let logo = match logo_path {
            Some(path) => self.logo_cache.get_or_load(&self.storage, path).await,
            None => None,
        };
        header_markup(&self.chrome, logo.as_ref())
    }

    pub fn render_card_grid(&self, cards: &[CardDescriptor]) -> String {
        card_grid_markup(&self.chrome, cards)
    }

    pub fn render_footer(&self) -> String {
        footer_markup(&self.chrome)
    }

    pub async fn render_page(&self) -> String {
        let header = self.render_header(self.logo_path()).await;
        let grid = self.render_card_grid(&self.cards);
        let footer = self.render_footer();

        tracing::debug!("Rendered page with {} cards", self.cards.len());
        document_markup(&self.chrome, &header, &grid, &footer)
    }

    /// 將整頁輸出到 writer，只寫入文件本身
    pub async fn write_page<W: Write>(&self, out: &mut W) -> Result<()> {
        let page = self.render_page().await;
        out.write_all(page.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

pub fn header_markup(chrome: &SiteChrome, logo: Option<&EncodedLogo>) -> String {
    let logo_html = match logo {
        Some(logo) => format!(
            r#"<img class="hub-logo" src="{}" alt="{} logo">"#,
            logo.data_uri(),
            escape_html(&chrome.title)
        ),
        None => format!(
            r#"<span class="hub-logo-fallback" aria-hidden="true">{}</span>"#,
            escape_html(&chrome.fallback_glyph)
        ),
    };

    format!(
        r#"<header class="main-header">
    <h1 class="main-title">{}<span>{}</span></h1>
    <p class="main-subtitle">{}</p>
</header>
"#,
        logo_html,
        escape_html(&chrome.title),
        escape_html(&chrome.subtitle)
    )
}

/// 依輸入順序輸出每張卡片
pub fn card_grid_markup(chrome: &SiteChrome, cards: &[CardDescriptor]) -> String {
    let mut html = format!(
        "<section class=\"card-grid\" style=\"--hub-columns: {};\">\n",
        chrome.columns
    );

    for card in cards {
        html.push_str(&card_markup(card, &chrome.launch_label));
    }

    html.push_str("</section>\n");
    html
}

fn card_markup(card: &CardDescriptor, launch_label: &str) -> String {
    // SVG icons come from trusted configuration and are inserted verbatim
    let icon = match &card.icon {
        CardIcon::Emoji(glyph) => escape_html(glyph),
        CardIcon::Svg(markup) => markup.clone(),
    };

    format!(
        r#"    <div class="card-cell">
        <div class="app-card">
            <div class="app-icon">{icon}</div>
            <h2 class="app-title">{title}</h2>
            <p class="app-description">{description}</p>
            <span class="status-badge">{status}</span>
        </div>
        <a class="launch-button" href="{url}" target="_blank" rel="noopener noreferrer">{label}</a>
    </div>
"#,
        icon = icon,
        title = escape_html(&card.title),
        description = escape_html(&card.description),
        status = card.status.label(),
        url = escape_html(&card.url),
        label = escape_html(launch_label),
    )
}

pub fn footer_markup(chrome: &SiteChrome) -> String {
    let mut html = format!(
        "<footer class=\"custom-footer\">\n    <p>&copy; {} {}. All rights reserved.</p>\n",
        chrome.copyright_year,
        escape_html(&chrome.copyright_holder)
    );

    if let Some(note) = &chrome.footer_note {
        html.push_str(&format!("    <p>{}</p>\n", escape_html(note)));
    }

    html.push_str("</footer>\n");
    html
}

fn document_markup(chrome: &SiteChrome, header: &str, grid: &str, footer: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{icon}</text></svg>">
<style data-version="{version}">
{stylesheet}
</style>
</head>
<body>
<main class="block-container">
{header}{grid}{footer}</main>
</body>
</html>
"#,
        title = escape_html(&chrome.title),
        icon = percent_encode_glyph(&chrome.page_icon),
        version = STYLESHEET_VERSION,
        stylesheet = STYLESHEET,
        header = header,
        grid = grid,
        footer = footer,
    )
}

/// Glyphs inside the favicon data URI must not leak `#`, `%` or quotes.
fn percent_encode_glyph(glyph: &str) -> String {
    // byte_serialize emits `+` only for spaces
    form_urlencoded::byte_serialize(glyph.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
