use crate::core::catalog;
use crate::domain::model::{CardDescriptor, SiteChrome};
use crate::utils::error::{HubError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubConfig {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logo: LogoConfig,
    pub cards: Option<Vec<CardDescriptor>>,
}

/// 未設定的欄位沿用內建目錄的文案
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub page_icon: Option<String>,
    pub fallback_glyph: Option<String>,
    pub launch_label: Option<String>,
    pub columns: Option<usize>,
    pub copyright_year: Option<u16>,
    pub copyright_holder: Option<String>,
    pub footer_note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoConfig {
    pub path: Option<String>,
    pub cache_ttl_seconds: Option<u64>,
}

impl HubConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HubError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LOGO_PATH})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HubError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(cards) = &self.cards {
            validation::validate_positive_number("cards", cards.len(), 1)?;

            for (i, card) in cards.iter().enumerate() {
                validation::validate_non_empty_string(&format!("cards[{}].title", i), &card.title)?;
                validation::validate_non_empty_string(
                    &format!("cards[{}].description", i),
                    &card.description,
                )?;
                validation::validate_url(&format!("cards[{}].url", i), &card.url)?;
            }
        }

        if let Some(columns) = self.site.columns {
            validation::validate_range("site.columns", columns, 1, 6)?;
        }

        if let Some(title) = &self.site.title {
            validation::validate_non_empty_string("site.title", title)?;
        }

        if let Some(path) = &self.logo.path {
            validation::validate_path("logo.path", path)?;
        }

        Ok(())
    }

    /// 取得頁面文案，缺少的欄位以內建值補上
    pub fn site_chrome(&self) -> SiteChrome {
        let defaults = catalog::canonical_chrome();
        let site = &self.site;

        SiteChrome {
            title: site.title.clone().unwrap_or(defaults.title),
            subtitle: site.subtitle.clone().unwrap_or(defaults.subtitle),
            page_icon: site.page_icon.clone().unwrap_or(defaults.page_icon),
            fallback_glyph: site.fallback_glyph.clone().unwrap_or(defaults.fallback_glyph),
            launch_label: site.launch_label.clone().unwrap_or(defaults.launch_label),
            columns: site.columns.unwrap_or(defaults.columns),
            copyright_year: site.copyright_year.unwrap_or(defaults.copyright_year),
            copyright_holder: site
                .copyright_holder
                .clone()
                .unwrap_or(defaults.copyright_holder),
            footer_note: site.footer_note.clone().or(defaults.footer_note),
        }
    }

    /// 取得卡片清單，未設定時使用內建的四張卡片
    pub fn cards(&self) -> Vec<CardDescriptor> {
        self.cards.clone().unwrap_or_else(catalog::canonical_cards)
    }

    pub fn logo_path(&self) -> Option<&str> {
        self.logo.path.as_deref()
    }

    pub fn logo_cache_ttl(&self) -> Duration {
        self.logo
            .cache_ttl_seconds
            .map(Duration::from_secs)
            .unwrap_or(catalog::DEFAULT_LOGO_CACHE_TTL)
    }
}

impl Validate for HubConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
