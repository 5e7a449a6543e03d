use serde::{Deserialize, Serialize};
use std::fmt;

/// 卡片圖示：emoji 或內嵌的 SVG 標記
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardIcon {
    Emoji(String),
    Svg(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    #[default]
    Active,
}

impl CardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CardStatus::Active => "Active",
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 一張應用程式卡片，連結到外部部署的應用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescriptor {
    pub title: String,
    pub description: String,
    pub icon: CardIcon,
    pub url: String,
    #[serde(default)]
    pub status: CardStatus,
}

impl CardDescriptor {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: CardIcon,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon,
            url: url.into(),
            status: CardStatus::Active,
        }
    }
}

/// 頁面層級的文案與版面設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteChrome {
    pub title: String,
    pub subtitle: String,
    pub page_icon: String,
    pub fallback_glyph: String,
    pub launch_label: String,
    pub columns: usize,
    pub copyright_year: u16,
    pub copyright_holder: String,
    pub footer_note: Option<String>,
}

/// 已編碼、可直接內嵌於 HTML 的 logo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedLogo {
    pub mime: &'static str,
    pub data: String,
}

impl EncodedLogo {
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data)
    }
}
