//! Built-in hub contents used when no configuration file is supplied.

use crate::domain::model::{CardDescriptor, CardIcon, SiteChrome};
use std::time::Duration;

pub const DEFAULT_LOGO_CACHE_TTL: Duration = Duration::from_secs(300);
pub const DEFAULT_COLUMNS: usize = 4;

pub fn canonical_chrome() -> SiteChrome {
    SiteChrome {
        title: "BTG Apps Hub".to_string(),
        subtitle: "Your Complete Business Operations Toolkit".to_string(),
        page_icon: "🚀".to_string(),
        fallback_glyph: "🚀".to_string(),
        launch_label: "Launch App →".to_string(),
        columns: DEFAULT_COLUMNS,
        copyright_year: 2025,
        copyright_holder: "BTG Apps Hub".to_string(),
        footer_note: None,
    }
}

pub fn canonical_cards() -> Vec<CardDescriptor> {
    vec![
        CardDescriptor::new(
            "Commission Calculator",
            "Calculate commissions accurately and efficiently. Track sales performance and generate detailed commission reports for your team.",
            CardIcon::Emoji("💰".to_string()),
            "https://btg-commi.streamlit.app/",
        ),
        CardDescriptor::new(
            "Subrecipe Guide",
            "Manage recipes, ingredients, and subrecipes with ease. Perfect for food service operations and kitchen management systems.",
            CardIcon::Emoji("📋".to_string()),
            "https://btg-subrecipe-guide.streamlit.app/",
        ),
        CardDescriptor::new(
            "Asset Tagging",
            "Track and manage your business assets efficiently. Tag, categorize, and monitor all your physical and digital assets in one place.",
            CardIcon::Emoji("🏷️".to_string()),
            "https://btg-asset-tagging.streamlit.app/",
        ),
        CardDescriptor::new(
            "BOM Explosion",
            "Explode Bill of Materials to view component breakdowns. Analyze product structures and material requirements efficiently.",
            CardIcon::Emoji("💥".to_string()),
            "https://btg-bom-explosion.streamlit.app/",
        ),
    ]
}
