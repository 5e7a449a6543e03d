//! Static stylesheet compiled into the binary.

/// Bump whenever `hub.css` changes so cached copies are refreshed.
pub const STYLESHEET_VERSION: &str = "1.0.0";

pub const STYLESHEET: &str = include_str!("hub.css");
