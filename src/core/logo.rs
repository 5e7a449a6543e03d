use crate::domain::model::EncodedLogo;
use crate::domain::ports::Storage;
use crate::utils::error::HubError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageOutputFormat;
use std::io::Cursor;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use thiserror::Error;

/// logo 載入失敗；在 header 渲染時會被吸收並改用替代符號
#[derive(Error, Debug)]
pub enum LogoError {
    #[error("logo file not found: {path}")]
    NotFound { path: String },

    #[error("logo file unreadable: {path} ({reason})")]
    Unreadable { path: String, reason: String },

    #[error("logo file is empty: {path}")]
    Empty { path: String },

    #[error("logo file could not be decoded: {path}")]
    Undecodable {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("logo could not be re-encoded as PNG: {path}")]
    Encode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// 讀取 logo 檔案並轉成可內嵌的 base64 PNG
pub async fn load_logo<S: Storage>(storage: &S, path: &str) -> Result<EncodedLogo, LogoError> {
    let bytes = storage.read_file(path).await.map_err(|e| match e {
        HubError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
            LogoError::NotFound {
                path: path.to_string(),
            }
        }
        other => LogoError::Unreadable {
            path: path.to_string(),
            reason: other.to_string(),
        },
    })?;

    encode_logo(path, &bytes)
}

/// 解碼任意點陣圖格式後統一重新編碼為 PNG
pub fn encode_logo(path: &str, bytes: &[u8]) -> Result<EncodedLogo, LogoError> {
    if bytes.is_empty() {
        return Err(LogoError::Empty {
            path: path.to_string(),
        });
    }

    let image = image::load_from_memory(bytes).map_err(|source| LogoError::Undecodable {
        path: path.to_string(),
        source,
    })?;

    let mut png = Cursor::new(Vec::new());
    image
        .write_to(&mut png, ImageOutputFormat::Png)
        .map_err(|source| LogoError::Encode {
            path: path.to_string(),
            source,
        })?;

    tracing::debug!(
        "🖼️ Encoded logo {} ({}x{}, {} bytes)",
        path,
        image.width(),
        image.height(),
        png.get_ref().len()
    );

    Ok(EncodedLogo {
        mime: "image/png",
        data: STANDARD.encode(png.into_inner()),
    })
}

struct CachedLogo {
    path: String,
    loaded_at: Instant,
    logo: Option<EncodedLogo>,
}

/// Process-wide memo of the last logo load, failures included.
pub struct LogoCache {
    ttl: Duration,
    entry: Mutex<Option<CachedLogo>>,
}

impl LogoCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// 在 TTL 內直接回傳快取結果，過期或路徑不同時重新讀取
    pub async fn get_or_load<S: Storage>(&self, storage: &S, path: &str) -> Option<EncodedLogo> {
        if let Some(cached) = self.lookup(path) {
            tracing::debug!("Logo cache hit for {}", path);
            return cached;
        }

        let logo = match load_logo(storage, path).await {
            Ok(logo) => Some(logo),
            Err(LogoError::NotFound { path }) => {
                tracing::debug!("Logo {} not found, using fallback glyph", path);
                None
            }
            Err(e) => {
                tracing::warn!("⚠️ {}, using fallback glyph", e);
                None
            }
        };

        self.store(path, logo.clone());
        logo
    }

    pub fn invalidate(&self) {
        if let Ok(mut entry) = self.entry.lock() {
            *entry = None;
        }
    }

    fn lookup(&self, path: &str) -> Option<Option<EncodedLogo>> {
        if self.ttl.is_zero() {
            return None;
        }

        let entry = self.entry.lock().ok()?;
        let cached = entry.as_ref()?;
        if cached.path != path || cached.loaded_at.elapsed() >= self.ttl {
            return None;
        }
        Some(cached.logo.clone())
    }

    fn store(&self, path: &str, logo: Option<EncodedLogo>) {
        if self.ttl.is_zero() {
            return;
        }

        if let Ok(mut entry) = self.entry.lock() {
            *entry = Some(CachedLogo {
                path: path.to_string(),
                loaded_at: Instant::now(),
                logo,
            });
        }
    }
}
