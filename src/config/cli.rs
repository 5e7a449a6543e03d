use crate::core::Storage;
use crate::utils::error::Result;
use std::path::Path;
use tokio::fs;

/// 以本機目錄為根的檔案存取
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read_nested_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_string_lossy().to_string());

        storage.write_file("site/index.html", b"<html></html>").await.unwrap();
        let data = storage.read_file("site/index.html").await.unwrap();
        assert_eq!(data, b"<html></html>");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_string_lossy().to_string());

        match storage.read_file("logo.png").await {
            Err(crate::utils::error::HubError::IoError(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected not found, got {:?}", other.map(|d| d.len())),
        }
    }
}
