//! Downloadable study material.
//!
//! The core only displays an `AssetDescriptor` and forwards download
//! requests; moving bytes is the provider's job.

use crate::error::{Result, WidgetError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_ASSET_FILE: &str = "Safety_Protocol_v2.pdf";
pub const DEFAULT_SIZE_LABEL: &str = "1.4 MB";

/// What the Study Material tab shows about the downloadable file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetDescriptor {
    pub filename: String,
    pub size_label: String,
}

impl Default for AssetDescriptor {
    fn default() -> Self {
        Self {
            filename: DEFAULT_ASSET_FILE.to_string(),
            size_label: DEFAULT_SIZE_LABEL.to_string(),
        }
    }
}

/// Supplies the asset descriptor and fulfils download requests.
pub trait AssetProvider {
    fn descriptor(&self) -> Result<AssetDescriptor>;

    /// Deliver the asset and return where it ended up.
    fn fulfill(&self, descriptor: &AssetDescriptor) -> Result<PathBuf>;
}

impl<A: AssetProvider + ?Sized> AssetProvider for Box<A> {
    fn descriptor(&self) -> Result<AssetDescriptor> {
        (**self).descriptor()
    }

    fn fulfill(&self, descriptor: &AssetDescriptor) -> Result<PathBuf> {
        (**self).fulfill(descriptor)
    }
}

/// Fixed descriptor with no file behind it; fulfilment just names the file.
#[derive(Debug, Clone, Default)]
pub struct StaticAssetProvider {
    descriptor: AssetDescriptor,
}

impl StaticAssetProvider {
    pub fn new(descriptor: AssetDescriptor) -> Self {
        Self { descriptor }
    }
}

impl AssetProvider for StaticAssetProvider {
    fn descriptor(&self) -> Result<AssetDescriptor> {
        Ok(self.descriptor.clone())
    }

    fn fulfill(&self, descriptor: &AssetDescriptor) -> Result<PathBuf> {
        Ok(PathBuf::from(&descriptor.filename))
    }
}

/// Serves a real file from `source_dir`, copying it into `download_dir`.
#[derive(Debug, Clone)]
pub struct DirectoryAssetProvider {
    source_dir: PathBuf,
    download_dir: PathBuf,
    filename: String,
}

impl DirectoryAssetProvider {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        download_dir: impl Into<PathBuf>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            download_dir: download_dir.into(),
            filename: filename.into(),
        }
    }

    fn source_path(&self) -> PathBuf {
        self.source_dir.join(&self.filename)
    }
}

impl AssetProvider for DirectoryAssetProvider {
    fn descriptor(&self) -> Result<AssetDescriptor> {
        let path = self.source_path();
        let metadata = fs::metadata(&path).map_err(|e| asset_error(&path, e))?;

        Ok(AssetDescriptor {
            filename: self.filename.clone(),
            size_label: format_size(metadata.len()),
        })
    }

    fn fulfill(&self, descriptor: &AssetDescriptor) -> Result<PathBuf> {
        let source = self.source_dir.join(&descriptor.filename);
        let target = self.download_dir.join(&descriptor.filename);

        fs::create_dir_all(&self.download_dir).map_err(|e| asset_error(&self.download_dir, e))?;

        // Copying a file onto itself truncates it
        let canonical_source = fs::canonicalize(&source).map_err(|e| asset_error(&source, e))?;
        if fs::canonicalize(&target).ok().as_ref() == Some(&canonical_source) {
            debug!("{} is already in {}", descriptor.filename, self.download_dir.display());
            return Ok(target);
        }

        let bytes = fs::copy(&source, &target).map_err(|e| asset_error(&source, e))?;

        info!("Delivered {} ({} bytes) to {}", descriptor.filename, bytes, target.display());
        Ok(target)
    }
}

fn asset_error(path: &Path, err: std::io::Error) -> WidgetError {
    WidgetError::Asset(format!("{}: {}", path.display(), err))
}

/// Human-readable size, one decimal place above a kilobyte.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== Size Label Tests ====================

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(512), "512 B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(1536), "1.5 KB");
    }

    #[test]
    fn test_format_size_megabytes() {
        assert_eq!(format_size(1_468_006), "1.4 MB");
    }

    // ==================== Static Provider Tests ====================

    #[test]
    fn test_static_provider_default_descriptor() {
        let descriptor = StaticAssetProvider::default().descriptor().unwrap();
        assert_eq!(descriptor.filename, "Safety_Protocol_v2.pdf");
        assert_eq!(descriptor.size_label, "1.4 MB");
    }

    #[test]
    fn test_static_provider_fulfill_names_file() {
        let provider = StaticAssetProvider::default();
        let descriptor = provider.descriptor().unwrap();
        assert_eq!(
            provider.fulfill(&descriptor).unwrap(),
            PathBuf::from("Safety_Protocol_v2.pdf")
        );
    }

    // ==================== Directory Provider Tests ====================

    #[test]
    fn test_directory_provider_reads_size_and_copies() {
        let source = TempDir::new().expect("Failed to create temp dir");
        let downloads = TempDir::new().expect("Failed to create temp dir");
        fs::write(source.path().join("protocol.pdf"), vec![0u8; 2048]).unwrap();

        let provider = DirectoryAssetProvider::new(
            source.path(),
            downloads.path().join("out"),
            "protocol.pdf",
        );
        let descriptor = provider.descriptor().unwrap();
        assert_eq!(descriptor.size_label, "2.0 KB");

        let delivered = provider.fulfill(&descriptor).unwrap();
        assert_eq!(delivered, downloads.path().join("out").join("protocol.pdf"));
        assert_eq!(fs::read(delivered).unwrap().len(), 2048);
    }

    #[test]
    fn test_directory_provider_same_directory_keeps_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("a.pdf"), vec![1u8; 4096]).unwrap();

        let provider = DirectoryAssetProvider::new(dir.path(), dir.path(), "a.pdf");
        let descriptor = provider.descriptor().unwrap();
        let delivered = provider.fulfill(&descriptor).unwrap();

        assert_eq!(delivered, dir.path().join("a.pdf"));
        assert_eq!(fs::metadata(&delivered).unwrap().len(), 4096);
        assert_eq!(provider.descriptor().unwrap().size_label, "4.0 KB");
    }

    #[test]
    fn test_directory_provider_same_directory_via_other_path() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.pdf"), vec![1u8; 4096]).unwrap();

        let provider =
            DirectoryAssetProvider::new(dir.path(), dir.path().join("sub").join(".."), "a.pdf");
        let descriptor = provider.descriptor().unwrap();
        provider.fulfill(&descriptor).unwrap();

        assert_eq!(fs::metadata(dir.path().join("a.pdf")).unwrap().len(), 4096);
    }

    #[test]
    fn test_directory_provider_missing_file() {
        let source = TempDir::new().expect("Failed to create temp dir");
        let provider = DirectoryAssetProvider::new(source.path(), source.path(), "missing.pdf");

        let err = provider.descriptor().unwrap_err();
        assert!(matches!(err, WidgetError::Asset(msg) if msg.contains("missing.pdf")));
    }
}
