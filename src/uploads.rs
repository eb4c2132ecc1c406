//! On-disk storage for uploaded images.
//!
//! Files live under `<root>/assets/<subdir>/` and are served by the static
//! `/public` route, so stored URLs always start with `/public/assets/`.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

const PUBLIC_PREFIX: &str = "/public/";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("file too large (max 5MB)")]
    TooLarge,
    #[error("file type not allowed (allowed: jpg, jpeg, png, gif, webp)")]
    ExtensionNotAllowed,
    #[error("failed to save file")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check the upload, write it, and return its public URL.
    pub async fn store(
        &self,
        subdir: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, UploadError> {
        check_size(bytes.len())?;
        check_extension(filename)?;

        let dir = self.root.join("assets").join(subdir);
        tokio::fs::create_dir_all(&dir).await?;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let name = format!("{nanos}_{}", sanitize_filename(filename));
        tokio::fs::write(dir.join(&name), bytes).await?;

        tracing::info!(subdir, file = %name, size = bytes.len(), "stored upload");
        Ok(format!("{PUBLIC_PREFIX}assets/{subdir}/{name}"))
    }

    /// Delete a file previously returned by [`FileStore::store`].
    ///
    /// URLs outside `/public/assets/` and files that are already gone are
    /// ignored.
    pub async fn remove(&self, url: &str) -> Result<(), UploadError> {
        let Some(path) = self.resolve(url) else {
            return Ok(());
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn resolve(&self, url: &str) -> Option<PathBuf> {
        let relative = url.strip_prefix(PUBLIC_PREFIX)?;
        if !relative.starts_with("assets/") || relative.split('/').any(|p| p == "..") {
            return None;
        }
        Some(self.root.join(relative))
    }
}

pub fn check_size(len: usize) -> Result<(), UploadError> {
    if len > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

pub fn check_extension(filename: &str) -> Result<(), UploadError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(UploadError::ExtensionNotAllowed)
    }
}

/// Replace everything but ASCII alphanumerics, `_` and `-` in the stem.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let (stem, ext) = match base.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (base, None),
    };
    let stem: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    match ext {
        Some(ext) => format!("{stem}.{}", ext.to_ascii_lowercase()),
        None => stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("photo.jpg", "photo.jpg")]
    #[case("my photo (1).PNG", "my_photo__1_.png")]
    #[case("../../etc/passwd.gif", "passwd.gif")]
    #[case("résumé.webp", "r_sum_.webp")]
    fn sanitizes_stem(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_filename(input), expected);
    }

    #[rstest]
    #[case("a.jpg")]
    #[case("a.JPEG")]
    #[case("a.png")]
    #[case("a.gif")]
    #[case("a.webp")]
    fn accepts_images(#[case] name: &str) {
        assert!(check_extension(name).is_ok());
    }

    #[rstest]
    #[case("a.pdf")]
    #[case("a.svg")]
    #[case("noext")]
    fn rejects_other_types(#[case] name: &str) {
        assert!(matches!(
            check_extension(name),
            Err(UploadError::ExtensionNotAllowed)
        ));
    }

    #[tokio::test]
    async fn store_writes_under_assets() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let url = store.store("projects", "shot.png", b"png").await.unwrap();

        assert!(url.starts_with("/public/assets/projects/"));
        assert!(url.ends_with("_shot.png"));
        let on_disk = dir.path().join(url.trim_start_matches("/public/"));
        assert_eq!(std::fs::read(on_disk).unwrap(), b"png");
    }

    #[tokio::test]
    async fn oversized_upload_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let big = vec![0u8; MAX_UPLOAD_BYTES + 1];

        let err = store.store("profile", "big.jpg", &big).await.unwrap_err();
        assert!(matches!(err, UploadError::TooLarge));
        assert!(!dir.path().join("assets").exists());
    }

    #[tokio::test]
    async fn disallowed_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let err = store.store("profile", "cv.pdf", b"%PDF").await.unwrap_err();
        assert!(matches!(err, UploadError::ExtensionNotAllowed));
        assert!(!dir.path().join("assets").exists());
    }

    #[tokio::test]
    async fn remove_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let url = store.store("publications", "p.jpg", b"x").await.unwrap();

        store.remove(&url).await.unwrap();
        store.remove(&url).await.unwrap();
        store.remove("https://example.com/x.jpg").await.unwrap();
    }
}
