// src/images.rs
//
// Directory-backed image store. The file system is the source of truth:
// no database record exists for uploads, listings enumerate the directory
// at request time.
use std::path::Path;

use tokio::fs;
use uuid::Uuid;

use crate::dtos::image::{ImageEntry, UploadResponse};
use crate::error::AppError;

/// Enumerate the images directory, creating it if absent.
/// Flat listing, no filtering by extension or type.
pub async fn list_images(dir: &Path) -> Result<Vec<ImageEntry>, AppError> {
    fs::create_dir_all(dir).await?;

    let mut entries = fs::read_dir(dir).await?;
    let mut images = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        images.push(ImageEntry {
            url: format!("/images/{file_name}"),
            file_name,
        });
    }

    Ok(images)
}

/// Write uploaded bytes under a generated unique name, preserving the
/// original extension. Uniqueness of the base name is what prevents
/// overwrites; existing files are never checked or touched.
pub async fn save_upload(
    dir: &Path,
    bytes: &[u8],
    original_name: &str,
) -> Result<UploadResponse, AppError> {
    if bytes.is_empty() {
        return Err(AppError::bad_request("No file uploaded."));
    }

    fs::create_dir_all(dir).await?;

    let ext = Path::new(original_name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let file_name = format!("{}{}", Uuid::new_v4(), ext);

    fs::write(dir.join(&file_name), bytes).await?;

    Ok(UploadResponse {
        url: format!("/images/{file_name}"),
        file_name,
        size: bytes.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("catalog-images-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn list_creates_missing_directory_and_returns_empty() {
        let dir = scratch_dir();

        let images = list_images(&dir).await.unwrap();
        assert!(images.is_empty());
        assert!(dir.is_dir());

        fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn empty_upload_is_rejected_and_writes_nothing() {
        let dir = scratch_dir();

        let err = save_upload(&dir, &[], "photo.png").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(list_images(&dir).await.unwrap().is_empty());

        fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn upload_writes_one_file_and_list_sees_it() {
        let dir = scratch_dir();

        let saved = save_upload(&dir, b"png bytes", "photo.png").await.unwrap();
        assert_eq!(saved.size, 9);
        assert!(saved.file_name.ends_with(".png"));
        assert_eq!(saved.url, format!("/images/{}", saved.file_name));

        let stored = fs::read(dir.join(&saved.file_name)).await.unwrap();
        assert_eq!(stored, b"png bytes");

        let images = list_images(&dir).await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].file_name, saved.file_name);

        fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn extensionless_uploads_keep_the_bare_generated_name() {
        let dir = scratch_dir();

        let saved = save_upload(&dir, b"data", "README").await.unwrap();
        assert!(!saved.file_name.contains('.'));

        fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn repeated_uploads_never_collide() {
        let dir = scratch_dir();

        let a = save_upload(&dir, b"a", "x.jpg").await.unwrap();
        let b = save_upload(&dir, b"b", "x.jpg").await.unwrap();
        assert_ne!(a.file_name, b.file_name);
        assert_eq!(list_images(&dir).await.unwrap().len(), 2);

        fs::remove_dir_all(&dir).await.unwrap();
    }
}
