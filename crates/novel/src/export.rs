use lightnovel_common::{NovelError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Write the assembled novel to `output_path`
///
/// The text goes to a sibling temporary file first and is renamed into
/// place, so a failed export never leaves a partial novel behind. Missing
/// parent directories are created; an existing file is replaced.
pub async fn export_novel(document: &str, output_path: &Path) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            NovelError::file_system(format!(
                "Failed to create output directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(output_path);
    debug!("Writing {} bytes to {}", document.len(), temp_path.display());

    if let Err(e) = write_and_sync(&temp_path, document).await {
        if fs::remove_file(&temp_path).await.is_ok() {
            warn!("Removed partial file {}", temp_path.display());
        }
        return Err(NovelError::file_system(format!(
            "Failed to write {}: {}",
            temp_path.display(),
            e
        )));
    }

    if let Err(e) = fs::rename(&temp_path, output_path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(NovelError::file_system(format!(
            "Failed to move novel into place at {}: {}",
            output_path.display(),
            e
        )));
    }

    info!("Novel saved: {}", output_path.display());
    Ok(output_path.to_path_buf())
}

async fn write_and_sync(path: &Path, data: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(data.as_bytes()).await?;
    file.sync_all().await?;
    Ok(())
}

/// Temporary sibling of `path`, e.g. `novel.txt` -> `novel.txt.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_export_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("generated_novel.txt");

        let written = export_novel("Title: X\n", &path).await.unwrap();

        assert_eq!(written, path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Title: X\n");
        assert!(!temp_path_for(&path).exists());
    }

    #[tokio::test]
    async fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated_novel.txt");
        std::fs::write(&path, "old novel, much longer than the new one").unwrap();

        export_novel("new", &path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[tokio::test]
    async fn test_export_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = export_novel("text", &blocker.join("novel.txt"))
            .await
            .unwrap_err();

        assert!(matches!(err, NovelError::FileSystem(_)), "{err:?}");
    }

    #[test]
    fn test_temp_path_keeps_extension() {
        assert_eq!(
            temp_path_for(Path::new("out/novel.txt")),
            PathBuf::from("out/novel.txt.tmp")
        );
    }
}
