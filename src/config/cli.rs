use crate::core::{Notification, Storage};
use crate::utils::error::{Result, SantaError};
use std::fs;
use std::path::{Path, PathBuf};

/// 寫入本機目錄的通知檔存儲
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn ensure_base_dir(&self) -> Result<&Path> {
        let base = Path::new(&self.base_path);
        fs::create_dir_all(base).map_err(|source| SantaError::OutputError {
            path: base.to_path_buf(),
            source,
        })?;
        Ok(base)
    }
}

fn output_error(path: PathBuf) -> impl FnOnce(std::io::Error) -> SantaError {
    move |source| SantaError::OutputError { path, source }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.ensure_base_dir()?.join(path);
        fs::write(&full_path, data).map_err(output_error(full_path))?;
        Ok(())
    }

    /// Stages every file in a temporary directory inside the output directory
    /// and only moves them into place once all of them were written.
    fn write_all(&self, notifications: &[Notification]) -> Result<usize> {
        let base = self.ensure_base_dir()?;
        let staging = tempfile::Builder::new()
            .prefix(".staging-")
            .tempdir_in(base)
            .map_err(output_error(base.to_path_buf()))?;

        for note in notifications {
            let staged = staging.path().join(&note.file_name);
            fs::write(&staged, note.message.as_bytes()).map_err(output_error(staged))?;
        }

        for note in notifications {
            let staged = staging.path().join(&note.file_name);
            let target = base.join(&note.file_name);
            fs::rename(&staged, &target).map_err(output_error(target))?;
        }

        tracing::debug!("Committed {} staged files", notifications.len());
        Ok(notifications.len())
    }

    fn location(&self) -> &str {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Participant;
    use tempfile::TempDir;

    fn notes(pairs: &[(&str, &str)]) -> Vec<Notification> {
        pairs
            .iter()
            .map(|(g, r)| Notification::new(&Participant::from(*g), &Participant::from(*r)))
            .collect()
    }

    #[test]
    fn test_write_all_creates_directory_and_files() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("nested").join("gift_recipients");
        let storage = LocalStorage::new(out.to_str().unwrap().to_string());

        let written = storage
            .write_all(&notes(&[("A", "B"), ("B", "A")]))
            .unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            fs::read_to_string(out.join("A_gift_recipient.txt")).unwrap(),
            "Hello, A. You will be giving a gift to B.\n"
        );
        // staging directory is cleaned up
        assert_eq!(fs::read_dir(&out).unwrap().count(), 2);
    }

    #[test]
    fn test_write_all_is_idempotent_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_all(&notes(&[("A", "B"), ("B", "A")])).unwrap();
        storage.write_all(&notes(&[("A", "C")])).unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("A_gift_recipient.txt")).unwrap(),
            "Hello, A. You will be giving a gift to C.\n"
        );
    }

    #[test]
    fn test_write_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("note.txt", b"hi\n").unwrap();
        storage.write_file("note.txt", b"bye\n").unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("note.txt")).unwrap(),
            "bye\n"
        );
    }
}
