use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// CsvConnection manages the data directory layout shared by all file repositories
#[derive(Clone, Debug)]
pub struct CsvConnection {
    base_directory: Arc<PathBuf>,
}

impl CsvConnection {
    /// Create a new CSV connection rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: Arc::new(base_path),
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Directory holding one sub-directory per user
    pub fn users_directory(&self) -> PathBuf {
        self.base_directory.join("users")
    }

    /// Directory for a single user's files
    pub fn user_directory(&self, username: &str) -> PathBuf {
        self.users_directory().join(username)
    }

    pub fn user_yaml_path(&self, username: &str) -> PathBuf {
        self.user_directory(username).join("user.yaml")
    }

    pub fn activities_file_path(&self, username: &str) -> PathBuf {
        self.user_directory(username).join("activities.csv")
    }

    pub fn sessions_path(&self) -> PathBuf {
        self.base_directory.join("sessions.yaml")
    }

    /// Write `contents` to `path` through a temp file and rename
    pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        Ok(())
    }
}
