use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// The editable text buffer and the file it came from, if any.
///
/// Load and save always move the whole buffer; the document is plain
/// text with no format of its own.
#[derive(Debug, Default)]
pub struct Document {
    text: String,
    path: Option<PathBuf>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self {
            text,
            path: Some(path.to_path_buf()),
        })
    }

    /// Replaces the buffer with the contents of `path`.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        *self = Self::load(path)?;
        Ok(())
    }

    /// Writes the buffer back to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        let path = self
            .path
            .as_deref()
            .context("no file associated with this document")?;
        fs::write(path, &self.text)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Writes the buffer to `path` and adopts it as the document's file.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, &self.text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
