use crate::ports::outbound::OutputPresenter;
use crate::shared::error::CatalogError;
use crate::shared::file_guard::ensure_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the catalog to a file
///
/// This adapter implements the OutputPresenter port for file output. The
/// content goes to a sibling temporary file first and is renamed into place,
/// so an interrupted run never leaves a truncated catalog behind for the next
/// run to read.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> CatalogError {
        CatalogError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(self
                    .write_error(format!(
                        "Parent directory does not exist: {}",
                        parent.display()
                    ))
                    .into());
            }
        }
        Ok(())
    }

    fn temporary_path(&self) -> PathBuf {
        let mut name = self
            .output_path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.output_path.with_file_name(name)
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        ensure_not_symlink(&self.output_path).map_err(|e| self.write_error(e.to_string()))?;

        let temporary = self.temporary_path();
        ensure_not_symlink(&temporary).map_err(|e| self.write_error(e.to_string()))?;
        fs::write(&temporary, content).map_err(|e| self.write_error(e.to_string()))?;
        fs::rename(&temporary, &self.output_path).map_err(|e| {
            let _ = fs::remove_file(&temporary);
            self.write_error(e.to_string())
        })?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
