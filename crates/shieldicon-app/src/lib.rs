//! Batch driver for the shield icon set.
//!
//! Renders each configured size, encodes it as PNG and writes
//! `<output_dir>/icon-<size>.png`, overwriting earlier runs.

use shieldicon_render::{RenderError, encode_png, render};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sizes written by a default run.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Directory written by a default run, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Batch errors.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

/// Where the icons go and which sizes are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

impl BatchConfig {
    /// Default sizes written into `output_dir`.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Path of the icon file for `size`.
    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(icon_file_name(size))
    }
}

/// File name of the icon for `size`.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}.png", size)
}

/// Render and write every configured size. Stops at the first error.
pub fn run_batch(config: &BatchConfig) -> BatchResult<Vec<PathBuf>> {
    fs::create_dir_all(&config.output_dir).map_err(|source| BatchError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let path = config.icon_path(size);
        write_icon(size, &path)?;
        println!("Created {}", path.display());
        written.push(path);
    }
    Ok(written)
}

fn write_icon(size: u32, path: &Path) -> BatchResult<()> {
    let canvas = render(size).map_err(RenderError::from)?;
    let png_data = encode_png(&canvas)?;
    fs::write(path, &png_data).map_err(|source| BatchError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {} ({} bytes)", path.display(), png_data.len());
    Ok(())
}
