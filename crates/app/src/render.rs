//! Render icons and write them to disk

use std::path::PathBuf;

use thiserror::Error;
use tomato_config::IconConfig;
use tomato_encoder::EncodeError;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of rendering every configured size
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(u32, RenderError)>,
}

impl RenderSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Compose and encode one icon
pub fn render_icon(size: u32) -> Result<Vec<u8>, EncodeError> {
    let canvas = raster::compose(size);
    debug!("Composed {}px icon, {} pixels painted", size, canvas.painted_count());
    tomato_encoder::encode(size.into(), size.into(), &canvas)
}

/// Render one icon and write it to its configured path
pub fn write_icon(config: &IconConfig, size: u32) -> Result<PathBuf, RenderError> {
    let png = render_icon(size)?;
    let path = config.output_path(size);

    std::fs::create_dir_all(&config.output_dir).map_err(|source| RenderError::Write {
        path: config.output_dir.clone(),
        source,
    })?;
    std::fs::write(&path, &png).map_err(|source| RenderError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Render every configured size; a failed size is logged and skipped
pub fn render_all(config: &IconConfig) -> RenderSummary {
    let mut summary = RenderSummary::default();
    for &size in &config.sizes {
        match write_icon(config, size) {
            Ok(path) => {
                info!("Created {}", path.display());
                summary.written.push(path);
            }
            Err(err) => {
                error!("Failed to create {}px icon: {}", size, err);
                summary.failed.push((size, err));
            }
        }
    }
    summary
}
