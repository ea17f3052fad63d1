use thiserror::Error;

/// Failures surfaced at the export boundary.
#[derive(Debug, Error)]
pub enum ExportError {
	/// The document could not be formatted.
	#[error("failed to write SVG document: {0}")]
	Format(#[from] std::fmt::Error),
	/// The browser refused the download.
	#[error("download failed: {0}")]
	Download(String),
}
