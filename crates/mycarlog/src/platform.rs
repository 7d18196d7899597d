//! Platform ports for file selection and sharing.
//!
//! The backup engine runs on whatever platform hosts the store, so the
//! two platform-specific interactions (picking a backup file and
//! presenting a share sheet) are traits injected by the embedder.
//! Tests inject fakes; a headless host can use [`NoShare`].

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The platform failed to present its share sheet.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ShareError(pub String);

/// Presents the platform's native share/export sheet for a file.
pub trait ShareSheet {
    /// Offer the file to the user for sharing or exporting.
    fn share_file(&self, path: &Path) -> Result<(), ShareError>;
}

/// Lets the user pick a backup file to restore from.
pub trait FilePicker {
    /// Returns the selected file, or `None` if the user dismissed the
    /// picker.
    fn pick_backup_file(&self) -> Option<PathBuf>;
}

/// A share sheet for hosts without one. Every share attempt fails,
/// which callers report as "backup succeeded, share failed".
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShare;

impl ShareSheet for NoShare {
    fn share_file(&self, _path: &Path) -> Result<(), ShareError> {
        Err(ShareError("share sheet not available on this platform".to_owned()))
    }
}
