use std::path::PathBuf;

use thiserror::Error;

/// Failures of the collaborators around the core. Parsing problems inside the
/// core never surface here; they degrade to defaults instead.
#[derive(Error, Debug)]
pub enum IsocalError {
    #[error("Calendar source unavailable at {path:?}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    #[error("Render target missing: {0:?}")]
    RenderTargetMissing(PathBuf),
}
