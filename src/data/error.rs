use std::path::PathBuf;

/// Failure at the load boundary. Both variants leave the session without a
/// dataset; neither is fatal to the application.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file exists but could not be read or parsed. Carries the full
    /// cause chain.
    #[error("failed to load data: {0:#}")]
    LoadFailure(anyhow::Error),
}
