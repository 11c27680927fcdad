#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("System preference unavailable: {0}")]
    SystemPreferenceUnavailable(String),

    #[error("DOM unavailable: {0}")]
    DomUnavailable(String),
}
