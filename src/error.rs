use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("运行计划读取错误: {0}")]
    PlanError(String),

    #[error("未找到运行计划: {0}")]
    PlanNotFound(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML 解析错误: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

// Add conversion from anyhow::Error
impl From<anyhow::Error> for ReporterError {
    fn from(err: anyhow::Error) -> Self {
        ReporterError::Other(err.to_string())
    }
}

/// Result type for track-reporter crate
pub type Result<T> = std::result::Result<T, ReporterError>;
