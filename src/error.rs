//! 统一错误类型

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 应用错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置或相册文件格式错误
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("gallery contains no photos")]
    EmptyGallery,

    #[error("unable to locate the user {0} directory")]
    MissingDirectory(&'static str),
}

pub type Result<T> = std::result::Result<T, AppError>;
