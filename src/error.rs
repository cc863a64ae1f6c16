use std::path::PathBuf;
use thiserror::Error;

use crate::parser::ParseError;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("解析错误 {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("IO 错误 {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("无法写入 {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },

    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("配置错误: {0}")]
    Config(String),
}

impl ConvertError {
    /// 为 IO 错误附加路径
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    /// 为解析错误附加源文件路径
    pub fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        ConvertError::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Result type for httpcollect crate
pub type Result<T> = std::result::Result<T, ConvertError>;
