//! 错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 分页工具错误类型
///
/// 分页核心本身不会报错，这里只覆盖配置读取与输出。
#[derive(Error, Debug)]
pub enum PageWindowError {
    #[error("Config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// 应用程序通用结果类型
pub type Result<T> = anyhow::Result<T>;
