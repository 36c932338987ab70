//! 应用程序基础设施：配置、错误与日志

pub mod config;
pub mod error;
pub mod logging;
