//! 配置模块

pub mod settings;

pub use settings::{load_config, PaginationConfig};
