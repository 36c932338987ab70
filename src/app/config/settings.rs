//! 分页配置
//!
//! 配置文件为 TOML 格式，缺省字段使用内置默认值：
//!
//! ```toml
//! initial_page = 1
//! page_size = 10
//! sibling_count = 1
//! page_size_options = [10, 20, 50, 100]
//! debounce_ms = 150
//! ```

use path_absolutize::Absolutize;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::app::error::types::PageWindowError;
use crate::core::pagination::state::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SIBLING_COUNT,
};

/// 配置目录下的应用子目录名
const APP_DIR: &str = "page-window";
/// 配置文件名
const CONFIG_FILE: &str = "config.toml";

/// 分页配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    /// 起始页码
    pub initial_page: usize,
    /// 每页条数
    pub page_size: usize,
    /// 当前页两侧显示的相邻页数量
    pub sibling_count: usize,
    /// 可切换的每页条数
    pub page_size_options: Vec<usize>,
    /// 同一按键的防抖间隔（毫秒）
    pub debounce_ms: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            initial_page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sibling_count: DEFAULT_SIBLING_COUNT,
            page_size_options: vec![10, 20, 50, 100],
            debounce_ms: 150,
        }
    }
}

impl PaginationConfig {
    /// 从 TOML 文本解析并校验
    pub fn from_toml_str(
        content: &str,
    ) -> Result<Self, PageWindowError> {
        let config: Self = toml::from_str(content)?;
        config.validated()
    }

    /// 校验配置，并将每页条数选项排序去重
    pub fn validated(mut self) -> Result<Self, PageWindowError> {
        if self.page_size == 0 {
            return Err(PageWindowError::InvalidConfig(
                "page_size must be greater than 0".into(),
            ));
        }
        if self.page_size_options.is_empty() {
            return Err(PageWindowError::InvalidConfig(
                "page_size_options must not be empty".into(),
            ));
        }
        if self.page_size_options.contains(&0) {
            return Err(PageWindowError::InvalidConfig(
                "page_size_options must not contain 0".into(),
            ));
        }

        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        Ok(self)
    }

    /// 比当前大的下一个每页条数选项，没有则保持不变
    pub fn larger_page_size(&self, current: usize) -> usize {
        self.page_size_options
            .iter()
            .copied()
            .find(|&size| size > current)
            .unwrap_or(current)
    }

    /// 比当前小的上一个每页条数选项，没有则保持不变
    pub fn smaller_page_size(&self, current: usize) -> usize {
        self.page_size_options
            .iter()
            .rev()
            .copied()
            .find(|&size| size < current)
            .unwrap_or(current)
    }
}

/// 默认配置文件路径：`<config_dir>/page-window/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// 读取指定配置文件
pub fn load_from_path(
    path: &Path,
) -> Result<PaginationConfig, PageWindowError> {
    let path = path.absolutize()?.into_owned();
    let content = std::fs::read_to_string(&path).map_err(|e| {
        PageWindowError::Config {
            path: path.clone(),
            message: e.to_string(),
        }
    })?;

    let config =
        PaginationConfig::from_toml_str(&content).map_err(|e| {
            PageWindowError::Config {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// 加载配置
///
/// 显式指定的文件必须存在；未指定时尝试默认路径，不存在则使用内置默认值。
pub fn load_config(
    explicit: Option<&Path>,
) -> Result<PaginationConfig, PageWindowError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => load_from_path(&path),
        _ => {
            debug!("no config file found, using defaults");
            Ok(PaginationConfig::default())
        }
    }
}
