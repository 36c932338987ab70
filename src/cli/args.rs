//! 命令行参数定义

use clap::Parser;
use std::path::PathBuf;

use crate::app::config::PaginationConfig;

/// 分页窗口工具 - 计算并交互浏览带省略号的页码窗口
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// 数据总条数
    #[arg(short, long, value_name = "N")]
    pub total: usize,

    /// 起始页码 (默认: 配置文件或 1)
    #[arg(short, long, value_name = "N")]
    pub page: Option<usize>,

    /// 每页条数 (默认: 配置文件或 10)
    #[arg(short = 's', long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// 当前页两侧显示的相邻页数量 (默认: 配置文件或 1)
    #[arg(long = "siblings", value_name = "N")]
    pub sibling_count: Option<usize>,

    /// 配置文件路径 (默认: <配置目录>/page-window/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 只输出一次页码窗口后退出
    #[arg(long)]
    pub once: bool,

    /// 以 JSON 格式输出（配合 --once）
    #[arg(long, requires = "once")]
    pub json: bool,

    /// 禁用颜色输出
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// 详细模式 - 输出调试日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// 命令行参数覆盖配置文件中的值
    pub fn apply_to(&self, config: &mut PaginationConfig) {
        if let Some(page) = self.page {
            config.initial_page = page;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(sibling_count) = self.sibling_count {
            config.sibling_count = sibling_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args =
            CliArgs::try_parse_from(["page-window", "--total", "95"])
                .unwrap();
        assert_eq!(args.total, 95);
        assert_eq!(args.page, None);
        assert!(!args.once);
    }

    #[test]
    fn test_total_is_required() {
        assert!(CliArgs::try_parse_from(["page-window"]).is_err());
    }

    #[test]
    fn test_json_requires_once() {
        assert!(CliArgs::try_parse_from([
            "page-window",
            "-t",
            "5",
            "--json"
        ])
        .is_err());
        assert!(CliArgs::try_parse_from([
            "page-window",
            "-t",
            "5",
            "--once",
            "--json"
        ])
        .is_ok());
    }

    #[test]
    fn test_flags_override_config() {
        let args = CliArgs::try_parse_from([
            "page-window",
            "-t",
            "95",
            "-p",
            "4",
            "--siblings",
            "2",
        ])
        .unwrap();

        let mut config = PaginationConfig {
            page_size: 25,
            ..PaginationConfig::default()
        };
        args.apply_to(&mut config);

        assert_eq!(config.initial_page, 4);
        assert_eq!(config.page_size, 25);
        assert_eq!(config.sibling_count, 2);
    }
}
