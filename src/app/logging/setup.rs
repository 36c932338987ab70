//! 日志系统初始化

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// 默认日志过滤规则
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "page_window=debug"
    } else {
        "page_window=info"
    }
}

/// 初始化日志系统
///
/// 日志写到 stderr，避免干扰终端分页界面和 `--once` 的标准输出。
/// `RUST_LOG` 优先于默认规则。
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(verbose).into());

    // 重复初始化时忽略错误（例如测试中）
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "page_window=info");
        assert_eq!(default_filter(true), "page_window=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
    }
}
