//! 分页窗口工具主程序

use page_window::app::error::types::Result;

fn main() -> Result<()> {
    // 解析参数、初始化日志并运行命令行界面
    page_window::cli::run_cli()
}
