//! 命令行界面模块

pub mod args;
pub mod pager_view;

use clap::Parser;
use colored::*;
use tracing::debug;

use crate::app::config::load_config;
use crate::app::error::types::Result;
use crate::app::logging::setup::init_logging;
use crate::core::pagination::PaginationController;
use crate::core::viewer::widget::{render_line, render_status, WidgetStyle};

use self::args::CliArgs;
use self::pager_view::PagerView;

/// 运行命令行界面
pub fn run_cli() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "错误".red().bold(), e);
            std::process::exit(1);
        }
    };
    args.apply_to(&mut config);
    debug!(?config, total = args.total, "resolved settings");

    let pager = PaginationController::with_config(args.total, &config);

    if args.once {
        return print_once(&pager, &args);
    }

    let mut view = PagerView::new(pager, config, style_for(&args));
    view.run()
}

fn style_for(args: &CliArgs) -> WidgetStyle {
    if args.no_color {
        WidgetStyle::plain()
    } else {
        WidgetStyle::colored()
    }
}

/// 非交互模式：输出一次后退出
fn print_once(
    pager: &PaginationController,
    args: &CliArgs,
) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(&pager.snapshot())?;
        println!("{}", json);
    } else {
        println!("{}", render_line(pager, style_for(args)));
        println!("{}", render_status(pager));
    }
    Ok(())
}
