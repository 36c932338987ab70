//! 交互式分页浏览

use colored::*;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io::{self, Write};
use tracing::{debug, info};

use crate::app::config::PaginationConfig;
use crate::app::error::types::Result;
use crate::core::input::keyboard::{KeyboardHandler, PagerAction};
use crate::core::pagination::PaginationController;
use crate::core::viewer::terminal::TerminalManager;
use crate::core::viewer::widget::{render_line, render_status, WidgetStyle};

/// 每页最多逐条列出的条目数，超出部分只显示剩余数量
const MAX_LISTED_ITEMS: usize = 20;

/// 交互式分页浏览器
pub struct PagerView {
    pager: PaginationController,
    config: PaginationConfig,
    style: WidgetStyle,
    terminal_manager: TerminalManager,
    keyboard_handler: KeyboardHandler,
    // 上次绘制时的状态，用于检测是否需要重绘
    last_drawn: Option<PaginationController>,
}

impl PagerView {
    pub fn new(
        pager: PaginationController,
        config: PaginationConfig,
        style: WidgetStyle,
    ) -> Self {
        let keyboard_handler = KeyboardHandler::new(config.debounce_ms);
        Self {
            pager,
            config,
            style,
            terminal_manager: TerminalManager::default(),
            keyboard_handler,
            last_drawn: None,
        }
    }

    pub fn pager(&self) -> &PaginationController {
        &self.pager
    }

    /// 运行交互模式
    pub fn run(&mut self) -> Result<()> {
        self.terminal_manager.enter_raw_mode()?;
        info!(
            total_items = self.pager.total_items(),
            total_pages = self.pager.total_pages(),
            "interactive pager started"
        );

        loop {
            if self.last_drawn.as_ref() != Some(&self.pager) {
                self.draw()?;
                self.last_drawn = Some(self.pager.clone());
            }

            let code = match event::read()? {
                Event::Key(KeyEvent { code, kind, .. })
                    if kind != KeyEventKind::Release =>
                {
                    code
                }
                Event::Resize(..) => {
                    self.last_drawn = None;
                    continue;
                }
                // 忽略鼠标等其他事件
                _ => continue,
            };

            let Some(action) = self.keyboard_handler.handle(code)
            else {
                continue;
            };
            if !self.apply(action) {
                break;
            }
        }

        self.terminal_manager.exit_raw_mode()?;
        Ok(())
    }

    /// 执行分页操作，返回 false 表示退出
    pub fn apply(&mut self, action: PagerAction) -> bool {
        debug!(?action, "pager action");
        match action {
            PagerAction::Prev => self.pager.prev_page(),
            PagerAction::Next => self.pager.next_page(),
            PagerAction::First => self.pager.first_page(),
            PagerAction::Last => self.pager.last_page(),
            PagerAction::GrowPageSize => {
                let size =
                    self.config.larger_page_size(self.pager.page_size());
                self.pager.set_page_size(size);
            }
            PagerAction::ShrinkPageSize => {
                let size =
                    self.config.smaller_page_size(self.pager.page_size());
                self.pager.set_page_size(size);
            }
            PagerAction::Refresh => self.last_drawn = None,
            PagerAction::Quit => return false,
        }
        true
    }

    /// 绘制当前页
    fn draw(&self) -> Result<()> {
        self.terminal_manager.clear_screen()?;
        let width = self.terminal_manager.width();

        // 原始模式下使用显式的\r\n
        let mut out = io::stdout().lock();
        for line in self.item_lines() {
            write!(out, "{}\r\n", line)?;
        }

        write!(out, "\r\n{}\r\n", "=".repeat(width.min(80)))?;
        write!(out, "{}\r\n", render_line(&self.pager, self.style))?;
        write!(
            out,
            "{}\r\n",
            render_status(&self.pager).bright_white().bold()
        )?;
        write!(
            out,
            "{}\r\n",
            "导航: ←→/hl 翻页 | Home/End 首页/末页 | +/- 每页条数 | r 刷新 | ESC/q 退出"
                .bright_black()
        )?;
        write!(out, "{}\r\n", "=".repeat(width.min(80)))?;
        out.flush()?;
        Ok(())
    }

    /// 当前页的条目列表
    fn item_lines(&self) -> Vec<String> {
        let range = self.pager.item_range();
        if range.is_empty() {
            return vec!["(无数据)".to_string()];
        }

        let mut lines: Vec<String> = range
            .clone()
            .take(MAX_LISTED_ITEMS)
            .map(|index| format!("  条目 #{}", index + 1))
            .collect();
        if range.len() > MAX_LISTED_ITEMS {
            lines.push(format!(
                "  … 另有 {} 条",
                range.len() - MAX_LISTED_ITEMS
            ));
        }
        lines
    }
}
