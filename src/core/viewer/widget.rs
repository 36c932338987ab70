//! 分页控件渲染
//!
//! 将页码窗口渲染为一行文本，当前页用方括号标出，省略号不可点击。

use colored::*;

use crate::core::pagination::{PageEntry, PaginationController};

const PREV_MARKER: &str = "‹";
const NEXT_MARKER: &str = "›";

/// 渲染样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetStyle {
    pub color: bool,
}

impl WidgetStyle {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }
}

/// 渲染分页控件行
pub fn render_line(
    pager: &PaginationController,
    style: WidgetStyle,
) -> String {
    let mut parts = Vec::new();

    parts.push(marker(PREV_MARKER, pager.can_prev_page(), style));
    for entry in pager.page_numbers() {
        parts.push(render_entry(entry, pager.current_page(), style));
    }
    parts.push(marker(NEXT_MARKER, pager.can_next_page(), style));

    parts.join(" ")
}

/// 渲染状态行
pub fn render_status(pager: &PaginationController) -> String {
    let range = pager.item_range();
    let items = if range.is_empty() {
        format!("共 {} 条", pager.total_items())
    } else {
        format!(
            "第 {}–{} 条 / 共 {} 条",
            range.start + 1,
            range.end,
            pager.total_items()
        )
    };

    format!(
        "第 {} 页 / 共 {} 页 · {} · 每页 {} 条",
        pager.current_page(),
        pager.total_pages(),
        items,
        pager.page_size()
    )
}

fn render_entry(
    entry: PageEntry,
    current_page: usize,
    style: WidgetStyle,
) -> String {
    match entry {
        PageEntry::Page(page) if page == current_page => {
            let text = format!("[{}]", page);
            if style.color {
                text.bright_white().bold().on_blue().to_string()
            } else {
                text
            }
        }
        PageEntry::Page(page) => {
            let text = page.to_string();
            if style.color {
                text.bright_cyan().to_string()
            } else {
                text
            }
        }
        PageEntry::Gap => {
            let text = entry.to_string();
            if style.color {
                text.bright_black().to_string()
            } else {
                text
            }
        }
    }
}

fn marker(text: &str, enabled: bool, style: WidgetStyle) -> String {
    if !style.color {
        return text.to_string();
    }
    if enabled {
        text.bright_white().bold().to_string()
    } else {
        text.bright_black().to_string()
    }
}
