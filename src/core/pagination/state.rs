//! 分页状态

use serde::Serialize;
use std::ops::Range;
use tracing::debug;

use super::window::{page_window, PageEntry};
use crate::app::config::PaginationConfig;

/// 默认起始页
pub const DEFAULT_PAGE: usize = 1;
/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// 默认相邻页数量
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// 分页控制器
///
/// 只保存当前页、每页条数、总条数与相邻页数量；总页数、翻页可用性、
/// 页码窗口都在读取时重新计算。所有输入都会被归一化或忽略，不会报错。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationController {
    current_page: usize,
    page_size: usize,
    total_items: usize,
    sibling_count: usize,
}

/// 分页控制器构建器
#[derive(Debug, Clone)]
pub struct PaginationBuilder {
    total_items: usize,
    initial_page: usize,
    page_size: usize,
    sibling_count: usize,
}

impl PaginationBuilder {
    pub fn initial_page(mut self, page: usize) -> Self {
        self.initial_page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn sibling_count(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    /// 构建控制器，起始页与每页条数在这里归一化
    pub fn build(self) -> PaginationController {
        let mut controller = PaginationController {
            current_page: self.initial_page.max(1),
            page_size: self.page_size.max(1),
            total_items: self.total_items,
            sibling_count: self.sibling_count,
        };
        controller.clamp_current_page();
        controller
    }
}

impl PaginationController {
    /// 使用默认起始页、每页条数与相邻页数量创建
    pub fn new(total_items: usize) -> Self {
        Self::builder(total_items).build()
    }

    pub fn builder(total_items: usize) -> PaginationBuilder {
        PaginationBuilder {
            total_items,
            initial_page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sibling_count: DEFAULT_SIBLING_COUNT,
        }
    }

    /// 按配置文件中的初始值创建
    pub fn with_config(
        total_items: usize,
        config: &PaginationConfig,
    ) -> Self {
        Self::builder(total_items)
            .initial_page(config.initial_page)
            .page_size(config.page_size)
            .sibling_count(config.sibling_count)
            .build()
    }

    /// 当前页码（从1开始）
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn sibling_count(&self) -> usize {
        self.sibling_count
    }

    /// 获取总页数，总条数为0时为0
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    pub fn can_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn can_prev_page(&self) -> bool {
        self.current_page > 1
    }

    /// 当前页的页码窗口
    pub fn page_numbers(&self) -> Vec<PageEntry> {
        page_window(
            self.current_page,
            self.total_pages(),
            self.sibling_count,
        )
    }

    /// 当前页覆盖的条目下标（左闭右开，从0开始）
    ///
    /// 当前页超出 `[1, total_pages]` 时返回空区间。
    pub fn item_range(&self) -> Range<usize> {
        if self.current_page == 0
            || self.current_page > self.total_pages()
        {
            return 0..0;
        }
        let start = (self.current_page - 1) * self.page_size;
        let end = start
            .saturating_add(self.page_size)
            .min(self.total_items);
        start..end
    }

    /// 直接设置当前页，不做范围检查
    pub fn set_current_page(&mut self, page: usize) {
        debug!(page, "set current page");
        self.current_page = page;
    }

    /// 更新每页条数，当前页超出新的总页数时回退到末页
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        debug!(
            page_size = self.page_size,
            total_pages = self.total_pages(),
            "set page size"
        );
        self.clamp_current_page();
    }

    /// 外部数据刷新后更新总条数
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        debug!(
            total_items,
            total_pages = self.total_pages(),
            "set total items"
        );
        self.clamp_current_page();
    }

    /// 下一页
    pub fn next_page(&mut self) {
        if self.can_next_page() {
            self.current_page += 1;
            debug!(page = self.current_page, "next page");
        }
    }

    /// 上一页
    pub fn prev_page(&mut self) {
        if self.can_prev_page() {
            self.current_page -= 1;
            debug!(page = self.current_page, "prev page");
        }
    }

    /// 跳转到第一页
    pub fn first_page(&mut self) {
        self.current_page = 1;
        debug!(page = self.current_page, "first page");
    }

    /// 跳转到最后一页
    pub fn last_page(&mut self) {
        self.current_page = self.total_pages().max(1);
        debug!(page = self.current_page, "last page");
    }

    /// 导出当前分页信息
    pub fn snapshot(&self) -> PageSummary {
        let range = self.item_range();
        PageSummary {
            current_page: self.current_page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages(),
            can_next_page: self.can_next_page(),
            can_prev_page: self.can_prev_page(),
            item_start: range.start,
            item_end: range.end,
            pages: self.page_numbers(),
        }
    }

    fn clamp_current_page(&mut self) {
        let total_pages = self.total_pages();
        if total_pages > 0 && self.current_page > total_pages {
            debug!(
                from = self.current_page,
                to = total_pages,
                "clamp current page"
            );
            self.current_page = total_pages;
        }
    }
}

/// 分页信息快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub can_next_page: bool,
    pub can_prev_page: bool,
    pub item_start: usize,
    pub item_end: usize,
    pub pages: Vec<PageEntry>,
}
