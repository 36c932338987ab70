//! 分页窗口计算库
//!
//! 核心是 [`PaginationController`]：保存当前页与每页条数，根据外部提供的总条数
//! 推导总页数，并生成带省略号占位的页码窗口。
//!
//! ```
//! use page_window::{PageEntry, PaginationController};
//!
//! let mut pager = PaginationController::new(95);
//! pager.set_current_page(5);
//! assert_eq!(pager.total_pages(), 10);
//! assert_eq!(pager.page_numbers()[1], PageEntry::Gap);
//! ```

pub mod app;
pub mod cli;
pub mod core;

pub use crate::app::config::PaginationConfig;
pub use crate::app::error::types::PageWindowError;
pub use crate::core::pagination::{
    page_window, PageEntry, PageSummary, PaginationBuilder,
    PaginationController,
};
