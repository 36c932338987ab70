//! 分页核心模块

pub mod state;
pub mod window;

pub use state::{PageSummary, PaginationBuilder, PaginationController};
pub use window::{page_window, PageEntry};
