//! 核心逻辑模块

pub mod input;
pub mod pagination;
pub mod viewer;
