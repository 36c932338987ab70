//! 终端显示模块

pub mod terminal;
pub mod widget;
