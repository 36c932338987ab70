//! 输入处理模块

pub mod keyboard;
