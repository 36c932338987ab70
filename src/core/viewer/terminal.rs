//! 终端管理模块

use crate::app::error::types::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    terminal::{self, Clear, ClearType},
};
use std::io;

/// 获取终端尺寸失败时的默认宽度
const FALLBACK_WIDTH: usize = 80;

/// 终端管理器，离开作用域时恢复终端
#[derive(Default)]
pub struct TerminalManager {
    is_raw_mode: bool,
}

impl TerminalManager {
    /// 进入原始模式并隐藏光标
    pub fn enter_raw_mode(&mut self) -> Result<()> {
        if !self.is_raw_mode {
            terminal::enable_raw_mode()?;
            execute!(io::stdout(), Hide)?;
            self.is_raw_mode = true;
        }
        Ok(())
    }

    /// 退出原始模式
    pub fn exit_raw_mode(&mut self) -> Result<()> {
        if self.is_raw_mode {
            terminal::disable_raw_mode()?;
            execute!(io::stdout(), Show)?;
            self.is_raw_mode = false;
        }
        Ok(())
    }

    /// 清屏并将光标移到左上角
    pub fn clear_screen(&self) -> Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    /// 终端宽度（列数）
    pub fn width(&self) -> usize {
        terminal::size()
            .map(|(w, _)| w as usize)
            .unwrap_or(FALLBACK_WIDTH)
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        let _ = self.exit_raw_mode();
    }
}
