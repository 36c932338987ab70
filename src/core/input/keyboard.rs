//! 键盘输入处理

use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// 分页操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerAction {
    Prev,
    Next,
    First,
    Last,
    GrowPageSize,
    ShrinkPageSize,
    Refresh,
    Quit,
}

/// 按键到分页操作的映射
pub fn action_for(code: KeyCode) -> Option<PagerAction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(PagerAction::Prev),
        KeyCode::Right | KeyCode::Char('l') => Some(PagerAction::Next),
        KeyCode::Home | KeyCode::Char('g') => Some(PagerAction::First),
        KeyCode::End | KeyCode::Char('G') => Some(PagerAction::Last),
        KeyCode::Char('+') => Some(PagerAction::GrowPageSize),
        KeyCode::Char('-') => Some(PagerAction::ShrinkPageSize),
        KeyCode::Char('r') => Some(PagerAction::Refresh),
        KeyCode::Esc | KeyCode::Char('q') => Some(PagerAction::Quit),
        _ => None,
    }
}

/// 键盘输入处理器
pub struct KeyboardHandler {
    last_key: Option<(KeyCode, Instant)>,
    debounce: Duration,
}

impl KeyboardHandler {
    /// 创建新的键盘处理器
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            last_key: None,
            debounce: Duration::from_millis(debounce_ms),
        }
    }

    /// 判断是否应该处理按键（防抖处理）
    pub fn should_process_key(&mut self, code: &KeyCode) -> bool {
        self.should_process_key_at(code, Instant::now())
    }

    /// 同一个键在防抖间隔内重复按下时忽略
    fn should_process_key_at(
        &mut self,
        code: &KeyCode,
        now: Instant,
    ) -> bool {
        if let Some((last_code, last_time)) = &self.last_key {
            if last_code == code
                && now.saturating_duration_since(*last_time)
                    < self.debounce
            {
                return false;
            }
        }

        self.last_key = Some((*code, now));
        true
    }

    /// 防抖后的按键映射
    pub fn handle(&mut self, code: KeyCode) -> Option<PagerAction> {
        let action = action_for(code)?;
        if self.should_process_key(&code) {
            Some(action)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(action_for(KeyCode::Left), Some(PagerAction::Prev));
        assert_eq!(action_for(KeyCode::Char('l')), Some(PagerAction::Next));
        assert_eq!(action_for(KeyCode::Home), Some(PagerAction::First));
        assert_eq!(action_for(KeyCode::Char('G')), Some(PagerAction::Last));
        assert_eq!(
            action_for(KeyCode::Char('+')),
            Some(PagerAction::GrowPageSize)
        );
        assert_eq!(
            action_for(KeyCode::Char('-')),
            Some(PagerAction::ShrinkPageSize)
        );
        assert_eq!(action_for(KeyCode::Esc), Some(PagerAction::Quit));
        assert_eq!(action_for(KeyCode::Char('x')), None);
        assert_eq!(action_for(KeyCode::Enter), None);
    }

    #[test]
    fn test_same_key_is_debounced() {
        let mut handler = KeyboardHandler::new(150);
        let start = Instant::now();

        assert!(handler.should_process_key_at(&KeyCode::Right, start));
        assert!(!handler.should_process_key_at(
            &KeyCode::Right,
            start + Duration::from_millis(50)
        ));
        assert!(handler.should_process_key_at(
            &KeyCode::Right,
            start + Duration::from_millis(200)
        ));
    }

    #[test]
    fn test_different_key_is_not_debounced() {
        let mut handler = KeyboardHandler::new(150);
        let start = Instant::now();

        assert!(handler.should_process_key_at(&KeyCode::Right, start));
        assert!(handler.should_process_key_at(
            &KeyCode::Left,
            start + Duration::from_millis(10)
        ));
    }

    #[test]
    fn test_zero_debounce_passes_everything() {
        let mut handler = KeyboardHandler::new(0);
        assert_eq!(handler.handle(KeyCode::Right), Some(PagerAction::Next));
        assert_eq!(handler.handle(KeyCode::Right), Some(PagerAction::Next));
        assert_eq!(handler.handle(KeyCode::Char('z')), None);
    }
}
