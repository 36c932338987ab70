//! 页码窗口计算
//!
//! 根据总页数、当前页与相邻页数量，生成分页控件需要显示的页码序列。
//! 页码不连续处用 [`PageEntry::Gap`] 占位，渲染时显示为省略号。

use serde::Serialize;
use std::fmt;

/// 页码窗口中的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageEntry {
    /// 可点击的页码（从1开始）
    Page(usize),
    /// 省略号占位，不可点击
    Gap,
}

impl PageEntry {
    /// 页码值，省略号返回 None
    pub fn page(&self) -> Option<usize> {
        match self {
            PageEntry::Page(page) => Some(*page),
            PageEntry::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, PageEntry::Gap)
    }
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEntry::Page(page) => write!(f, "{}", page),
            PageEntry::Gap => f.write_str("…"),
        }
    }
}

/// 窗口容量：两侧相邻页 + 当前页 + 首页 + 末页
pub fn window_capacity(sibling_count: usize) -> usize {
    sibling_count.saturating_mul(2).saturating_add(3)
}

/// 计算页码窗口
///
/// `current_page` 可以超出 `[1, total_pages]`，结果中的页码仍然只会落在该范围内。
pub fn page_window(
    current_page: usize,
    total_pages: usize,
    sibling_count: usize,
) -> Vec<PageEntry> {
    if total_pages <= window_capacity(sibling_count) {
        return pages(1, total_pages);
    }

    let left = current_page.saturating_sub(sibling_count).max(1);
    let right = current_page
        .saturating_add(sibling_count)
        .min(total_pages);

    let show_left_gap = left > 2;
    let show_right_gap = right < total_pages - 1;

    // 边缘一侧固定显示的页数
    let edge_count = 1 + 2 * sibling_count;

    match (show_left_gap, show_right_gap) {
        (false, true) => {
            let mut entries = pages(1, edge_count);
            entries.push(PageEntry::Gap);
            entries.push(PageEntry::Page(total_pages));
            entries
        }
        (true, false) => {
            let mut entries =
                vec![PageEntry::Page(1), PageEntry::Gap];
            entries.extend(pages(
                total_pages - edge_count + 1,
                total_pages,
            ));
            entries
        }
        (true, true) => {
            let mut entries =
                vec![PageEntry::Page(1), PageEntry::Gap];
            entries.extend(pages(left, right));
            entries.push(PageEntry::Gap);
            entries.push(PageEntry::Page(total_pages));
            entries
        }
        // total_pages 超过窗口容量时两侧至少有一个省略号
        (false, false) => Vec::new(),
    }
}

fn pages(first: usize, last: usize) -> Vec<PageEntry> {
    (first..=last).map(PageEntry::Page).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use PageEntry::{Gap, Page};

    fn numbers(entries: &[PageEntry]) -> Vec<usize> {
        entries.iter().filter_map(PageEntry::page).collect()
    }

    #[test]
    fn test_small_total_shows_every_page() {
        for current in 1..=3 {
            assert_eq!(
                page_window(current, 3, 1),
                vec![Page(1), Page(2), Page(3)]
            );
        }
        assert_eq!(
            numbers(&page_window(5, 5, 1)),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_zero_pages_is_empty() {
        assert!(page_window(1, 0, 1).is_empty());
        assert!(page_window(0, 0, 0).is_empty());
    }

    #[test]
    fn test_right_gap_only() {
        assert_eq!(
            page_window(1, 10, 1),
            vec![Page(1), Page(2), Page(3), Gap, Page(10)]
        );
        assert_eq!(
            page_window(3, 10, 1),
            vec![Page(1), Page(2), Page(3), Gap, Page(10)]
        );
    }

    #[test]
    fn test_left_gap_only() {
        assert_eq!(
            page_window(10, 10, 1),
            vec![Page(1), Gap, Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_window(8, 10, 1),
            vec![Page(1), Gap, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_both_gaps() {
        assert_eq!(
            page_window(5, 10, 1),
            vec![
                Page(1),
                Gap,
                Page(4),
                Page(5),
                Page(6),
                Gap,
                Page(10)
            ]
        );
        assert_eq!(
            page_window(10, 20, 2),
            vec![
                Page(1),
                Gap,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Gap,
                Page(20)
            ]
        );
    }

    #[test]
    fn test_zero_siblings() {
        assert_eq!(
            page_window(5, 10, 0),
            vec![Page(1), Gap, Page(5), Gap, Page(10)]
        );
        assert_eq!(
            page_window(1, 10, 0),
            vec![Page(1), Gap, Page(10)]
        );
    }

    #[test]
    fn test_out_of_range_current_page() {
        assert_eq!(
            page_window(0, 10, 1),
            vec![Page(1), Page(2), Page(3), Gap, Page(10)]
        );
        assert_eq!(
            page_window(usize::MAX, 10, 1),
            vec![Page(1), Gap, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(Page(7).to_string(), "7");
        assert_eq!(Gap.to_string(), "…");
        assert_eq!(
            serde_json::to_string(&vec![Page(1), Gap]).unwrap(),
            r#"[{"page":1},"gap"]"#
        );
    }

    proptest! {
        #[test]
        fn prop_window_stays_in_range_without_double_gaps(
            total in prop_oneof![
                0usize..64,
                (usize::MAX - 64)..=usize::MAX,
                any::<usize>(),
            ],
            current in any::<usize>(),
            siblings in 0usize..8,
        ) {
            let entries = page_window(current, total, siblings);

            for pair in entries.windows(2) {
                prop_assert!(!(pair[0].is_gap() && pair[1].is_gap()));
            }

            let pages = numbers(&entries);
            prop_assert!(pages.iter().all(|p| (1..=total).contains(p)));
            prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(entries.len() <= window_capacity(siblings) + 2);

            if total > 0 {
                prop_assert_eq!(pages.first(), Some(&1));
                prop_assert_eq!(pages.last(), Some(&total));
            }
        }
    }
}
