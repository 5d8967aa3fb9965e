use crate::row::Row;
use serde::{Deserialize, Serialize};

/// Page size: a fixed row count or the "show all" mode the pagination
/// selector offers as -1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum PageSize {
    Limited(usize),
    All,
}

impl From<i64> for PageSize {
    fn from(raw: i64) -> Self {
        if raw < 0 {
            PageSize::All
        } else {
            PageSize::Limited(raw as usize)
        }
    }
}

impl From<PageSize> for i64 {
    fn from(size: PageSize) -> Self {
        match size {
            PageSize::Limited(n) => n as i64,
            PageSize::All => -1,
        }
    }
}

/// Default selector options: 10 / 25 / 50 / all
pub const DEFAULT_PAGE_SIZE_OPTIONS: [PageSize; 4] = [
    PageSize::Limited(10),
    PageSize::Limited(25),
    PageSize::Limited(50),
    PageSize::All,
];

/// Slice one page out of the post-filter, post-sort row list
pub fn paginate(rows: &[Row], page: usize, size: PageSize) -> &[Row] {
    match size {
        PageSize::All => rows,
        PageSize::Limited(0) => &[],
        PageSize::Limited(n) => {
            let start = page.saturating_mul(n).min(rows.len());
            let end = (start + n).min(rows.len());
            &rows[start..end]
        }
    }
}

/// Number of pages the current filtered count occupies
pub fn page_count(filtered: usize, size: PageSize) -> usize {
    match size {
        PageSize::All => 1,
        PageSize::Limited(0) => 0,
        PageSize::Limited(n) => filtered.div_ceil(n),
    }
}

/// "from–to of N" label text.
///
/// Three shapes: a normal slice (annotated with the unfiltered total when a
/// filter is active), an empty filtered set, and show-all mode.
pub fn range_label(filtered: usize, total: usize, page: usize, size: PageSize) -> String {
    if let PageSize::All = size {
        return format!("All {} rows", filtered);
    }

    if filtered == 0 {
        return if total > 0 {
            format!("0 of {}", total)
        } else {
            "0".to_string()
        };
    }

    let n = match size {
        PageSize::Limited(n) => n.max(1),
        PageSize::All => unreachable!(),
    };
    let from = (page * n + 1).min(filtered);
    let to = (page * n + n).min(filtered);

    let mut label = format!("{}–{} of {}", from, to, filtered);
    if filtered != total {
        label.push_str(&format!(" (filtered from {})", total));
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row::new().with("id", i.to_string()))
            .collect()
    }

    #[test]
    fn test_pages_cover_the_set_exactly_once() {
        let all = rows(23);
        let size = PageSize::Limited(5);

        let mut seen = Vec::new();
        for page in 0..page_count(all.len(), size) {
            seen.extend(paginate(&all, page, size).iter().map(|r| r.get("id").display()));
        }

        let expected: Vec<String> = all.iter().map(|r| r.get("id").display()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_show_all_returns_everything() {
        let all = rows(7);
        assert_eq!(paginate(&all, 3, PageSize::All).len(), 7);
        assert_eq!(page_count(7, PageSize::All), 1);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let all = rows(4);
        assert!(paginate(&all, 9, PageSize::Limited(10)).is_empty());
    }

    #[test]
    fn test_range_label_normal_slice() {
        assert_eq!(range_label(23, 23, 0, PageSize::Limited(10)), "1–10 of 23");
        assert_eq!(range_label(23, 23, 2, PageSize::Limited(10)), "21–23 of 23");
    }

    #[test]
    fn test_range_label_annotates_filtered_total() {
        assert_eq!(
            range_label(8, 23, 0, PageSize::Limited(10)),
            "1–8 of 8 (filtered from 23)"
        );
    }

    #[test]
    fn test_range_label_empty_and_show_all() {
        assert_eq!(range_label(0, 23, 0, PageSize::Limited(10)), "0 of 23");
        assert_eq!(range_label(0, 0, 0, PageSize::Limited(10)), "0");
        assert_eq!(range_label(23, 23, 0, PageSize::All), "All 23 rows");
    }

    #[test]
    fn test_page_size_serde_uses_raw_numbers() {
        assert_eq!(serde_json::to_string(&PageSize::Limited(25)).unwrap(), "25");
        assert_eq!(serde_json::to_string(&PageSize::All).unwrap(), "-1");
        let parsed: PageSize = serde_json::from_str("-1").unwrap();
        assert_eq!(parsed, PageSize::All);
    }
}
