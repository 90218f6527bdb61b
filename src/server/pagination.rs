use serde::Deserialize;

/// Questions per page on every listing response.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// The `?page=N` query parameter, 1-based, defaulting to the first page.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
}

impl PageQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }
}

/// Returns the 1-based `page` of `items`. Pages past the end are empty,
/// never an error; callers decide whether an empty page is 404.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = items.len().min(start + QUESTIONS_PER_PAGE);
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_fixed_size_pages() {
        let items: Vec<i64> = (0..25).collect();
        assert_eq!(page_slice(&items, 1), (0..10).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 2), (10..20).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 3), (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn page_length_law() {
        let items: Vec<i64> = (0..37).collect();
        for page in 1..=6 {
            let expected =
                QUESTIONS_PER_PAGE.min(items.len().saturating_sub((page - 1) * QUESTIONS_PER_PAGE));
            assert_eq!(page_slice(&items, page).len(), expected);
        }
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items: Vec<i64> = (0..50).collect();
        assert!(page_slice(&items, 1000).is_empty());
        assert!(page_slice::<i64>(&[], 1).is_empty());
    }

    #[test]
    fn page_query_defaults_to_first_page() {
        assert_eq!(PageQuery { page: None }.page(), 1);
        assert_eq!(PageQuery { page: Some(0) }.page(), 1);
        assert_eq!(PageQuery { page: Some(4) }.page(), 4);
    }
}
