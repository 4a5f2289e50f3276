pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` of `items`, `page_size` items at a time.
///
/// Pages past the end are empty and the last page may be short. `page` must
/// be at least 1; page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    let start = (page.max(1) as usize - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_full() {
        let items: Vec<u32> = (1..=19).collect();
        assert_eq!(paginate(&items, 1, QUESTIONS_PER_PAGE), &items[..10]);
    }

    #[test]
    fn last_page_is_truncated() {
        let items: Vec<u32> = (1..=19).collect();
        assert_eq!(paginate(&items, 2, QUESTIONS_PER_PAGE), &items[10..]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (1..=19).collect();
        assert!(paginate(&items, 3, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&items, 2000, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate::<u32>(&[], 1, QUESTIONS_PER_PAGE).is_empty());
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let items = [1, 2, 3];
        assert!(paginate(&items, u32::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn pages_reassemble_the_sequence() {
        for len in [0usize, 1, 9, 10, 11, 20, 37] {
            let items: Vec<usize> = (0..len).collect();
            let pages = len.div_ceil(QUESTIONS_PER_PAGE) as u32;
            let mut joined = Vec::new();
            for page in 1..=pages {
                let slice = paginate(&items, page, QUESTIONS_PER_PAGE);
                assert!(slice.len() <= QUESTIONS_PER_PAGE);
                joined.extend_from_slice(slice);
            }
            assert_eq!(joined, items);
        }
    }
}
