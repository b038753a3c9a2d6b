use std::num::NonZeroUsize;

/// Split `items` into consecutive rows of `row_size`; the last row may be shorter.
///
/// No items give no rows, and an exact multiple leaves no empty trailing row.
#[must_use]
pub fn row_chunk<T>(items: Vec<T>, row_size: NonZeroUsize) -> Vec<Vec<T>> {
    let size = row_size.get();
    let mut rows = Vec::with_capacity(items.len().div_ceil(size));
    let mut items = items.into_iter().peekable();

    while items.peek().is_some() {
        rows.push(items.by_ref().take(size).collect());
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN)
    }

    #[test]
    fn five_items_in_rows_of_three() {
        let rows = row_chunk(vec![1, 2, 3, 4, 5], size(3));

        assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn no_items_no_rows() {
        assert!(row_chunk(Vec::<u8>::new(), size(3)).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_trailing_row() {
        let rows = row_chunk(vec!['a', 'b', 'c', 'd'], size(2));

        assert_eq!(rows, vec![vec!['a', 'b'], vec!['c', 'd']]);
    }

    #[test]
    fn row_size_one_keeps_order() {
        let rows = row_chunk(vec![3, 1, 2], size(1));

        assert_eq!(rows, vec![vec![3], vec![1], vec![2]]);
    }

    #[test]
    fn row_larger_than_input() {
        assert_eq!(row_chunk(vec![1, 2], size(10)), vec![vec![1, 2]]);
    }
}
