use itertools::Itertools;

/// Every copy of `items` with exactly one element removed.
pub fn drop_one<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    (0..items.len())
        .map(|skip_ind| {
            items
                .iter()
                .enumerate()
                .filter(|(ind, _)| *ind != skip_ind)
                .map(|(_, item)| item.clone())
                .collect()
        })
        .collect()
}

pub fn middle_index<T>(items: &[T]) -> Option<usize> {
    if items.is_empty() {
        None
    } else {
        Some(items.len() / 2)
    }
}

/// All unordered pairs `(items[i], items[j])` with `i < j`.
pub fn pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items.iter().tuple_combinations()
}

pub fn pairwise<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items.iter().tuple_windows()
}

/// All `n`-element combinations of `items`, in lexicographic index order.
pub fn combinations<T: Clone>(items: &[T], n: usize) -> Vec<Vec<T>> {
    items.iter().cloned().combinations(n).collect()
}
