//! Derived-view helpers.
//!
//! The projections every module recomputes after a state change: filtered
//! subsets, badge counts, sums and means. All of them preserve the dataset's
//! relative order and never mutate it.

/// Records satisfying `pred`, in their original relative order.
pub fn matching<T>(records: &[T], pred: impl Fn(&T) -> bool) -> Vec<&T> {
    records.iter().filter(|record| pred(record)).collect()
}

/// Badge count: how many records satisfy `pred`.
pub fn count_matching<T>(records: &[T], pred: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|record| pred(record)).count()
}

/// Sum of a numeric field across `records`.
pub fn sum_by<T>(records: &[T], value: impl Fn(&T) -> u32) -> u32 {
    records.iter().map(value).sum()
}

/// Sum of a fractional field across `records`.
pub fn total_by<T>(records: &[T], value: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(value).sum()
}

/// Mean of a numeric field, `None` for an empty dataset.
pub fn mean_by<T>(records: &[T], value: impl Fn(&T) -> f64) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    Some(records.iter().map(value).sum::<f64>() / records.len() as f64)
}

/// Case-insensitive substring containment, the search-box predicate.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
