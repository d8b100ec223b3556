//! Partition-exchange sort with a midpoint pivot.
//!
//! Plain quicksort degrades to quadratic time on adversarial inputs, so the
//! recursion depth is capped at about `2 log2 n`. A range that reaches the
//! cap is finished with the standard library's unstable sort, keeping the
//! worst case at O(n log n). Equal keys may end up in any relative order.

/// Sorts `items` in ascending order of `key`.
pub fn quicksort_by_key<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let depth = 2 * (usize::BITS - items.len().leading_zeros());
    sort_range(items, &key, depth);
}

fn sort_range<T, K, F>(items: &mut [T], key: &F, depth: u32)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() < 2 {
        return;
    }
    if depth == 0 {
        tracing::trace!(len = items.len(), "quicksort depth exhausted");
        items.sort_unstable_by_key(key);
        return;
    }

    let split = partition(items, key);
    let (low, high) = items.split_at_mut(split + 1);
    sort_range(low, key, depth - 1);
    sort_range(high, key, depth - 1);
}

/// Hoare partition around the lower-middle element.
///
/// Returns `j` such that every key in `items[..=j]` is at most every key in
/// `items[j + 1..]`. Requires `items.len() >= 2`; then `j < items.len() - 1`,
/// so both halves are non-empty.
fn partition<T, K, F>(items: &mut [T], key: &F) -> usize
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let pivot = key(&items[(items.len() - 1) / 2]);
    let mut i = 0;
    let mut j = items.len() - 1;
    loop {
        while key(&items[i]) < pivot {
            i += 1;
        }
        while key(&items[j]) > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        items.swap(i, j);
        i += 1;
        j -= 1;
    }
}
