//! Free-standing sequence helpers used by grid consumers.

use indexmap::IndexSet;
use std::hash::Hash;
use std::rc::Rc;

/// Every unordered pair of distinct values in `items`.
///
/// Duplicates are removed first, keeping first-seen order, so each pair
/// `(a, b)` has `a` appearing before `b` in the input. Yields
/// `n * (n - 1) / 2` pairs for `n` distinct values.
///
/// # Examples
///
/// ```
/// use gridwork_core::unique_pairs;
///
/// let pairs: Vec<_> = unique_pairs([1, 2, 2, 3]).collect();
/// assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 3)]);
/// ```
pub fn unique_pairs<T, I>(items: I) -> impl Iterator<Item = (T, T)>
where
    I: IntoIterator<Item = T>,
    T: Clone + Eq + Hash,
{
    let unique: Rc<[T]> = items.into_iter().collect::<IndexSet<T>>().into_iter().collect();
    let n = unique.len();
    (0..n).flat_map(move |i| {
        let unique = Rc::clone(&unique);
        (i + 1..n).map(move |j| (unique[i].clone(), unique[j].clone()))
    })
}

/// Split `items` into maximal runs where every consecutive pair
/// satisfies `same_group(prev, next)`.
///
/// An empty input yields no groups.
///
/// # Examples
///
/// ```
/// use gridwork_core::group_while;
///
/// let runs = group_while(vec![1, 2, 3, 7, 8, 12], |a, b| b - a == 1);
/// assert_eq!(runs, vec![vec![1, 2, 3], vec![7, 8], vec![12]]);
/// ```
pub fn group_while<T, I, F>(items: I, mut same_group: F) -> Vec<Vec<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut groups: Vec<Vec<T>> = Vec::new();
    for item in items {
        if let Some(current) = groups.last_mut() {
            if current.last().is_some_and(|prev| same_group(prev, &item)) {
                current.push(item);
                continue;
            }
        }
        groups.push(vec![item]);
    }
    groups
}
