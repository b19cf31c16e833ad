//! Order-preserving grouping of flat rows by parent id.
//!
//! The read assemblers fetch child rows for many parents in one batched
//! query and then fold them back under their parents in memory. The fold is
//! this one utility so it stays pure and testable away from the store.

use std::collections::HashMap;
use std::hash::Hash;

/// Group an ordered sequence into per-key buckets.
///
/// Rows keep their relative order inside each bucket, which is what lets a
/// single `ORDER BY parent, position` query serve every parent's ordered
/// child list at once.
pub fn group_by_key<K, V, I, F>(items: I, mut key: F) -> HashMap<K, Vec<V>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = V>,
    F: FnMut(&V) -> K,
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_grouped_by_key() {
        let rows = vec![(1, "a"), (2, "b"), (1, "c")];
        let groups = group_by_key(rows, |r| r.0);
        assert_eq!(groups[&1], vec![(1, "a"), (1, "c")]);
        assert_eq!(groups[&2], vec![(2, "b")]);
    }

    #[test]
    fn per_group_order_preserved() {
        let rows = vec![(7, 0), (9, 0), (7, 1), (7, 2), (9, 1)];
        let groups = group_by_key(rows, |r| r.0);
        let positions: Vec<i32> = groups[&7].iter().map(|r| r.1).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = group_by_key(Vec::<(i64, ())>::new(), |r| r.0);
        assert!(groups.is_empty());
    }

    #[test]
    fn absent_key_is_simply_absent() {
        let groups = group_by_key(vec![(1, "x")], |r| r.0);
        assert!(groups.get(&2).is_none());
    }
}
