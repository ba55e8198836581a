//! Indexing stage: splits the input into indexed and passthrough records.
//!
//! The downstream sort needs global knowledge, so the whole input is
//! consumed before anything else runs. Records lacking a path or base are
//! collected as passthrough in input order; everything else lands in the
//! index under its full address, with one leading separator stripped from
//! the path.

use tracing::warn;

use crate::index::{Address, TreeIndex};
use crate::item::Item;
use crate::stats::BuildStats;

/// Result of consuming the input stream.
pub(crate) struct IndexedInput {
    pub index: TreeIndex,
    pub passthrough: Vec<Item>,
}

/// Consume `input` eagerly, indexing every addressable record.
///
/// Two records resolving to the same address is a caller contract
/// violation; the later record wins and the displacement is logged.
pub(crate) fn index_items<I>(input: I, stats: &mut BuildStats) -> IndexedInput
where
    I: IntoIterator<Item = Item>,
{
    let mut index = TreeIndex::new();
    let mut passthrough = Vec::new();

    for mut item in input {
        let (base, raw_path) = match (item.base.as_deref(), item.path.as_deref()) {
            (Some(base), Some(path)) => (base.to_string(), path.to_string()),
            _ => {
                stats.passthrough_items += 1;
                passthrough.push(item);
                continue;
            }
        };

        let path = match raw_path.strip_prefix('/') {
            Some(stripped) => stripped.to_string(),
            None => raw_path,
        };
        item.path = Some(path.clone());

        let address = Address::new(base, path);
        stats.native_items += 1;
        if index.insert(address.clone(), item).is_some() {
            warn!(address = %address, "duplicate address, keeping the later record");
        }
    }

    IndexedInput { index, passthrough }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_passthrough_from_indexed() {
        let mut no_path = Item::default().with_text("orphan");
        no_path.base = Some("b".to_string());
        let items = vec![Item::new("b", "a"), no_path.clone(), Item::new("b", "c")];

        let mut stats = BuildStats::default();
        let result = index_items(items, &mut stats);

        assert_eq!(result.index.len(), 2);
        assert_eq!(result.passthrough, vec![no_path]);
        assert_eq!(stats.native_items, 2);
        assert_eq!(stats.passthrough_items, 1);
    }

    #[test]
    fn test_strips_one_leading_separator() {
        let mut stats = BuildStats::default();
        let result = index_items(vec![Item::new("b", "/a/b")], &mut stats);
        let addr = Address::new("b", "a/b");
        assert!(result.index.contains(&addr));
        let item = result.index.get(&addr).cloned();
        assert_eq!(item.and_then(|i| i.path), Some("a/b".to_string()));
    }

    #[test]
    fn test_only_one_separator_is_stripped() {
        let mut stats = BuildStats::default();
        let result = index_items(vec![Item::new("b", "//a")], &mut stats);
        assert!(result.index.contains(&Address::new("b", "/a")));
    }

    #[test]
    fn test_duplicate_address_last_write_wins() {
        let mut stats = BuildStats::default();
        let result = index_items(
            vec![
                Item::new("b", "a").with_sort_order(1),
                Item::new("b", "a").with_sort_order(2),
            ],
            &mut stats,
        );
        assert_eq!(result.index.len(), 1);
        let survivor = result.index.get(&Address::new("b", "a"));
        assert_eq!(survivor.and_then(|i| i.sort_order), Some(2));
        assert_eq!(stats.native_items, 2);
    }

    #[test]
    fn test_passthrough_preserves_input_order() {
        let first = Item {
            text: Some("first".to_string()),
            ..Item::default()
        };
        let second = Item {
            text: Some("second".to_string()),
            ..Item::default()
        };
        let mut stats = BuildStats::default();
        let result = index_items(vec![first.clone(), second.clone()], &mut stats);
        assert_eq!(result.passthrough, vec![first, second]);
    }
}
