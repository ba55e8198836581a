//! Emission stage: turns the tree order into the output sequence.
//!
//! One synthesized root item heads the sequence. Every item is then placed
//! in tree order: registered under its address, attached to its parent's
//! child list, and appended to the output. Parents always precede their
//! children in the order, so attachment only ever looks backwards.

use std::collections::HashMap;

use tracing::debug;

use crate::index::Address;
use crate::item::{Item, ItemId};
use crate::stats::BuildStats;

/// Emit `ordered` as a flat sequence headed by the synthesized root, with
/// parent/child links attached.
///
/// Depth-1 items all become children of the synthesized root, whether or
/// not their base has its own root entry. A base-root entry (empty path)
/// has no parent and attaches nowhere.
pub(crate) fn emit_tree(ordered: Vec<(Address, Item)>, stats: &mut BuildStats) -> Vec<Item> {
    let mut items: Vec<Item> = Vec::with_capacity(ordered.len() + 1);
    items.push(Item::root_item());

    let mut placed: HashMap<Address, ItemId> = HashMap::with_capacity(ordered.len());

    for (address, item) in ordered {
        let id = ItemId(items.len());
        let parent = match address.parent_path() {
            None => None,
            Some("") => Some(ItemId(0)),
            Some(path) => placed.get(&Address::new(address.base.clone(), path)).copied(),
        };
        if let Some(parent_id) = parent {
            items[parent_id.index()].children.push(id);
        }
        debug!(
            address = %address,
            position = id.index(),
            parent = ?parent,
            "placed item"
        );
        placed.insert(address, id);
        items.push(item);
    }

    stats.items_emitted = items.len();
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(base: &str, path: &str) -> (Address, Item) {
        (Address::new(base, path), Item::new(base, path))
    }

    fn emit(ordered: Vec<(Address, Item)>) -> Vec<Item> {
        let mut stats = BuildStats::default();
        emit_tree(ordered, &mut stats)
    }

    #[test]
    fn test_root_heads_the_sequence() {
        let items = emit(vec![entry("b", "a")]);
        assert!(items[0].is_root);
        assert_eq!(items[0].path.as_deref(), Some(""));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_depth_one_items_attach_to_root() {
        let items = emit(vec![entry("b", "a"), entry("b", "z")]);
        assert_eq!(items[0].children, vec![ItemId(1), ItemId(2)]);
    }

    #[test]
    fn test_nested_items_attach_to_parents_in_order() {
        let items = emit(vec![
            entry("b", "a"),
            entry("b", "a/x"),
            entry("b", "a/y"),
            entry("b", "a/y/deep"),
        ]);
        let a = &items[1];
        assert_eq!(a.children, vec![ItemId(2), ItemId(3)]);
        let y = &items[3];
        assert_eq!(y.children, vec![ItemId(4)]);
        assert!(items[4].children.is_empty());
    }

    #[test]
    fn test_base_root_entry_attaches_nowhere() {
        let items = emit(vec![entry("b", ""), entry("b", "a")]);
        // The base-root entry is emitted but is nobody's child; the depth-1
        // item still attaches to the synthesized root.
        assert_eq!(items[0].children, vec![ItemId(2)]);
        assert!(items[1].children.is_empty());
        assert_eq!(items[1].path.as_deref(), Some(""));
    }

    #[test]
    fn test_parent_lookup_is_scoped_per_base() {
        let items = emit(vec![
            entry("b1", "a"),
            entry("b2", "a"),
            entry("b2", "a/child"),
        ]);
        // The child attaches to b2's "a", not b1's.
        assert!(items[1].children.is_empty());
        assert_eq!(items[2].children, vec![ItemId(3)]);
    }

    #[test]
    fn test_emitted_count_includes_root() {
        let mut stats = BuildStats::default();
        let items = emit_tree(vec![entry("b", "a"), entry("b", "a/x")], &mut stats);
        assert_eq!(stats.items_emitted, 3);
        assert_eq!(items.len(), 3);
    }
}
