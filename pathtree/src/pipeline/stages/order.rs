//! Ordering stage: computes the tree order over the completed index.
//!
//! Every item gets a composite key with one component per path level. An
//! item with a native order contributes it directly; an item without one
//! starts as an unset component that adopts the minimum native order seen
//! among its descendants, so a folder that exists only to host children
//! sorts where its earliest child sorts. Components live in an arena and
//! are referenced by id; the per-depth stack holds ids, never shared
//! mutable values.
//!
//! Keys compare component by component with unset components first, and a
//! shorter key is a strict prefix of its descendants' keys, so an ancestor
//! always precedes everything beneath it. Ties fall back to address order.

use crate::index::{Address, TreeIndex};
use crate::item::Item;

/// One key component in the arena.
struct Slot {
    /// Current order value; `None` until a native order is seen.
    value: Option<i64>,
    /// Whether this component started without a native order and may adopt
    /// the minimum of its descendants.
    created: bool,
}

/// Consume the completed index and return its items in tree order.
pub(crate) fn compute_tree_order(index: TreeIndex) -> Vec<(Address, Item)> {
    let entries: Vec<(Address, Item)> = index.into_entries().collect();

    let mut arena: Vec<Slot> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut key_paths: Vec<Vec<usize>> = Vec::with_capacity(entries.len());

    for (address, item) in &entries {
        // Drop components left over from a deeper or sibling subtree.
        stack.truncate(address.depth() - 1);

        let own = item.sort_order;
        let slot = arena.len();
        arena.push(Slot {
            value: own,
            created: own.is_none(),
        });
        stack.push(slot);
        key_paths.push(stack.clone());

        // A native order lowers every created ancestor component that has
        // not yet seen anything smaller. Items without a native order leave
        // their ancestors untouched.
        if let Some(order) = own {
            for &ancestor in &stack[..stack.len() - 1] {
                let component = &mut arena[ancestor];
                if component.created && component.value.map_or(true, |value| order < value) {
                    component.value = Some(order);
                }
            }
        }
    }

    let mut decorated: Vec<(Vec<Option<i64>>, Address, Item)> = key_paths
        .into_iter()
        .zip(entries)
        .map(|(path, (address, item))| {
            let key: Vec<Option<i64>> = path.into_iter().map(|slot| arena[slot].value).collect();
            (key, address, item)
        })
        .collect();

    decorated.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    decorated
        .into_iter()
        .map(|(_, address, item)| (address, item))
        .collect()
}
