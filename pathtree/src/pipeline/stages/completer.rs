//! Completion stage: makes every ancestor chain real.
//!
//! After this stage every indexed item has a folder record at each of its
//! ancestor addresses. Missing ancestors are synthesized; an ancestor
//! address occupied by page content is resolved by promotion, moving the
//! page into a default-page child slot and putting a fresh folder at the
//! original address. Addresses are walked from a sorted snapshot so folder
//! synthesis is deterministic; every rewrite targets an address lexically
//! before the record being walked, so the snapshot never goes stale.
//!
//! Running this stage on an already complete index changes nothing.

use tracing::debug;

use crate::config::TreeConfig;
use crate::error::BuildError;
use crate::index::{Address, TreeIndex};
use crate::item::Item;
use crate::stats::BuildStats;

/// Upper bound on candidate default-page names tried during one promotion.
pub(crate) const MAX_DEFAULT_PAGE_ATTEMPTS: usize = 10_000;

/// Complete every ancestor chain in `index`, resolving page/folder clashes.
pub(crate) fn complete_tree(
    index: &mut TreeIndex,
    config: &TreeConfig,
    stats: &mut BuildStats,
) -> Result<(), BuildError> {
    for address in index.addresses() {
        complete_item(index, config, stats, &address)?;
    }
    Ok(())
}

/// Walk one item's ancestor prefixes, shallowest first, then recognize the
/// item as its parent's default page if it qualifies.
fn complete_item(
    index: &mut TreeIndex,
    config: &TreeConfig,
    stats: &mut BuildStats,
    address: &Address,
) -> Result<(), BuildError> {
    // The base root has no segments and is not walked. It can still be
    // promoted, but only when a deeper item under the same base reaches it
    // as an ancestor below.
    if address.path.is_empty() {
        return Ok(());
    }

    let segments: Vec<&str> = address.path.split('/').collect();

    // Level 0 is the base root: promotable when it holds page content, never
    // synthesized.
    visit_ancestor(index, config, stats, address, "", false)?;

    let mut prefix = String::new();
    for segment in &segments[..segments.len() - 1] {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(segment);
        visit_ancestor(index, config, stats, address, &prefix, true)?;
    }

    // `prefix` is now the parent path of the walked item.
    recognize_default_page(index, config, stats, address, &prefix, segments[segments.len() - 1]);
    Ok(())
}

/// Resolve one ancestor prefix of the walked item: promote page content out
/// of the way, or synthesize the missing folder.
fn visit_ancestor(
    index: &mut TreeIndex,
    config: &TreeConfig,
    stats: &mut BuildStats,
    walked: &Address,
    prefix: &str,
    synthesizable: bool,
) -> Result<(), BuildError> {
    let ancestor = Address::new(walked.base.clone(), prefix);
    let occupant_is_page = index.get(&ancestor).map(Item::has_page_content);
    match occupant_is_page {
        Some(true) => promote_page(index, config, stats, &ancestor),
        Some(false) => Ok(()),
        None if synthesizable => {
            synthesize_folder(index, config, stats, ancestor);
            Ok(())
        }
        None => Ok(()),
    }
}

/// Move the page at `at` into a free default-page child slot and replace it
/// with a folder designating that slot as its default page.
fn promote_page(
    index: &mut TreeIndex,
    config: &TreeConfig,
    stats: &mut BuildStats,
    at: &Address,
) -> Result<(), BuildError> {
    let base_name = config.primary_default_page();

    let mut chosen = None;
    for attempt in 0..MAX_DEFAULT_PAGE_ATTEMPTS {
        let name = if attempt == 0 {
            base_name.to_string()
        } else {
            format!("{}{}", base_name, attempt)
        };
        let candidate = join_path(&at.path, &name);
        if !index.contains(&Address::new(at.base.clone(), candidate.clone())) {
            chosen = Some((name, candidate));
            break;
        }
    }
    let (name, new_path) = match chosen {
        Some(found) => found,
        None => {
            return Err(BuildError::DefaultPageNamesExhausted {
                address: at.to_string(),
                attempts: MAX_DEFAULT_PAGE_ATTEMPTS,
            })
        }
    };

    let mut page = match index.take(at) {
        Some(page) => page,
        None => return Ok(()),
    };
    page.path = Some(new_path.clone());
    index.insert(Address::new(at.base.clone(), new_path.clone()), page);

    let mut folder = Item {
        base: Some(at.base.clone()),
        path: Some(at.path.clone()),
        default_page: Some(name.clone()),
        ..Item::default()
    };
    // The base root is never typed as a container.
    if !at.path.is_empty() {
        folder.kind = Some(config.primary_container_kind().to_string());
    }
    index.insert(at.clone(), folder);

    stats.pages_promoted += 1;
    debug!(
        address = %at,
        moved_to = %new_path,
        default_page = %name,
        "promoted page into default-page slot of new folder"
    );
    Ok(())
}

/// Insert a synthesized folder at a missing ancestor address.
fn synthesize_folder(
    index: &mut TreeIndex,
    config: &TreeConfig,
    stats: &mut BuildStats,
    at: Address,
) {
    let folder = Item {
        base: Some(at.base.clone()),
        path: Some(at.path.clone()),
        kind: Some(config.primary_container_kind().to_string()),
        ..Item::default()
    };
    debug!(address = %at, "synthesized missing ancestor folder");
    index.insert(at, folder);
    stats.folders_synthesized += 1;
}

/// If the walked item's final segment is a default-page name and its parent
/// is an untitled container, record the item as the parent's default page.
/// A parent with no order of its own also adopts the page's order, so the
/// folder sorts where its landing content would have sorted.
fn recognize_default_page(
    index: &mut TreeIndex,
    config: &TreeConfig,
    stats: &mut BuildStats,
    address: &Address,
    parent_path: &str,
    last_segment: &str,
) {
    if !config.is_default_page(last_segment) {
        return;
    }
    let own_order = index.get(address).and_then(|item| item.sort_order);
    let parent_address = Address::new(address.base.clone(), parent_path);
    if let Some(parent) = index.get_mut(&parent_address) {
        let is_container = parent
            .kind
            .as_deref()
            .map_or(false, |kind| config.is_container_kind(kind));
        if is_container && parent.default_page.is_none() {
            parent.default_page = Some(last_segment.to_string());
            if parent.sort_order.is_none() {
                parent.sort_order = own_order;
            }
            stats.default_pages_adopted += 1;
            debug!(
                address = %parent_address,
                default_page = %last_segment,
                "folder adopted default page"
            );
        }
    }
}

/// Join a folder path and a child name, treating the empty path as the root.
fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
