//! The tree builder and its output.
//!
//! [`PathTreeBuilder`] consumes a flat sequence of records and produces the
//! same records (plus any synthesized folders and one synthesized root) in
//! tree order, with parent/child links attached:
//!
//! ```text
//! input ──► Indexer ──► TreeCompleter ──► OrderComputer ──► Emitter ──► TreeOutput
//!              │
//!              └──► passthrough (records without path/base, untouched)
//! ```
//!
//! The transform is synchronous and deterministic: the entire input is
//! materialized before the first ordered item exists, because an item's
//! place depends on every other item's depth and order.

mod stages;

use tracing::debug;

use crate::config::TreeConfig;
use crate::error::BuildError;
use crate::item::Item;
use crate::stats::BuildStats;

/// Builds a tree ordering over flat, possibly path-incomplete record
/// streams.
///
/// # Example
///
/// ```
/// use pathtree::{Item, PathTreeBuilder};
///
/// let input = vec![
///     Item::new("https://example.org/", "docs/guide").with_sort_order(2),
///     Item::new("https://example.org/", "docs").with_sort_order(1),
/// ];
/// let output = PathTreeBuilder::new().build(input).unwrap();
///
/// assert!(output.items[0].is_root);
/// let paths: Vec<_> = output.items[1..]
///     .iter()
///     .map(|item| item.path.as_deref().unwrap())
///     .collect();
/// assert_eq!(paths, vec!["docs", "docs/guide"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathTreeBuilder {
    config: TreeConfig,
}

impl PathTreeBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with an explicit configuration.
    pub fn with_config(config: TreeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Run the full transform over `input`.
    ///
    /// Fails only when a promotion cannot find a free default-page name
    /// within the bounded search.
    pub fn build<I>(&self, input: I) -> Result<TreeOutput, BuildError>
    where
        I: IntoIterator<Item = Item>,
    {
        let mut stats = BuildStats::default();

        let stages::IndexedInput {
            mut index,
            passthrough,
        } = stages::index_items(input, &mut stats);
        stages::complete_tree(&mut index, &self.config, &mut stats)?;
        let ordered = stages::compute_tree_order(index);
        let items = stages::emit_tree(ordered, &mut stats);

        debug!(%stats, "tree build complete");
        Ok(TreeOutput {
            items,
            passthrough,
            stats,
        })
    }
}

/// Everything a build produces.
#[derive(Debug, Clone)]
pub struct TreeOutput {
    /// The synthesized root followed by every placed item in tree order.
    /// [`ItemId`](crate::item::ItemId) values in `children` index into this
    /// sequence.
    pub items: Vec<Item>,

    /// Records without tree semantics, forwarded untouched in input order.
    pub passthrough: Vec<Item>,

    /// Counters describing what the build did.
    pub stats: BuildStats,
}

impl TreeOutput {
    /// The synthesized root item heading `items`.
    pub fn root(&self) -> &Item {
        &self.items[0]
    }

    /// Resolve an item's children against the emitted sequence.
    pub fn children_of<'a>(&'a self, item: &'a Item) -> impl Iterator<Item = &'a Item> {
        item.children.iter().map(|id| &self.items[id.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    fn build(input: Vec<Item>) -> TreeOutput {
        PathTreeBuilder::new().build(input).unwrap()
    }

    fn paths(output: &TreeOutput) -> Vec<&str> {
        output.items[1..]
            .iter()
            .map(|item| item.path.as_deref().unwrap_or("?"))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_only_the_root() {
        let output = build(Vec::new());
        assert_eq!(output.items.len(), 1);
        assert!(output.root().is_root);
        assert!(output.passthrough.is_empty());
    }

    #[test]
    fn test_page_and_descendant_resolve_into_folder_page_child() {
        let output = build(vec![
            Item::new("b", "a").with_text("hello").with_sort_order(1),
            Item::new("b", "a/b").with_sort_order(2),
        ]);

        assert_eq!(paths(&output), vec!["a", "a/index.html", "a/b"]);

        let folder = &output.items[1];
        assert_eq!(folder.kind.as_deref(), Some("Folder"));
        assert_eq!(folder.default_page.as_deref(), Some("index.html"));
        assert_eq!(folder.children, vec![ItemId(2), ItemId(3)]);

        let page = &output.items[2];
        assert_eq!(page.text.as_deref(), Some("hello"));
        assert_eq!(page.sort_order, Some(1));

        assert_eq!(output.stats.pages_promoted, 1);
    }

    #[test]
    fn test_fully_specified_tree_round_trips_to_depth_first_order() {
        let output = build(vec![
            Item::new("b", "about").with_kind("Document").with_sort_order(2),
            Item::new("b", "docs").with_kind("Folder").with_sort_order(1),
            Item::new("b", "docs/guide").with_sort_order(2),
            Item::new("b", "docs/intro").with_sort_order(1),
        ]);
        assert_eq!(
            paths(&output),
            vec!["docs", "docs/intro", "docs/guide", "about"]
        );
        assert_eq!(output.stats.folders_synthesized, 0);
        assert_eq!(output.stats.pages_promoted, 0);
    }

    #[test]
    fn test_passthrough_records_are_forwarded_untouched() {
        let stray = Item {
            text: Some("no address".to_string()),
            ..Item::default()
        };
        let output = build(vec![Item::new("b", "a"), stray.clone()]);

        assert_eq!(output.passthrough, vec![stray]);
        // Nothing in the placed sequence references the stray record.
        let max_child = output
            .items
            .iter()
            .flat_map(|item| item.children.iter())
            .map(|id| id.index())
            .max();
        assert!(max_child.unwrap_or(0) < output.items.len());
        assert_eq!(output.items.len(), 2);
    }

    #[test]
    fn test_children_of_resolves_ids() {
        let output = build(vec![
            Item::new("b", "a").with_sort_order(1),
            Item::new("b", "a/x").with_sort_order(1),
            Item::new("b", "a/y").with_sort_order(2),
        ]);
        let a = &output.items[1];
        let child_paths: Vec<_> = output
            .children_of(a)
            .map(|item| item.path.as_deref().unwrap_or("?"))
            .collect();
        assert_eq!(child_paths, vec!["a/x", "a/y"]);
    }

    #[test]
    fn test_stats_are_reported() {
        let output = build(vec![
            Item::new("b", "a/b/c").with_sort_order(1),
            Item {
                text: Some("stray".to_string()),
                ..Item::default()
            },
        ]);
        assert_eq!(output.stats.native_items, 1);
        assert_eq!(output.stats.passthrough_items, 1);
        assert_eq!(output.stats.folders_synthesized, 2);
        assert_eq!(output.stats.items_emitted, 4);
    }

    #[test]
    fn test_builder_config_round_trip() {
        let config = TreeConfig::new().with_default_pages(["home.htm"]);
        let builder = PathTreeBuilder::with_config(config.clone());
        assert_eq!(builder.config(), &config);
    }
}
