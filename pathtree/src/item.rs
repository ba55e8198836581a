//! The record model consumed and produced by the tree builder.
//!
//! Items are loosely typed records arriving from an upstream producer. The
//! fields the builder understands are declared explicitly; everything else a
//! caller attaches travels through the pipeline untouched in the flattened
//! `extra` map. Records that lack a `path` or `base` carry no tree semantics
//! at all and are forwarded as passthrough records.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Handle to an emitted item, indexing into [`TreeOutput::items`].
///
/// Parent/child links are expressed as ids rather than nested records so the
/// output remains a flat sequence that owns every item exactly once.
///
/// [`TreeOutput::items`]: crate::pipeline::TreeOutput
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ItemId(pub usize);

impl ItemId {
    /// Position of the referenced item in the emitted sequence.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single record in the flat input stream.
///
/// On the wire the named fields use camelCase (`sortOrder`, `defaultPage`,
/// `isRoot`); absent options are omitted entirely. Unknown fields are kept
/// in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Slash-separated location relative to `base`. The empty string is the
    /// base root. `None` marks a passthrough record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Identifier of the address space this record belongs to. Records under
    /// distinct bases are never merged. `None` marks a passthrough record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Native ordering value. `None` means the record has no order of its
    /// own; its place is derived from its descendants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    /// Content type label. Container kinds are recognized through
    /// [`TreeConfig`](crate::config::TreeConfig).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Path segment of the child acting as this folder's landing page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_page: Option<String>,

    /// Page body. Presence of `text` is what marks a record as carrying page
    /// content when an address clash has to be resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Ordered child handles, populated during emission and never reordered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ItemId>,

    /// True only on the synthesized root item.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_root: bool,

    /// Caller-supplied fields the builder does not interpret. Copied through,
    /// never dropped.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Create a record at `path` under `base`.
    pub fn new(base: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base: Some(base.into()),
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Set the native sort order.
    pub fn with_sort_order(mut self, order: i64) -> Self {
        self.sort_order = Some(order);
        self
    }

    /// Set the content type label.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the page body.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// True when the record lacks a `path` or `base` and therefore bypasses
    /// tree placement entirely.
    pub fn is_passthrough(&self) -> bool {
        self.path.is_none() || self.base.is_none()
    }

    /// True when the record carries page content that would clash with a
    /// folder required at the same address.
    pub fn has_page_content(&self) -> bool {
        self.text.is_some()
    }

    /// The synthesized root that heads every emitted sequence. It belongs to
    /// no base and collects every depth-1 item as a child.
    pub(crate) fn root_item() -> Self {
        Self {
            path: Some(String::new()),
            is_root: true,
            ..Self::default()
        }
    }
}
