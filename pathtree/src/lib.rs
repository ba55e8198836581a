//! Pathtree - tree ordering for flat streams of path-addressed records.
//!
//! Content migrations and imports often deliver a site as an unordered,
//! flat sequence of records, each addressed by a slash-separated path. The
//! sequence may be missing the folders in between, may contain a page and
//! an implied folder at the same address, and carries an external sort
//! order that must survive. This crate rebuilds the hierarchy:
//!
//! - missing ancestor folders are synthesized,
//! - a page blocking a folder address is promoted into the folder's
//!   default page,
//! - a total order is computed in which every ancestor precedes its
//!   descendants and siblings follow their (inherited) sort order,
//! - records come back out in that order with parent/child links attached,
//!   headed by one synthesized root.
//!
//! # Architecture
//!
//! ```text
//! input ──► Indexer ──► TreeCompleter ──► OrderComputer ──► Emitter ──► output
//! ```
//!
//! The stages run strictly in sequence over an address-keyed index; see
//! [`PathTreeBuilder`] for the entry point and [`TreeOutput`] for what a
//! build returns. Records lacking a path or base bypass the tree entirely
//! and are forwarded untouched.
//!
//! # Example
//!
//! ```
//! use pathtree::{Item, PathTreeBuilder, TreeConfig};
//!
//! let input = vec![
//!     Item::new("https://example.org/", "news").with_text("All news").with_sort_order(1),
//!     Item::new("https://example.org/", "news/2026").with_sort_order(2),
//! ];
//!
//! let config = TreeConfig::new().with_default_pages(["index.html"]);
//! let output = PathTreeBuilder::with_config(config).build(input).unwrap();
//!
//! // The page at "news" was promoted: a folder now owns the address and
//! // the page became its default page.
//! let paths: Vec<_> = output.items[1..]
//!     .iter()
//!     .map(|item| item.path.as_deref().unwrap())
//!     .collect();
//! assert_eq!(paths, vec!["news", "news/index.html", "news/2026"]);
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod item;
pub mod pipeline;
pub mod stats;

pub use config::TreeConfig;
pub use error::BuildError;
pub use index::{Address, TreeIndex};
pub use item::{Item, ItemId};
pub use pipeline::{PathTreeBuilder, TreeOutput};
pub use stats::BuildStats;
