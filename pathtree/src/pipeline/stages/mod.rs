//! Sequential stages of a tree build.
//!
//! Each stage is a function over the shared index: indexing consumes the
//! raw input, completion fills in ancestors and resolves address clashes,
//! ordering computes the tree order, and emission attaches parent/child
//! links while producing the output sequence. They run strictly in that
//! order; nothing downstream starts before the whole input is indexed.

mod completer;
mod emitter;
mod indexer;
mod order;

pub(crate) use completer::complete_tree;
pub(crate) use emitter::emit_tree;
pub(crate) use indexer::{index_items, IndexedInput};
pub(crate) use order::compute_tree_order;
