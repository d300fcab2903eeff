//! Flat path list and the tree derived from it.
//!
//! [`PathList`] is the single source of truth: an ordered list of
//! slash-delimited paths that can only be changed through its add, rename and
//! delete operations. [`PathTree`] is a disposable projection of that list
//! and is always rebuilt from scratch after a change.

mod conflict;
mod path_kind;
mod path_list;
mod path_tree;

pub use conflict::has_conflict;
pub use path_kind::PathKind;
pub use path_list::{Mutation, PathList, PathListError};
pub use path_tree::PathTree;
