//! A case-insensitive prefix dictionary, and the linked list that keeps it company.

#[cfg(feature = "dataset")]
pub mod dataset;
mod error;
pub mod list;
pub mod stats;
pub mod trie;

pub use error::{Error, Reason, Result};
pub use list::LinkedList;
pub use stats::Stats;
pub use trie::{Branch, Trie, Words};
