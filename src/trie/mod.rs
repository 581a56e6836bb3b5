pub mod iter;
mod keys;
mod node;
mod refs;

pub use iter::Words;
pub use refs::Branch;

pub(crate) const CHILDREN: usize = 26;

/// One letter position in the dictionary.
#[derive(Default)]
pub(crate) struct Node {
    /// The path from the root to this node spells a stored word.
    pub(crate) terminal: bool,
    children: [Option<Box<Node>>; CHILDREN],
}

/// Case-insensitive prefix dictionary over the letters `a` to `z`.
///
/// Every node is owned by its parent, and words share nodes only along their common prefix.
/// Deleting a word prunes the branch it leaves behind, stopping at the first node another word
/// still needs.
///
/// Cloning, comparing and formatting walk the nodes with an explicit stack, so words of any
/// length are safe to store.
#[derive(Default)]
pub struct Trie {
    root: Option<Box<Node>>,
    len: usize,
}
