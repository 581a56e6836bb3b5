use super::{iter::Words, Node};
use std::any::type_name_of_val;

/// A view of the trie below a prefix that at least one stored word continues.
#[derive(Clone)]
pub struct Branch<'a> {
    prefix: String,
    node: &'a Node,
}

impl<'a> core::fmt::Debug for Branch<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name_of_val(self))
            .field("prefix", &self.prefix)
            .field("word", &self.is_word())
            .finish()
    }
}

impl<'a> Branch<'a> {
    pub(super) fn new(prefix: String, node: &'a Node) -> Self {
        Self { prefix, node }
    }

    /// The lowercased prefix leading to this branch.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether the prefix is itself a stored word.
    pub fn is_word(&self) -> bool {
        self.node.terminal
    }

    /// Letters that continue the prefix towards at least one stored word.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.node.children().map(|(letter, _)| letter)
    }

    /// Steps one letter further down, if any word continues that way.
    pub fn descend(&self, letter: char) -> Option<Branch<'a>> {
        let slot = super::keys::slot(letter)?;
        let node = self.node.child(slot)?;
        let mut prefix = self.prefix.clone();
        prefix.push(letter.to_ascii_lowercase());
        Some(Branch { prefix, node })
    }

    pub fn words(&self) -> Words<'a> {
        Words::new(self.prefix.clone(), self.node)
    }

    pub fn into_words(self) -> Words<'a> {
        Words::new(self.prefix, self.node)
    }
}
