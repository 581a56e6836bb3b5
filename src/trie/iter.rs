use super::{keys::letter, Node, Trie, CHILDREN};
use itertools::Itertools;
use smallvec::{smallvec, SmallVec};
use std::{iter::Enumerate, slice::Iter};
use tracing::{debug, warn};

/// The occupied child slots of a node, in alphabetical order.
#[derive(Debug, Clone)]
pub(crate) struct Children<'a> {
    slots: Enumerate<Iter<'a, Option<Box<Node>>>>,
}

impl<'a> Children<'a> {
    pub(crate) fn new(slots: &'a [Option<Box<Node>>; CHILDREN]) -> Self {
        Self {
            slots: slots.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = (char, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .find_map(|(slot, child)| child.as_deref().map(|child| (letter(slot), child)))
    }
}

#[derive(Debug, Clone)]
enum HeadPos<'a> {
    This,
    Children(Children<'a>),
}

#[derive(Debug, Clone)]
struct Head<'a> {
    node: &'a Node,
    pos: HeadPos<'a>,
}

impl<'a> Head<'a> {
    fn new(node: &'a Node) -> Self {
        Self {
            node,
            pos: HeadPos::This,
        }
    }
}

/// Depth-first walk over the words below a node, visiting children from `a` to `z`.
///
/// A node's own word is yielded before any word that extends it.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct Words<'a> {
    heads: SmallVec<[Head<'a>; 32]>,
    word: String,
}

impl<'a> Words<'a> {
    pub(super) fn new(prefix: String, node: &'a Node) -> Self {
        Self {
            heads: smallvec![Head::new(node)],
            word: prefix,
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(head) = self.heads.last_mut() {
            match head.pos {
                HeadPos::This => {
                    head.pos = HeadPos::Children(head.node.children());
                    if head.node.terminal {
                        return Some(self.word.clone());
                    }
                }
                HeadPos::Children(ref mut children) => {
                    if let Some((letter, child)) = children.next() {
                        self.word.push(letter);
                        self.heads.push(Head::new(child));
                    } else {
                        self.heads.pop();
                        // The starting head owns the prefix, every other head owns one letter.
                        if !self.heads.is_empty() {
                            self.word.pop();
                        }
                    }
                }
            }
        }
        None
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    /// Inserts every valid word, skipping the rest.
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        let mut skipped = 0usize;
        for word in iter {
            if let Err(err) = self.insert(word.as_ref()) {
                warn!("skipping: {err}");
                skipped += 1;
            }
        }
        debug!(len = self.len(), skipped, "extended");
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}

impl std::fmt::Display for Trie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.words().join(", "))
    }
}
