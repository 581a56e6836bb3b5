use super::{
    iter::{Children, Words},
    keys::{Key, letter},
    Branch, Node, Trie, CHILDREN,
};
use crate::error::{Error, Result};
use itertools::Itertools;
use smallvec::{smallvec, SmallVec};
use std::any::type_name;
use tracing::{debug, trace};

/// How far a deletion has to unwind back up the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unwind {
    /// The word is not stored, nothing changes.
    Missing,
    /// Clear the terminal flag, every node on the path is still needed.
    Keep,
    /// Detach the node at this depth from its parent; depth zero releases the root.
    Prune(usize),
}

impl Node {
    pub(super) fn child(&self, slot: u8) -> Option<&Node> {
        self.children[slot as usize].as_deref()
    }

    pub(crate) fn children(&self) -> Children<'_> {
        Children::new(&self.children)
    }

    fn live_children(&self) -> usize {
        self.children.iter().flatten().count()
    }

    /// Nodes in this subtree, itself included.
    pub(crate) fn count(&self) -> usize {
        let mut stack: SmallVec<[&Node; 32]> = smallvec![self];
        let mut count = 0;
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter().flatten().map(|child| &**child));
        }
        count
    }

    /// Frees a detached subtree without recursing once per level.
    fn dismantle(node: Box<Node>) {
        let mut stack = vec![node];
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }

    fn shell(&self) -> Box<Node> {
        Box::new(Node {
            terminal: self.terminal,
            ..Node::default()
        })
    }

    /// Deep copy of this subtree, rebuilt bottom-up from an explicit stack.
    fn duplicate(&self) -> Box<Node> {
        // Source node, next slot to look at, and the copy built so far.
        let mut stack: Vec<(&Node, usize, Box<Node>)> = vec![(self, 0, self.shell())];
        let mut copy = None;
        while let Some((source, next, _)) = stack.last_mut() {
            let source: &Node = *source;
            let found = (*next..CHILDREN)
                .find_map(|slot| source.children[slot].as_deref().map(|child| (slot, child)));
            if let Some((slot, child)) = found {
                *next = slot + 1;
                stack.push((child, 0, child.shell()));
                continue;
            }

            let Some((_, _, done)) = stack.pop() else {
                break;
            };
            match stack.last_mut() {
                // `next` already points past the slot this copy belongs in.
                Some((_, next, parent)) => parent.children[*next - 1] = Some(done),
                None => copy = Some(done),
            }
        }
        copy.unwrap_or_default()
    }

    /// Whether both subtrees store the same words, compared node by node.
    fn same_shape(&self, other: &Node) -> bool {
        let mut stack: SmallVec<[(&Node, &Node); 32]> = smallvec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.terminal != right.terminal {
                return false;
            }
            for pair in left.children.iter().zip(&right.children) {
                match pair {
                    (Some(left), Some(right)) => stack.push((&**left, &**right)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }

    pub(crate) fn walk(&self) -> impl Iterator<Item = (usize, &Node)> + '_ {
        let mut stack: SmallVec<[(usize, &Node); 32]> = smallvec![(0, self)];
        std::iter::from_fn(move || {
            let (depth, node) = stack.pop()?;
            stack.extend(
                node.children
                    .iter()
                    .flatten()
                    .map(|child| (depth + 1, &**child)),
            );
            Some((depth, node))
        })
    }
}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("terminal", &self.terminal)
            .field("children", &self.children().map(|(letter, _)| letter).collect::<String>())
            .finish()
    }
}

impl core::fmt::Debug for Trie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name::<Trie>())
            .field("len", &self.len)
            .field("words", &self.words().collect_vec())
            .finish()
    }
}

impl Clone for Trie {
    fn clone(&self) -> Self {
        Trie {
            root: self.root.as_deref().map(Node::duplicate),
            len: self.len,
        }
    }
}

impl PartialEq for Trie {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && match (self.root(), other.root()) {
                (Some(left), Some(right)) => left.same_shape(right),
                (None, None) => true,
                _ => false,
            }
    }
}

impl Eq for Trie {}

impl Drop for Trie {
    fn drop(&mut self) {
        self.clear_root();
    }
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Number of words stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes currently allocated, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.as_deref().map_or(0, Node::count)
    }

    pub fn clear(&mut self) {
        self.clear_root();
        self.len = 0;
    }

    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Adds a word, returning `false` if it was already stored.
    ///
    /// Uppercase letters are folded; any other character is refused before the trie is touched.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let slots = word.slots()?;

        let mut node: &mut Node = self.root.get_or_insert_with(Box::default);
        for &slot in slots.iter() {
            node = &mut **node.children[slot as usize].get_or_insert_with(Box::default);
        }

        if node.terminal {
            debug!(word, "already stored");
            Ok(false)
        } else {
            node.terminal = true;
            self.len += 1;
            debug!(word, len = self.len, "inserted");
            Ok(true)
        }
    }

    /// Returns whether exactly this word is stored.
    ///
    /// A prefix of a stored word is not itself a word unless it was inserted.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        word.slots()
            .ok()
            .and_then(|slots| self.get(&slots))
            .is_some_and(|node| node.terminal)
    }

    /// Returns whether any stored word begins with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        prefix
            .slots()
            .ok()
            .and_then(|slots| self.get(&slots))
            .is_some()
    }

    /// The subtree below `prefix`, or `None` if no stored word continues it.
    ///
    /// An empty prefix selects the whole dictionary.
    pub fn branch(&self, prefix: &str) -> Option<Branch<'_>> {
        if prefix.is_empty() {
            return self.root().map(|root| Branch::new(String::new(), root));
        }
        let slots = prefix.slots().ok()?;
        let node = self.get(&slots)?;
        let prefix = slots.iter().map(|&slot| letter(slot as usize)).collect();
        Some(Branch::new(prefix, node))
    }

    /// Lazily yields the stored words beginning with `prefix`, in alphabetical depth-first order.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        if prefix.is_empty() {
            return Words::default();
        }
        self.branch(prefix)
            .map(Branch::into_words)
            .unwrap_or_default()
    }

    /// Collects every stored word beginning with `prefix`.
    ///
    /// The prefix itself comes first when it is a word; an empty or unknown prefix matches nothing.
    pub fn match_prefix(&self, prefix: &str) -> Vec<String> {
        self.words_with_prefix(prefix).collect()
    }

    /// Lazily yields every stored word.
    pub fn words(&self) -> Words<'_> {
        self.branch("").map(Branch::into_words).unwrap_or_default()
    }

    pub fn all_words(&self) -> Vec<String> {
        self.words().collect()
    }

    /// Removes a word, pruning every node it alone was keeping alive.
    ///
    /// Fails with [`Error::NotFound`] when the word is absent, including when it is only a prefix
    /// of longer words. A failed delete leaves the trie untouched.
    pub fn delete(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Err(Error::NotFound(word.to_owned()));
        }
        let slots = word.slots()?;

        match self.unwind(&slots) {
            Unwind::Missing => {
                debug!(word, "not found");
                return Err(Error::NotFound(word.to_owned()));
            }
            Unwind::Keep => {
                let node = self
                    .get_mut(&slots)
                    .ok_or_else(|| Error::NotFound(word.to_owned()))?;
                node.terminal = false;
            }
            Unwind::Prune(0) => {
                trace!(word, "releasing root");
                self.clear_root();
            }
            Unwind::Prune(depth) => {
                trace!(word, depth, "pruning branch");
                let parent = self
                    .get_mut(&slots[..depth - 1])
                    .ok_or_else(|| Error::NotFound(word.to_owned()))?;
                if let Some(branch) = parent.children[slots[depth - 1] as usize].take() {
                    Node::dismantle(branch);
                }
            }
        }

        self.len -= 1;
        debug!(word, len = self.len, "deleted");
        Ok(())
    }

    fn clear_root(&mut self) {
        if let Some(root) = self.root.take() {
            Node::dismantle(root);
        }
    }

    fn get(&self, slots: &[u8]) -> Option<&Node> {
        let mut node = self.root.as_deref()?;
        for &slot in slots {
            node = node.child(slot)?;
        }
        Some(node)
    }

    fn get_mut(&mut self, slots: &[u8]) -> Option<&mut Node> {
        let mut node = self.root.as_deref_mut()?;
        for &slot in slots {
            node = node.children[slot as usize].as_deref_mut()?;
        }
        Some(node)
    }

    /// Walks the path down, then decides bottom-up how much of it the deletion frees.
    fn unwind(&self, slots: &[u8]) -> Unwind {
        let Some(mut node) = self.root.as_deref() else {
            return Unwind::Missing;
        };
        let mut path: SmallVec<[&Node; 32]> = smallvec![node];
        for &slot in slots {
            let Some(child) = node.child(slot) else {
                return Unwind::Missing;
            };
            node = child;
            path.push(node);
        }

        if !node.terminal {
            return Unwind::Missing;
        }
        if node.live_children() > 0 {
            return Unwind::Keep;
        }

        // `path[depth]` loses its child `slots[depth]` whenever the level below is pruned.
        let mut top = slots.len();
        for (depth, ancestor) in path[..slots.len()].iter().enumerate().rev() {
            if ancestor.terminal || ancestor.live_children() > 1 {
                break;
            }
            top = depth;
        }
        Unwind::Prune(top)
    }
}
