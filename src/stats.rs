#[cfg(feature = "serde")]
use serde::Serialize;

use crate::trie::Trie;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// Number of stored words
    pub words: usize,
    /// Number of allocated nodes, including the root
    pub nodes: usize,
    /// Number of nodes that end a word
    pub terminal_nodes: usize,
    /// Nodes where stored words diverge
    pub branching: usize,
    /// Total number of letters over all words
    pub chars: usize,
    /// Length of the longest word
    pub longest: usize,
}

impl Stats {
    fn new(trie: &Trie) -> Self {
        let mut stats = Self {
            words: trie.len(),
            ..Default::default()
        };

        let Some(root) = trie.root() else {
            return stats;
        };
        for (depth, node) in root.walk() {
            stats.nodes += 1;
            if node.children().nth(1).is_some() {
                stats.branching += 1;
            }
            if node.terminal {
                stats.terminal_nodes += 1;
                stats.chars += depth;
                stats.longest = stats.longest.max(depth);
            }
        }

        stats
    }
}

impl From<&Trie> for Stats {
    fn from(trie: &Trie) -> Self {
        Self::new(trie)
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "words:     {}", self.words)?;
        writeln!(f, "nodes:     {}", self.nodes)?;
        writeln!(f, "terminal:  {}", self.terminal_nodes)?;
        writeln!(f, "branching: {}", self.branching)?;
        writeln!(f, "letters:   {}", self.chars)?;
        write!(f, "longest:   {}", self.longest)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(Stats::from(&Trie::new()), Stats::default());
    }

    #[test]
    fn scenario() {
        let trie: Trie = ["abc", "abcd", "bcef", "bceee", "bcefg", "bcefgh"]
            .into_iter()
            .collect();
        let stats = Stats::from(&trie);
        assert_eq!(stats.words, 6);
        assert_eq!(stats.terminal_nodes, 6);
        assert_eq!(stats.nodes, trie.node_count());
        assert_eq!(stats.chars, 3 + 4 + 4 + 5 + 5 + 6);
        assert_eq!(stats.longest, 6);
        // root (a, b) and bce (e, f)
        assert_eq!(stats.branching, 2);
    }
}
