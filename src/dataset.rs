use std::io::BufRead;

use tracing::{debug, warn};

use crate::{error::Result, trie::Trie};

/// Layout of a word list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    /// One word per line.
    #[default]
    Lines,
    /// Tab separated, the word in the first column.
    Tsv,
    /// Comma separated, the word in the first column.
    Csv,
    /// Free text, split into words.
    Text,
}

/// Outcome of loading a batch of words.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Loaded {
    pub inserted: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

/// Lowercases a trimmed word, keeping it only if it is spelt entirely from `a` to `z`.
pub fn normalise(word: &str) -> Option<String> {
    let word = word.trim();
    (!word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| word.to_ascii_lowercase())
}

/// Reads the raw words out of a word list.
///
/// Nothing is validated here; words outside the alphabet are counted when they are [`load`]ed.
pub fn parse(reader: impl BufRead, format: Format) -> Result<Vec<String>> {
    match format {
        Format::Lines => {
            let mut words = Vec::new();
            for line in reader.lines() {
                let line = line?;
                let word = line.trim();
                if !word.is_empty() {
                    words.push(word.to_owned());
                }
            }
            Ok(words)
        }
        Format::Tsv => columns(reader, b'\t'),
        Format::Csv => columns(reader, b','),
        Format::Text => {
            use unicode_segmentation::UnicodeSegmentation;
            let mut words = Vec::new();
            for line in reader.lines() {
                words.extend(
                    line?
                        .split_word_bounds()
                        .filter(|word| word.contains(char::is_alphabetic))
                        .map(str::to_owned),
                );
            }
            Ok(words)
        }
    }
}

fn columns(reader: impl BufRead, delimiter: u8) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut words = Vec::new();
    for record in rdr.records() {
        if let Some(word) = record?.get(0).map(str::trim).filter(|w| !w.is_empty()) {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}

/// Inserts a batch of words, counting what happened to each.
pub fn load<S: AsRef<str>>(trie: &mut Trie, words: impl IntoIterator<Item = S>) -> Loaded {
    let mut loaded = Loaded::default();
    for raw in words {
        let Some(word) = normalise(raw.as_ref()) else {
            warn!(word = raw.as_ref(), "rejected: not a word from a to z");
            loaded.rejected += 1;
            continue;
        };
        match trie.insert(&word) {
            Ok(true) => loaded.inserted += 1,
            Ok(false) => loaded.duplicates += 1,
            Err(err) => {
                warn!("rejected: {err}");
                loaded.rejected += 1;
            }
        }
    }
    debug!(?loaded, len = trie.len(), "loaded word list");
    loaded
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn normalise_words() {
        assert_eq!(normalise("  Hello "), Some("hello".to_owned()));
        assert_eq!(normalise("don't"), None);
        assert_eq!(normalise(""), None);
        assert_eq!(normalise("naïve"), None);
    }

    #[test]
    fn parse_lines() {
        let words = parse(Cursor::new("abc\n\n  abcd \nbcef\n"), Format::Lines).unwrap();
        assert_eq!(words, vec!["abc", "abcd", "bcef"]);
    }

    #[test]
    fn parse_tsv_takes_first_column() {
        let words = parse(Cursor::new("the\t100\nof\t50\nand\n"), Format::Tsv).unwrap();
        assert_eq!(words, vec!["the", "of", "and"]);
    }

    #[test]
    fn parse_csv_takes_first_column() {
        let words = parse(Cursor::new("apple,1\nbanana,2,extra\n"), Format::Csv).unwrap();
        assert_eq!(words, vec!["apple", "banana"]);
    }

    #[test]
    fn parse_text_splits_words() {
        let words = parse(Cursor::new("The cat, the hat.\n42 bats!"), Format::Text).unwrap();
        assert_eq!(words, vec!["The", "cat", "the", "hat", "bats"]);
    }

    #[test]
    fn load_counts_outcomes() {
        let mut trie = Trie::new();
        let loaded = load(&mut trie, ["The", "cat", "the", "c4t", "hat"]);
        assert_eq!(
            loaded,
            Loaded {
                inserted: 3,
                duplicates: 1,
                rejected: 1,
            }
        );
        assert_eq!(trie.all_words(), vec!["cat", "hat", "the"]);
    }
}
