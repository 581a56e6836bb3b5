mod cli;

use std::io::Write;

use clap::Parser;
use cli::{Cli, Cmd0, CmdI, CmdN, OptsLoad, OptsShow, StatFormat};
use lexitrie::{dataset, Stats, Trie};
use thiserror::Error;
use tracing::{info, warn, Level};

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Dictionary(#[from] lexitrie::Error),
    #[error("Unable to write the output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to encode the stats: {0}")]
    Json(#[from] serde_json::Error),
    #[error("The word: '{0}' is not in the dictionary")]
    Absent(String),
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    if let Err(err) = entry(cli.cmd) {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}

fn entry(cmd: Cmd0) -> Result<(), Error> {
    let (trie, last) = build(cmd)?;
    finish(&trie, last)
}

/// Runs every editing step of the chain, returning the dictionary and the query to answer.
fn build(cmd: Cmd0) -> Result<(Trie, CmdN), Error> {
    let mut trie = Trie::new();

    let mut next = match cmd {
        Cmd0::Load(chain) => {
            let (opts, next) = chain.into_parts();
            load(&mut trie, opts)?;
            next
        }
        Cmd0::Other(cmd) => Some(cmd),
    };

    while let Some(cmd) = next {
        next = match cmd {
            CmdI::Insert(chain) => {
                let (opts, next) = chain.into_parts();
                for word in &opts.words {
                    if !trie.insert(word)? {
                        info!(word = word.as_str(), "already in the dictionary");
                    }
                }
                next
            }
            CmdI::Delete(chain) => {
                let (opts, next) = chain.into_parts();
                for word in &opts.words {
                    // A missing word should not stop the rest of the chain.
                    if let Err(err) = trie.delete(word) {
                        warn!("{err}");
                    }
                }
                next
            }
            CmdI::Final(cmd) => return Ok((trie, cmd)),
        };
    }

    Ok((trie, CmdN::Show(OptsShow::default())))
}

fn load(trie: &mut Trie, mut opts: OptsLoad) -> Result<(), Error> {
    let words = opts.file.words(opts.format)?;
    let loaded = dataset::load(trie, words);
    info!(
        inserted = loaded.inserted,
        duplicates = loaded.duplicates,
        rejected = loaded.rejected,
        "loaded word list"
    );
    Ok(())
}

fn finish(trie: &Trie, cmd: CmdN) -> Result<(), Error> {
    let mut f = std::io::stdout().lock();
    match cmd {
        CmdN::Contains(opts) => {
            let found = trie.contains(&opts.word);
            writeln!(f, "{}", found)?;
            if !found {
                return Err(Error::Absent(opts.word));
            }
        }
        CmdN::Prefix(opts) => {
            let words = trie.words_with_prefix(&opts.prefix);
            if opts.count {
                writeln!(f, "{}", words.count())?;
            } else {
                for word in words {
                    writeln!(f, "{}", word)?;
                }
            }
        }
        CmdN::Show(opts) => {
            if opts.inline {
                writeln!(f, "{}", trie)?;
            } else {
                for word in trie.words() {
                    writeln!(f, "{}", word)?;
                }
            }
        }
        CmdN::Stats(opts) => {
            let stats = Stats::from(trie);
            match opts.format {
                StatFormat::Human => writeln!(f, "{}", stats)?,
                StatFormat::Json => writeln!(f, "{}", serde_json::to_string_pretty(&stats)?)?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(args: &[&str]) -> Result<(Trie, CmdN), Error> {
        let cli = Cli::try_parse_from(std::iter::once("lexitrie").chain(args.iter().copied()))
            .unwrap();
        build(cli.cmd)
    }

    #[test]
    fn failed_delete_continues() {
        let (trie, last) = run(&[
            "insert", "abc", "abcd", "delete", "zzz", "ABC", "insert", "abce", "contains", "abcd",
        ])
        .unwrap();
        assert_eq!(trie.all_words(), vec!["abcd", "abce"]);
        assert!(matches!(last, CmdN::Contains(opts) if opts.word == "abcd"));
    }

    #[test]
    fn invalid_insert_stops() {
        let err = run(&["insert", "abc", "ab1", "show"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Dictionary(lexitrie::Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn load_then_edit() {
        let (trie, last) = run(&["load", "frequent", "delete", "the", "insert", "thee"]).unwrap();
        assert!(!trie.contains("the"));
        assert_eq!(
            trie.match_prefix("the"),
            vec!["thee", "their", "them", "then", "there", "these", "they"]
        );
        assert!(matches!(last, CmdN::Show(OptsShow { inline: false })));
    }
}
