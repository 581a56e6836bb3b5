mod chain;
mod wordlist;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
pub use chain::Chain;
use lexitrie::dataset::Format;
pub use wordlist::WordList;

/// Build a dictionary in memory and query it.
///
/// Commands run left to right against the same dictionary, e.g.
/// `lexitrie load sample insert cargo delete car prefix car`.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log more detail to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Cmd0,
}

#[derive(Debug, Subcommand)]
#[command(subcommand_precedence_over_arg = true)]
pub enum Cmd0 {
    /// Start from a word list.
    Load(Chain<OptsLoad, CmdI>),
    #[command(flatten)]
    Other(CmdI),
}

#[derive(Debug, Subcommand)]
#[command(subcommand_precedence_over_arg = true)]
pub enum CmdI {
    /// Add words to the dictionary.
    Insert(Chain<OptsWords, Self>),
    /// Remove words from the dictionary.
    Delete(Chain<OptsWords, Self>),
    #[command(flatten)]
    /// Final command to execute.
    Final(CmdN),
}

#[derive(Debug, Subcommand)]
pub enum CmdN {
    /// Check whether a word is stored.
    Contains(OptsContains),
    /// List the words starting with a prefix.
    Prefix(OptsPrefix),
    /// Print every word.
    Show(OptsShow),
    /// Display statistics about the dictionary.
    Stats(OptsStats),
}

#[derive(Debug, Args)]
pub struct OptsLoad {
    /// Word list to load.
    pub file: WordList,
    /// Layout of the word list [default: the builtin's own, or lines for a file]
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,
}

#[derive(Debug, Args)]
pub struct OptsWords {
    /// Words to apply the command to.
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

#[derive(Debug, Args)]
pub struct OptsContains {
    /// Word to look up.
    pub word: String,
}

#[derive(Debug, Args)]
pub struct OptsPrefix {
    /// Prefix the words must start with.
    pub prefix: String,
    /// Only print the number of matches.
    #[arg(short, long)]
    pub count: bool,
}

#[derive(Debug, Default, Args)]
pub struct OptsShow {
    /// Print the words on one line, as a list.
    #[arg(short, long)]
    pub inline: bool,
}

#[derive(Debug, Args)]
pub struct OptsStats {
    #[arg(short, long, value_enum, default_value_t = StatFormat::Human)]
    pub format: StatFormat,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatFormat {
    /// Print the stats in a human-readable format.
    #[default]
    Human,
    /// Print the stats in a machine-readable format (JSON).
    Json,
}

#[cfg(test)]
mod test {
    use super::{wordlist::BuiltinsWords, *};

    #[test]
    fn commands_chain() {
        let cli = Cli::try_parse_from([
            "lexitrie", "insert", "abc", "abcd", "delete", "abc", "prefix", "ab",
        ])
        .unwrap();

        let Cmd0::Other(CmdI::Insert(insert)) = cli.cmd else {
            panic!("expected insert first");
        };
        let (opts, next) = insert.into_parts();
        assert_eq!(opts.words, vec!["abc", "abcd"]);

        let Some(CmdI::Delete(delete)) = next else {
            panic!("expected delete second");
        };
        let (opts, next) = delete.into_parts();
        assert_eq!(opts.words, vec!["abc"]);

        let Some(CmdI::Final(CmdN::Prefix(prefix))) = next else {
            panic!("expected prefix last");
        };
        assert_eq!(prefix.prefix, "ab");
        assert!(!prefix.count);
    }

    #[test]
    fn load_builtin() {
        let cli = Cli::try_parse_from(["lexitrie", "-vv", "load", "sample", "-f", "tsv", "show"])
            .unwrap();
        assert_eq!(cli.verbose, 2);

        let Cmd0::Load(load) = cli.cmd else {
            panic!("expected load");
        };
        let (opts, next) = load.into_parts();
        assert!(matches!(opts.file, WordList::Builtin(BuiltinsWords::Sample)));
        assert_eq!(opts.format, Some(Format::Tsv));
        assert!(matches!(next, Some(CmdI::Final(CmdN::Show(_)))));
    }

    #[test]
    fn update_replaces_words() {
        let mut cli = Cli::try_parse_from(["lexitrie", "insert", "abc", "show"]).unwrap();
        cli.try_update_from(["lexitrie", "insert", "xyz", "show", "--inline"])
            .unwrap();

        let Cmd0::Other(CmdI::Insert(insert)) = cli.cmd else {
            panic!("expected insert");
        };
        let (opts, next) = insert.into_parts();
        assert_eq!(opts.words, vec!["xyz"]);
        assert!(matches!(next, Some(CmdI::Final(CmdN::Show(OptsShow { inline: true })))));
    }
}
