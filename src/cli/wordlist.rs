use clap::{
    builder::{EnumValueParser, PossibleValue, TypedValueParser, ValueParserFactory},
    ValueEnum,
};
use include_flate::flate;
use lexitrie::dataset::{self, Format};

/// Word lists compiled into the binary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuiltinsWords {
    /// A handful of words sharing prefixes.
    #[default]
    Sample,
    /// Common English words with their frequency, tab separated.
    Frequent,
}

impl BuiltinsWords {
    /// The layout the list is stored in.
    pub fn format(self) -> Format {
        match self {
            Self::Sample => Format::Lines,
            Self::Frequent => Format::Tsv,
        }
    }

    fn data(self) -> &'static [u8] {
        match self {
            Self::Sample => {
                flate!(static SAMPLE: [u8] from "words/sample.txt");
                SAMPLE.as_slice()
            }
            Self::Frequent => {
                flate!(static FREQUENT: [u8] from "words/frequent.tsv");
                FREQUENT.as_slice()
            }
        }
    }
}

/// Where `load` reads its words from: a builtin list, or a file (`-` for stdin).
#[derive(Debug, Clone)]
pub enum WordList {
    Builtin(BuiltinsWords),
    File(clio::Input),
}

impl WordList {
    /// Reads the raw words, in `format` if given, otherwise in the list's own layout.
    ///
    /// Files without an explicit format are read one word per line.
    pub fn words(&mut self, format: Option<Format>) -> lexitrie::Result<Vec<String>> {
        match self {
            Self::Builtin(builtin) => {
                dataset::parse(builtin.data(), format.unwrap_or(builtin.format()))
            }
            Self::File(file) => dataset::parse(file.lock(), format.unwrap_or_default()),
        }
    }
}

impl ValueParserFactory for WordList {
    type Parser = WordListParser;

    fn value_parser() -> Self::Parser {
        WordListParser
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WordListParser;

impl TypedValueParser for WordListParser {
    type Value = WordList;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        // A builtin name shadows a file of the same name in the working directory.
        if let Ok(builtin) = EnumValueParser::<BuiltinsWords>::new().parse_ref(cmd, arg, value) {
            return Ok(WordList::Builtin(builtin));
        }
        clio::Input::try_from(value).map(WordList::File).map_err(|err| {
            clap::Error::raw(
                clap::error::ErrorKind::Io,
                format!("Unable to open the word list {value:?}: {err}\n"),
            )
            .with_cmd(cmd)
        })
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        let builtins = BuiltinsWords::value_variants()
            .iter()
            .filter_map(ValueEnum::to_possible_value);
        let file = PossibleValue::new("<filepath>").help("Path to a word list, - for stdin");
        Some(Box::new(builtins.chain(std::iter::once(file))))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtins_use_their_own_layout() {
        let sample = WordList::Builtin(BuiltinsWords::Sample).words(None).unwrap();
        assert!(sample.iter().any(|word| word == "bcefgh"));

        let frequent = WordList::Builtin(BuiltinsWords::Frequent).words(None).unwrap();
        assert_eq!(frequent[..3], ["the", "of", "and"]);
        assert!(frequent.iter().all(|word| !word.contains('\t')));
    }

    #[test]
    fn explicit_format_wins() {
        // Read as plain lines, the counts stay attached to the words.
        let frequent = WordList::Builtin(BuiltinsWords::Frequent)
            .words(Some(Format::Lines))
            .unwrap();
        assert_eq!(frequent[0], "the\t2305");
    }

    #[test]
    fn builtin_names_parse() {
        let cmd = clap::Command::new("lexitrie");
        let parsed = WordListParser
            .parse_ref(&cmd, None, std::ffi::OsStr::new("frequent"))
            .unwrap();
        assert!(matches!(parsed, WordList::Builtin(BuiltinsWords::Frequent)));
    }
}
