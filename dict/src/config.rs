//! Validated run configuration.

use std::fmt;
use std::path::PathBuf;

use crate::address::FIELD_COUNT;
use crate::cli::Args;
use crate::error::DictError;

/// Which dictionary answers the queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Unindexed scan, exact matches only.
    Scan,
    /// Patricia trie, falling back to the closest spelling.
    Trie,
}

impl TryFrom<u8> for Stage {
    type Error = DictError;

    fn try_from(stage: u8) -> Result<Self, Self::Error> {
        match stage {
            1 => Ok(Stage::Scan),
            2 => Ok(Stage::Trie),
            other => Err(DictError::usage(format!(
                "stage must be 1 (scan) or 2 (trie), got {other}"
            ))),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Scan => f.write_str("scan"),
            Stage::Trie => f.write_str("trie"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub stage: Stage,
    pub input: PathBuf,
    pub output: PathBuf,
    pub key_field: usize,
}

impl TryFrom<&Args> for Config {
    type Error = DictError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let stage = Stage::try_from(args.stage)?;
        if args.key_field >= FIELD_COUNT {
            return Err(DictError::usage(format!(
                "key field must be below {FIELD_COUNT}, got {}",
                args.key_field
            )));
        }
        Ok(Config {
            stage,
            input: args.input.clone(),
            output: args.output.clone(),
            key_field: args.key_field,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn stages() {
        let config = Config::try_from(&parse(&["ptrie-dict", "2", "in.csv", "out.txt"])).unwrap();
        assert_eq!(config.stage, Stage::Trie);
        assert_eq!(config.input, PathBuf::from("in.csv"));
        assert_eq!(config.output, PathBuf::from("out.txt"));

        let err = Config::try_from(&parse(&["ptrie-dict", "3", "in.csv", "out.txt"])).unwrap_err();
        assert!(matches!(err, DictError::Usage(_)));
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }

    #[test]
    fn key_field_bounds() {
        let args = parse(&["ptrie-dict", "1", "a", "b", "--key-field", "0"]);
        assert_eq!(Config::try_from(&args).unwrap().key_field, 0);

        let args = parse(&["ptrie-dict", "1", "a", "b", "--key-field", "35"]);
        assert!(Config::try_from(&args).is_err());
    }

    #[test]
    fn missing_arguments_are_rejected() {
        assert!(Args::try_parse_from(["ptrie-dict", "1", "in.csv"]).is_err());
        assert!(Args::try_parse_from(["ptrie-dict", "x", "in.csv", "out.txt"]).is_err());
    }
}
