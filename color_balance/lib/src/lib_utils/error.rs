use std::path::PathBuf;

/// Reasons a comma separated index list is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid character {character:?} at offset {offset}; only 'A', 'C', 'G', 'T' and ',' are allowed")]
    InvalidCharacter { character: char, offset: usize },
    #[error("at least one index with at least length one needs to be passed")]
    Empty,
    #[error("index {index} has length {found}, expected {expected}; all indexes must share one length")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("index {index} has length {length}; indexes may be no longer than {max} bases", max = super::index_set::MAX_INDEX_LENGTH)]
    TooLong { index: usize, length: usize },
}

/// Failure to obtain an index set from an input source.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: ParseError,
    },
}
