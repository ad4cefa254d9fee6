// where an index list comes from


use std::fmt;
use std::path::PathBuf;
use check_indexes::{IndexFileHelper, IndexSet, InputError};
use log::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Literal(String),
}

impl Source {
    pub fn load(&self) -> Result<IndexSet, InputError> {
        match self {
            Source::File(path) => {
                debug!("Reading indexes from {:?}", path);
                IndexFileHelper::new(path)?.parse()
            }
            Source::Literal(raw) => IndexSet::parse(raw).map_err(|source| InputError::Parse {
                origin: String::from("command line"),
                source,
            }),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Literal(raw) => write!(f, "{raw}"),
        }
    }
}
