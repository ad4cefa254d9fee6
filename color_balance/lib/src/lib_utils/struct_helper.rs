// struct to handle index files


use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use log::debug;
use super::error::InputError;
use super::index_set::IndexSet;

pub struct IndexFileHelper {
    pub path: PathBuf,
    pub raw: String,
}

impl IndexFileHelper {
    pub fn new(file: &Path) -> Result<IndexFileHelper, InputError> {
        // read the whole file, the index list is a single line
        let io_error = |source| InputError::Io { path: file.to_path_buf(), source };
        let mut buffer_reader = BufReader::new(File::open(file).map_err(io_error)?);
        let mut raw = String::new();
        buffer_reader.read_to_string(&mut raw).map_err(io_error)?;
        debug!("Read {} bytes from {:?}", raw.len(), file);
        strip_line_ending(&mut raw);
        Ok(Self {
            path: file.to_path_buf(),
            raw,
        })
    }

    pub fn parse(&self) -> Result<IndexSet, InputError> {
        IndexSet::parse(&self.raw).map_err(|source| InputError::Parse {
            origin: self.path.display().to_string(),
            source,
        })
    }
}

// drop the one line ending editors append, nothing else
fn strip_line_ending(raw: &mut String) {
    if raw.ends_with('\n') {
        raw.pop();
        if raw.ends_with('\r') {
            raw.pop();
        }
    }
}
