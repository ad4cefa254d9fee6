/*
    Parse a comma separated list of index sequences
        reject any character other than A, C, G, T and ','
        split on ',' without trimming
        the first segment sets the expected index length
            an empty first segment means there is no data
        every segment must match that length and be <= 12 bases
*/

use std::fmt;
use std::slice::Iter;
use std::str::FromStr;
use log::{debug, trace};
use super::bases::Base;
use super::error::ParseError;

pub const MAX_INDEX_LENGTH: usize = 12;
const INDEX_DELIMITER: char = ',';

/// A single barcode, one base per sequencing cycle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Index(Vec<Base>);

impl Index {
    pub fn bases(&self) -> &[Base] {
        &self.0
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|base| write!(f, "{}", base.as_char()))
    }
}

/// Non-empty set of indexes that all share one length in `1..=MAX_INDEX_LENGTH`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexSet {
    indexes: Vec<Index>,
    index_length: usize,
}

impl IndexSet {
    pub fn parse(raw: &str) -> Result<IndexSet, ParseError> {
        // every character is converted before any segment length is looked at
        let mut segments: Vec<Vec<Base>> = Vec::new();
        let mut current: Vec<Base> = Vec::new();
        for (offset, character) in raw.char_indices() {
            if character == INDEX_DELIMITER {
                segments.push(std::mem::take(&mut current));
                continue;
            }
            let base = Base::try_from(character).map_err(|character| {
                debug!("Rejected character {:?} at offset {}", character, offset);
                ParseError::InvalidCharacter { character, offset }
            })?;
            current.push(base);
        }
        segments.push(current);

        let index_length = segments.first().map_or(0, Vec::len);
        if index_length < 1 {
            return Err(ParseError::Empty);
        }

        let mut indexes = Vec::with_capacity(segments.len());
        for (index, bases) in segments.into_iter().enumerate() {
            let length = bases.len();
            if length > MAX_INDEX_LENGTH {
                return Err(ParseError::TooLong { index, length });
            } else if length != index_length {
                return Err(ParseError::LengthMismatch {
                    index,
                    expected: index_length,
                    found: length,
                });
            }
            let parsed = Index(bases);
            trace!("Parsed index {}: {}", index, parsed);
            indexes.push(parsed);
        }
        debug!("Parsed {} indexes of length {}", indexes.len(), index_length);
        Ok(IndexSet { indexes, index_length })
    }

    /// Shared length of every index, i.e. the number of cycles.
    pub fn index_length(&self) -> usize {
        self.index_length
    }

    /// Number of indexes in the set.
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Index> {
        self.indexes.iter()
    }
}

impl FromStr for IndexSet {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        IndexSet::parse(raw)
    }
}

impl<'a> IntoIterator for &'a IndexSet {
    type Item = &'a Index;
    type IntoIter = Iter<'a, Index>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, index) in self.indexes.iter().enumerate() {
            if pos > 0 {
                write!(f, "{INDEX_DELIMITER}")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strings(set: &IndexSet) -> Vec<String> {
        set.iter().map(|index| index.to_string()).collect()
    }

    #[test]
    fn keeps_segment_order() {
        let set = IndexSet::parse("GTC,AAA,GTA,AGT,AGT,ACT,CTC,TCT").unwrap();
        assert_eq!(set.len(), 8);
        assert_eq!(set.index_length(), 3);
        assert_eq!(
            as_strings(&set),
            ["GTC", "AAA", "GTA", "AGT", "AGT", "ACT", "CTC", "TCT"]
        );
        assert_eq!(set.to_string(), "GTC,AAA,GTA,AGT,AGT,ACT,CTC,TCT");
    }

    #[test]
    fn every_index_has_the_first_segment_length() {
        let set: IndexSet = "GTCAAAGTAAGT,AGTACTCTCTCT".parse().unwrap();
        assert_eq!(set.index_length(), 12);
        assert!(set.iter().all(|index| index.bases().len() == 12));
    }

    #[test]
    fn reports_first_invalid_character() {
        assert_eq!(
            IndexSet::parse("ABCD,XCTG,CTCT"),
            Err(ParseError::InvalidCharacter { character: 'B', offset: 1 })
        );
        assert_eq!(
            IndexSet::parse("GTCA.AGTA"),
            Err(ParseError::InvalidCharacter { character: '.', offset: 4 })
        );
        // no trimming of whitespace or line endings
        assert!(matches!(
            IndexSet::parse("GTCA\n"),
            Err(ParseError::InvalidCharacter { character: '\n', .. })
        ));
        assert!(matches!(
            IndexSet::parse("gtca"),
            Err(ParseError::InvalidCharacter { character: 'g', .. })
        ));
    }

    #[test]
    fn character_check_runs_before_length_check() {
        assert!(matches!(
            IndexSet::parse("GTCAA,AGTA,CTCN"),
            Err(ParseError::InvalidCharacter { character: 'N', .. })
        ));
        assert_eq!(
            IndexSet::parse("GTCA,AGTA,CTCN"),
            Err(ParseError::InvalidCharacter { character: 'N', offset: 13 })
        );
    }

    #[test]
    fn empty_first_segment_is_empty_input() {
        assert_eq!(IndexSet::parse(""), Err(ParseError::Empty));
        assert_eq!(IndexSet::parse(",CTCA,AGTA"), Err(ParseError::Empty));
        assert_eq!(IndexSet::parse(","), Err(ParseError::Empty));
    }

    #[test]
    fn empty_later_segments_fail_the_length_check() {
        assert_eq!(
            IndexSet::parse("GTCA,,AGTA,CTCT"),
            Err(ParseError::LengthMismatch { index: 1, expected: 4, found: 0 })
        );
        assert_eq!(
            IndexSet::parse("GTCA,AGTA,"),
            Err(ParseError::LengthMismatch { index: 2, expected: 4, found: 0 })
        );
    }

    #[test]
    fn rejects_mismatched_and_long_indexes() {
        assert_eq!(
            IndexSet::parse("GTCAA,AGTA,CTCT"),
            Err(ParseError::LengthMismatch { index: 1, expected: 5, found: 4 })
        );
        assert_eq!(
            IndexSet::parse("GTCAAAGTAAGTA,AGTACTCTCTCTG"),
            Err(ParseError::TooLong { index: 0, length: 13 })
        );
        assert_eq!(
            IndexSet::parse("GTCA,GTCAAAGTAAGTA"),
            Err(ParseError::TooLong { index: 1, length: 13 })
        );
    }
}
