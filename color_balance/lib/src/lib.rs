/*
    Color balance of sequencing indexes
        parse the comma separated indexes
            only A, C, G, T and ',' are allowed
            all indexes share one length, at most 12 bases
        count red and green laser triggers per cycle across all indexes
        validate that every cycle triggers at least one laser
*/

use log::{debug, info};
pub mod lib_utils;

pub use lib_utils::bases::{Activation, Base};
pub use lib_utils::cycle_table::{validate, ColorCount, CycleActivationTable};
pub use lib_utils::error::{InputError, ParseError};
pub use lib_utils::index_set::{Index, IndexSet, MAX_INDEX_LENGTH};
pub use lib_utils::struct_helper::IndexFileHelper;

pub fn parse_index_set(raw: &str) -> Result<IndexSet, ParseError> {
    IndexSet::parse(raw)
}

pub fn compute_and_validate(set: &IndexSet) -> (CycleActivationTable, bool) {
    let table = CycleActivationTable::aggregate(set);
    let valid = validate(&table);
    (table, valid)
}

/// Outcome of one computation over an index set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceReport {
    pub table: CycleActivationTable,
    pub valid: bool,
}

/// Holds a parsed index set and the result of the latest computation on it.
#[derive(Clone, Debug)]
pub struct ColorBalanceCalculator {
    indexes: IndexSet,
    report: Option<BalanceReport>,
}

impl ColorBalanceCalculator {
    pub fn new(raw: &str) -> Result<Self, ParseError> {
        Ok(Self::from_index_set(IndexSet::parse(raw)?))
    }

    pub fn from_index_set(indexes: IndexSet) -> Self {
        Self {
            indexes,
            report: None,
        }
    }

    /// Recomputes the table and validation, replacing any previous result.
    pub fn compute_and_validate(&mut self) -> &BalanceReport {
        let (table, valid) = compute_and_validate(&self.indexes);
        info!(
            "{} indexes over {} cycles: {}",
            self.indexes.len(),
            table.len(),
            if valid { "balanced" } else { "dark cycle found" }
        );
        debug!("Cycle counts {:?}", table.to_pairs());
        self.report.insert(BalanceReport { table, valid })
    }

    pub fn indexes(&self) -> &IndexSet {
        &self.indexes
    }

    pub fn report(&self) -> Option<&BalanceReport> {
        self.report.as_ref()
    }

    /// `None` until `compute_and_validate` has run.
    pub fn color_counts(&self) -> Option<&CycleActivationTable> {
        self.report.as_ref().map(|report| &report.table)
    }

    pub fn validation_result(&self) -> Option<bool> {
        self.report.as_ref().map(|report| report.valid)
    }
}
