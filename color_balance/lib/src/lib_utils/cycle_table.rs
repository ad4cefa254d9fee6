/*
    Count laser triggers per cycle
        for every cycle position, sum the red and green activation
        of the base found at that position in each index
    Validate
        a cycle where neither laser fires for any index is dark
        the set passes only when no cycle is dark
*/

use std::ops::AddAssign;
use std::slice::Iter;
use log::debug;
use super::bases::Activation;
use super::index_set::IndexSet;

/// Red and green triggers summed over all indexes at one cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorCount {
    pub red: u32,
    pub green: u32,
}

impl ColorCount {
    pub fn total(&self) -> u32 {
        self.red + self.green
    }

    pub fn is_dark(&self) -> bool {
        self.total() == 0
    }
}

impl AddAssign<Activation> for ColorCount {
    fn add_assign(&mut self, activation: Activation) {
        self.red += u32::from(activation.red);
        self.green += u32::from(activation.green);
    }
}

impl From<ColorCount> for (u32, u32) {
    fn from(count: ColorCount) -> Self {
        (count.red, count.green)
    }
}

/// Per-cycle color counts, position `p` holding cycle `p + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleActivationTable {
    cycles: Vec<ColorCount>,
}

impl CycleActivationTable {
    pub fn aggregate(set: &IndexSet) -> CycleActivationTable {
        let mut cycles = vec![ColorCount::default(); set.index_length()];
        for index in set {
            cycles
                .iter_mut()
                .zip(index.bases())
                .for_each(|(count, base)| *count += base.activation());
        }
        debug!("Aggregated {} cycles over {} indexes", cycles.len(), set.len());
        CycleActivationTable { cycles }
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// Count at zero-based cycle position `position`.
    pub fn get(&self, position: usize) -> Option<&ColorCount> {
        self.cycles.get(position)
    }

    pub fn iter(&self) -> Iter<'_, ColorCount> {
        self.cycles.iter()
    }

    pub fn to_pairs(&self) -> Vec<(u32, u32)> {
        self.cycles.iter().map(|&count| count.into()).collect()
    }

    /// 1-based numbers of all cycles without any trigger.
    pub fn dark_cycles(&self) -> Vec<usize> {
        self.cycles
            .iter()
            .enumerate()
            .filter(|(_, count)| count.is_dark())
            .map(|(pos, _)| pos + 1)
            .collect()
    }
}

impl<'a> IntoIterator for &'a CycleActivationTable {
    type Item = &'a ColorCount;
    type IntoIter = Iter<'a, ColorCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `true` iff no cycle is dark. Stops at the first dark cycle.
pub fn validate(table: &CycleActivationTable) -> bool {
    match table.iter().position(ColorCount::is_dark) {
        Some(pos) => {
            debug!("Cycle {} has no red or green signal", pos + 1);
            false
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(raw: &str) -> CycleActivationTable {
        CycleActivationTable::aggregate(&IndexSet::parse(raw).unwrap())
    }

    #[test]
    fn single_base_is_its_own_activation() {
        for (raw, pair) in [("G", (0, 0)), ("T", (0, 1)), ("C", (1, 0)), ("A", (1, 1))] {
            assert_eq!(table(raw).to_pairs(), vec![pair]);
        }
    }

    #[test]
    fn sums_columns_independently() {
        let counts = table("GTCAGTCA,AGTAGTAC,CTCTGACA");
        assert_eq!(counts.len(), 8);
        assert_eq!(
            counts.to_pairs(),
            vec![(2, 1), (0, 2), (2, 1), (2, 3), (0, 0), (1, 3), (3, 1), (3, 2)]
        );
        assert_eq!(counts.get(4), Some(&ColorCount { red: 0, green: 0 }));
        assert_eq!(counts.get(8), None);
    }

    #[test]
    fn index_order_does_not_matter() {
        assert_eq!(table("GGGG,GTCA"), table("GTCA,GGGG"));
        assert_eq!(
            table("GTCAGTCA,AGTAGTAC,CTCTGACA"),
            table("CTCTGACA,GTCAGTCA,AGTAGTAC")
        );
    }

    #[test]
    fn lists_every_dark_cycle() {
        assert_eq!(table("GTCAGTCA,AGTAGTAC,CTCTGACA").dark_cycles(), vec![5]);
        assert_eq!(table("GGGG").dark_cycles(), vec![1, 2, 3, 4]);
        assert!(table("TTCAATCA").dark_cycles().is_empty());
    }

    #[test]
    fn validation_fails_on_any_dark_cycle() {
        assert!(!validate(&table("GTCA")));
        assert!(!validate(&table("GTCA,GTCA")));
        assert!(!validate(&table("TTCAATCG,GGGGGGGG")));
        assert!(validate(&table("TTCAATCA")));
        assert!(validate(&table("TTCAATCG,GGGGGGGA")));
    }
}
