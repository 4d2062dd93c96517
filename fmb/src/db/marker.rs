/*!
The marker-assumption manager (§4.5).

Re-solving the same clause set at a larger size vector without rebuilding
the SAT solver is done by wiring *assumption literals* onto size-sensitive
clauses. Two independent schemes are supported, selected by
[EnumerationStrategy](crate::procedures::enumerate::EnumerationStrategy)
construction: CONTOUR's per-sort staircase, and SBMEAM's totality/instance
flags.
*/

use crate::db::offsets::VarId;
use crate::oracle::{SatLiteral, SatOracle};
use crate::structures::sort::SortTable;
use crate::types::err::EncodeError;
use crate::types::DistinctSortId;
use std::collections::HashMap;

/// A marker-assumption scheme: wires size-sensitive clauses, and hands the
/// driver the assumption vector to solve under.
pub enum MarkerScheme {
    Contour(ContourMarkers),
    Sbmeam(SbmeamMarkers),
}

impl Default for MarkerScheme {
    /// An empty CONTOUR scheme, used only to give [FmbContext](crate::context::FmbContext)
    /// a value to construct with before its first real `reset`.
    fn default() -> Self {
        MarkerScheme::Contour(ContourMarkers {
            markers: HashMap::new(),
        })
    }
}

impl MarkerScheme {
    /// Rebuilds the marker region for the current sort sizes (part of
    /// [OffsetTable::reset](crate::db::offsets::OffsetTable::reset), kept
    /// as a separate step since the marker variables are allocated *after*
    /// every symbol block — see §3, SAT variable space, region 3).
    pub fn reset(
        mode: MarkerMode,
        sorts: &SortTable,
        oracle: &mut dyn SatOracle,
    ) -> Result<Self, EncodeError> {
        match mode {
            MarkerMode::Contour => Ok(MarkerScheme::Contour(ContourMarkers::build(sorts, oracle)?)),
            MarkerMode::Sbmeam | MarkerMode::Smt => {
                Ok(MarkerScheme::Sbmeam(SbmeamMarkers::build(sorts, oracle)?))
            }
        }
    }

    /// The assumption vector to solve under for the current size vector
    /// (§4.5, "Solver assumption per query").
    pub fn assumptions(&self) -> Vec<SatLiteral> {
        match self {
            MarkerScheme::Contour(m) => m.assumptions(),
            MarkerScheme::Sbmeam(m) => m.assumptions(),
        }
    }

    /// The axioms that define the marker region itself (the CONTOUR
    /// staircase, or nothing for SBMEAM — its markers are only ever used as
    /// clause tails, not axiomatised amongst themselves).
    pub fn defining_axioms(&self) -> Vec<Vec<SatLiteral>> {
        match self {
            MarkerScheme::Contour(m) => m.staircase_axioms(),
            MarkerScheme::Sbmeam(_) => Vec::new(),
        }
    }
}

/// Which marker scheme is active. `Smt` reuses the SBMEAM marker shape —
/// see §4.6, Mode B′ — since it differs only in how no-goods are searched,
/// not in how instances are marked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerMode {
    Contour,
    Sbmeam,
    Smt,
}

/// Mode A: one staircase per distinct sort.
pub struct ContourMarkers {
    /// `marker[s][j]` for `j in 0..size[s]`.
    markers: HashMap<DistinctSortId, Vec<VarId>>,
}

impl ContourMarkers {
    fn build(sorts: &SortTable, oracle: &mut dyn SatOracle) -> Result<Self, EncodeError> {
        let mut markers = HashMap::new();
        for (s, sort) in sorts.distinct.iter().enumerate() {
            let mut block = Vec::with_capacity(sort.current as usize);
            for _ in 0..sort.current {
                block.push(oracle.fresh_atom().map_err(|_| EncodeError::AtomsExhausted)?);
            }
            markers.insert(s as DistinctSortId, block);
        }
        Ok(ContourMarkers { markers })
    }

    /// `marker[s][j]`, the marker variable for sort `s` at candidate size `j + 1`.
    pub fn marker(&self, s: DistinctSortId, j: usize) -> VarId {
        self.markers[&s][j]
    }

    /// The largest marker index in use for sort `s`.
    fn top_index(&self, s: DistinctSortId) -> usize {
        self.markers[&s].len() - 1
    }

    /// Staircase axioms: `¬marker[s][j+1] ∨ marker[s][j]` for every `j`.
    fn staircase_axioms(&self) -> Vec<Vec<SatLiteral>> {
        let mut clauses = Vec::new();
        for block in self.markers.values() {
            for j in 0..block.len().saturating_sub(1) {
                clauses.push(vec![
                    SatLiteral::new(block[j + 1], false),
                    SatLiteral::new(block[j], true),
                ]);
            }
        }
        clauses
    }

    /// `¬marker[s][max_val_used − 2]`, appended to an instance to keep it
    /// active only while `s` is at least that large (§4.5). `max_val_used`
    /// is 1-based; sorts mentioned only at value 1 contribute no literal,
    /// matching "each instance ... for every non-monotonic distinct sort
    /// mentioned".
    pub fn instance_guard(&self, s: DistinctSortId, max_val_used: u32) -> Option<SatLiteral> {
        if max_val_used < 2 {
            return None;
        }
        let j = (max_val_used - 2) as usize;
        let j = j.min(self.top_index(s));
        Some(SatLiteral::new(self.markers[&s][j], false))
    }

    /// The totality-axiom marker for sort `s` at candidate result
    /// cardinality `i`, using the *largest* marker for the top version
    /// (§4.5): `m = min(i − 1, size[s] − 1)`.
    pub fn totality_marker(&self, s: DistinctSortId, i: u32) -> SatLiteral {
        let top = self.top_index(s);
        let m = ((i.saturating_sub(1)) as usize).min(top);
        SatLiteral::new(self.markers[&s][m], true)
    }

    fn assumptions(&self) -> Vec<SatLiteral> {
        self.markers
            .values()
            .map(|block| SatLiteral::new(*block.last().unwrap(), false))
            .collect()
    }

    /// Which distinct sort, if any, owns the marker variable `var` — used
    /// by [ContourEnumerator](crate::procedures::enumerate::ContourEnumerator)
    /// to turn a failed assumption back into a candidate-to-grow sort.
    pub fn sort_of_marker(&self, var: VarId) -> Option<DistinctSortId> {
        self.markers
            .iter()
            .find(|(_, block)| block.contains(&var))
            .map(|(&s, _)| s)
    }
}

/// Mode B: two marker blocks per distinct sort, `tot[s]` and `inst[s]`.
pub struct SbmeamMarkers {
    tot: HashMap<DistinctSortId, VarId>,
    inst: HashMap<DistinctSortId, VarId>,
}

impl SbmeamMarkers {
    fn build(sorts: &SortTable, oracle: &mut dyn SatOracle) -> Result<Self, EncodeError> {
        let mut tot = HashMap::new();
        let mut inst = HashMap::new();
        for s in 0..sorts.distinct.len() as DistinctSortId {
            tot.insert(s, oracle.fresh_atom().map_err(|_| EncodeError::AtomsExhausted)?);
            inst.insert(s, oracle.fresh_atom().map_err(|_| EncodeError::AtomsExhausted)?);
        }
        Ok(SbmeamMarkers { tot, inst })
    }

    /// `¬tot[s]`, appended to every totality clause for sort `s`.
    pub fn totality_guard(&self, s: DistinctSortId) -> SatLiteral {
        SatLiteral::new(self.tot[&s], false)
    }

    /// `¬inst[s]`, appended to every instance touching non-monotonic sort `s`.
    pub fn instance_guard(&self, s: DistinctSortId) -> SatLiteral {
        SatLiteral::new(self.inst[&s], false)
    }

    pub fn tot_var(&self, s: DistinctSortId) -> VarId {
        self.tot[&s]
    }

    pub fn inst_var(&self, s: DistinctSortId) -> VarId {
        self.inst[&s]
    }

    fn assumptions(&self) -> Vec<SatLiteral> {
        self.tot
            .values()
            .chain(self.inst.values())
            .map(|&v| SatLiteral::new(v, true))
            .collect()
    }
}
