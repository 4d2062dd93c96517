/*!
[FmbContext] bundles one epoch's databases with the configuration and the
SAT oracle, mirroring the vendored SAT backend's own `Context` (one long-
lived struct threaded through every phase of the driver loop, §4.6).
*/

use otter_sat::generic::minimal_pcg::MinimalPCG32;
use rand::{RngCore, SeedableRng};

use crate::config::Config;
use crate::db::marker::MarkerScheme;
use crate::db::offsets::OffsetTable;
use crate::db::problem::SortedSignature;
use crate::oracle::SatOracle;
use crate::types::err::ErrorKind;

/// Where the driver currently sits in the state machine of §4.6. Also used
/// as the `max_state` bound of a [ConfigOption](crate::config::config_option::ConfigOption):
/// an option with `max_state = Initial` may only be changed before the
/// first [FmbContext::reset].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DriverState {
    Initial,
    EncodeAndSolve,
    Enumerate,
    Extract,
    Done,
    Refuted,
    GaveUp,
}

/// One epoch's worth of rebuildable state, plus the long-lived oracle and
/// configuration. `reset` is the only place that talks to the oracle to
/// allocate fresh atoms; everything else reads `offsets`/`markers`.
pub struct FmbContext {
    pub config: Config,
    pub signature: SortedSignature,
    pub offsets: OffsetTable,
    pub markers: MarkerScheme,
    pub oracle: Box<dyn SatOracle>,
    pub state: DriverState,

    /// Source of randomness for `randomTraversals` (§5's "optional shuffle
    /// step"). The vendored backend builds without the `std`/`std_rng` rand
    /// features, so this follows its own lead and uses the same
    /// dependency-free PCG32 rather than `rand::rng()`/`rand::random()`.
    shuffle_rng: MinimalPCG32,
}

impl FmbContext {
    pub fn new(config: Config, signature: SortedSignature, oracle: Box<dyn SatOracle>) -> Result<Self, ErrorKind> {
        let mut context = FmbContext {
            config,
            signature,
            offsets: OffsetTable::default(),
            markers: MarkerScheme::default(),
            oracle,
            state: DriverState::Initial,
            shuffle_rng: MinimalPCG32::from_seed(0_u64.to_le_bytes()),
        };
        context.reset()?;
        Ok(context)
    }

    /// Fisher-Yates shuffle in place, without pulling in `rand::seq`'s
    /// `alloc`-gated `SliceRandom` — matches the teacher's own preference
    /// for the narrower `rand::Rng` surface (see `otter_sat::procedures::decision`).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.shuffle_rng.next_u64() % (i as u64 + 1)) as usize;
            items.swap(i, j);
        }
    }

    /// The next pseudo-random `u64`, used to bias the oracle's next
    /// assignment for search diversity (§6's `randomTraversals`).
    pub fn next_seed(&mut self) -> u64 {
        self.shuffle_rng.next_u64()
    }

    /// Rebuilds `offsets` and `markers` for the current sort sizes (§4.1,
    /// "reset"), against a *fresh* oracle instance per §5's resource policy
    /// ("every `reset` returns ... a freshly rebuilt SAT solver instance").
    pub fn reset(&mut self) -> Result<(), ErrorKind> {
        log::debug!(target: crate::misc::log::targets::RESET, "rebuilding offsets and markers");

        self.oracle.reset();

        self.offsets = OffsetTable::reset(
            &self.signature,
            &mut *self.oracle,
            self.config.widget_order.value,
            self.config.symmetry_ratio.value,
        )?;

        self.markers = MarkerScheme::reset(
            self.config.enumeration_strategy.value.marker_mode(),
            &self.signature.sorts,
            &mut *self.oracle,
        )?;

        for axiom in self.markers.defining_axioms() {
            self.oracle.add_clause(&axiom)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::problem::SortedSignature;
    use crate::oracle::{OtterSatOracle, SatLiteral, SatOutcome};
    use crate::structures::sort::{DistinctSort, SortTable};

    fn single_sort_signature(size: crate::types::DomainValue) -> SortedSignature {
        let sorts = SortTable {
            parents: vec![0],
            sort_bounds: vec![None],
            distinct: vec![DistinctSort::new(1, None, size, false)],
            non_strict_constraints: Vec::new(),
            strict_constraints: Vec::new(),
        };
        SortedSignature {
            signature: crate::structures::signature::Signature::default(),
            sorts,
            var_eq_sorts: Default::default(),
            sorted_constants: Default::default(),
            sorted_functions: Default::default(),
        }
    }

    #[test]
    fn new_populates_offsets_and_markers() {
        let signature = single_sort_signature(2);
        let oracle = Box::new(OtterSatOracle::new());
        let context = FmbContext::new(Config::default(), signature, oracle).unwrap();

        assert_eq!(context.state, DriverState::Initial);
        let MarkerScheme::Contour(contour) = &context.markers else {
            panic!("default strategy is CONTOUR");
        };
        // Two candidate sizes (1 and 2) means two marker variables.
        assert!(contour.sort_of_marker(contour.marker(0, 0)).is_some());
        assert!(contour.sort_of_marker(contour.marker(0, 1)).is_some());
    }

    /// A contradictory pair of unit clauses asserted directly against the
    /// oracle must not survive a `reset`, since the whole point of handing
    /// the oracle a `reset` method is that it rebuilds against a fresh
    /// backend instance rather than reusing the one carrying stale clauses.
    #[test]
    fn reset_discards_previously_asserted_clauses() {
        let signature = single_sort_signature(2);
        let oracle = Box::new(OtterSatOracle::new());
        let mut context = FmbContext::new(Config::default(), signature, oracle).unwrap();

        let poison = context.oracle.fresh_atom().unwrap();
        context.oracle.add_clause(&[SatLiteral::new(poison, true)]).unwrap();
        context.oracle.add_clause(&[SatLiteral::new(poison, false)]).unwrap();
        assert_eq!(context.oracle.solve_under_assumptions(&[]).unwrap(), SatOutcome::Unsat);

        context.reset().unwrap();

        assert_eq!(context.oracle.solve_under_assumptions(&[]).unwrap(), SatOutcome::Sat);
    }
}
