/*!
The SAT backend adapter (§6, "Consumed from SAT").

The core never talks to a SAT solver directly: every call goes through
[SatOracle], a small capability trait mirroring the six operations §6
lists. The only implementation shipped here, [OtterSatOracle], wraps the
vendored [otter_sat] CDCL solver — but nothing elsewhere in the crate
depends on that, so a different backend is a matter of providing another
[SatOracle] impl.
*/

use otter_sat::config::Config as OtterConfig;
use otter_sat::context::Context as OtterContext;
use otter_sat::reports::Report as OtterReport;
use otter_sat::structures::clause::CClause;
use otter_sat::structures::literal::{CLiteral, Literal as OtterLiteral};
use otter_sat::types::err as otter_err;

use crate::types::err::SatError;

/// A literal over a SAT variable: an atom id plus a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SatLiteral {
    pub var: u32,
    pub polarity: bool,
}

impl SatLiteral {
    pub fn new(var: u32, polarity: bool) -> Self {
        SatLiteral { var, polarity }
    }

    pub fn negate(self) -> Self {
        SatLiteral {
            var: self.var,
            polarity: !self.polarity,
        }
    }
}

/// The outcome of a single `solve_under_assumptions` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SatOutcome {
    Sat,
    Unsat,
}

/// §6's "Consumed from SAT" list, as a trait.
pub trait SatOracle {
    /// Requests a single fresh SAT variable. Errs once the backend's id
    /// space is exhausted (§3's overflow condition, backend half).
    fn fresh_atom(&mut self) -> Result<u32, SatError>;

    /// Adds one clause to the backend's formula.
    fn add_clause(&mut self, literals: &[SatLiteral]) -> Result<(), SatError>;

    /// Solves the current formula under `assumptions`.
    fn solve_under_assumptions(&mut self, assumptions: &[SatLiteral]) -> Result<SatOutcome, SatError>;

    /// The subset of the last call's assumptions that were part of the
    /// unsatisfiable core, valid only after `Unsat`.
    fn failed_assumptions(&self) -> Vec<SatLiteral>;

    /// Whether `literal` is true in the last satisfying assignment, valid
    /// only after `Sat`.
    fn true_in_assignment(&self, literal: SatLiteral) -> bool;

    /// Asks the backend to bias its next decisions differently — used for
    /// `randomTraversals` style search diversity (§5, §6).
    fn randomize_for_next_assignment(&mut self, seed: u64);

    /// Discards all clauses and assumptions and starts over with a fresh
    /// backend instance (§5's resource policy: "every `reset` returns ... a
    /// freshly rebuilt SAT solver instance"). Variable ids are reused from 1
    /// each epoch, so the old formula must not survive alongside the new one.
    fn reset(&mut self);
}

/// The default [SatOracle], wrapping a freshly constructed
/// [otter_sat::context::Context] per epoch (§5's resource policy: "every
/// `reset` returns ... a freshly rebuilt SAT solver instance").
pub struct OtterSatOracle {
    ctx: OtterContext,
    last_assumptions: Vec<SatLiteral>,
}

impl OtterSatOracle {
    pub fn new() -> Self {
        OtterSatOracle::with_config(OtterConfig::default())
    }

    pub fn with_config(config: OtterConfig) -> Self {
        OtterSatOracle {
            ctx: OtterContext::from_config(config),
            last_assumptions: Vec::new(),
        }
    }
}

impl Default for OtterSatOracle {
    fn default() -> Self {
        OtterSatOracle::new()
    }
}

fn to_c_literal(literal: SatLiteral) -> CLiteral {
    CLiteral::new(literal.var, literal.polarity)
}

impl SatOracle for OtterSatOracle {
    fn fresh_atom(&mut self) -> Result<u32, SatError> {
        self.ctx
            .fresh_atom()
            .map_err(|_: otter_err::AtomDBError| SatError::VariablesExhausted)
    }

    fn add_clause(&mut self, literals: &[SatLiteral]) -> Result<(), SatError> {
        let clause: CClause = literals.iter().copied().map(to_c_literal).collect();
        self.ctx
            .add_clause(clause)
            .map(|_| ())
            .map_err(|_| SatError::SolverFailure)
    }

    fn solve_under_assumptions(&mut self, assumptions: &[SatLiteral]) -> Result<SatOutcome, SatError> {
        self.last_assumptions = assumptions.to_vec();

        for &literal in assumptions {
            self.ctx
                .add_assumption(to_c_literal(literal))
                .map_err(|_| SatError::SolverFailure)?;
        }

        // Safety: assumptions are added immediately above, with no decision
        // made in between, matching the precondition of `assert_assumptions`.
        unsafe {
            self.ctx
                .assert_assumptions()
                .map_err(|_| SatError::SolverFailure)?;
        }

        match self.ctx.solve() {
            Ok(OtterReport::Satisfiable) => Ok(SatOutcome::Sat),
            Ok(OtterReport::Unsatisfiable) => Ok(SatOutcome::Unsat),
            Ok(OtterReport::Unknown) => Err(SatError::SolverFailure),
            Err(_) => Err(SatError::SolverFailure),
        }
    }

    fn failed_assumptions(&self) -> Vec<SatLiteral> {
        self.ctx
            .failed_assumpions()
            .into_iter()
            .map(|l| SatLiteral::new(l.atom(), l.polarity()))
            .collect()
    }

    fn true_in_assignment(&self, literal: SatLiteral) -> bool {
        match self.ctx.atom_db.value_of(literal.var) {
            Some(value) => value == literal.polarity,
            None => false,
        }
    }

    fn randomize_for_next_assignment(&mut self, seed: u64) {
        self.ctx.config.polarity_lean.value = ((seed % 1000) as f64) / 1000.0;
    }

    fn reset(&mut self) {
        self.ctx = OtterContext::from_config(self.ctx.config.clone());
        self.last_assumptions.clear();
    }
}
