/*!
The grounding odometer (§4.2, §9).

Rather than the recursive `goto`-driven grounding loops of the system this
core is modelled on, grounding enumeration here is an explicit iterator: the
product of `{1, …, bound(v)}` over a clause's variables, incremented
right-most-variable-first with carry (§4.2, "Grounding enumeration is an
odometer").
*/

use crate::types::{ClauseVar, DomainValue};

/// An iterator over every grounding of a fixed list of variables, each
/// bounded independently (a variable's bound is
/// `min(size(sort(var)), sortBound(sort(var)))`, computed by the caller).
pub struct Odometer {
    vars: Vec<ClauseVar>,
    bounds: Vec<DomainValue>,
    current: Vec<DomainValue>,
    done: bool,
}

impl Odometer {
    /// Builds an odometer over `vars`, each bounded by the matching entry
    /// of `bounds`. A variable with bound `0` makes the whole product empty.
    pub fn new(vars: Vec<ClauseVar>, bounds: Vec<DomainValue>) -> Self {
        let done = bounds.iter().any(|&b| b == 0);
        let current = vec![1; vars.len()];
        Odometer {
            vars,
            bounds,
            current,
            done,
        }
    }

    /// The number of groundings this odometer will yield.
    pub fn len(&self) -> u64 {
        if self.done {
            return 0;
        }
        self.bounds.iter().map(|&b| b as u64).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for Odometer {
    /// A grounding: pairs of (variable, assigned value), in the same order
    /// the odometer was built with.
    type Item = Vec<(ClauseVar, DomainValue)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let grounding: Vec<(ClauseVar, DomainValue)> = self
            .vars
            .iter()
            .zip(self.current.iter())
            .map(|(&v, &val)| (v, val))
            .collect();

        // Advance right-most first, carrying leftward; overflow past the
        // left-most digit means every grounding has been produced.
        let mut i = self.current.len();
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            self.current[i] += 1;
            if self.current[i] <= self.bounds[i] {
                break;
            }
            self.current[i] = 1;
        }

        Some(grounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_full_product() {
        let odo = Odometer::new(vec![0, 1], vec![2, 3]);
        let groundings: Vec<_> = odo.collect();
        assert_eq!(groundings.len(), 6);
        assert_eq!(groundings[0], vec![(0, 1), (1, 1)]);
        assert_eq!(groundings[5], vec![(0, 2), (1, 3)]);
    }

    #[test]
    fn zero_bound_is_empty() {
        let odo = Odometer::new(vec![0], vec![0]);
        assert_eq!(odo.count(), 0);
    }

    #[test]
    fn empty_variable_list_yields_one_grounding() {
        let odo = Odometer::new(vec![], vec![]);
        let groundings: Vec<_> = odo.collect();
        assert_eq!(groundings, vec![vec![]]);
    }
}
