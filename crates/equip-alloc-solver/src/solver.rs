// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use equip_alloc_core::SolverVariable;
use equip_alloc_model::{
    id::{EquipmentId, ProgramId},
    problem::Problem,
    sol::Solution,
};
use std::{cmp::Reverse, collections::HashMap};

/// Contract shared by all allocation engines.
///
/// A solver is a pure function of the problem: it holds no state across
/// calls, so one instance may serve concurrent callers. The returned
/// solution is complete and invariant-satisfying, or the solver's error is
/// raised; there is no partial result.
pub trait Solver<C: SolverVariable> {
    type SolveError: std::error::Error;

    fn solve(&self, problem: &Problem<C>) -> Result<Solution<C>, Self::SolveError>;
}

/// Terminal states that need no solver machinery: no equipment at all, or
/// equipment with zero total capacity. Both yield an empty solution whose
/// status is derived by the model layer.
pub(crate) fn trivial_solution<C: SolverVariable>(problem: &Problem<C>) -> Option<Solution<C>> {
    if problem.equipment_count() == 0 || problem.total_capacity().is_zero() {
        Some(Solution::from_decisions(problem, HashMap::new()))
    } else {
        None
    }
}

/// Deterministic placement of a chosen item set: items in descending
/// weight order (ties by input index) go to the lowest-index program with
/// remaining capacity. Every solver funnels its result through this so
/// equal-weight optima always materialize identically.
pub(crate) fn canonical_placement<C: SolverVariable>(
    problem: &Problem<C>,
    mut chosen: Vec<usize>,
) -> HashMap<EquipmentId, ProgramId> {
    let equipment = problem.equipment();
    let programs = problem.programs();

    chosen.sort_by_key(|&i| (Reverse(equipment[i].usage()), i));

    let mut remaining: Vec<usize> = programs.iter().map(|p| p.capacity().value()).collect();
    let mut cursor = 0usize;
    let mut decisions = HashMap::with_capacity(chosen.len());

    for i in chosen {
        while cursor < remaining.len() && remaining[cursor] == 0 {
            cursor += 1;
        }
        if cursor == remaining.len() {
            break;
        }
        remaining[cursor] -= 1;
        decisions.insert(equipment[i].id(), programs[cursor].id());
    }

    decisions
}
