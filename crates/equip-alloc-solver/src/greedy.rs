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

use crate::solver::{Solver, canonical_placement, trivial_solution};
use equip_alloc_core::SolverVariable;
use equip_alloc_model::{problem::Problem, sol::Solution};
use std::convert::Infallible;

/// Constructive solver: take every item while capacity remains, heaviest
/// first.
///
/// Usage weights do not depend on which program receives an item, so any
/// min(n, total capacity) items can be assigned simultaneously and the
/// optimum is simply the heaviest such subset. The canonical placement
/// order makes the construction deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedySolver;

impl Default for GreedySolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedySolver {
    pub fn new() -> Self {
        Self
    }
}

impl<C> Solver<C> for GreedySolver
where
    C: SolverVariable,
{
    type SolveError = Infallible;

    fn solve(&self, problem: &Problem<C>) -> Result<Solution<C>, Self::SolveError> {
        if let Some(sol) = trivial_solution(problem) {
            return Ok(sol);
        }

        let chosen: Vec<usize> = (0..problem.equipment_count()).collect();
        let decisions = canonical_placement(problem, chosen);
        Ok(Solution::from_decisions(problem, decisions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equip_alloc_core::{quantity::Capacity, weight::Weight};
    use equip_alloc_model::{
        id::{EquipmentId, ProgramId},
        item::Equipment,
        problem::ProblemBuilder,
        program::Program,
        sol::SolveStatus,
    };

    type Cm = i64;

    fn equip(id: u64, usage: i64) -> Equipment<Cm> {
        Equipment::new(EquipmentId::new(id), Weight::new(usage)).expect("valid equipment")
    }

    fn prog(id: u64, cap: usize) -> Program {
        Program::new(ProgramId::new(id), Capacity::new(cap))
    }

    fn build(equipment: &[(u64, i64)], programs: &[(u64, usize)]) -> Problem<Cm> {
        let mut b = ProblemBuilder::<Cm>::new();
        for &(id, usage) in equipment {
            b.add_equipment(equip(id, usage)).unwrap();
        }
        for &(id, cap) in programs {
            b.add_program(prog(id, cap)).unwrap();
        }
        b.build()
    }

    #[test]
    fn assigns_everything_when_capacity_suffices() {
        // Equipment A=10, B=7, C=3 against capacities 2 + 1: all three fit.
        let problem = build(&[(1, 10), (2, 7), (3, 3)], &[(10, 2), (11, 1)]);
        let sol = GreedySolver::new().solve(&problem).unwrap();

        assert_eq!(sol.status(), SolveStatus::Optimal);
        assert_eq!(sol.stats().total_weight(), Weight::new(20));
        assert_eq!(sol.stats().assigned_count(), 3);
        assert_eq!(sol.stats().unassigned_count(), 0);
        sol.validate(&problem).unwrap();

        // Heaviest first into the lowest-index slot: A and B under the
        // first program, C under the second.
        assert_eq!(sol.program_of(EquipmentId::new(1)), Some(ProgramId::new(10)));
        assert_eq!(sol.program_of(EquipmentId::new(2)), Some(ProgramId::new(10)));
        assert_eq!(sol.program_of(EquipmentId::new(3)), Some(ProgramId::new(11)));
    }

    #[test]
    fn prefers_heavier_item_under_tight_capacity() {
        let problem = build(&[(1, 10), (2, 7)], &[(10, 1)]);
        let sol = GreedySolver::new().solve(&problem).unwrap();

        assert_eq!(sol.status(), SolveStatus::Optimal);
        assert_eq!(sol.stats().total_weight(), Weight::new(10));
        assert_eq!(sol.program_of(EquipmentId::new(1)), Some(ProgramId::new(10)));
        assert_eq!(sol.program_of(EquipmentId::new(2)), None);
        sol.validate(&problem).unwrap();
    }

    #[test]
    fn no_equipment_returns_terminal_status() {
        let problem = build(&[], &[(10, 2)]);
        let sol = GreedySolver::new().solve(&problem).unwrap();
        assert_eq!(sol.status(), SolveStatus::NoEquipment);
        assert!(sol.is_empty());
        assert_eq!(sol.stats().total_weight(), Weight::new(0));
    }

    #[test]
    fn zero_total_capacity_is_infeasible_not_an_error() {
        let problem = build(&[(1, 10), (2, 7)], &[(10, 0), (11, 0)]);
        let sol = GreedySolver::new().solve(&problem).unwrap();
        assert_eq!(sol.status(), SolveStatus::Infeasible);
        assert!(sol.is_empty());
        assert_eq!(sol.stats().total_weight(), Weight::new(0));
        sol.validate(&problem).unwrap();
    }

    #[test]
    fn no_programs_at_all_is_infeasible() {
        let problem = build(&[(1, 10)], &[]);
        let sol = GreedySolver::new().solve(&problem).unwrap();
        assert_eq!(sol.status(), SolveStatus::Infeasible);
        assert!(sol.is_empty());
    }

    #[test]
    fn equal_weights_break_ties_by_input_index() {
        let problem = build(&[(5, 4), (2, 4), (9, 4)], &[(10, 2)]);
        let sol = GreedySolver::new().solve(&problem).unwrap();

        // Items 5 and 2 entered first; item 9 misses out.
        assert!(sol.program_of(EquipmentId::new(5)).is_some());
        assert!(sol.program_of(EquipmentId::new(2)).is_some());
        assert_eq!(sol.program_of(EquipmentId::new(9)), None);
        sol.validate(&problem).unwrap();
    }

    #[test]
    fn zero_weight_items_are_still_placed_when_room_remains() {
        let problem = build(&[(1, 0), (2, 5)], &[(10, 2)]);
        let sol = GreedySolver::new().solve(&problem).unwrap();

        assert_eq!(sol.stats().assigned_count(), 2);
        assert_eq!(sol.stats().total_weight(), Weight::new(5));
        sol.validate(&problem).unwrap();
    }

    #[test]
    fn skips_exhausted_slots() {
        let problem = build(&[(1, 9), (2, 8), (3, 7)], &[(10, 0), (11, 2), (12, 1)]);
        let sol = GreedySolver::new().solve(&problem).unwrap();

        assert_eq!(sol.program_of(EquipmentId::new(1)), Some(ProgramId::new(11)));
        assert_eq!(sol.program_of(EquipmentId::new(2)), Some(ProgramId::new(11)));
        assert_eq!(sol.program_of(EquipmentId::new(3)), Some(ProgramId::new(12)));
        sol.validate(&problem).unwrap();
    }
}
