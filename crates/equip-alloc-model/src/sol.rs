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

use crate::{
    err::{CapacityExceededError, SolutionValidationError, WeightMismatchError},
    id::{EquipmentId, ProgramId},
    problem::Problem,
};
use equip_alloc_core::{SolverVariable, weight::Weight};
use std::{cmp::Reverse, collections::HashMap, fmt::Display};

/// Terminal state of one allocation run. `Infeasible` and `NoEquipment`
/// are valid outcomes, always paired with an empty decision map; the only
/// caller-facing error path is malformed input at problem-build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    NoEquipment,
}

impl Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "Optimal"),
            SolveStatus::Infeasible => write!(f, "Infeasible"),
            SolveStatus::NoEquipment => write!(f, "NoEquipment"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionStats<C = i64>
where
    C: SolverVariable,
{
    total_weight: Weight<C>,
    assigned_count: usize,
    unassigned_count: usize,
}

impl<C: SolverVariable> SolutionStats<C> {
    #[inline]
    pub fn new(total_weight: Weight<C>, assigned_count: usize, unassigned_count: usize) -> Self {
        Self {
            total_weight,
            assigned_count,
            unassigned_count,
        }
    }

    #[inline]
    pub fn total_weight(&self) -> Weight<C> {
        self.total_weight
    }

    #[inline]
    pub fn assigned_count(&self) -> usize {
        self.assigned_count
    }

    #[inline]
    pub fn unassigned_count(&self) -> usize {
        self.unassigned_count
    }
}

impl<C: SolverVariable> Display for SolutionStats<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution statistics:")?;
        writeln!(f, "  Total assigned weight: {}", self.total_weight)?;
        writeln!(f, "  Assigned items: {}", self.assigned_count)?;
        writeln!(f, "  Unassigned items: {}", self.unassigned_count)?;
        Ok(())
    }
}

/// One row of the display layer's results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement<C = i64>
where
    C: SolverVariable,
{
    program: ProgramId,
    equipment: EquipmentId,
    usage: Weight<C>,
}

impl<C: SolverVariable> Placement<C> {
    #[inline]
    pub fn new(program: ProgramId, equipment: EquipmentId, usage: Weight<C>) -> Self {
        Self {
            program,
            equipment,
            usage,
        }
    }

    #[inline]
    pub fn program(&self) -> ProgramId {
        self.program
    }

    #[inline]
    pub fn equipment(&self) -> EquipmentId {
        self.equipment
    }

    #[inline]
    pub fn usage(&self) -> Weight<C> {
        self.usage
    }
}

impl<C: SolverVariable> Display for Placement<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Placement(program: {}, equipment: {}, usage: {})",
            self.program, self.equipment, self.usage
        )
    }
}

/// A complete allocation: each decision maps one equipment item to the
/// program that receives it. Produced whole by a solver; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<C = i64>
where
    C: SolverVariable,
{
    decisions: HashMap<EquipmentId, ProgramId>,
    stats: SolutionStats<C>,
    status: SolveStatus,
}

impl<C: SolverVariable> Solution<C> {
    #[inline]
    pub fn new(
        decisions: HashMap<EquipmentId, ProgramId>,
        stats: SolutionStats<C>,
        status: SolveStatus,
    ) -> Self {
        Self {
            decisions,
            stats,
            status,
        }
    }

    /// Builds a solution from a decision map, deriving stats and status
    /// from the problem. Decision keys must come from the problem's
    /// equipment set; [`Solution::validate`] re-checks this.
    pub fn from_decisions(
        problem: &Problem<C>,
        decisions: HashMap<EquipmentId, ProgramId>,
    ) -> Self {
        let total_weight: Weight<C> = decisions
            .keys()
            .filter_map(|id| problem.get_equipment(*id))
            .map(|e| e.usage())
            .sum();

        let assigned = decisions.len();
        let unassigned = problem.equipment_count().saturating_sub(assigned);

        let status = if problem.equipment_count() == 0 {
            SolveStatus::NoEquipment
        } else if problem.total_capacity().is_zero() {
            SolveStatus::Infeasible
        } else {
            SolveStatus::Optimal
        };

        Self {
            decisions,
            stats: SolutionStats::new(total_weight, assigned, unassigned),
            status,
        }
    }

    #[inline]
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    #[inline]
    pub fn stats(&self) -> &SolutionStats<C> {
        &self.stats
    }

    #[inline]
    pub fn decisions(&self) -> &HashMap<EquipmentId, ProgramId> {
        &self.decisions
    }

    #[inline]
    pub fn program_of(&self, equipment: EquipmentId) -> Option<ProgramId> {
        self.decisions.get(&equipment).copied()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Result triples in deterministic display order: by program input
    /// index, then descending usage, then equipment input index.
    pub fn placements(&self, problem: &Problem<C>) -> Vec<Placement<C>> {
        let mut rows: Vec<(usize, Reverse<Weight<C>>, usize, Placement<C>)> = self
            .decisions
            .iter()
            .filter_map(|(&eid, &pid)| {
                let e_pos = problem.equipment_position(eid)?;
                let p_pos = problem.program_position(pid)?;
                let usage = problem.get_equipment(eid)?.usage();
                Some((
                    p_pos,
                    Reverse(usage),
                    e_pos,
                    Placement::new(pid, eid, usage),
                ))
            })
            .collect();
        rows.sort_by_key(|&(p_pos, usage, e_pos, _)| (p_pos, usage, e_pos));
        rows.into_iter().map(|(_, _, _, p)| p).collect()
    }

    /// Checks every solution invariant against the problem: decision keys
    /// are known equipment, targets are known programs, per-program counts
    /// respect capacity, and the reported total weight is exact.
    pub fn validate(&self, problem: &Problem<C>) -> Result<(), SolutionValidationError<C>> {
        let mut per_program: HashMap<ProgramId, usize> = HashMap::new();
        let mut recomputed = Weight::new(C::zero());

        for (&eid, &pid) in &self.decisions {
            let equipment = problem
                .get_equipment(eid)
                .ok_or(SolutionValidationError::UnknownEquipment(eid))?;
            if problem.get_program(pid).is_none() {
                return Err(SolutionValidationError::UnknownProgram(pid));
            }
            *per_program.entry(pid).or_insert(0) += 1;
            recomputed += equipment.usage();
        }

        for (&pid, &count) in &per_program {
            let capacity = problem
                .get_program(pid)
                .map(|p| p.capacity())
                .unwrap_or_default();
            if count > capacity.value() {
                return Err(SolutionValidationError::CapacityExceeded(
                    CapacityExceededError::new(pid, capacity, count),
                ));
            }
        }

        if recomputed != self.stats.total_weight() {
            return Err(SolutionValidationError::WeightMismatch(
                WeightMismatchError::new(self.stats.total_weight(), recomputed),
            ));
        }

        Ok(())
    }
}

impl<C: SolverVariable> Display for Solution<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution ({}):", self.status)?;
        for (eid, pid) in &self.decisions {
            writeln!(f, "  {} -> {}", eid, pid)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{item::Equipment, problem::ProblemBuilder, program::Program};
    use equip_alloc_core::quantity::Capacity;

    type Cm = i64;

    fn equip(id: u64, usage: i64) -> Equipment<Cm> {
        Equipment::new(EquipmentId::new(id), Weight::new(usage)).expect("valid equipment")
    }

    fn prog(id: u64, cap: usize) -> Program {
        Program::new(ProgramId::new(id), Capacity::new(cap))
    }

    fn small_problem() -> Problem<Cm> {
        let mut b = ProblemBuilder::<Cm>::new();
        b.add_equipment(equip(1, 10)).unwrap();
        b.add_equipment(equip(2, 7)).unwrap();
        b.add_equipment(equip(3, 3)).unwrap();
        b.add_program(prog(1, 2)).unwrap();
        b.add_program(prog(2, 1)).unwrap();
        b.build()
    }

    #[test]
    fn from_decisions_computes_stats_and_status() {
        let p = small_problem();
        let mut d = HashMap::new();
        d.insert(EquipmentId::new(1), ProgramId::new(1));
        d.insert(EquipmentId::new(3), ProgramId::new(2));

        let sol = Solution::from_decisions(&p, d);
        assert_eq!(sol.status(), SolveStatus::Optimal);
        assert_eq!(sol.stats().total_weight(), Weight::new(13));
        assert_eq!(sol.stats().assigned_count(), 2);
        assert_eq!(sol.stats().unassigned_count(), 1);
        assert_eq!(sol.program_of(EquipmentId::new(1)), Some(ProgramId::new(1)));
        assert_eq!(sol.program_of(EquipmentId::new(2)), None);
        sol.validate(&p).unwrap();
    }

    #[test]
    fn from_decisions_no_equipment_status() {
        let p = {
            let mut b = ProblemBuilder::<Cm>::new();
            b.add_program(prog(1, 2)).unwrap();
            b.build()
        };
        let sol = Solution::from_decisions(&p, HashMap::new());
        assert_eq!(sol.status(), SolveStatus::NoEquipment);
        assert!(sol.is_empty());
        assert_eq!(sol.stats().total_weight(), Weight::new(0));
    }

    #[test]
    fn from_decisions_zero_capacity_is_infeasible() {
        let p = {
            let mut b = ProblemBuilder::<Cm>::new();
            b.add_equipment(equip(1, 10)).unwrap();
            b.add_program(prog(1, 0)).unwrap();
            b.build()
        };
        let sol = Solution::from_decisions(&p, HashMap::new());
        assert_eq!(sol.status(), SolveStatus::Infeasible);
        assert!(sol.is_empty());
        assert_eq!(sol.stats().total_weight(), Weight::new(0));
        sol.validate(&p).unwrap();
    }

    #[test]
    fn placements_are_deterministically_ordered() {
        let p = small_problem();
        let mut d = HashMap::new();
        d.insert(EquipmentId::new(1), ProgramId::new(1));
        d.insert(EquipmentId::new(2), ProgramId::new(1));
        d.insert(EquipmentId::new(3), ProgramId::new(2));

        let sol = Solution::from_decisions(&p, d);
        let rows = sol.placements(&p);
        assert_eq!(rows.len(), 3);
        // Program 1 rows first, heavier equipment first inside a program.
        assert_eq!(rows[0].program(), ProgramId::new(1));
        assert_eq!(rows[0].equipment(), EquipmentId::new(1));
        assert_eq!(rows[1].program(), ProgramId::new(1));
        assert_eq!(rows[1].equipment(), EquipmentId::new(2));
        assert_eq!(rows[2].program(), ProgramId::new(2));
        assert_eq!(rows[2].equipment(), EquipmentId::new(3));
    }

    #[test]
    fn validate_rejects_unknown_equipment() {
        let p = small_problem();
        let mut d = HashMap::new();
        d.insert(EquipmentId::new(42), ProgramId::new(1));
        let sol = Solution::new(d, SolutionStats::new(Weight::new(0), 1, 2), SolveStatus::Optimal);
        assert!(matches!(
            sol.validate(&p),
            Err(SolutionValidationError::UnknownEquipment(_))
        ));
    }

    #[test]
    fn validate_rejects_unknown_program() {
        let p = small_problem();
        let mut d = HashMap::new();
        d.insert(EquipmentId::new(1), ProgramId::new(42));
        let sol = Solution::new(d, SolutionStats::new(Weight::new(10), 1, 2), SolveStatus::Optimal);
        assert!(matches!(
            sol.validate(&p),
            Err(SolutionValidationError::UnknownProgram(_))
        ));
    }

    #[test]
    fn validate_rejects_capacity_overrun() {
        let p = small_problem();
        let mut d = HashMap::new();
        // Program 2 has capacity 1; push two items into it.
        d.insert(EquipmentId::new(1), ProgramId::new(2));
        d.insert(EquipmentId::new(2), ProgramId::new(2));
        let sol = Solution::new(d, SolutionStats::new(Weight::new(17), 2, 1), SolveStatus::Optimal);
        assert!(matches!(
            sol.validate(&p),
            Err(SolutionValidationError::CapacityExceeded(_))
        ));
    }

    #[test]
    fn validate_rejects_weight_mismatch() {
        let p = small_problem();
        let mut d = HashMap::new();
        d.insert(EquipmentId::new(1), ProgramId::new(1));
        let sol = Solution::new(d, SolutionStats::new(Weight::new(11), 1, 2), SolveStatus::Optimal);
        assert!(matches!(
            sol.validate(&p),
            Err(SolutionValidationError::WeightMismatch(_))
        ));
    }
}
