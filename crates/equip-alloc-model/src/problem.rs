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
    err::ProblemBuildError,
    id::{EquipmentId, ProgramId},
    item::Equipment,
    program::Program,
};
use equip_alloc_core::{SolverVariable, quantity::Capacity, weight::Weight};
use num_traits::{FromPrimitive, ToPrimitive};
use std::{collections::HashMap, fmt::Display};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProblemStats<C: SolverVariable> {
    /// Number of equipment items.
    equipment_count: usize,
    /// Number of program slots.
    program_count: usize,
    /// Sum of program capacities.
    total_capacity: Capacity,
    /// Sum of all usage weights (the "total usage" headline metric).
    total_usage: Weight<C>,
    /// 50th percentile of usage weights.
    p50_usage: Weight<C>,
    /// 90th percentile of usage weights.
    p90_usage: Weight<C>,
    /// Demand pressure: equipment count / total capacity,
    /// capped to [0, 2] for stability. Dimensionless.
    pressure: f64,
}

impl<C: SolverVariable> ProblemStats<C> {
    #[inline]
    pub fn equipment_count(&self) -> usize {
        self.equipment_count
    }

    #[inline]
    pub fn program_count(&self) -> usize {
        self.program_count
    }

    #[inline]
    pub fn total_capacity(&self) -> Capacity {
        self.total_capacity
    }

    #[inline]
    pub fn total_usage(&self) -> Weight<C> {
        self.total_usage
    }

    #[inline]
    pub fn p50_usage(&self) -> Weight<C> {
        self.p50_usage
    }

    #[inline]
    pub fn p90_usage(&self) -> Weight<C> {
        self.p90_usage
    }

    #[inline]
    pub fn pressure(&self) -> f64 {
        self.pressure
    }
}

/// One validated allocation instance.
///
/// Equipment and programs keep their insertion order; the solver's
/// deterministic tie-break ("lowest-index slot with remaining capacity")
/// is defined against these indices, so the order is part of the input,
/// not an artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem<C = i64>
where
    C: SolverVariable,
{
    equipment: Vec<Equipment<C>>,
    equipment_index: HashMap<EquipmentId, usize>,
    programs: Vec<Program>,
    program_index: HashMap<ProgramId, usize>,
    stats: ProblemStats<C>,
}

impl<C: SolverVariable> Problem<C> {
    #[inline]
    pub fn equipment(&self) -> &[Equipment<C>] {
        &self.equipment
    }

    #[inline]
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    #[inline]
    pub fn equipment_count(&self) -> usize {
        self.equipment.len()
    }

    #[inline]
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    #[inline]
    pub fn get_equipment(&self, id: EquipmentId) -> Option<&Equipment<C>> {
        let idx = self.equipment_index.get(&id)?;
        self.equipment.get(*idx)
    }

    #[inline]
    pub fn get_program(&self, id: ProgramId) -> Option<&Program> {
        let idx = self.program_index.get(&id)?;
        self.programs.get(*idx)
    }

    #[inline]
    pub fn equipment_position(&self, id: EquipmentId) -> Option<usize> {
        self.equipment_index.get(&id).copied()
    }

    #[inline]
    pub fn program_position(&self, id: ProgramId) -> Option<usize> {
        self.program_index.get(&id).copied()
    }

    #[inline]
    pub fn iter_equipment(&self) -> impl Iterator<Item = &Equipment<C>> {
        self.equipment.iter()
    }

    #[inline]
    pub fn iter_programs(&self) -> impl Iterator<Item = &Program> {
        self.programs.iter()
    }

    #[inline]
    pub fn total_capacity(&self) -> Capacity {
        self.stats.total_capacity
    }

    #[inline]
    pub fn stats(&self) -> &ProblemStats<C> {
        &self.stats
    }
}

impl<C: SolverVariable> Display for Problem<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Problem:")?;
        writeln!(f, "  Equipment ({}):", self.equipment.len())?;
        for e in &self.equipment {
            writeln!(f, "    {}", e)?;
        }
        writeln!(f, "  Programs ({}):", self.programs.len())?;
        for p in &self.programs {
            writeln!(f, "    {}", p)?;
        }
        Ok(())
    }
}

pub struct ProblemBuilder<C = i64>
where
    C: SolverVariable + ToPrimitive + FromPrimitive,
{
    equipment: Vec<Equipment<C>>,
    equipment_index: HashMap<EquipmentId, usize>,
    programs: Vec<Program>,
    program_index: HashMap<ProgramId, usize>,
}

impl<C: SolverVariable + ToPrimitive + FromPrimitive> Default for ProblemBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SolverVariable + ToPrimitive + FromPrimitive> ProblemBuilder<C> {
    #[inline]
    pub fn new() -> Self {
        Self {
            equipment: Vec::new(),
            equipment_index: HashMap::new(),
            programs: Vec::new(),
            program_index: HashMap::new(),
        }
    }

    #[inline]
    pub fn add_equipment(
        &mut self,
        equipment: Equipment<C>,
    ) -> Result<&mut Self, ProblemBuildError<C>> {
        let id = equipment.id();
        if self.equipment_index.contains_key(&id) {
            return Err(ProblemBuildError::DuplicateEquipmentId(id));
        }
        self.equipment_index.insert(id, self.equipment.len());
        self.equipment.push(equipment);
        Ok(self)
    }

    #[inline]
    pub fn add_program(&mut self, program: Program) -> Result<&mut Self, ProblemBuildError<C>> {
        let id = program.id();
        if self.program_index.contains_key(&id) {
            return Err(ProblemBuildError::DuplicateProgramId(id));
        }
        self.program_index.insert(id, self.programs.len());
        self.programs.push(program);
        Ok(self)
    }

    #[must_use]
    #[inline]
    pub fn build(&self) -> Problem<C> {
        let usages: Vec<Weight<C>> = self.equipment.iter().map(|e| e.usage()).collect();

        let total_capacity: Capacity = self.programs.iter().map(|p| p.capacity()).sum();
        let total_usage: Weight<C> = usages.iter().sum();
        let p50_usage = stats::percentile_weight(usages.as_slice(), 0.50);
        let p90_usage = stats::percentile_weight(usages.as_slice(), 0.90);

        let demand_f = self.equipment.len() as f64;
        let supply_f = (total_capacity.value() as f64).max(1.0);
        let pressure = (demand_f / supply_f).clamp(0.0, 2.0);

        let stats = ProblemStats {
            equipment_count: self.equipment.len(),
            program_count: self.programs.len(),
            total_capacity,
            total_usage,
            p50_usage,
            p90_usage,
            pressure,
        };

        Problem {
            equipment: self.equipment.clone(),
            equipment_index: self.equipment_index.clone(),
            programs: self.programs.clone(),
            program_index: self.program_index.clone(),
            stats,
        }
    }
}

mod stats {
    use super::*;
    use statrs::statistics::{Data, OrderStatistics};

    #[inline]
    pub fn percentile_map<T, FMap, FBack, R>(data: &[T], p: f64, to_f64: FMap, from_f64: FBack) -> R
    where
        FMap: Fn(&T) -> f64,
        FBack: Fn(f64) -> R,
    {
        let p = p.clamp(0.0, 1.0);
        let vals: Vec<f64> = data.iter().map(&to_f64).filter(|x| x.is_finite()).collect();
        if vals.is_empty() {
            return from_f64(0.0);
        }
        let mut d = Data::new(vals);
        let q = d.quantile(p);
        from_f64(q)
    }

    #[inline]
    pub fn percentile_weight<C: SolverVariable + ToPrimitive + FromPrimitive>(
        v: &[Weight<C>],
        p: f64,
    ) -> Weight<C> {
        percentile_map(
            v,
            p,
            |x| x.value().to_f64().unwrap_or(0.0),
            |q| Weight::new(C::from_f64(q.round()).unwrap_or_else(C::zero)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Cm = i64;

    fn equip(id: u64, usage: i64) -> Equipment<Cm> {
        Equipment::new(EquipmentId::new(id), Weight::new(usage)).expect("valid equipment")
    }

    fn prog(id: u64, cap: usize) -> Program {
        Program::new(ProgramId::new(id), Capacity::new(cap))
    }

    #[test]
    fn builder_duplicate_equipment_rejected() {
        let mut b = ProblemBuilder::<Cm>::new();
        b.add_equipment(equip(1, 10)).unwrap();
        assert!(matches!(
            b.add_equipment(equip(1, 7)),
            Err(ProblemBuildError::DuplicateEquipmentId(_))
        ));
    }

    #[test]
    fn builder_duplicate_program_rejected() {
        let mut b = ProblemBuilder::<Cm>::new();
        b.add_program(prog(1, 2)).unwrap();
        assert!(matches!(
            b.add_program(prog(1, 1)),
            Err(ProblemBuildError::DuplicateProgramId(_))
        ));
    }

    #[test]
    fn builder_preserves_insertion_order() {
        let mut b = ProblemBuilder::<Cm>::new();
        b.add_equipment(equip(5, 3)).unwrap();
        b.add_equipment(equip(2, 10)).unwrap();
        b.add_equipment(equip(9, 7)).unwrap();
        b.add_program(prog(4, 1)).unwrap();
        b.add_program(prog(1, 2)).unwrap();

        let p = b.build();
        let ids: Vec<u64> = p.iter_equipment().map(|e| e.id().value()).collect();
        assert_eq!(ids, vec![5, 2, 9]);
        let pids: Vec<u64> = p.iter_programs().map(|pr| pr.id().value()).collect();
        assert_eq!(pids, vec![4, 1]);
        assert_eq!(p.equipment_position(EquipmentId::new(9)), Some(2));
        assert_eq!(p.program_position(ProgramId::new(1)), Some(1));
    }

    #[test]
    fn builder_stats_totals() {
        let mut b = ProblemBuilder::<Cm>::new();
        b.add_equipment(equip(1, 10)).unwrap();
        b.add_equipment(equip(2, 7)).unwrap();
        b.add_equipment(equip(3, 3)).unwrap();
        b.add_program(prog(1, 2)).unwrap();
        b.add_program(prog(2, 1)).unwrap();

        let p = b.build();
        let s = p.stats();
        assert_eq!(s.equipment_count(), 3);
        assert_eq!(s.program_count(), 2);
        assert_eq!(s.total_capacity(), Capacity::new(3));
        assert_eq!(s.total_usage(), Weight::new(20));
        assert!((s.pressure() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn builder_empty_instance_is_valid() {
        let p = ProblemBuilder::<Cm>::new().build();
        assert_eq!(p.equipment_count(), 0);
        assert_eq!(p.program_count(), 0);
        assert_eq!(p.stats().total_usage(), Weight::new(0));
    }

    #[test]
    fn builder_lookup_by_id() {
        let mut b = ProblemBuilder::<Cm>::new();
        b.add_equipment(equip(7, 42)).unwrap();
        b.add_program(prog(3, 5)).unwrap();
        let p = b.build();

        assert_eq!(
            p.get_equipment(EquipmentId::new(7)).map(|e| e.usage()),
            Some(Weight::new(42))
        );
        assert_eq!(
            p.get_program(ProgramId::new(3)).map(|pr| pr.capacity()),
            Some(Capacity::new(5))
        );
        assert!(p.get_equipment(EquipmentId::new(8)).is_none());
    }
}
