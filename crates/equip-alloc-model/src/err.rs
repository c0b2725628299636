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

use crate::id::{EquipmentId, ProgramId};
use equip_alloc_core::{SolverVariable, quantity::Capacity, weight::Weight};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NegativeUsageError<C: SolverVariable> {
    id: EquipmentId,
    usage: Weight<C>,
}

impl<C: SolverVariable> NegativeUsageError<C> {
    #[inline]
    pub fn new(id: EquipmentId, usage: Weight<C>) -> Self {
        Self { id, usage }
    }

    #[inline]
    pub fn id(&self) -> EquipmentId {
        self.id
    }

    #[inline]
    pub fn usage(&self) -> Weight<C> {
        self.usage
    }
}

impl<C: SolverVariable> Display for NegativeUsageError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Equipment {} has negative usage weight {}",
            self.id, self.usage
        )
    }
}

impl<C: SolverVariable> std::error::Error for NegativeUsageError<C> {}

/// Malformed caller input. The builder is the only surface that raises
/// these; a built [`Problem`](crate::problem::Problem) is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemBuildError<C: SolverVariable> {
    DuplicateEquipmentId(EquipmentId),
    DuplicateProgramId(ProgramId),
    NegativeUsage(NegativeUsageError<C>),
}

impl<C: SolverVariable> Display for ProblemBuildError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemBuildError::DuplicateEquipmentId(id) => {
                write!(f, "Duplicate equipment ID: {}", id)
            }
            ProblemBuildError::DuplicateProgramId(id) => {
                write!(f, "Duplicate program ID: {}", id)
            }
            ProblemBuildError::NegativeUsage(e) => write!(f, "{e}"),
        }
    }
}

impl<C: SolverVariable> std::error::Error for ProblemBuildError<C> {}

impl<C: SolverVariable> From<NegativeUsageError<C>> for ProblemBuildError<C> {
    fn from(err: NegativeUsageError<C>) -> Self {
        ProblemBuildError::NegativeUsage(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityExceededError {
    program: ProgramId,
    capacity: Capacity,
    assigned: usize,
}

impl CapacityExceededError {
    #[inline]
    pub fn new(program: ProgramId, capacity: Capacity, assigned: usize) -> Self {
        Self {
            program,
            capacity,
            assigned,
        }
    }

    #[inline]
    pub fn program(&self) -> ProgramId {
        self.program
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[inline]
    pub fn assigned(&self) -> usize {
        self.assigned
    }
}

impl Display for CapacityExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Program {} received {} items, exceeding its {}",
            self.program, self.assigned, self.capacity
        )
    }
}

impl std::error::Error for CapacityExceededError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightMismatchError<C: SolverVariable> {
    reported: Weight<C>,
    recomputed: Weight<C>,
}

impl<C: SolverVariable> WeightMismatchError<C> {
    #[inline]
    pub fn new(reported: Weight<C>, recomputed: Weight<C>) -> Self {
        Self {
            reported,
            recomputed,
        }
    }

    #[inline]
    pub fn reported(&self) -> Weight<C> {
        self.reported
    }

    #[inline]
    pub fn recomputed(&self) -> Weight<C> {
        self.recomputed
    }
}

impl<C: SolverVariable> Display for WeightMismatchError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Reported total weight {} does not match recomputed total {}",
            self.reported, self.recomputed
        )
    }
}

impl<C: SolverVariable> std::error::Error for WeightMismatchError<C> {}

/// A decision map that breaks one of the solution invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionValidationError<C = i64>
where
    C: SolverVariable,
{
    UnknownEquipment(EquipmentId),
    UnknownProgram(ProgramId),
    CapacityExceeded(CapacityExceededError),
    WeightMismatch(WeightMismatchError<C>),
}

impl<C: SolverVariable> Display for SolutionValidationError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionValidationError::UnknownEquipment(id) => {
                write!(f, "Decision references unknown equipment {}", id)
            }
            SolutionValidationError::UnknownProgram(id) => {
                write!(f, "Decision references unknown program {}", id)
            }
            SolutionValidationError::CapacityExceeded(e) => write!(f, "{e}"),
            SolutionValidationError::WeightMismatch(e) => write!(f, "{e}"),
        }
    }
}

impl<C: SolverVariable> std::error::Error for SolutionValidationError<C> {}
