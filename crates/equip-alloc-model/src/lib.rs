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

//! # Equipment Allocation Model (`equip-alloc-model`)
//!
//! This crate provides the data model for the **equipment-to-program
//! allocation problem**: assign equipment items (each carrying a historical
//! usage weight) to program slots (each with an intake capacity) so that the
//! total assigned usage weight is maximal. It builds on the type-safe
//! primitives of `equip-alloc-core`.
//!
//! ## Key Data Structures
//!
//! - **`EquipmentId` / `ProgramId`**: unique identifiers for the two sides
//!   of the bipartite instance.
//!
//! - **`Equipment<C>`**: one item with its non-negative usage weight.
//!
//! - **`Program`**: one slot with its intake capacity.
//!
//! - **`Problem<C>`**: a validated instance. Built through `ProblemBuilder`,
//!   which rejects duplicate identifiers and negative weights; that is the
//!   only caller-facing error surface. Insertion order is preserved because
//!   the solver's deterministic tie-break refers to input indices.
//!
//! - **`Solution<C>`**: a complete decision map plus `SolutionStats` and a
//!   `SolveStatus` (`Optimal`, `Infeasible`, `NoEquipment`). `Infeasible`
//!   and `NoEquipment` are valid outcomes, not errors.
//!
//! - **`InstanceGenerator`**: seeded synthetic instances for tests and
//!   benchmarks, with configurable capacity policies.
//!
//! ## Genericity
//!
//! Model structs are generic over the usage-weight primitive `C` (default
//! `i64`), which must be signed so solver-internal reduced-cost arithmetic
//! stays in one numeric domain.

pub mod err;
pub mod generator;
pub mod id;
pub mod item;
pub mod problem;
pub mod program;
pub mod sol;

pub mod prelude {
    pub use crate::err::{
        CapacityExceededError, NegativeUsageError, ProblemBuildError, SolutionValidationError,
        WeightMismatchError,
    };
    pub use crate::generator::{
        CapacityPolicy, InstanceGenConfig, InstanceGenConfigBuilder, InstanceGenerator,
    };
    pub use crate::id::{EquipmentId, ProgramId};
    pub use crate::item::Equipment;
    pub use crate::problem::{Problem, ProblemBuilder, ProblemStats};
    pub use crate::program::Program;
    pub use crate::sol::{Placement, Solution, SolutionStats, SolveStatus};
}
