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

//! Solvers for the equipment-to-program allocation problem.
//!
//! Two engines share the [`solver::Solver`] contract: [`flow::FlowSolver`]
//! solves the underlying transportation problem exactly via successive
//! shortest augmenting paths, and [`greedy::GreedySolver`] constructs the
//! canonical descending-weight placement directly. Both are stateless and
//! emit the same deterministic solution.

pub mod flow;
pub mod greedy;
pub mod solver;

pub mod prelude {
    pub use crate::flow::FlowSolver;
    pub use crate::greedy::GreedySolver;
    pub use crate::solver::Solver;
}
