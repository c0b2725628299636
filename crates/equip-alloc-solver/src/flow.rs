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
use num_traits::ToPrimitive;
use std::{cmp::Reverse, collections::BinaryHeap, convert::Infallible};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy)]
struct Arc {
    to: usize,
    rev: usize,
    cap: usize,
    cost: i128,
}

/// Residual network for the transportation formulation.
///
/// Node layout: `0` is the source, `1..=n` the equipment items (supply 1
/// each), `n+1..=n+m` the programs (demand = capacity), `n+m+1` the sink.
/// Item-to-program arcs carry cost `-usage`, everything else cost 0, so a
/// min-cost max-flow selects the maximum-weight assignable item subset.
#[derive(Debug, Clone)]
struct TransportNetwork {
    adj: Vec<Vec<Arc>>,
    source: usize,
    sink: usize,
}

impl TransportNetwork {
    fn new(node_count: usize, source: usize, sink: usize) -> Self {
        Self {
            adj: vec![Vec::new(); node_count],
            source,
            sink,
        }
    }

    fn add_arc(&mut self, from: usize, to: usize, cap: usize, cost: i128) {
        let fwd_pos = self.adj[from].len();
        let bwd_pos = self.adj[to].len();
        self.adj[from].push(Arc {
            to,
            rev: bwd_pos,
            cap,
            cost,
        });
        self.adj[to].push(Arc {
            to: from,
            rev: fwd_pos,
            cap: 0,
            cost: -cost,
        });
    }

    /// Exact shortest distances from the source on the pristine network.
    /// All forward arcs lead from a lower node index to a higher one, so a
    /// single relaxation sweep in node order settles every distance.
    fn initial_potentials(&self) -> Vec<i128> {
        let mut dist = vec![i128::MAX; self.adj.len()];
        dist[self.source] = 0;
        for u in 0..self.adj.len() {
            if dist[u] == i128::MAX {
                continue;
            }
            for arc in &self.adj[u] {
                if arc.cap > 0 && arc.to > u && dist[u] + arc.cost < dist[arc.to] {
                    dist[arc.to] = dist[u] + arc.cost;
                }
            }
        }
        for d in dist.iter_mut() {
            if *d == i128::MAX {
                *d = 0;
            }
        }
        dist
    }

    /// Dijkstra over reduced costs. Returns per-node distances and the
    /// predecessor (node, arc index) tree, or `None` once the sink is
    /// unreachable.
    #[allow(clippy::type_complexity)]
    fn shortest_path(&self, potential: &[i128]) -> Option<(Vec<i128>, Vec<(usize, usize)>)> {
        let n = self.adj.len();
        let mut dist = vec![i128::MAX; n];
        let mut prev = vec![(usize::MAX, usize::MAX); n];
        let mut heap = BinaryHeap::new();
        dist[self.source] = 0;
        heap.push(Reverse((0i128, self.source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if d > dist[u] {
                continue;
            }
            for (ai, arc) in self.adj[u].iter().enumerate() {
                if arc.cap == 0 {
                    continue;
                }
                let reduced = arc.cost + potential[u] - potential[arc.to];
                debug_assert!(reduced >= 0, "negative reduced cost {reduced}");
                let nd = d + reduced;
                if nd < dist[arc.to] {
                    dist[arc.to] = nd;
                    prev[arc.to] = (u, ai);
                    heap.push(Reverse((nd, arc.to)));
                }
            }
        }

        if dist[self.sink] == i128::MAX {
            None
        } else {
            Some((dist, prev))
        }
    }

    /// Successive shortest augmenting paths until the sink is saturated.
    /// Returns total flow and total (negated-weight) cost.
    fn run(&mut self) -> (usize, i128) {
        let mut potential = self.initial_potentials();
        let mut flow = 0usize;
        let mut cost = 0i128;

        while let Some((dist, prev)) = self.shortest_path(&potential) {
            let sink_dist = dist[self.sink];
            for (v, p) in potential.iter_mut().enumerate() {
                // Cap unreached nodes at the sink distance; keeps reduced
                // costs non-negative across the reachable frontier.
                *p += dist[v].min(sink_dist);
            }

            let mut bottleneck = usize::MAX;
            let mut v = self.sink;
            while v != self.source {
                let (u, ai) = prev[v];
                bottleneck = bottleneck.min(self.adj[u][ai].cap);
                v = u;
            }

            let mut v = self.sink;
            while v != self.source {
                let (u, ai) = prev[v];
                let rev = self.adj[u][ai].rev;
                let arc_cost = self.adj[u][ai].cost;
                self.adj[u][ai].cap -= bottleneck;
                self.adj[v][rev].cap += bottleneck;
                cost += arc_cost * bottleneck as i128;
                v = u;
            }

            flow += bottleneck;
            trace!(flow, cost, "augmented along shortest path");
        }

        (flow, cost)
    }
}

/// Exact engine: solves the allocation as a min-cost max-flow on the
/// transportation network via successive shortest augmenting paths with
/// Johnson potentials.
///
/// Every augmenting path routes through exactly one unit source arc, so at
/// most one item is added per augmentation and the loop runs O(n) Dijkstra
/// passes over a network of O(n·m) arcs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSolver;

impl Default for FlowSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowSolver {
    pub fn new() -> Self {
        Self
    }
}

impl<C> Solver<C> for FlowSolver
where
    C: SolverVariable,
{
    type SolveError = Infallible;

    fn solve(&self, problem: &Problem<C>) -> Result<Solution<C>, Self::SolveError> {
        if let Some(sol) = trivial_solution(problem) {
            return Ok(sol);
        }

        let n = problem.equipment_count();
        let m = problem.program_count();
        let source = 0;
        let sink = n + m + 1;
        let mut network = TransportNetwork::new(n + m + 2, source, sink);

        for (i, equipment) in problem.iter_equipment().enumerate() {
            network.add_arc(source, 1 + i, 1, 0);
            let gain = equipment
                .usage()
                .value()
                .to_i128()
                .expect("usage weight fits in i128");
            for j in 0..m {
                network.add_arc(1 + i, 1 + n + j, 1, -gain);
            }
        }
        for (j, program) in problem.iter_programs().enumerate() {
            network.add_arc(1 + n + j, sink, program.capacity().value(), 0);
        }

        let (flow, cost) = network.run();
        debug!(
            equipment = n,
            programs = m,
            flow,
            cost,
            "transport network solved"
        );

        // An item is in the optimal set iff one of its unit arcs into a
        // program drained.
        let mut chosen = Vec::with_capacity(flow);
        for i in 0..n {
            let assigned = network.adj[1 + i]
                .iter()
                .any(|arc| arc.to > n && arc.to <= n + m && arc.cap == 0);
            if assigned {
                chosen.push(i);
            }
        }
        debug_assert_eq!(chosen.len(), flow);

        // Which program an item reached inside the network does not change
        // the objective; the canonical placement keeps equal-weight optima
        // reproducible.
        let decisions = canonical_placement(problem, chosen);
        Ok(Solution::from_decisions(problem, decisions))
    }
}
