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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use equip_alloc_core::quantity::Capacity;
use equip_alloc_model::{
    generator::{CapacityPolicy, InstanceGenConfigBuilder, InstanceGenerator},
    problem::Problem,
};
use equip_alloc_solver::{flow::FlowSolver, greedy::GreedySolver, solver::Solver};
use std::hint::black_box;

fn instance(equipment: usize, programs: usize, seed: u64) -> Problem<i64> {
    let cfg = InstanceGenConfigBuilder::<i64>::new()
        .equipment_count(equipment)
        .program_count(programs)
        .capacity_policy(CapacityPolicy::uniform(
            Capacity::new(0),
            Capacity::new(equipment / programs.max(1)),
        ))
        .seed(seed)
        .build()
        .expect("valid bench config");
    InstanceGenerator::new(cfg).generate()
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");

    for &n in &[100_usize, 500, 2000] {
        let problem = instance(n, 8, 42);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("greedy", n), &problem, |b, p| {
            let solver = GreedySolver::new();
            b.iter(|| black_box(solver.solve(black_box(p)).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("flow", n), &problem, |b, p| {
            let solver = FlowSolver::new();
            b.iter(|| black_box(solver.solve(black_box(p)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
