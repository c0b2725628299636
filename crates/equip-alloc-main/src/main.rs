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

use equip_alloc_core::quantity::Capacity;
use equip_alloc_model::prelude::*;
use equip_alloc_solver::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use std::{fs::File, io::BufWriter, time::Instant};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT | FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct InstanceInfo {
    idx: usize,
    seed: u64,
    equipment_count: usize,
    program_count: usize,
    capacity_policy: String,
    // Problem stats snapshot
    stats_total_capacity: usize,
    stats_total_usage: i64,
    stats_p50_usage: i64,
    stats_p90_usage: i64,
    stats_pressure: f64,
}

#[derive(Debug, Clone, Serialize)]
struct RunResult {
    instance: InstanceInfo,
    status: String,
    assigned_count: usize,
    unassigned_count: usize,
    greedy_total_weight: i64,
    greedy_elapsed_ms: u128,
    flow_total_weight: i64,
    flow_elapsed_ms: u128,
}

#[derive(Debug, Clone, Serialize)]
struct BenchmarkReport {
    description: String,
    instances: Vec<RunResult>,
}

fn interpolate_u(val0: usize, val1: usize, step: usize, steps: usize) -> usize {
    if steps <= 1 {
        return val1;
    }
    let num = (val1 as isize - val0 as isize) * step as isize;
    (val0 as isize + num / (steps as isize - 1)).max(0) as usize
}

fn run_instance(i: usize, n_instances: usize) -> RunResult {
    type Cm = i64;

    let min_equipment = 20usize;
    let max_equipment = 400usize;
    let min_programs = 3usize;
    let max_programs = 12usize;

    let equipment_count = interpolate_u(min_equipment, max_equipment, i, n_instances);
    let program_count = interpolate_u(min_programs, max_programs, i, n_instances);

    // Deterministic seed per instance
    let seed: u64 = 42 + (i as u64);

    // Constrained capacities so the instances are not all vacuously
    // solvable; roughly half the pool fits on average.
    let cap_hi = (equipment_count / program_count.max(1)).max(1);
    let policy = CapacityPolicy::uniform(Capacity::new(0), Capacity::new(cap_hi));

    let cfg = InstanceGenConfigBuilder::<Cm>::new()
        .equipment_count(equipment_count)
        .program_count(program_count)
        .capacity_policy(policy)
        .seed(seed)
        .build()
        .expect("valid instance config");
    let policy_label = format!("{}", cfg.capacity_policy());
    let mut generator: InstanceGenerator<Cm> = cfg.into();
    let problem: Problem<Cm> = generator.generate();

    // Greedy construction
    let greedy = GreedySolver::new();
    let t0 = Instant::now();
    let greedy_solution = greedy.solve(&problem).expect("greedy solution");
    let greedy_elapsed = t0.elapsed();
    greedy_solution
        .validate(&problem)
        .expect("valid greedy solution");

    // Exact flow engine
    let flow = FlowSolver::new();
    let t1 = Instant::now();
    let flow_solution = flow.solve(&problem).expect("flow solution");
    let flow_elapsed = t1.elapsed();
    flow_solution
        .validate(&problem)
        .expect("valid flow solution");

    assert_eq!(
        greedy_solution.stats().total_weight(),
        flow_solution.stats().total_weight(),
        "engines disagree on instance {i}"
    );

    info!(
        idx = i,
        equipment = equipment_count,
        programs = program_count,
        total_weight = flow_solution.stats().total_weight().value(),
        "instance solved"
    );

    let pstats = problem.stats();
    let inst_info = InstanceInfo {
        idx: i,
        seed,
        equipment_count,
        program_count,
        capacity_policy: policy_label,
        stats_total_capacity: pstats.total_capacity().value(),
        stats_total_usage: pstats.total_usage().value(),
        stats_p50_usage: pstats.p50_usage().value(),
        stats_p90_usage: pstats.p90_usage().value(),
        stats_pressure: pstats.pressure(),
    };

    RunResult {
        instance: inst_info,
        status: format!("{}", flow_solution.status()),
        assigned_count: flow_solution.stats().assigned_count(),
        unassigned_count: flow_solution.stats().unassigned_count(),
        greedy_total_weight: greedy_solution.stats().total_weight().value(),
        greedy_elapsed_ms: greedy_elapsed.as_millis(),
        flow_total_weight: flow_solution.stats().total_weight().value(),
        flow_elapsed_ms: flow_elapsed.as_millis(),
    }
}

fn main() {
    enable_tracing();

    // Ramp from small to big across 10 instances
    let n_instances = 10usize;

    let results: Vec<RunResult> = (0..n_instances)
        .into_par_iter()
        .map(|i| run_instance(i, n_instances))
        .collect();

    let report = BenchmarkReport {
        description:
            "Equipment allocation benchmark: 10 instances from small to big; greedy construction vs exact flow engine."
                .into(),
        instances: results,
    };

    let file = File::create("alloc_results.json").expect("create alloc_results.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    println!();
    println!("=================================================================");
    println!("======================== Benchmark Done =========================");
    println!("=================================================================");
    println!();
    println!("Wrote: alloc_results.json");
}
