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

mod config;
mod err;
mod policies;

pub use config::{InstanceGenConfig, InstanceGenConfigBuilder};
pub use err::{CapacityRangeError, InstanceGenConfigBuildError};
pub use policies::CapacityPolicy;

use crate::{
    id::{EquipmentId, ProgramId},
    item::Equipment,
    problem::{Problem, ProblemBuilder},
    program::Program,
};
use equip_alloc_core::{SolverVariable, quantity::Capacity, weight::Weight};
use num_traits::{FromPrimitive, NumCast, ToPrimitive};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, LogNormal};

pub struct InstanceGenerator<CostPrimitive>
where
    CostPrimitive: SolverVariable + NumCast,
{
    config: InstanceGenConfig<CostPrimitive>,
    rng: SmallRng,
    usage_distribution: LogNormal<f64>,
    next_id: u64,
}

impl<C> From<InstanceGenConfig<C>> for InstanceGenerator<C>
where
    C: SolverVariable + NumCast + ToPrimitive + FromPrimitive,
{
    fn from(config: InstanceGenConfig<C>) -> Self {
        Self::new(config)
    }
}

impl<C> InstanceGenerator<C>
where
    C: SolverVariable + NumCast + ToPrimitive + FromPrimitive,
{
    pub fn new(config: InstanceGenConfig<C>) -> Self {
        let seed = config.seed();
        Self {
            usage_distribution: LogNormal::new(config.usage_mu, config.usage_sigma.max(1e-9))
                .expect("valid log-normal parameters"),
            rng: SmallRng::seed_from_u64(seed),
            config,
            next_id: 0,
        }
    }

    #[inline]
    fn fresh_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn sample_usage(&mut self) -> Weight<C> {
        let raw = self.usage_distribution.sample(&mut self.rng).round();
        let max = self.config.max_usage.value().to_f64().unwrap_or(f64::MAX);
        let clamped = raw.clamp(0.0, max);
        Weight::new(C::from_f64(clamped).unwrap_or_else(C::zero))
    }

    fn sample_capacity(&mut self) -> Capacity {
        match self.config.capacity_policy {
            CapacityPolicy::MatchEquipmentCount => Capacity::new(self.config.equipment_count),
            CapacityPolicy::Fixed(c) => c,
            CapacityPolicy::Uniform { min, max } => {
                if min == max {
                    min
                } else {
                    Capacity::new(self.rng.random_range(min.value()..=max.value()))
                }
            }
        }
    }

    pub fn generate(&mut self) -> Problem<C> {
        let mut builder = ProblemBuilder::<C>::new();

        for _ in 0..self.config.equipment_count {
            let id = EquipmentId::new(self.fresh_id());
            let usage = self.sample_usage();
            let equipment = Equipment::new(id, usage).expect("sampled usage is non-negative");
            builder.add_equipment(equipment).expect("fresh equipment id");
        }

        for _ in 0..self.config.program_count {
            let id = ProgramId::new(self.fresh_id());
            let capacity = self.sample_capacity();
            builder
                .add_program(Program::new(id, capacity))
                .expect("fresh program id");
        }

        builder.build()
    }
}
