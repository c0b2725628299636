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

use equip_alloc_core::{SolverVariable, weight::Weight};
use num_traits::NumCast;

use super::err::{CapacityRangeError, InstanceGenConfigBuildError};
use super::policies::CapacityPolicy;

/// Configuration for synthetic instance generation.
///
/// Usage weights are drawn from a log-normal distribution (historical
/// usage counts are heavily right-skewed) and clamped to
/// `[0, max_usage]`.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceGenConfig<CostPrimitive>
where
    CostPrimitive: SolverVariable + NumCast,
{
    pub(crate) equipment_count: usize,
    pub(crate) program_count: usize,
    pub(crate) capacity_policy: CapacityPolicy,

    pub(crate) usage_mu: f64,
    pub(crate) usage_sigma: f64,
    pub(crate) max_usage: Weight<CostPrimitive>,

    pub(crate) seed: u64,
}

impl<C> Default for InstanceGenConfig<C>
where
    C: SolverVariable + NumCast,
{
    fn default() -> Self {
        Self {
            equipment_count: 60,
            // Five slots with room for the whole pool keeps the default
            // instance trivially feasible.
            program_count: 5,
            capacity_policy: CapacityPolicy::MatchEquipmentCount,
            usage_mu: 3.0,
            usage_sigma: 1.0,
            max_usage: Weight::new(NumCast::from(10_000).unwrap()),
            seed: 42,
        }
    }
}

impl<C> InstanceGenConfig<C>
where
    C: SolverVariable + NumCast,
{
    pub fn new(
        equipment_count: usize,
        program_count: usize,
        capacity_policy: CapacityPolicy,
        usage_mu: f64,
        usage_sigma: f64,
        max_usage: Weight<C>,
        seed: u64,
    ) -> Result<Self, InstanceGenConfigBuildError> {
        if !usage_sigma.is_finite() || usage_sigma < 0.0 || !usage_mu.is_finite() {
            return Err(InstanceGenConfigBuildError::InvalidUsageSpread(usage_sigma));
        }
        if let CapacityPolicy::Uniform { min, max } = capacity_policy
            && min > max
        {
            return Err(CapacityRangeError::new(min, max).into());
        }

        Ok(Self {
            equipment_count,
            program_count,
            capacity_policy,
            usage_mu,
            usage_sigma,
            max_usage,
            seed,
        })
    }

    #[inline]
    pub fn equipment_count(&self) -> usize {
        self.equipment_count
    }

    #[inline]
    pub fn program_count(&self) -> usize {
        self.program_count
    }

    #[inline]
    pub fn capacity_policy(&self) -> &CapacityPolicy {
        &self.capacity_policy
    }

    #[inline]
    pub fn usage_mu(&self) -> f64 {
        self.usage_mu
    }

    #[inline]
    pub fn usage_sigma(&self) -> f64 {
        self.usage_sigma
    }

    #[inline]
    pub fn max_usage(&self) -> Weight<C> {
        self.max_usage
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

pub struct InstanceGenConfigBuilder<CostPrimitive>
where
    CostPrimitive: SolverVariable + NumCast,
{
    equipment_count: Option<usize>,
    program_count: Option<usize>,
    capacity_policy: Option<CapacityPolicy>,
    usage_mu: f64,
    usage_sigma: f64,
    max_usage: Weight<CostPrimitive>,
    seed: u64,
}

impl<C> Default for InstanceGenConfigBuilder<C>
where
    C: SolverVariable + NumCast,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InstanceGenConfigBuilder<C>
where
    C: SolverVariable + NumCast,
{
    pub fn new() -> Self {
        let defaults = InstanceGenConfig::<C>::default();
        Self {
            equipment_count: None,
            program_count: None,
            capacity_policy: None,
            usage_mu: defaults.usage_mu,
            usage_sigma: defaults.usage_sigma,
            max_usage: defaults.max_usage,
            seed: defaults.seed,
        }
    }

    #[inline]
    pub fn equipment_count(mut self, count: usize) -> Self {
        self.equipment_count = Some(count);
        self
    }

    #[inline]
    pub fn program_count(mut self, count: usize) -> Self {
        self.program_count = Some(count);
        self
    }

    #[inline]
    pub fn capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.capacity_policy = Some(policy);
        self
    }

    #[inline]
    pub fn usage_mu(mut self, mu: f64) -> Self {
        self.usage_mu = mu;
        self
    }

    #[inline]
    pub fn usage_sigma(mut self, sigma: f64) -> Self {
        self.usage_sigma = sigma;
        self
    }

    #[inline]
    pub fn max_usage(mut self, max: Weight<C>) -> Self {
        self.max_usage = max;
        self
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<InstanceGenConfig<C>, InstanceGenConfigBuildError> {
        let equipment_count = self
            .equipment_count
            .ok_or(InstanceGenConfigBuildError::MissingEquipmentCount)?;
        let program_count = self
            .program_count
            .ok_or(InstanceGenConfigBuildError::MissingProgramCount)?;
        let capacity_policy = self
            .capacity_policy
            .ok_or(InstanceGenConfigBuildError::MissingCapacityPolicy)?;

        InstanceGenConfig::new(
            equipment_count,
            program_count,
            capacity_policy,
            self.usage_mu,
            self.usage_sigma,
            self.max_usage,
            self.seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equip_alloc_core::quantity::Capacity;

    #[test]
    fn builder_requires_counts_and_policy() {
        let err = InstanceGenConfigBuilder::<i64>::new().build().unwrap_err();
        assert_eq!(err, InstanceGenConfigBuildError::MissingEquipmentCount);

        let err = InstanceGenConfigBuilder::<i64>::new()
            .equipment_count(10)
            .build()
            .unwrap_err();
        assert_eq!(err, InstanceGenConfigBuildError::MissingProgramCount);
    }

    #[test]
    fn builder_rejects_empty_uniform_range() {
        let err = InstanceGenConfigBuilder::<i64>::new()
            .equipment_count(10)
            .program_count(2)
            .capacity_policy(CapacityPolicy::uniform(Capacity::new(5), Capacity::new(2)))
            .build()
            .unwrap_err();
        assert!(matches!(err, InstanceGenConfigBuildError::CapacityRange(_)));
    }

    #[test]
    fn builder_rejects_negative_sigma() {
        let err = InstanceGenConfigBuilder::<i64>::new()
            .equipment_count(10)
            .program_count(2)
            .capacity_policy(CapacityPolicy::match_equipment_count())
            .usage_sigma(-1.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            InstanceGenConfigBuildError::InvalidUsageSpread(_)
        ));
    }

    #[test]
    fn builder_accepts_complete_config() {
        let cfg = InstanceGenConfigBuilder::<i64>::new()
            .equipment_count(10)
            .program_count(2)
            .capacity_policy(CapacityPolicy::fixed(Capacity::new(4)))
            .seed(7)
            .build()
            .unwrap();
        assert_eq!(cfg.equipment_count(), 10);
        assert_eq!(cfg.program_count(), 2);
        assert_eq!(cfg.seed(), 7);
    }
}
