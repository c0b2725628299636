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

use std::fmt::Display;

use equip_alloc_core::quantity::Capacity;

/// How program slot capacities are drawn for a synthetic instance.
///
/// `MatchEquipmentCount` gives every program room for the whole equipment
/// set, which makes the capacity constraint vacuous; instances that should
/// actually exercise the constraint want `Fixed` or `Uniform`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityPolicy {
    MatchEquipmentCount,
    Fixed(Capacity),
    Uniform { min: Capacity, max: Capacity },
}

impl CapacityPolicy {
    #[inline]
    pub fn match_equipment_count() -> Self {
        Self::MatchEquipmentCount
    }

    #[inline]
    pub fn fixed(capacity: Capacity) -> Self {
        Self::Fixed(capacity)
    }

    #[inline]
    pub fn uniform(min: Capacity, max: Capacity) -> Self {
        Self::Uniform { min, max }
    }
}

impl Display for CapacityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityPolicy::MatchEquipmentCount => write!(f, "MatchEquipmentCount"),
            CapacityPolicy::Fixed(c) => write!(f, "Fixed({})", c),
            CapacityPolicy::Uniform { min, max } => write!(f, "Uniform({}, {})", min, max),
        }
    }
}
