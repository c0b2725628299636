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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityRangeError {
    min: Capacity,
    max: Capacity,
}

impl CapacityRangeError {
    pub fn new(min: Capacity, max: Capacity) -> Self {
        Self { min, max }
    }
    pub fn min(&self) -> Capacity {
        self.min
    }
    pub fn max(&self) -> Capacity {
        self.max
    }
}

impl Display for CapacityRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CapacityRangeError: uniform capacity range [{}, {}] is empty",
            self.min, self.max
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InstanceGenConfigBuildError {
    CapacityRange(CapacityRangeError),
    InvalidUsageSpread(f64),
    MissingEquipmentCount,
    MissingProgramCount,
    MissingCapacityPolicy,
}

impl Display for InstanceGenConfigBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InstanceGenConfigBuildError::*;
        match self {
            CapacityRange(e) => write!(f, "{}", e),
            InvalidUsageSpread(sigma) => {
                write!(f, "Usage spread sigma {} is not finite and non-negative", sigma)
            }
            MissingEquipmentCount => write!(f, "Missing equipment_count"),
            MissingProgramCount => write!(f, "Missing program_count"),
            MissingCapacityPolicy => write!(f, "Missing capacity_policy"),
        }
    }
}

impl From<CapacityRangeError> for InstanceGenConfigBuildError {
    fn from(err: CapacityRangeError) -> Self {
        Self::CapacityRange(err)
    }
}

impl std::error::Error for InstanceGenConfigBuildError {}
