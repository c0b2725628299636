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

use crate::{err::NegativeUsageError, id::EquipmentId};
use equip_alloc_core::{SolverVariable, weight::Weight};
use std::fmt::Display;

/// One equipment item: an id plus its historical usage weight.
///
/// Immutable input to a single optimization run. Construction rejects
/// negative usage weights; the type parameter stays signed for the
/// solver's benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Equipment<C = i64>
where
    C: SolverVariable,
{
    id: EquipmentId,
    usage: Weight<C>,
}

impl<C: SolverVariable> Equipment<C> {
    #[inline]
    pub fn new(id: EquipmentId, usage: Weight<C>) -> Result<Self, NegativeUsageError<C>> {
        if usage.is_negative() {
            return Err(NegativeUsageError::new(id, usage));
        }
        Ok(Self { id, usage })
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

impl<C: SolverVariable> Display for Equipment<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Equipment(id: {}, usage: {})", self.id, self.usage)
    }
}
