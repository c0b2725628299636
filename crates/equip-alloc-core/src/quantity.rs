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

use std::{
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// Intake capacity of a program slot, counted in equipment items.
///
/// Non-negative by construction; a zero capacity is a valid slot that
/// never receives anything.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Capacity(usize);

impl std::fmt::Display for Capacity {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Capacity({})", self.0)
    }
}

impl From<usize> for Capacity {
    #[inline]
    fn from(v: usize) -> Self {
        Capacity(v)
    }
}

impl Capacity {
    #[inline]
    pub const fn new(v: usize) -> Self {
        Capacity(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        Capacity(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Capacity)
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Capacity)
    }

    #[inline]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Capacity(self.0.saturating_add(rhs.0))
    }

    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Capacity(self.0.saturating_sub(rhs.0))
    }

    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        Capacity(self.0.min(rhs.0))
    }
}

impl Add for Capacity {
    type Output = Capacity;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Capacity(
            self.0
                .checked_add(rhs.0)
                .expect("overflow in Capacity + Capacity"),
        )
    }
}

impl AddAssign for Capacity {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_add(rhs.0)
            .expect("overflow in Capacity += Capacity");
    }
}

impl Sub for Capacity {
    type Output = Capacity;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Capacity(
            self.0
                .checked_sub(rhs.0)
                .expect("underflow in Capacity - Capacity"),
        )
    }
}

impl SubAssign for Capacity {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_sub(rhs.0)
            .expect("underflow in Capacity -= Capacity");
    }
}

impl Sum for Capacity {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Capacity::zero(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a Capacity> for Capacity {
    #[inline]
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Capacity::zero(), |a, b| a + *b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_creation_and_value() {
        let c = Capacity::new(4);
        assert_eq!(c.value(), 4);
        assert!(!c.is_zero());
        assert!(Capacity::zero().is_zero());
    }

    #[test]
    fn test_capacity_display() {
        assert_eq!(format!("{}", Capacity::new(3)), "Capacity(3)");
    }

    #[test]
    fn test_capacity_arithmetic() {
        let a = Capacity::new(4);
        let b = Capacity::new(1);
        assert_eq!((a + b).value(), 5);
        assert_eq!((a - b).value(), 3);
    }

    #[test]
    #[should_panic]
    fn test_capacity_sub_underflow_panics() {
        let _ = Capacity::new(0) - Capacity::new(1);
    }

    #[test]
    fn test_capacity_checked_and_saturating() {
        assert_eq!(
            Capacity::new(2).checked_add(Capacity::new(3)),
            Some(Capacity::new(5))
        );
        assert_eq!(Capacity::new(2).checked_sub(Capacity::new(3)), None);
        assert_eq!(
            Capacity::new(2).saturating_sub(Capacity::new(3)),
            Capacity::zero()
        );
        assert_eq!(
            Capacity::new(usize::MAX).saturating_add(Capacity::new(1)),
            Capacity::new(usize::MAX)
        );
    }

    #[test]
    fn test_capacity_sum() {
        let caps = [Capacity::new(1), Capacity::new(2), Capacity::new(3)];
        let total: Capacity = caps.iter().sum();
        assert_eq!(total, Capacity::new(6));
    }
}
