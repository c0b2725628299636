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
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
};

use num_traits::{
    CheckedAdd, CheckedMul, CheckedSub, SaturatingAdd, SaturatingMul, SaturatingSub, Signed, Zero,
};

/// Historical usage weight of a piece of equipment.
///
/// The underlying primitive is signed so that solver-internal arithmetic
/// (reduced costs are negated weights) stays in one numeric domain; the
/// model layer rejects negative weights at construction time.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Weight<C>(C);

impl<C: Copy> Weight<C> {
    #[inline]
    pub const fn new(value: C) -> Self {
        Weight(value)
    }

    #[inline]
    pub const fn value(self) -> C {
        self.0
    }

    #[inline]
    pub fn is_negative(self) -> bool
    where
        C: Signed,
    {
        self.0.is_negative()
    }

    #[inline]
    pub fn checked_add(self, other: Weight<C>) -> Option<Self>
    where
        C: CheckedAdd<Output = C> + Copy,
    {
        self.0.checked_add(&other.0).map(Weight)
    }

    #[inline]
    pub fn checked_sub(self, other: Weight<C>) -> Option<Self>
    where
        C: CheckedSub<Output = C> + Copy,
    {
        self.0.checked_sub(&other.0).map(Weight)
    }

    #[inline]
    pub fn saturating_add(self, other: Weight<C>) -> Self
    where
        C: SaturatingAdd<Output = C> + Copy,
    {
        Weight(self.0.saturating_add(&other.0))
    }

    #[inline]
    pub fn saturating_sub(self, other: Weight<C>) -> Self
    where
        C: SaturatingSub<Output = C> + Copy,
    {
        Weight(self.0.saturating_sub(&other.0))
    }

    pub fn saturating_mul(self, factor: C) -> Self
    where
        C: SaturatingMul<Output = C> + Copy,
    {
        Weight(self.0.saturating_mul(&factor))
    }
}

impl<C: Copy + Display> Display for Weight<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Weight({})", self.0)
    }
}

impl<C> Add for Weight<C>
where
    C: Copy + CheckedAdd<Output = C>,
{
    type Output = Weight<C>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Weight(
            self.0
                .checked_add(&rhs.0)
                .expect("overflow in Weight + Weight"),
        )
    }
}

impl<C> AddAssign for Weight<C>
where
    C: Copy + CheckedAdd<Output = C>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_add(&rhs.0)
            .expect("overflow in Weight += Weight");
    }
}

impl<C> Sub for Weight<C>
where
    C: Copy + CheckedSub<Output = C>,
{
    type Output = Weight<C>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Weight(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in Weight - Weight"),
        )
    }
}

impl<C> SubAssign for Weight<C>
where
    C: Copy + CheckedSub<Output = C>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_sub(&rhs.0)
            .expect("underflow in Weight -= Weight");
    }
}

impl<C: Copy + CheckedAdd<Output = C>> CheckedAdd for Weight<C> {
    #[inline]
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(&rhs.0).map(Weight)
    }
}

impl<C: Copy + CheckedSub<Output = C>> CheckedSub for Weight<C> {
    #[inline]
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_sub(&rhs.0).map(Weight)
    }
}

impl<C> SaturatingAdd for Weight<C>
where
    C: Copy + CheckedAdd + SaturatingAdd<Output = C>,
{
    #[inline]
    fn saturating_add(&self, rhs: &Self) -> Self {
        Weight(self.0.saturating_add(&rhs.0))
    }
}

impl<C> SaturatingSub for Weight<C>
where
    C: Copy + CheckedSub + SaturatingSub<Output = C>,
{
    #[inline]
    fn saturating_sub(&self, rhs: &Self) -> Self {
        Weight(self.0.saturating_sub(&rhs.0))
    }
}

impl<C> Mul<C> for Weight<C>
where
    C: Copy + CheckedMul<Output = C>,
{
    type Output = Weight<C>;

    #[inline]
    fn mul(self, rhs: C) -> Self::Output {
        Weight(
            self.0
                .checked_mul(&rhs)
                .expect("overflow in Weight * scalar"),
        )
    }
}

impl<C> MulAssign<C> for Weight<C>
where
    C: Copy + CheckedMul<Output = C>,
{
    #[inline]
    fn mul_assign(&mut self, rhs: C) {
        self.0 = self
            .0
            .checked_mul(&rhs)
            .expect("overflow in Weight *= scalar");
    }
}

impl<C> Sum for Weight<C>
where
    C: Copy + CheckedAdd<Output = C> + Zero,
{
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Weight::new(C::zero()), |a, b| a + b)
    }
}

impl<'a, C> Sum<&'a Weight<C>> for Weight<C>
where
    C: Copy + CheckedAdd<Output = C> + Zero,
{
    #[inline]
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Weight::new(C::zero()), |a, b| a + *b)
    }
}

impl<C: Copy + Zero + CheckedAdd> Zero for Weight<C> {
    fn zero() -> Self {
        Weight(C::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}
