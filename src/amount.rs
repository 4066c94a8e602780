use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use num_traits::{Bounded, CheckedAdd, CheckedMul, One, Zero};

/// A trait representing a quantity of units or a per-unit cost, which is typically a signed
/// integer. Reverse edges carry negated costs and negative flows, so the type must be signed.
pub trait Amount:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + One
    + Bounded
    + CheckedAdd
    + CheckedMul
    + Debug
    + Display
    + Default
{
}

impl Amount for i32 {}

impl Amount for i64 {}
