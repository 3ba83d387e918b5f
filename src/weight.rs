//! Edge weights and path distances.
//!
//! Any type implementing [`Weight`] can be used as an edge weight of a
//! [`Graph`](crate::Graph) passed to the shortest paths solver. Integer and
//! floating point primitives are supported out of the box.
//!
//! Sums of weights along a path are computed with the plain `+` operator. It
//! is up to the caller to pick a type wide enough for the longest path in the
//! graph.

use std::{fmt, ops::Add};

/// Numeric type usable as an edge weight and a path distance.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    /// The additive identity, distance of the source vertex to itself.
    fn zero() -> Self;

    /// Returns `true` if the type cannot represent negative values.
    ///
    /// The solver checks every edge weight for negativity unless this returns
    /// `true`. The implementation is expected to be a constant so that the
    /// check is optimized away for unsigned types.
    fn is_unsigned() -> bool;
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(i128, false);
impl_int_weight!(isize, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(u128, true);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0.0
            }

            fn is_unsigned() -> bool {
                false
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

/// Distance of a vertex from the source: either a finite sum of edge weights
/// or infinity for vertices that were not reached.
///
/// Every finite distance compares less than [`Distance::Infinite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W> Distance<W> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Distance::Infinite)
    }

    /// Converts into the finite value, or `None` for infinity.
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }

    pub fn as_finite(&self) -> Option<&W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Distance<U>
    where
        F: FnOnce(W) -> U,
    {
        match self {
            Distance::Finite(w) => Distance::Finite(f(w)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl<W: PartialOrd> Distance<W> {
    /// Returns `true` if the finite `candidate` is strictly shorter than this
    /// distance.
    pub fn is_improved_by(&self, candidate: &W) -> bool {
        match self {
            Distance::Finite(curr) => candidate < curr,
            Distance::Infinite => true,
        }
    }
}

impl<W: Weight> Distance<W> {
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }
}

impl<W> Default for Distance<W> {
    fn default() -> Self {
        Distance::Infinite
    }
}

impl<W> From<W> for Distance<W> {
    fn from(value: W) -> Self {
        Distance::Finite(value)
    }
}

impl<W: Add<W, Output = W>> Add<W> for Distance<W> {
    type Output = Distance<W>;

    fn add(self, rhs: W) -> Self::Output {
        self.map(|w| w + rhs)
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => w.fmt(f),
            Distance::Infinite => f.write_str("Infinity"),
        }
    }
}

// Infinity has no JSON representation, so it is serialized as `null`.
#[cfg(feature = "serde")]
impl<W: serde::Serialize> serde::Serialize for Distance<W> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Distance::Finite(w) => serializer.serialize_some(w),
            Distance::Infinite => serializer.serialize_none(),
        }
    }
}
