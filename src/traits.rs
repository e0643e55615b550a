//! Numeric capability required of matrix elements.
//!
//! Every arithmetic routine on [`Matrix`](crate::primitives::Matrix) seeds
//! its accumulators from [`Element::zero`], so element types supply their
//! identities explicitly instead of converting from a literal.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Element type storable in a [`Matrix`](crate::primitives::Matrix).
///
/// # Examples
///
/// ```
/// use densemat::Element;
///
/// assert_eq!(i32::zero(), 0);
/// assert_eq!(f64::one(), 1.0);
/// ```
pub trait Element:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + Send
    + Sync
    + 'static
{
    /// The additive identity, used to seed sums.
    fn zero() -> Self;

    /// The multiplicative identity, used on the diagonal of [`identity`].
    ///
    /// [`identity`]: crate::primitives::Matrix::identity
    fn one() -> Self;
}

macro_rules! impl_element {
    ($zero:literal, $one:literal; $($ty:ty),+ $(,)?) => {
        $(
            impl Element for $ty {
                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn one() -> Self {
                    $one
                }
            }
        )+
    };
}

impl_element!(0, 1; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_element!(0.0, 1.0; f32, f64);
