//! Strict wrapper types: distinct identities for integral, floating-point, and arbitrary values.
//!
//! This crate provides definition macros that introduce newtypes around a representation type.
//! Each newtype is a distinct type: two wrappers around the same representation never convert
//! into one another implicitly, yet each behaves like its representation for arithmetic,
//! comparison, iteration, indirection, and formatting.
//!
//! | Macro         | Representation                  | Kind           |
//! |---------------|---------------------------------|----------------|
//! | [`integral!`] | a primitive integer             | `IntegralKind` |
//! | [`float!`]    | a primitive floating-point type | `FloatKind`    |
//! | [`alias!`]    | any sized value type            | `AliasKind`    |
//!
//! Every wrapper implements [`Strict`], which exposes its kind, its representation, and its name.
//!
//! # Scalar Wrappers
//!
//! Integral and floating-point wrappers accept implicit construction (`From`) only from the types
//! listed in their definition. When no list is given, only the representation is qualified.
//!
//! ```rust
//! use stricture::integral;
//!
//! integral! {
//!     /// A distance in meters.
//!     pub struct Distance(i64) from i64, i32;
//! }
//!
//! let x = Distance::from(3i32);
//! let y: Distance = 4i64.into();
//! assert_eq!(x + y, 7);
//! ```
//!
//! Operators accept a wrapper on either side. The result has the type of the left operand, so a
//! primitive on the left yields a primitive.
//!
//! ```rust
//! use stricture::integral;
//!
//! integral! {
//!     pub struct Distance(i64);
//! }
//!
//! let x = Distance::new(2);
//! let y: Distance = x * 3;
//! let z: i64 = 3i64 * x;
//! assert_eq!(y, z);
//! ```
//!
//! Wrappers with the same representation are not interchangeable.
//!
//! ```rust,compile_fail
//! use stricture::integral;
//!
//! integral! {
//!     pub struct Distance(i64);
//! }
//! integral! {
//!     pub struct Weight(i64);
//! }
//!
//! let weight: Weight = Distance::new(1);
//! ```
//!
//! Construction from a type that is not listed must be explicit.
//!
//! ```rust,compile_fail
//! use stricture::integral;
//!
//! integral! {
//!     pub struct Distance(i64);
//! }
//!
//! let x = Distance::from(1i32);
//! ```
//!
//! ```rust
//! use stricture::integral;
//!
//! integral! {
//!     pub struct Distance(i64);
//! }
//!
//! let x = Distance::cast_from(1i32);
//! assert_eq!(x, 1i64);
//! ```
//!
//! # Aliases
//!
//! Aliases wrap arbitrary values and dereference to them. Forwarded capabilities (indexing,
//! iteration, length, capacity, etc.) are only available when the wrapped type provides them.
//!
//! ```rust
//! use stricture::alias;
//! use stricture::alias::Length;
//!
//! alias! {
//!     #[derive(Clone, Debug, Default, PartialEq)]
//!     pub struct Names(Vec<String>);
//! }
//!
//! let mut names = Names::default();
//! names.push("ferris".into());
//! assert_eq!(Length::len(&names), 1);
//! assert_eq!(names[0], "ferris");
//! ```
//!
//! # Features
//!
//! | Feature    | Default | Description                                                  |
//! |------------|---------|--------------------------------------------------------------|
//! | `approx`   | yes     | Implements `approx` traits for floating-point wrappers.      |
//! | `serde`    | yes     | Serializes scalar wrappers transparently as their primitive. |
//! | `std`      | yes     | Integrates with `std` and enables transcendental functions.  |
//! | `unstable` | no      | Forwards allocators of aliases on nightly toolchains.        |

#![no_std]
#![cfg_attr(all(nightly, feature = "unstable"), feature(allocator_api))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use core::cmp::Ordering;
use core::fmt::{Binary, Debug, Display, LowerExp, LowerHex, Octal, UpperExp, UpperHex};
use core::hash::Hash;
use core::iter::{Product, Sum};
use core::str::FromStr;
use num_traits::float::FloatCore;
use num_traits::{AsPrimitive, Bounded, Num, NumCast, PrimInt, Signed, ToPrimitive};

use crate::kind::{FloatKind, IntegralKind, Numeric};
use crate::operand::Arithmetic;

macro_rules! with_integers {
    ($f:ident) => {
        $f!(signed => i8);
        $f!(signed => i16);
        $f!(signed => i32);
        $f!(signed => i64);
        $f!(signed => i128);
        $f!(signed => isize);
        $f!(unsigned => u8);
        $f!(unsigned => u16);
        $f!(unsigned => u32);
        $f!(unsigned => u64);
        $f!(unsigned => u128);
        $f!(unsigned => usize);
    };
}

macro_rules! with_floats {
    ($f:ident) => {
        $f!(float => f32);
        $f!(float => f64);
    };
}

pub mod alias;
pub mod catalog;
pub mod error;
pub mod kind;
pub mod operand;
pub mod qualify;
pub mod scalar;
pub mod stringify;

pub use crate::error::CastError;
pub use crate::kind::{Classification, Strict, StrictAlias, StrictFloat, StrictIntegral};
pub use crate::operand::{Operand, Scalar};
pub use crate::qualify::{Qualified, QualifiedFloat, QualifiedIntegral};
pub use crate::stringify::Stringify;

// Paths used by exported macros. These are not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use core;
    pub use num_traits;

    #[cfg(feature = "approx")]
    pub use approx;
    #[cfg(feature = "serde")]
    pub use serde;
}

mod sealed {
    pub trait Sealed {}
}

use crate::sealed::Sealed;

/// A primitive numeric type that can represent a scalar wrapper.
///
/// This trait is sealed and is implemented only for the native integer and floating-point types.
pub trait Primitive:
    Bounded
    + Copy
    + Debug
    + Default
    + Display
    + FromStr
    + Num
    + NumCast
    + PartialOrd
    + Product
    + Sealed
    + Send
    + Sum
    + Sync
    + 'static
{
    type Kind: Numeric;

    const ZERO: Self;
    const ONE: Self;
    /// The lowest finite value.
    const MIN: Self;
    /// The greatest finite value.
    const MAX: Self;

    /// Applies an arithmetic operation to `self` and a primitive of the same kind.
    ///
    /// The operation is computed in a domain that represents both operands and the output is
    /// converted to `Self` with `as` semantics. When `right` is representable by `Self`, the
    /// operation is exactly that of `Self`.
    #[doc(hidden)]
    fn zip_map_with<U, O>(self, right: U, operation: O) -> Self
    where
        U: Primitive,
        O: Arithmetic;

    /// Compares `self` and a primitive of the same kind by value.
    #[doc(hidden)]
    fn compare_with<U>(self, right: U) -> Option<Ordering>
    where
        U: Primitive;
}

/// A primitive integer type.
pub trait IntegralPrimitive:
    AsPrimitive<usize>
    + Binary
    + Hash
    + LowerHex
    + Octal
    + Ord
    + PrimInt
    + Primitive<Kind = IntegralKind>
    + UpperHex
{
    const BITS: u32;

    /// Negates the value.
    ///
    /// Signed types overflow exactly as the `-` operator does. Unsigned types wrap, yielding the
    /// two's complement of the value.
    fn negate(self) -> Self;
}

/// A primitive floating-point type.
pub trait FloatPrimitive:
    FloatCore + LowerExp + Primitive<Kind = FloatKind> + Signed + UpperExp
{
    /// The smallest positive normal value.
    const MIN_POSITIVE: Self;
    /// The smallest positive subnormal value.
    const DENORM_MIN: Self;
    const EPSILON: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    /// A quiet `NaN`.
    const NAN: Self;
    /// A signaling `NaN`.
    ///
    /// Some platforms quiet signaling `NaN`s when they are moved through floating-point
    /// registers, so this value is only guaranteed to signal in its encoded form.
    const SIGNALING_NAN: Self;
}

macro_rules! impl_primitive {
    (signed => $t:ty) => {
        impl_primitive!(integral => $t);

        impl IntegralPrimitive for $t {
            const BITS: u32 = <$t>::BITS;

            fn negate(self) -> Self {
                -self
            }
        }
    };
    (unsigned => $t:ty) => {
        impl_primitive!(integral => $t);

        impl IntegralPrimitive for $t {
            const BITS: u32 = <$t>::BITS;

            fn negate(self) -> Self {
                self.wrapping_neg()
            }
        }
    };
    (integral => $t:ty) => {
        impl Sealed for $t {}

        impl Primitive for $t {
            type Kind = IntegralKind;

            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            fn zip_map_with<U, O>(self, right: U, operation: O) -> Self
            where
                U: Primitive,
                O: Arithmetic,
            {
                if let Some(right) = <$t as NumCast>::from(right) {
                    return operation.apply(self, right);
                }
                // `right` is out of range, so the output is truncated to `Self` in any case and
                // wrapping in the wide domain cannot change it.
                match (self.to_i128(), right.to_i128()) {
                    (Some(left), Some(right)) => operation.apply_wrapping(left, right) as $t,
                    _ => match (self.to_u128(), right.to_u128()) {
                        (Some(left), Some(right)) => operation.apply_wrapping(left, right) as $t,
                        // Neither domain represents both operands. Only addition, subtraction, and
                        // multiplication are exact here.
                        _ => operation.apply_wrapping(wrapping_i128(self), wrapping_i128(right))
                            as $t,
                    },
                }
            }

            fn compare_with<U>(self, right: U) -> Option<Ordering>
            where
                U: Primitive,
            {
                if let Some(right) = <$t as NumCast>::from(right) {
                    return Some(Ord::cmp(&self, &right));
                }
                // Only unsigned values greater than `i128::MAX` are not representable by `i128`.
                Some(match (self.to_i128(), right.to_i128()) {
                    (Some(left), Some(right)) => left.cmp(&right),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => self.to_u128()?.cmp(&right.to_u128()?),
                })
            }
        }
    };
    (float => $t:ident) => {
        impl Sealed for $t {}

        impl Primitive for $t {
            type Kind = FloatKind;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const MIN: Self = $t::MIN;
            const MAX: Self = $t::MAX;

            // `f64` represents every `f32` exactly, and rounding an `f64` output of `+`, `-`, `*`,
            // `/`, or `%` of two `f32`s yields the `f32` output.
            fn zip_map_with<U, O>(self, right: U, operation: O) -> Self
            where
                U: Primitive,
                O: Arithmetic,
            {
                match (self.to_f64(), right.to_f64()) {
                    (Some(left), Some(right)) => operation.apply(left, right) as $t,
                    _ => $t::NAN,
                }
            }

            fn compare_with<U>(self, right: U) -> Option<Ordering>
            where
                U: Primitive,
            {
                self.to_f64()?.partial_cmp(&right.to_f64()?)
            }
        }

        impl FloatPrimitive for $t {
            const MIN_POSITIVE: Self = $t::MIN_POSITIVE;
            const DENORM_MIN: Self = $t::from_bits(1);
            const EPSILON: Self = $t::EPSILON;
            const INFINITY: Self = $t::INFINITY;
            const NEG_INFINITY: Self = $t::NEG_INFINITY;
            const NAN: Self = $t::NAN;
            const SIGNALING_NAN: Self = impl_primitive!(signaling_nan => $t);
        }
    };
    (signaling_nan => f32) => {
        f32::from_bits(0x7fa0_0000)
    };
    (signaling_nan => f64) => {
        f64::from_bits(0x7ff4_0000_0000_0000)
    };
}
with_integers!(impl_primitive);
with_floats!(impl_primitive);

// Converts an integer to `i128` with `as` semantics.
fn wrapping_i128<T>(value: T) -> i128
where
    T: ToPrimitive,
{
    value
        .to_i128()
        .or_else(|| value.to_u128().map(|value| value as i128))
        .unwrap_or_default()
}
