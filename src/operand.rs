//! Operator eligibility.
//!
//! Operators apply to a pair of [`Scalar`]s of the same kind when at least one of them is a strict
//! wrapper. The arrangement of wrappers in a pair is its [`Shape`]:
//!
//! | Left      | Right     | Shape         | Output  |
//! |-----------|-----------|---------------|---------|
//! | wrapper   | wrapper   | `BothStrict`  | left    |
//! | wrapper   | primitive | `LeftStrict`  | left    |
//! | primitive | wrapper   | `RightStrict` | left    |
//!
//! The output of an operator is always the type of its left operand. In particular, a primitive on
//! the left yields a primitive and discards the identity of the wrapper on the right.
//!
//! A pair of primitives has no shape. The operators of primitives are their own.
//!
//! Operands need not share a representation. Comparisons are exact: they compare values, never
//! the right operand truncated to the representation of the left. Arithmetic is computed in a
//! domain that represents both operands and only the output is converted to the type of the left
//! operand, so a divisor that is out of the range of the left representation never becomes zero.

use core::cmp::Ordering;
use num_traits::{AsPrimitive, Num, PrimInt, ToPrimitive, WrappingAdd, WrappingMul, WrappingSub};

use crate::kind::{FloatKind, IntegralKind, Numeric, Strict};
use crate::sealed::Sealed;
use crate::Primitive;

/// Whether or not a scalar is a strict wrapper.
pub trait Strictness: Sealed + 'static {}

/// Marks primitive scalars.
#[derive(Debug)]
pub enum Raw {}

impl Sealed for Raw {}

impl Strictness for Raw {}

/// Marks strict wrappers.
#[derive(Debug)]
pub enum Wrapped {}

impl Sealed for Wrapped {}

impl Strictness for Wrapped {}

/// The arrangement of strict wrappers in a pair of operands.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Arrangement {
    BothStrict,
    LeftStrict,
    RightStrict,
}

pub trait Shape: Sealed + 'static {
    const ARRANGEMENT: Arrangement;
}

/// Both operands are strict wrappers.
#[derive(Debug)]
pub enum BothStrict {}

impl Sealed for BothStrict {}

impl Shape for BothStrict {
    const ARRANGEMENT: Arrangement = Arrangement::BothStrict;
}

/// Only the left operand is a strict wrapper.
#[derive(Debug)]
pub enum LeftStrict {}

impl Sealed for LeftStrict {}

impl Shape for LeftStrict {
    const ARRANGEMENT: Arrangement = Arrangement::LeftStrict;
}

/// Only the right operand is a strict wrapper.
#[derive(Debug)]
pub enum RightStrict {}

impl Sealed for RightStrict {}

impl Shape for RightStrict {
    const ARRANGEMENT: Arrangement = Arrangement::RightStrict;
}

/// Maps a pair of strictness markers (left, right) to a shape.
pub trait Arrange: Sealed {
    type Shape: Shape;
}

impl Sealed for (Wrapped, Wrapped) {}

impl Arrange for (Wrapped, Wrapped) {
    type Shape = BothStrict;
}

impl Sealed for (Wrapped, Raw) {}

impl Arrange for (Wrapped, Raw) {
    type Shape = LeftStrict;
}

impl Sealed for (Raw, Wrapped) {}

impl Arrange for (Raw, Wrapped) {
    type Shape = RightStrict;
}

/// A primitive numeric type or a strict wrapper of one.
pub trait Scalar: Copy {
    type Kind: Numeric;
    type Strictness: Strictness;
    type Repr: Primitive<Kind = Self::Kind>;

    fn from_scalar(repr: Self::Repr) -> Self;

    fn into_scalar(self) -> Self::Repr;
}

impl<W> Scalar for W
where
    W: Copy + Strict,
    W::Kind: Numeric,
    W::Repr: Primitive<Kind = W::Kind>,
{
    type Kind = W::Kind;
    type Strictness = Wrapped;
    type Repr = W::Repr;

    fn from_scalar(repr: Self::Repr) -> Self {
        W::from_repr(repr)
    }

    fn into_scalar(self) -> Self::Repr {
        self.into_repr()
    }
}

macro_rules! impl_scalar_for_primitive {
    (signed => $t:ty) => {
        impl_scalar_for_primitive!(kind => IntegralKind, primitive => $t);
    };
    (unsigned => $t:ty) => {
        impl_scalar_for_primitive!(kind => IntegralKind, primitive => $t);
    };
    (float => $t:ty) => {
        impl_scalar_for_primitive!(kind => FloatKind, primitive => $t);
    };
    (kind => $k:ty, primitive => $t:ty) => {
        impl Scalar for $t {
            type Kind = $k;
            type Strictness = Raw;
            type Repr = $t;

            fn from_scalar(repr: Self::Repr) -> Self {
                repr
            }

            fn into_scalar(self) -> Self::Repr {
                self
            }
        }
    };
}
with_integers!(impl_scalar_for_primitive);
with_floats!(impl_scalar_for_primitive);

/// A right operand that is eligible for operators with the left operand `L`.
///
/// This trait is implemented for every pair of scalars of the same kind that has a [`Shape`]. The
/// right operand is converted to the representation of the left operand with `as` semantics.
pub trait Operand<L>: Scalar
where
    L: Scalar,
{
    type Shape: Shape;

    fn into_operand(self) -> L::Repr;
}

impl<L, R> Operand<L> for R
where
    L: Scalar,
    R: Scalar<Kind = L::Kind>,
    R::Repr: AsPrimitive<L::Repr>,
    (L::Strictness, R::Strictness): Arrange,
{
    type Shape = <(L::Strictness, R::Strictness) as Arrange>::Shape;

    fn into_operand(self) -> L::Repr {
        self.into_scalar().as_()
    }
}

/// A binary arithmetic operation.
pub trait Arithmetic: Copy + Sealed {
    fn apply<T>(self, left: T, right: T) -> T
    where
        T: Num;

    /// Applies the operation such that addition, subtraction, and multiplication wrap.
    fn apply_wrapping<T>(self, left: T, right: T) -> T
    where
        T: PrimInt + WrappingAdd + WrappingMul + WrappingSub;
}

macro_rules! impl_arithmetic {
    ($operation:ident => $apply:expr, $apply_wrapping:expr $(,)?) => {
        #[derive(Clone, Copy, Debug)]
        pub struct $operation;

        impl Sealed for $operation {}

        impl Arithmetic for $operation {
            fn apply<T>(self, left: T, right: T) -> T
            where
                T: Num,
            {
                ($apply)(left, right)
            }

            fn apply_wrapping<T>(self, left: T, right: T) -> T
            where
                T: PrimInt + WrappingAdd + WrappingMul + WrappingSub,
            {
                ($apply_wrapping)(left, right)
            }
        }
    };
}
impl_arithmetic!(
    Addition => core::ops::Add::add,
    |left: T, right: T| left.wrapping_add(&right),
);
impl_arithmetic!(
    Subtraction => core::ops::Sub::sub,
    |left: T, right: T| left.wrapping_sub(&right),
);
impl_arithmetic!(
    Multiplication => core::ops::Mul::mul,
    |left: T, right: T| left.wrapping_mul(&right),
);
impl_arithmetic!(Division => core::ops::Div::div, core::ops::Div::div);
impl_arithmetic!(Remainder => core::ops::Rem::rem, core::ops::Rem::rem);

/// Applies an arithmetic operation to a pair of operands and constructs the left operand's type
/// from the output.
pub fn zip_map<L, R, O>(left: L, right: R, operation: O) -> L
where
    L: Scalar,
    R: Operand<L>,
    O: Arithmetic,
{
    L::from_scalar(left.into_scalar().zip_map_with(right.into_scalar(), operation))
}

/// Applies a bitwise function to the representations of a pair of operands and constructs the left
/// operand's type from the output.
///
/// The right operand is truncated to the representation of the left. This is exact for `&`, `|`,
/// and `^`, because the bits of their output depend only on the same bits of their input.
pub fn zip_map_bits<L, R, F>(left: L, right: R, f: F) -> L
where
    L: Scalar,
    R: Operand<L>,
    F: FnOnce(L::Repr, L::Repr) -> L::Repr,
{
    L::from_scalar(f(left.into_scalar(), right.into_operand()))
}

/// Shifts the left operand by the right operand.
///
/// The shift amount is not truncated to the representation of the left operand. Negative amounts
/// and amounts that are not less than the number of bits overflow as the shift operators of
/// primitives do.
pub fn zip_map_shift<L, R, F>(left: L, right: R, f: F) -> L
where
    L: Scalar,
    R: Operand<L>,
    F: FnOnce(L::Repr, usize) -> L::Repr,
{
    let amount = right.into_scalar().to_usize().unwrap_or(usize::MAX);
    L::from_scalar(f(left.into_scalar(), amount))
}

/// Compares a pair of operands by value.
pub fn compare<L, R>(left: L, right: R) -> Option<Ordering>
where
    L: Scalar,
    R: Operand<L>,
{
    left.into_scalar().compare_with(right.into_scalar())
}

/// Gets the arrangement of wrappers in a pair of operands.
pub const fn arrangement<L, R>() -> Arrangement
where
    L: Scalar,
    R: Operand<L>,
{
    <R::Shape as Shape>::ARRANGEMENT
}
