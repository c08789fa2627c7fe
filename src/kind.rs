//! Classification of strict wrappers.
//!
//! Every wrapper belongs to exactly one kind, fixed when it is defined. Kinds are uninhabited
//! types that appear as the associated `Kind` type of [`Strict`], which allows kinds to be
//! matched in bounds. [`Classification`] is the runtime counterpart.

use core::fmt::{self, Display, Formatter};

use crate::sealed::Sealed;
use crate::{FloatPrimitive, IntegralPrimitive};

/// The closed set of wrapper kinds.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Classification {
    Integral,
    Float,
    Alias,
}

impl Classification {
    pub const fn is_scalar(self) -> bool {
        matches!(self, Classification::Integral | Classification::Float)
    }
}

impl Display for Classification {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Classification::Integral => "integral",
                Classification::Float => "float",
                Classification::Alias => "alias",
            }
        )
    }
}

/// The kind of a strict wrapper.
pub trait Kind: Sealed + 'static {
    const CLASSIFICATION: Classification;
}

/// A kind with a primitive numeric representation.
///
/// Operators are only defined between operands of the same numeric kind.
pub trait Numeric: Kind {}

/// The kind of wrappers over primitive integers.
#[derive(Debug)]
pub enum IntegralKind {}

impl Kind for IntegralKind {
    const CLASSIFICATION: Classification = Classification::Integral;
}

impl Numeric for IntegralKind {}

impl Sealed for IntegralKind {}

/// The kind of wrappers over primitive floating-point types.
#[derive(Debug)]
pub enum FloatKind {}

impl Kind for FloatKind {
    const CLASSIFICATION: Classification = Classification::Float;
}

impl Numeric for FloatKind {}

impl Sealed for FloatKind {}

/// The kind of wrappers over arbitrary values.
#[derive(Debug)]
pub enum AliasKind {}

impl Kind for AliasKind {
    const CLASSIFICATION: Classification = Classification::Alias;
}

impl Sealed for AliasKind {}

/// A strict wrapper.
///
/// This trait is implemented by the definition macros ([`integral!`], [`float!`], and
/// [`alias!`]) and should not be implemented manually.
///
/// [`alias!`]: crate::alias!
/// [`float!`]: crate::float!
/// [`integral!`]: crate::integral!
pub trait Strict: Sized {
    type Kind: Kind;
    type Repr;

    /// The name of the wrapper as written in its definition.
    const NAME: &'static str;

    fn from_repr(repr: Self::Repr) -> Self;

    fn into_repr(self) -> Self::Repr;

    fn as_repr(&self) -> &Self::Repr;

    fn as_repr_mut(&mut self) -> &mut Self::Repr;
}

/// A strict wrapper over a primitive integer.
pub trait StrictIntegral: Copy + Strict<Kind = IntegralKind, Repr: IntegralPrimitive> {}

impl<W> StrictIntegral for W
where
    W: Copy + Strict<Kind = IntegralKind>,
    W::Repr: IntegralPrimitive,
{
}

/// A strict wrapper over a primitive floating-point type.
pub trait StrictFloat: Copy + Strict<Kind = FloatKind, Repr: FloatPrimitive> {}

impl<W> StrictFloat for W
where
    W: Copy + Strict<Kind = FloatKind>,
    W::Repr: FloatPrimitive,
{
}

/// A strict wrapper over an arbitrary value.
pub trait StrictAlias: Strict<Kind = AliasKind> {}

impl<W> StrictAlias for W where W: Strict<Kind = AliasKind> {}

/// Gets the classification of a strict wrapper.
pub const fn classify<W>() -> Classification
where
    W: Strict,
{
    <W::Kind as Kind>::CLASSIFICATION
}
