//! Qualification of construction sources.
//!
//! A scalar wrapper lists the types that may construct it implicitly (via `From`). Each listed
//! type must be qualified for the wrapper's kind: a primitive of that kind or a strict wrapper of
//! that kind. Any other source must construct the wrapper explicitly with `cast_from`, which
//! accepts everything that converts to the representation with `as` semantics.

use num_traits::AsPrimitive;

use crate::kind::{Strict, StrictFloat, StrictIntegral};
use crate::{FloatPrimitive, IntegralPrimitive};

/// A type that may be listed as an implicit source of integral wrappers.
pub trait QualifiedIntegral: Copy + 'static {
    type Native: IntegralPrimitive;

    fn into_native(self) -> Self::Native;
}

/// A type that may be listed as an implicit source of floating-point wrappers.
pub trait QualifiedFloat: Copy + 'static {
    type Native: FloatPrimitive;

    fn into_native(self) -> Self::Native;
}

macro_rules! impl_qualified_for_primitive {
    (signed => $t:ty) => {
        impl_qualified_for_primitive!(qualified => QualifiedIntegral, primitive => $t);
    };
    (unsigned => $t:ty) => {
        impl_qualified_for_primitive!(qualified => QualifiedIntegral, primitive => $t);
    };
    (float => $t:ty) => {
        impl_qualified_for_primitive!(qualified => QualifiedFloat, primitive => $t);
    };
    (qualified => $q:ident, primitive => $t:ty) => {
        impl $q for $t {
            type Native = $t;

            fn into_native(self) -> Self::Native {
                self
            }
        }
    };
}
with_integers!(impl_qualified_for_primitive);
with_floats!(impl_qualified_for_primitive);

impl<W> QualifiedIntegral for W
where
    W: StrictIntegral + 'static,
{
    type Native = W::Repr;

    fn into_native(self) -> Self::Native {
        self.into_repr()
    }
}

impl<W> QualifiedFloat for W
where
    W: StrictFloat + 'static,
{
    type Native = W::Repr;

    fn into_native(self) -> Self::Native {
        self.into_repr()
    }
}

/// A strict wrapper that may be constructed implicitly from `S`.
///
/// This trait is implemented alongside `From<S>` for each type listed in a wrapper's definition.
pub trait Qualified<S>: From<S> + Strict {}

/// Converts a qualified integral source into the representation `T`.
pub fn integral<S, T>(source: S) -> T
where
    S: QualifiedIntegral,
    S::Native: AsPrimitive<T>,
    T: IntegralPrimitive,
{
    source.into_native().as_()
}

/// Converts a qualified floating-point source into the representation `T`.
pub fn float<S, T>(source: S) -> T
where
    S: QualifiedFloat,
    S::Native: AsPrimitive<T>,
    T: FloatPrimitive,
{
    source.into_native().as_()
}
