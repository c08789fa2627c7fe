//! Display of aliased values that may not implement `Display`.
//!
//! Aliases always implement `Display`. When the aliased value implements `Display`, it is written
//! as is. Otherwise, the placeholder `<Name>` is written, where `Name` is the name of the alias.
//!
//! The choice is made by method resolution: `DisplayValue` is implemented for `Probe` and is
//! found before auto-referencing, while `DisplayPlaceholder` is implemented for `&Probe` and is
//! only found after. In generic aliases, the aliased value is displayed only when its `Display`
//! implementation is known at the definition, so a generic parameter alone always uses the
//! placeholder.

use core::fmt::{self, Display, Formatter};

pub struct Probe<'a, T>(pub &'a T)
where
    T: ?Sized;

pub trait DisplayValue {
    fn fmt_alias(&self, formatter: &mut Formatter<'_>, name: &str) -> fmt::Result;
}

impl<T> DisplayValue for Probe<'_, T>
where
    T: Display + ?Sized,
{
    fn fmt_alias(&self, formatter: &mut Formatter<'_>, _: &str) -> fmt::Result {
        Display::fmt(self.0, formatter)
    }
}

pub trait DisplayPlaceholder {
    fn fmt_alias(&self, formatter: &mut Formatter<'_>, name: &str) -> fmt::Result;
}

impl<T> DisplayPlaceholder for &'_ Probe<'_, T>
where
    T: ?Sized,
{
    fn fmt_alias(&self, formatter: &mut Formatter<'_>, name: &str) -> fmt::Result {
        write!(formatter, "<{}>", name)
    }
}
