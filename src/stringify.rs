//! Conversion of values into narrow and wide strings.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;

/// A wide string: UTF-16 code units.
pub type WideString = Vec<u16>;

/// A value that can be converted into narrow (UTF-8) and wide (UTF-16) strings.
///
/// This trait is implemented for all types that implement `Display`. Scalar wrappers display as
/// their representation. Aliases display as their underlying value when it implements `Display`
/// and as the placeholder `<Name>` otherwise, so every strict wrapper is `Stringify`.
pub trait Stringify {
    fn stringify(&self) -> String;

    fn wstringify(&self) -> WideString {
        self.stringify().encode_utf16().collect()
    }
}

impl<T> Stringify for T
where
    T: Display + ?Sized,
{
    fn stringify(&self) -> String {
        self.to_string()
    }
}
