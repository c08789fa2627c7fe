#[cfg(not(feature = "std"))]
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "std")]
use thiserror::Error;

/// Error of checked explicit construction: the source value is not representable by the target
/// wrapper.
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(feature = "std", error("value is not representable by `{target}`"))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CastError {
    target: &'static str,
}

impl CastError {
    pub const fn new(target: &'static str) -> Self {
        CastError { target }
    }

    /// Gets the name of the wrapper that could not represent the value.
    pub const fn target(&self) -> &'static str {
        self.target
    }
}

#[cfg(not(feature = "std"))]
impl Display for CastError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "value is not representable by `{}`", self.target)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::error::CastError;

    #[test]
    fn display_names_target() {
        let error = CastError::new("Distance");
        assert_eq!(error.target(), "Distance");
        assert_eq!(error.to_string(), "value is not representable by `Distance`");
    }
}
