//! Identifier parsing configuration.
//!
//! Resolve an [`IdentifierConfig`] once (for example when the surrounding record model is
//! initialised) and pass it to [`HierObjectId::parse_with`](crate::HierObjectId::parse_with).
//! The default configuration reproduces the historical lenient behaviour.

/// How a trailing `::` with no extension text is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingSeparator {
    /// `root::` parses as `root` with no extension.
    #[default]
    Lenient,
    /// `root::` is rejected as malformed.
    Reject,
}

/// Identifier parsing configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentifierConfig {
    trailing_separator: TrailingSeparator,
}

impl IdentifierConfig {
    pub fn new(trailing_separator: TrailingSeparator) -> Self {
        Self { trailing_separator }
    }

    /// Configuration that rejects a trailing `::`.
    pub fn strict() -> Self {
        Self::new(TrailingSeparator::Reject)
    }

    pub fn trailing_separator(&self) -> TrailingSeparator {
        self.trailing_separator
    }
}
