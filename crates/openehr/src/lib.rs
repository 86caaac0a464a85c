//! openEHR Reference Model value types.
//!
//! This crate covers two leaf areas of the RM:
//! - `support::identification`: hierarchical object identifiers (`root::extension`) whose root
//!   is classified as a UUID-like, ISO OID-like, or Internet domain-like identifier.
//! - `data_types::quantity`: the countable quantity `DV_COUNT` together with the interval and
//!   reference range types that annotate it.
//!
//! All values are immutable once constructed. Operations that can fail return
//! [`OpenEhrResult`] rather than panicking.
//!
//! ```rust
//! use openehr_rm::{DvCount, HierObjectId, UidKind};
//!
//! let id = HierObjectId::parse("2.999.1.2::5")?;
//! assert_eq!(id.root().kind(), UidKind::IsoOid);
//! assert_eq!(id.extension(), Some("5"));
//!
//! let remaining = DvCount::new(10).subtract(&DvCount::new(3))?;
//! assert_eq!(remaining.magnitude(), 7);
//! # Ok::<(), openehr_rm::OpenEhrError>(())
//! ```

pub mod config;
pub mod data_types;
pub mod support;

pub use config::{IdentifierConfig, TrailingSeparator};
pub use data_types::quantity::{DvCount, DvInterval, DvOrdered, DvQuantified, ReferenceRange};
pub use data_types::text::DvText;
pub use support::identification::{HierObjectId, Uid, UidKind};

use thiserror::Error;

/// Errors returned by the `openehr-rm` crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenEhrError {
    #[error("invalid identifier format: {0}")]
    InvalidFormat(String),

    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    #[error("magnitude overflow: {0}")]
    Overflow(String),

    #[error("invalid text: {0}")]
    Text(#[from] rm_types::TextError),
}

pub type OpenEhrResult<T> = std::result::Result<T, OpenEhrError>;
