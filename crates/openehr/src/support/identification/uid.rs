//! Root identifiers (`UID`) of a hierarchical object identifier.

use std::fmt;
use std::str::FromStr;

use crate::{OpenEhrError, OpenEhrResult};

/// Discriminant of a [`Uid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UidKind {
    /// Digit groups separated by `-`.
    Uuid,
    /// Digit groups separated by `.`.
    IsoOid,
    /// Word groups (`[A-Za-z0-9_]+`) separated by `.`.
    InternetId,
}

impl UidKind {
    /// Order in which [`Uid::classify`] tries the kinds. The first match wins, so a root made
    /// of a single digit group (for example `"42"`) classifies as [`UidKind::Uuid`].
    pub const CLASSIFICATION_ORDER: [UidKind; 3] =
        [UidKind::Uuid, UidKind::IsoOid, UidKind::InternetId];

    /// The RM class name for this kind.
    pub fn rm_name(self) -> &'static str {
        match self {
            UidKind::Uuid => "UUID",
            UidKind::IsoOid => "ISO_OID",
            UidKind::InternetId => "INTERNET_ID",
        }
    }

    /// Returns `true` if `text` has the textual shape of this kind.
    pub fn matches(self, text: &str) -> bool {
        match self {
            UidKind::Uuid => is_grouped(text, '-', |c| c.is_ascii_digit()),
            UidKind::IsoOid => is_grouped(text, '.', |c| c.is_ascii_digit()),
            UidKind::InternetId => is_grouped(text, '.', |c| c.is_ascii_alphanumeric() || c == '_'),
        }
    }
}

impl fmt::Display for UidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rm_name())
    }
}

/// `group ( separator group )*` with every group non-empty.
fn is_grouped(text: &str, separator: char, is_group_char: fn(char) -> bool) -> bool {
    text.split(separator)
        .all(|group| !group.is_empty() && group.chars().all(is_group_char))
}

/// The root of a [`HierObjectId`](super::HierObjectId), holding its raw text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Uid {
    Uuid(String),
    IsoOid(String),
    InternetId(String),
}

impl Uid {
    /// Builds a root of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`OpenEhrError::InvalidFormat`] if `value` does not have the shape of `kind`.
    pub fn new(kind: UidKind, value: impl Into<String>) -> OpenEhrResult<Self> {
        let value = value.into();
        if !kind.matches(&value) {
            tracing::debug!(root = %value, kind = %kind, "rejected root identifier");
            return Err(OpenEhrError::InvalidFormat(format!(
                "'{value}' is not a valid {kind} root"
            )));
        }

        Ok(match kind {
            UidKind::Uuid => Uid::Uuid(value),
            UidKind::IsoOid => Uid::IsoOid(value),
            UidKind::InternetId => Uid::InternetId(value),
        })
    }

    pub fn uuid(value: impl Into<String>) -> OpenEhrResult<Self> {
        Self::new(UidKind::Uuid, value)
    }

    pub fn iso_oid(value: impl Into<String>) -> OpenEhrResult<Self> {
        Self::new(UidKind::IsoOid, value)
    }

    pub fn internet_id(value: impl Into<String>) -> OpenEhrResult<Self> {
        Self::new(UidKind::InternetId, value)
    }

    /// Classifies root text by shape, trying [`UidKind::CLASSIFICATION_ORDER`] in turn.
    ///
    /// # Errors
    ///
    /// Returns [`OpenEhrError::InvalidFormat`] if no kind matches.
    pub fn classify(value: &str) -> OpenEhrResult<Self> {
        let kind = UidKind::CLASSIFICATION_ORDER
            .into_iter()
            .find(|kind| kind.matches(value))
            .ok_or_else(|| {
                tracing::debug!(root = %value, "root matches no known identifier shape");
                OpenEhrError::InvalidFormat(format!("unrecognised root '{value}'"))
            })?;

        Self::new(kind, value)
    }

    pub fn kind(&self) -> UidKind {
        match self {
            Uid::Uuid(_) => UidKind::Uuid,
            Uid::IsoOid(_) => UidKind::IsoOid,
            Uid::InternetId(_) => UidKind::InternetId,
        }
    }

    /// The raw root text.
    pub fn value(&self) -> &str {
        match self {
            Uid::Uuid(value) | Uid::IsoOid(value) | Uid::InternetId(value) => value,
        }
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Uid {
    type Err = OpenEhrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::classify(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::classify(&s).map_err(serde::de::Error::custom)
    }
}
