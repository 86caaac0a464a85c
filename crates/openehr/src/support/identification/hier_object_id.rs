//! RM `HIER_OBJECT_ID`.

use std::fmt;
use std::str::FromStr;

use super::Uid;
use crate::config::{IdentifierConfig, TrailingSeparator};
use crate::{OpenEhrError, OpenEhrResult};

const EXTENSION_SEPARATOR: &str = "::";

/// Hierarchical object identifier of the form `root::extension`, the extension being optional.
///
/// Instances are immutable. The textual value is always `root` or `root::extension`, so two
/// identifiers are equal exactly when their textual values are equal.
///
/// # Examples
///
/// ```rust
/// # use openehr_rm::{HierObjectId, UidKind};
/// let id: HierObjectId = "openehr.org::ehr-42".parse()?;
/// assert_eq!(id.root().kind(), UidKind::InternetId);
/// assert_eq!(id.extension(), Some("ehr-42"));
///
/// let bare = HierObjectId::parse("1.2.840.113619")?;
/// assert!(!bare.has_extension());
/// # Ok::<(), openehr_rm::OpenEhrError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HierObjectId {
    value: String,
    root: Uid,
    extension: Option<String>,
}

impl HierObjectId {
    /// Parses `root` or `root::extension` with the default (lenient) configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OpenEhrError::InvalidFormat`] if the value is empty, starts with `::`, or the
    /// root text matches none of the [`Uid`] shapes.
    pub fn parse(value: &str) -> OpenEhrResult<Self> {
        Self::parse_with(value, &IdentifierConfig::default())
    }

    /// Parses `root` or `root::extension` using `config`.
    ///
    /// Only the first `::` separates root from extension; anything after it, including further
    /// `::`, belongs to the extension. A trailing `::` with nothing after it yields no
    /// extension unless `config` rejects it.
    ///
    /// # Errors
    ///
    /// As [`HierObjectId::parse`], plus [`OpenEhrError::InvalidFormat`] for a trailing `::`
    /// under [`TrailingSeparator::Reject`].
    pub fn parse_with(value: &str, config: &IdentifierConfig) -> OpenEhrResult<Self> {
        if value.is_empty() {
            return Err(rejected(value, "identifier value is empty"));
        }

        let (root_text, extension) = match value.split_once(EXTENSION_SEPARATOR) {
            None => (value, None),
            Some(("", _)) => return Err(rejected(value, "missing root")),
            Some((root_text, "")) => {
                if config.trailing_separator() == TrailingSeparator::Reject {
                    return Err(rejected(value, "empty extension after '::'"));
                }
                (root_text, None)
            }
            Some((root_text, extension)) => (root_text, Some(extension)),
        };

        let root = Uid::classify(root_text)?;
        Ok(Self::from_uid(root, extension))
    }

    /// Builds an identifier from root text and an optional extension.
    ///
    /// The text is joined as `root` (empty or absent extension) or `root::extension` and then
    /// parsed, so the result is the same as [`HierObjectId::parse`] on the joined text.
    ///
    /// # Errors
    ///
    /// Returns [`OpenEhrError::InvalidFormat`] if `root` is empty or the joined text does not
    /// parse.
    pub fn from_root_text(root: &str, extension: Option<&str>) -> OpenEhrResult<Self> {
        if root.is_empty() {
            return Err(rejected(root, "missing root"));
        }

        match extension.filter(|extension| !extension.is_empty()) {
            Some(extension) => Self::parse(&format!("{root}{EXTENSION_SEPARATOR}{extension}")),
            None => Self::parse(root),
        }
    }

    /// Builds an identifier from an already classified root. The root is not re-parsed.
    pub fn from_uid(root: Uid, extension: Option<&str>) -> Self {
        let extension = extension
            .filter(|extension| !extension.is_empty())
            .map(str::to_owned);

        let value = match &extension {
            Some(extension) => format!("{}{EXTENSION_SEPARATOR}{extension}", root.value()),
            None => root.value().to_owned(),
        };

        Self {
            value,
            root,
            extension,
        }
    }

    /// The full textual value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The namespace root of this identifier.
    pub fn root(&self) -> &Uid {
        &self.root
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    /// The local identifier within the root's namespace, if any.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

fn rejected(value: &str, reason: &str) -> OpenEhrError {
    tracing::debug!(identifier = %value, reason, "rejected hierarchical object identifier");
    OpenEhrError::InvalidFormat(format!("{reason}: '{value}'"))
}

impl fmt::Display for HierObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for HierObjectId {
    type Err = OpenEhrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<HierObjectId> for String {
    fn from(id: HierObjectId) -> Self {
        id.value
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HierObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HierObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UidKind;

    #[test]
    fn parses_oid_root_with_extension() {
        let id = HierObjectId::parse("2.999.1.2::5").expect("should parse");
        assert_eq!(id.root().kind(), UidKind::IsoOid);
        assert_eq!(id.root().value(), "2.999.1.2");
        assert!(id.has_extension());
        assert_eq!(id.extension(), Some("5"));
        assert_eq!(id.value(), "2.999.1.2::5");
    }

    #[test]
    fn parses_each_root_kind_without_extension() {
        let cases = [
            ("550-8400-29", UidKind::Uuid),
            ("1.2.840.113619", UidKind::IsoOid),
            ("hospital.example.org", UidKind::InternetId),
        ];

        for (text, kind) in cases {
            let id = HierObjectId::parse(text).expect("should parse");
            assert_eq!(id.root().kind(), kind, "kind of {text}");
            assert_eq!(id.root().value(), text);
            assert!(!id.has_extension());
            assert_eq!(id.extension(), None);
            assert_eq!(id.to_string(), text);
        }
    }

    #[test]
    fn extension_keeps_everything_after_first_separator() {
        let id = HierObjectId::parse("openehr.org::ehr::42 a/b").expect("should parse");
        assert_eq!(id.root().value(), "openehr.org");
        assert_eq!(id.extension(), Some("ehr::42 a/b"));
    }

    #[test]
    fn rejects_missing_root() {
        let err = HierObjectId::parse("::abc").expect_err("should reject missing root");
        assert!(matches!(err, OpenEhrError::InvalidFormat(msg) if msg.contains("missing root")));
    }

    #[test]
    fn rejects_empty_value() {
        let err = HierObjectId::parse("").expect_err("should reject empty value");
        assert!(matches!(err, OpenEhrError::InvalidFormat(msg) if msg.contains("empty")));
    }

    #[test]
    fn rejects_malformed_root() {
        for bad in ["bad root::1", "1.2.::x", "host/path", "-1::x"] {
            let err = HierObjectId::parse(bad).expect_err("should reject malformed root");
            assert!(
                matches!(err, OpenEhrError::InvalidFormat(_)),
                "unexpected error for {bad:?}: {err:?}"
            );
        }
    }

    #[test]
    fn trailing_separator_is_lenient_by_default() {
        let id = HierObjectId::parse("1.2.3::").expect("trailing '::' is tolerated");
        assert!(!id.has_extension());
        assert_eq!(id.value(), "1.2.3");
        assert_eq!(id, HierObjectId::parse("1.2.3").unwrap());
    }

    #[test]
    fn trailing_separator_rejected_when_configured() {
        let err = HierObjectId::parse_with("1.2.3::", &IdentifierConfig::strict())
            .expect_err("strict config rejects trailing '::'");
        assert!(matches!(err, OpenEhrError::InvalidFormat(msg) if msg.contains("empty extension")));

        let id = HierObjectId::parse_with("1.2.3::x", &IdentifierConfig::strict())
            .expect("strict config still accepts extensions");
        assert_eq!(id.extension(), Some("x"));
    }

    #[test]
    fn from_root_text_joins_extension() {
        let id = HierObjectId::from_root_text("openehr.org", Some("7")).expect("should build");
        assert_eq!(id.value(), "openehr.org::7");
        assert_eq!(id, HierObjectId::parse("openehr.org::7").unwrap());

        let id = HierObjectId::from_root_text("openehr.org", Some("")).expect("should build");
        assert_eq!(id.value(), "openehr.org");
        assert!(!id.has_extension());

        let id = HierObjectId::from_root_text("12-34", None).expect("should build");
        assert_eq!(id.root().kind(), UidKind::Uuid);
    }

    #[test]
    fn from_root_text_rejects_absent_root() {
        let err = HierObjectId::from_root_text("", Some("x")).expect_err("should reject");
        assert!(matches!(err, OpenEhrError::InvalidFormat(msg) if msg.contains("missing root")));
    }

    #[test]
    fn from_root_text_matches_parse_of_joined_text() {
        let id = HierObjectId::from_root_text("a::b", Some("c")).expect("should build");
        assert_eq!(id, HierObjectId::parse("a::b::c").unwrap());
        assert_eq!(id.root().value(), "a");
        assert_eq!(id.extension(), Some("b::c"));

        let id = HierObjectId::from_root_text("1.2::3", None).expect("should build");
        assert_eq!(id, HierObjectId::parse("1.2::3").unwrap());
        assert_eq!(id.root().kind(), UidKind::IsoOid);
        assert_eq!(id.extension(), Some("3"));
    }

    #[test]
    fn from_uid_stores_root_unchanged() {
        let root = Uid::internet_id("42").expect("digits are valid word characters");
        let id = HierObjectId::from_uid(root.clone(), Some("ext"));
        assert_eq!(id.root(), &root);
        assert_eq!(id.root().kind(), UidKind::InternetId);
        assert_eq!(id.value(), "42::ext");

        // Re-parsing the same text classifies the root by shape instead.
        let reparsed = HierObjectId::parse(id.value()).unwrap();
        assert_eq!(reparsed.root().kind(), UidKind::Uuid);
    }

    #[test]
    fn from_uid_treats_empty_extension_as_absent() {
        let id = HierObjectId::from_uid(Uid::iso_oid("1.2").unwrap(), Some(""));
        assert!(!id.has_extension());
        assert_eq!(id.value(), "1.2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn yaml_round_trips_as_plain_string() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            ehr_id: HierObjectId,
        }

        let yaml = "ehr_id: 2.999.1.2::5\n";
        let wrapper: Wrapper = serde_yaml::from_str(yaml).expect("should deserialize");
        assert_eq!(wrapper.ehr_id.extension(), Some("5"));

        let written = serde_yaml::to_string(&wrapper).expect("should serialize");
        assert!(written.contains("2.999.1.2::5"));
        let reread: Wrapper = serde_yaml::from_str(&written).expect("should re-read");
        assert_eq!(reread, wrapper);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_malformed_identifier() {
        let err = serde_json::from_str::<HierObjectId>("\"::abc\"").expect_err("should reject");
        assert!(err.to_string().contains("missing root"));
    }
}
