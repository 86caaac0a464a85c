//! RM `DV_TEXT`.

use std::fmt;

use rm_types::NonEmptyText;

use crate::OpenEhrResult;

/// Simplified representation of the openEHR `DV_TEXT` data type.
///
/// Only the text `value` is carried; language, encoding, formatting and terminology mappings
/// from the full RM class are not modelled. Reference ranges use it for their `meaning`
/// ("normal", "critical", "therapeutic" and so on).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct DvText {
    /// The plain text content.
    pub value: NonEmptyText,
}

impl DvText {
    /// # Errors
    ///
    /// Returns [`OpenEhrError::Text`](crate::OpenEhrError::Text) if `value` is blank.
    pub fn new(value: impl AsRef<str>) -> OpenEhrResult<Self> {
        Ok(Self {
            value: NonEmptyText::new(value)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

impl fmt::Display for DvText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpenEhrError;
    use rm_types::TextError;

    #[test]
    fn rejects_blank_meaning() {
        let err = DvText::new("   ").expect_err("blank text should be rejected");
        assert_eq!(err, OpenEhrError::Text(TextError::Empty));
    }

    #[test]
    fn displays_trimmed_value() {
        let text = DvText::new(" normal ").expect("should build");
        assert_eq!(text.to_string(), "normal");
        assert_eq!(text.as_str(), "normal");
    }
}
