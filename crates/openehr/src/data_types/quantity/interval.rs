//! RM `DV_INTERVAL` and `REFERENCE_RANGE`.

use crate::data_types::text::DvText;
use crate::{OpenEhrError, OpenEhrResult};

/// An interval over ordered values. An absent bound is unbounded on that side.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DvInterval<T> {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    lower: Option<T>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    upper: Option<T>,
    lower_included: bool,
    upper_included: bool,
}

impl<T: Ord> DvInterval<T> {
    /// Creates an interval.
    ///
    /// # Errors
    ///
    /// Returns [`OpenEhrError::InvalidInterval`] if `lower > upper`, or if an absent bound is
    /// marked as included.
    pub fn new(
        lower: Option<T>,
        upper: Option<T>,
        lower_included: bool,
        upper_included: bool,
    ) -> OpenEhrResult<Self> {
        if lower.is_none() && lower_included {
            return Err(OpenEhrError::InvalidInterval(
                "unbounded lower end cannot be included".into(),
            ));
        }
        if upper.is_none() && upper_included {
            return Err(OpenEhrError::InvalidInterval(
                "unbounded upper end cannot be included".into(),
            ));
        }
        if let (Some(lower), Some(upper)) = (&lower, &upper) {
            if lower > upper {
                return Err(OpenEhrError::InvalidInterval(
                    "lower bound is greater than upper bound".into(),
                ));
            }
        }

        Ok(Self {
            lower,
            upper,
            lower_included,
            upper_included,
        })
    }

    /// `[lower, upper]`, both ends included.
    pub fn closed(lower: T, upper: T) -> OpenEhrResult<Self> {
        Self::new(Some(lower), Some(upper), true, true)
    }

    /// `true` if `value` lies within the interval.
    pub fn has(&self, value: &T) -> bool {
        let above_lower = match &self.lower {
            None => true,
            Some(lower) if self.lower_included => value >= lower,
            Some(lower) => value > lower,
        };
        let below_upper = match &self.upper {
            None => true,
            Some(upper) if self.upper_included => value <= upper,
            Some(upper) => value < upper,
        };
        above_lower && below_upper
    }
}

impl<T> DvInterval<T> {
    pub fn lower(&self) -> Option<&T> {
        self.lower.as_ref()
    }

    pub fn upper(&self) -> Option<&T> {
        self.upper.as_ref()
    }

    pub fn is_lower_included(&self) -> bool {
        self.lower_included
    }

    pub fn is_upper_included(&self) -> bool {
        self.upper_included
    }

    pub fn is_lower_unbounded(&self) -> bool {
        self.lower.is_none()
    }

    pub fn is_upper_unbounded(&self) -> bool {
        self.upper.is_none()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct DvIntervalWire<T> {
    lower: Option<T>,
    upper: Option<T>,
    #[serde(default)]
    lower_included: bool,
    #[serde(default)]
    upper_included: bool,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for DvInterval<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = DvIntervalWire::<T>::deserialize(deserializer)?;
        Self::new(
            wire.lower,
            wire.upper,
            wire.lower_included,
            wire.upper_included,
        )
        .map_err(serde::de::Error::custom)
    }
}

/// A named interval giving clinical interpretation context to a value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        deny_unknown_fields,
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de> + Ord"
        )
    )
)]
pub struct ReferenceRange<T> {
    meaning: DvText,
    range: DvInterval<T>,
}

impl<T: Ord> ReferenceRange<T> {
    pub fn new(meaning: DvText, range: DvInterval<T>) -> Self {
        Self { meaning, range }
    }

    pub fn meaning(&self) -> &DvText {
        &self.meaning
    }

    pub fn range(&self) -> &DvInterval<T> {
        &self.range
    }

    /// `true` if `value` lies within this range.
    pub fn is_in_range(&self, value: &T) -> bool {
        self.range.has(value)
    }
}
