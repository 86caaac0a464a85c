//! RM `DV_COUNT`.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::{DvInterval, DvOrdered, DvQuantified, ReferenceRange};
use crate::{OpenEhrError, OpenEhrResult};

const RM_TYPE_NAME: &str = "DV_COUNT";

/// Countable quantity with an integer magnitude.
///
/// Identity is the magnitude alone: accuracy, the normal range and other reference ranges are
/// annotations and take no part in equality, ordering or hashing.
///
/// Arithmetic returns a new value carrying the *receiver's* annotations with the combined
/// magnitude; the operand's annotations are ignored.
///
/// # Examples
///
/// ```rust
/// # use openehr_rm::{DvCount, DvInterval};
/// let normal = DvInterval::closed(DvCount::new(4), DvCount::new(10))?;
/// let count = DvCount::with_ranges(Vec::new(), Some(normal), 0.0, false, 7);
///
/// let total = count.add(&DvCount::new(5))?;
/// assert_eq!(total.magnitude(), 12);
/// assert!(total.normal_range().is_some());
/// # Ok::<(), openehr_rm::OpenEhrError>(())
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct DvCount {
    magnitude: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    accuracy: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    accuracy_is_percent: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    normal_range: Option<Box<DvInterval<DvCount>>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    other_reference_ranges: Vec<ReferenceRange<DvCount>>,
}

impl DvCount {
    /// A count with no accuracy and no reference ranges.
    pub fn new(magnitude: i64) -> Self {
        Self::with_ranges(Vec::new(), None, 0.0, false, magnitude)
    }

    /// A count with all of its annotations.
    pub fn with_ranges(
        other_reference_ranges: Vec<ReferenceRange<DvCount>>,
        normal_range: Option<DvInterval<DvCount>>,
        accuracy: f64,
        accuracy_is_percent: bool,
        magnitude: i64,
    ) -> Self {
        Self {
            magnitude,
            accuracy,
            accuracy_is_percent,
            normal_range: normal_range.map(Box::new),
            other_reference_ranges,
        }
    }

    pub fn magnitude(&self) -> i64 {
        self.magnitude
    }

    pub fn normal_range(&self) -> Option<&DvInterval<DvCount>> {
        self.normal_range.as_deref()
    }

    pub fn other_reference_ranges(&self) -> &[ReferenceRange<DvCount>] {
        &self.other_reference_ranges
    }

    /// Sum of this count and `other`, which must itself be a `DV_COUNT`.
    ///
    /// # Errors
    ///
    /// - [`OpenEhrError::TypeMismatch`] if `other` is not a [`DvCount`].
    /// - [`OpenEhrError::Overflow`] if the sum does not fit in an `i64`.
    pub fn add(&self, other: &dyn DvQuantified) -> OpenEhrResult<DvCount> {
        let other = downcast_count(other.as_any(), other.rm_type_name())?;
        let magnitude = self.magnitude.checked_add(other.magnitude).ok_or_else(|| {
            OpenEhrError::Overflow(format!("{} + {}", self.magnitude, other.magnitude))
        })?;
        Ok(self.with_magnitude(magnitude))
    }

    /// Difference of this count and `other`, which must itself be a `DV_COUNT`.
    ///
    /// # Errors
    ///
    /// - [`OpenEhrError::TypeMismatch`] if `other` is not a [`DvCount`].
    /// - [`OpenEhrError::Overflow`] if the difference does not fit in an `i64`.
    pub fn subtract(&self, other: &dyn DvQuantified) -> OpenEhrResult<DvCount> {
        let other = downcast_count(other.as_any(), other.rm_type_name())?;
        let magnitude = self.magnitude.checked_sub(other.magnitude).ok_or_else(|| {
            OpenEhrError::Overflow(format!("{} - {}", self.magnitude, other.magnitude))
        })?;
        Ok(self.with_magnitude(magnitude))
    }

    fn with_magnitude(&self, magnitude: i64) -> DvCount {
        DvCount {
            magnitude,
            ..self.clone()
        }
    }
}

fn downcast_count<'a>(other: &'a dyn Any, found: &'static str) -> OpenEhrResult<&'a DvCount> {
    other.downcast_ref::<DvCount>().ok_or_else(|| {
        tracing::debug!(expected = RM_TYPE_NAME, found, "incompatible operand for DV_COUNT");
        OpenEhrError::TypeMismatch {
            expected: RM_TYPE_NAME,
            found,
        }
    })
}

impl DvOrdered for DvCount {
    fn rm_type_name(&self) -> &'static str {
        RM_TYPE_NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_strictly_comparable_to(&self, other: &dyn DvOrdered) -> bool {
        other.as_any().is::<DvCount>()
    }

    fn compare_to(&self, other: &dyn DvOrdered) -> OpenEhrResult<Ordering> {
        let other = downcast_count(other.as_any(), other.rm_type_name())?;
        Ok(self.cmp(other))
    }

    fn is_normal(&self) -> Option<bool> {
        self.normal_range().map(|range| range.has(self))
    }

    fn is_simple(&self) -> bool {
        self.other_reference_ranges.is_empty()
    }
}

impl DvQuantified for DvCount {
    fn accuracy(&self) -> f64 {
        self.accuracy
    }

    fn is_accuracy_percent(&self) -> bool {
        self.accuracy_is_percent
    }

    fn diff_type(&self) -> TypeId {
        TypeId::of::<DvCount>()
    }
}

impl PartialEq for DvCount {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude
    }
}

impl Eq for DvCount {}

impl PartialOrd for DvCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DvCount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude.cmp(&other.magnitude)
    }
}

impl Hash for DvCount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.magnitude.hash(state);
    }
}

impl From<i64> for DvCount {
    fn from(magnitude: i64) -> Self {
        Self::new(magnitude)
    }
}
