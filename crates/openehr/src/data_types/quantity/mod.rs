//! RM `quantity` package: ordered and quantified data values.
//!
//! The RM relates its ordered types dynamically: `compare_to`, `add` and `subtract` accept
//! any ordered value, and the receiver decides whether the operand is usable. Here that
//! contract is expressed with the [`DvOrdered`] and [`DvQuantified`] trait objects, and an
//! unusable operand is reported as [`OpenEhrError::TypeMismatch`](crate::OpenEhrError::TypeMismatch)
//! instead of failing a cast at runtime.

mod count;
mod interval;

pub use count::DvCount;
pub use interval::{DvInterval, ReferenceRange};

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;

use crate::OpenEhrResult;

/// RM `DV_ORDERED`: a data value with a total order among values of the same type.
pub trait DvOrdered: Any + fmt::Debug {
    /// The RM class name, used in error reporting.
    fn rm_type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    /// `true` if `other` can be compared with this value. Comparability depends only on the
    /// type of `other`, never on its value.
    fn is_strictly_comparable_to(&self, other: &dyn DvOrdered) -> bool;

    /// Orders this value against `other`.
    ///
    /// # Errors
    ///
    /// Returns [`OpenEhrError::TypeMismatch`](crate::OpenEhrError::TypeMismatch) if `other` is
    /// not strictly comparable to this value.
    fn compare_to(&self, other: &dyn DvOrdered) -> OpenEhrResult<Ordering>;

    /// Whether this value lies within its normal range, or `None` if it has no normal range.
    fn is_normal(&self) -> Option<bool>;

    /// `true` if the value carries no reference ranges other than the normal range.
    fn is_simple(&self) -> bool;
}

/// RM `DV_QUANTIFIED`: an ordered value with a magnitude and accuracy.
pub trait DvQuantified: DvOrdered {
    /// Accuracy of the magnitude; `0.0` means unknown.
    fn accuracy(&self) -> f64;

    fn is_accuracy_percent(&self) -> bool;

    fn accuracy_unknown(&self) -> bool {
        self.accuracy() == 0.0
    }

    /// The type of value that can be added to or subtracted from this one.
    fn diff_type(&self) -> TypeId;
}
