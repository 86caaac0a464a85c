//! openEHR RM data types.
//!
//! - [`text`]: `DV_TEXT`.
//! - [`quantity`]: ordered and quantified values, intervals, and reference ranges.

pub mod quantity;
pub mod text;
