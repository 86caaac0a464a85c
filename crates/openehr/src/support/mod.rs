//! RM `support` package.

pub mod identification;
