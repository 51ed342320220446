//! Core outcome types.
//!
//! This module contains the pure leaf of the crate:
//! - The two-variant `Outcome` value
//! - Handled-error family membership via the `Handled` trait
//! - The `VariantMismatch` extraction error
//!
//! Nothing here performs I/O or holds state; outcomes are immutable values
//! constructed once and consumed by exhaustive variant inspection.

mod error;
mod handled;
mod outcome;

pub use error::VariantMismatch;
pub use handled::{Handled, Raised};
pub use outcome::Outcome;
