//! Pure assessment evaluation (no IO).
//!
//! Input: a `MeasureProfile` constructed elsewhere.
//! Output: risk tier + explanation trail + missing-info list.
//!
//! The engine is total over the declared input shape: every tri-state field
//! has an explicit branch for its absent case, and no combination of inputs
//! panics or errors.

#![forbid(unsafe_code)]

pub mod checks;
pub mod report;

mod engine;
mod trail;

pub use engine::{assess, evaluate};
pub use trail::Trail;

#[cfg(test)]
mod proptest;
#[cfg(test)]
pub(crate) mod test_support;
