//! The four assessment checkpoints, one module each.
//!
//! Every module exposes `run(profile, trail)`. Step and missing-info message
//! strings are contract text; do not reword them without versioning the
//! report schema.

pub mod chapeau;
pub mod necessity;
pub mod objective;
pub mod prima_facie;
