//! Stable identifiers for the four assessment checkpoints.
//!
//! Each ID is a dotted namespace string. They are used by the explain registry
//! and the CLI `explain` subcommand, and are safe to persist.

pub const CHECK_PRIMA_FACIE: &str = "gats.prima_facie";
pub const CHECK_LEGITIMATE_OBJECTIVE: &str = "gats.legitimate_objective";
pub const CHECK_NECESSITY: &str = "gats.necessity";
pub const CHECK_CHAPEAU: &str = "gats.chapeau";
