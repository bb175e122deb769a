//! Helpers for the rule-synthesis consumer of matcher output: unknown-field
//! diagnostics and an overall confidence score.

pub mod confidence;
pub mod diagnostics;

pub use confidence::overall_confidence;
pub use diagnostics::{diagnose_unknown_fields, rejection_message};
