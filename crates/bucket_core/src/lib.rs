//! Bucket core: pure candidate generation, budget arithmetic and outcome types.
mod budget;
mod candidate;
mod modifiers;
mod outcome;
mod template;

pub use budget::{resolve_budget, ConcurrencyBudget, DEFAULT_FD_RESERVE};
pub use candidate::{generate_candidates, Candidate};
pub use modifiers::{default_modifiers, DEFAULT_MODIFIERS};
pub use outcome::{FailureReason, ProbeOutcome, TransportKind};
pub use template::{TargetTemplate, TemplateError, BUCKET_PLACEHOLDER, DEFAULT_TEMPLATE};
