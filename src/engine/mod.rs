//! Rule engine: normalize → match → route → format.
//!
//! Everything here is pure and synchronous. The knowledge base is
//! injected as an immutable value; the only collaborator is the
//! [`responder::AlertSource`] seam used by the alert branch.

pub mod eligibility;
pub mod intent;
pub mod matcher;
pub mod messages;
pub mod responder;
pub mod text;

pub use intent::Intent;
pub use matcher::ConditionMatch;
pub use responder::{generate_response, AlertSource};
