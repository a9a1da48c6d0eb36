//! Shared domain types for the impact project tracker.
//!
//! Both the client and the reference server depend on this crate so the
//! JSON-LD envelope constants and structural rules exist in exactly one place.

pub mod error;
pub mod jsonld;
pub mod models;


pub use error::{CoreError, Result};
pub use jsonld::envelope::{IMPACT_NAMESPACE, IMPACT_PROJECT_TYPE, JsonLdContext, SubmissionEnvelope};
pub use jsonld::validator::validate_envelope;
pub use models::project_input::{ProjectInput, REQUIRED_FIELDS_MESSAGE};
pub use models::project_record::ProjectRecord;
pub use models::project_status::ProjectStatus;
