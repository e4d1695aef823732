pub mod controller;
pub mod error;
pub mod payload;
pub mod presenter;
pub mod schema;
pub mod service;
pub mod state;

// Re-export commonly used types
pub use controller::{SubmissionController, SubmissionState};
pub use error::SubmitError;
pub use payload::{ScoringRequest, build_payload};
pub use presenter::{ScoreDomain, ScorePresentation, ScoreTier, present};
pub use schema::{FieldDescriptor, FieldKind, fields};
pub use service::{HttpScoringService, ScoreAssessment, ScoringService};
pub use state::{FieldValue, FormState};
