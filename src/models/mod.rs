// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, Participant, ParticipantId, SkillKind, SkillMatch, SkillProfile, SkillRecord};
pub use requests::FindMatchesRequest;
pub use responses::{ErrorResponse, HealthResponse};
