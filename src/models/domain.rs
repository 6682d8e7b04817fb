use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Opaque participant identifier assigned by the directory
pub type ParticipantId = String;

/// Whether a skill record is offered or wanted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Teach,
    Learn,
}

impl SkillKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillKind::Teach => "teach",
            SkillKind::Learn => "learn",
        }
    }
}

/// One declared skill, as stored by the directory
///
/// The directory guarantees at most one record per (owner, name, kind);
/// the engine builds sets, so duplicates would be harmless anyway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    #[serde(rename = "user")]
    pub owner: ParticipantId,
    #[serde(rename = "skill")]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SkillKind,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A registered participant, immutable from the engine's perspective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "_id")]
    pub id: ParticipantId,
    pub name: String,
    pub email: String,
}

/// The skill names one participant has declared, partitioned by kind
///
/// Ordered sets keep membership tests logarithmic and make every derived
/// list come out in a deterministic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub teach: BTreeSet<String>,
    pub learn: BTreeSet<String>,
}

impl SkillProfile {
    pub fn add(&mut self, kind: SkillKind, name: String) {
        match kind {
            SkillKind::Teach => self.teach.insert(name),
            SkillKind::Learn => self.learn.insert(name),
        };
    }

    /// Total number of declared skills, the denominator of the match score
    pub fn total_declared(&self) -> usize {
        self.teach.len() + self.learn.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teach.is_empty() && self.learn.is_empty()
    }
}

/// A candidate participant together with their declared skills
#[derive(Debug, Clone)]
pub struct CandidateProfile {
    pub participant: Participant,
    pub skills: SkillProfile,
}

/// One ranked match result
///
/// Computed fresh per request and never persisted. Serializes to the wire
/// shape consumed by the SkillSwap frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    #[serde(rename = "_id")]
    pub id: ParticipantId,
    pub user: Participant,
    #[serde(rename = "canTeachYou")]
    pub can_teach_you: Vec<String>,
    #[serde(rename = "youCanTeachThem")]
    pub you_can_teach_them: Vec<String>,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}
