use crate::models::{ParticipantId, SkillProfile, SkillRecord};
use std::collections::{BTreeSet, HashMap};

/// Normalize a raw skill name for comparison
///
/// Names are trimmed and compared case-sensitively; no case-folding and no
/// synonym resolution. Returns None when nothing but whitespace remains.
#[inline]
pub fn normalize_skill_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Group a batch of skill records into per-owner profiles
///
/// This is the in-memory join behind the single batch fetch: one directory
/// round trip for all candidates, grouped by owner here instead of two
/// lookups per candidate.
pub fn group_by_owner(records: Vec<SkillRecord>) -> HashMap<ParticipantId, SkillProfile> {
    let mut profiles: HashMap<ParticipantId, SkillProfile> = HashMap::new();

    for record in records {
        let Some(name) = normalize_skill_name(&record.name) else {
            continue;
        };
        profiles.entry(record.owner).or_default().add(record.kind, name);
    }

    profiles
}

/// Intersect two skill-name sets, preserving lexicographic order
///
/// Both sets are sorted, so this costs the sum of the two sizes.
#[inline]
pub fn ordered_intersection(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Vec<String> {
    a.intersection(b).cloned().collect()
}
