use crate::core::{scoring::calculate_match_score, skills::ordered_intersection};
use crate::models::{CandidateProfile, SkillMatch, SkillProfile};

/// Result of a matching pass
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<SkillMatch>,
    pub total_candidates: usize,
}

/// Main matching engine
///
/// A pure read/compute/return transform: it takes the requester's skill
/// profile and a snapshot of every candidate's profile, and ranks the
/// candidates by how much of the requester's declared interests they cover.
/// It holds no state, performs no I/O and never mutates its inputs, so
/// concurrent calls for different requesters are independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Rank candidates against the requester's declared skills
    ///
    /// For each candidate the engine intersects the candidate's teach set
    /// with the requester's learn set (what they can teach you) and the
    /// requester's teach set with the candidate's learn set (what you can
    /// teach them). Candidates with no overlap in either direction are
    /// omitted entirely rather than reported with a zero score.
    ///
    /// The returned list is sorted by score descending; equal scores are
    /// broken by counterpart id ascending so repeated calls over unchanged
    /// data produce identical output regardless of candidate order.
    pub fn compute_matches(
        &self,
        requester: &SkillProfile,
        candidates: Vec<CandidateProfile>,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        // Fixed for the whole pass
        let denominator = requester.total_declared();

        let mut matches: Vec<SkillMatch> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let can_teach_you =
                    ordered_intersection(&candidate.skills.teach, &requester.learn);
                let you_can_teach_them =
                    ordered_intersection(&requester.teach, &candidate.skills.learn);

                if can_teach_you.is_empty() && you_can_teach_them.is_empty() {
                    return None;
                }

                let match_score = calculate_match_score(
                    can_teach_you.len() + you_can_teach_them.len(),
                    denominator,
                );

                Some(SkillMatch {
                    id: candidate.participant.id.clone(),
                    user: candidate.participant,
                    can_teach_you,
                    you_can_teach_them,
                    match_score,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.match_score
                .cmp(&a.match_score)
                .then_with(|| a.id.cmp(&b.id))
        });

        MatchResult {
            matches,
            total_candidates,
        }
    }
}
