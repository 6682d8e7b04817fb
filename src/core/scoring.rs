/// Calculate a match score (0-100) from the overlap between two profiles
///
/// The score is the share of the requester's declared interests (skills
/// taught plus skills wanted) that a candidate satisfies:
///
/// score = round(100 * (|canTeachYou| + |youCanTeachThem|) / denominator)
///
/// where the denominator is the requester's total declared skill count,
/// fixed for a whole matching pass. Rounding is to the nearest integer,
/// ties away from zero. A requester with no declared skills scores every
/// candidate 0 (such candidates are filtered out before scoring anyway).
#[inline]
pub fn calculate_match_score(overlap_total: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 0;
    }

    let score = (overlap_total as f64 / denominator as f64) * 100.0;
    score.round().min(100.0) as u8
}
