// Integration tests for SkillSwap Algo

use skillswap_algo::core::Matcher;
use skillswap_algo::models::{CandidateProfile, Participant, SkillKind, SkillProfile};

fn profile(teach: &[&str], learn: &[&str]) -> SkillProfile {
    let mut p = SkillProfile::default();
    for name in teach {
        p.add(SkillKind::Teach, name.to_string());
    }
    for name in learn {
        p.add(SkillKind::Learn, name.to_string());
    }
    p
}

fn candidate(id: &str, teach: &[&str], learn: &[&str]) -> CandidateProfile {
    CandidateProfile {
        participant: Participant {
            id: id.to_string(),
            name: format!("User {}", id),
            email: format!("{}@example.com", id),
        },
        skills: profile(teach, learn),
    }
}

#[test]
fn test_end_to_end_matching() {
    let matcher = Matcher::new();
    let requester = profile(&["Go"], &["Python", "Rust"]);

    let candidates = vec![
        candidate("a", &["Python"], &["Go"]),     // both directions, 67
        candidate("b", &["Rust", "Python"], &[]), // one direction, 67
        candidate("c", &[], &["Go"]),             // one direction, 33
        candidate("d", &["Haskell"], &["Lisp"]),  // no overlap, omitted
    ];

    let result = matcher.compute_matches(&requester, candidates);

    assert_eq!(result.total_candidates, 4);
    assert_eq!(result.matches.len(), 3);

    // Equal top scores tie-break on id
    assert_eq!(result.matches[0].id, "a");
    assert_eq!(result.matches[0].match_score, 67);
    assert_eq!(result.matches[1].id, "b");
    assert_eq!(result.matches[1].match_score, 67);
    assert_eq!(result.matches[2].id, "c");
    assert_eq!(result.matches[2].match_score, 33);

    // Candidates with no overlap never appear, not even with score 0
    assert!(result.matches.iter().all(|m| m.id != "d"));
}

#[test]
fn test_overlap_direction_is_respected() {
    let matcher = Matcher::new();
    let requester = profile(&["Go"], &["Python"]);

    let result = matcher.compute_matches(
        &requester,
        vec![candidate("x", &["Python"], &["Go"])],
    );

    let m = &result.matches[0];
    assert_eq!(m.can_teach_you, vec!["Python"]);
    assert_eq!(m.you_can_teach_them, vec!["Go"]);
}

#[test]
fn test_requester_with_no_skills_gets_empty_list() {
    let matcher = Matcher::new();
    let requester = SkillProfile::default();

    let candidates = vec![
        candidate("a", &["Python"], &["Go"]),
        candidate("b", &["Rust"], &["C"]),
    ];

    let result = matcher.compute_matches(&requester, candidates);

    assert!(result.matches.is_empty());
    assert_eq!(result.total_candidates, 2);
}

#[test]
fn test_candidate_appears_iff_some_overlap() {
    let matcher = Matcher::new();
    let requester = profile(&["Go", "SQL"], &["Rust"]);

    let candidates = vec![
        candidate("teaches-only", &["Rust"], &[]),
        candidate("learns-only", &[], &["SQL"]),
        candidate("nothing", &["Haskell"], &["Erlang"]),
        candidate("empty", &[], &[]),
    ];

    let result = matcher.compute_matches(&requester, candidates);

    let ids: Vec<&str> = result.matches.iter().map(|m| m.id.as_str()).collect();
    assert!(ids.contains(&"teaches-only"));
    assert!(ids.contains(&"learns-only"));
    assert!(!ids.contains(&"nothing"));
    assert!(!ids.contains(&"empty"));

    for m in &result.matches {
        assert!(
            !m.can_teach_you.is_empty() || !m.you_can_teach_them.is_empty(),
            "match {} has no overlap in either direction",
            m.id
        );
    }
}

#[test]
fn test_scores_are_monotonically_non_increasing() {
    let matcher = Matcher::new();
    let requester = profile(
        &["Go", "Rust", "SQL"],
        &["Python", "Haskell", "Erlang", "Lisp"],
    );

    let candidates: Vec<CandidateProfile> = (0..30)
        .map(|i| {
            let teach: &[&str] = match i % 4 {
                0 => &["Python"],
                1 => &["Python", "Haskell"],
                2 => &["Erlang", "Lisp", "Haskell"],
                _ => &["Fortran"],
            };
            let learn: &[&str] = if i % 2 == 0 { &["Go"] } else { &[] };
            candidate(&format!("u{:02}", i), teach, learn)
        })
        .collect();

    let result = matcher.compute_matches(&requester, candidates);

    for window in result.matches.windows(2) {
        assert!(
            window[0].match_score >= window[1].match_score,
            "matches not sorted by score"
        );
    }
}

#[test]
fn test_repeated_calls_return_identical_output() {
    let matcher = Matcher::new();
    let requester = profile(&["Go", "Rust"], &["Python", "Haskell"]);

    let candidates = vec![
        candidate("a", &["Python"], &["Go"]),
        candidate("b", &["Haskell"], &["Rust"]),
        candidate("c", &["Python", "Haskell"], &[]),
    ];

    let first = matcher.compute_matches(&requester, candidates.clone());
    let second = matcher.compute_matches(&requester, candidates);

    assert_eq!(first.matches, second.matches);
}

#[test]
fn test_candidate_order_does_not_affect_output() {
    let matcher = Matcher::new();
    let requester = profile(&["Go"], &["Python", "Rust"]);

    let forward = vec![
        candidate("a", &["Python"], &["Go"]),
        candidate("b", &["Rust"], &["Go"]),
        candidate("c", &["Python", "Rust"], &[]),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let from_forward = matcher.compute_matches(&requester, forward);
    let from_reversed = matcher.compute_matches(&requester, reversed);

    assert_eq!(from_forward.matches, from_reversed.matches);
}

#[test]
fn test_score_never_exceeds_one_hundred() {
    let matcher = Matcher::new();
    let requester = profile(&["Go"], &["Python"]);

    // Candidate declarations beyond the requester's interests don't help
    let result = matcher.compute_matches(
        &requester,
        vec![candidate(
            "maximal",
            &["Python", "Rust", "Haskell", "Erlang"],
            &["Go", "SQL", "C"],
        )],
    );

    assert_eq!(result.matches[0].match_score, 100);
}
