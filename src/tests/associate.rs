use crate::{
    aggregate_concern_risk, associate_concern, concern_risk, KeyTerm, RiskLevel,
    UNMATCHED_CONCERN_RISK,
};

fn term(title: &str, content: &str, risk_level: RiskLevel) -> KeyTerm {
    KeyTerm {
        title: title.to_string(),
        content: content.to_string(),
        explanation: String::new(),
        risk_level,
        original_text: None,
        action_items: None,
    }
}

fn sample_terms() -> Vec<KeyTerm> {
    vec![
        term(
            "Rights Reversion",
            "Rights revert to the Artist after 7 years of commercial unavailability",
            RiskLevel::High,
        ),
        term(
            "Payment Schedule",
            "Royalties paid quarterly within 45 days of period end",
            RiskLevel::Medium,
        ),
        term(
            "Term Length",
            "Initial term of five years with automatic renewal",
            RiskLevel::Low,
        ),
    ]
}

#[test]
fn matches_term_by_title_keyword() {
    let terms = sample_terms();
    let matched = associate_concern("No reversion clause present", &terms).unwrap();
    assert_eq!(matched.title, "Rights Reversion");
    assert_eq!(matched.risk_level, RiskLevel::High);
}

#[test]
fn matches_term_by_content_keyword() {
    let terms = sample_terms();
    let matched = associate_concern("Concerns about quarterly timing", &terms).unwrap();
    assert_eq!(matched.title, "Payment Schedule");
}

#[test]
fn first_candidate_in_list_order_wins() {
    // "artist" appears in the first term's content and "royalties" in the
    // second's; the first candidate by list order is returned, not the one
    // with more keyword overlap.
    let terms = sample_terms();
    let matched = associate_concern("Artist royalties royalties royalties", &terms).unwrap();
    assert_eq!(matched.title, "Rights Reversion");
}

#[test]
fn short_words_never_match() {
    // Every token is four characters or fewer, so the keyword set is empty.
    let terms = sample_terms();
    assert!(associate_concern("No pay due", &terms).is_none());
}

#[test]
fn no_overlap_is_a_valid_state() {
    let terms = sample_terms();
    assert!(associate_concern("Jurisdiction favors the publisher", &terms).is_none());
}

#[test]
fn empty_term_list_matches_nothing() {
    assert!(associate_concern("No reversion clause present", &[]).is_none());
}

#[test]
fn deterministic_across_calls() {
    let terms = sample_terms();
    let concern = "No reversion clause present";
    let first = associate_concern(concern, &terms).unwrap();
    let second = associate_concern(concern, &terms).unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn unmatched_concern_defaults_to_medium() {
    let terms = sample_terms();
    assert_eq!(
        concern_risk("Jurisdiction favors the publisher", &terms),
        UNMATCHED_CONCERN_RISK
    );
    assert_eq!(UNMATCHED_CONCERN_RISK, RiskLevel::Medium);
}

#[test]
fn matched_concern_borrows_term_risk() {
    let terms = sample_terms();
    assert_eq!(
        concern_risk("No reversion clause present", &terms),
        RiskLevel::High
    );
    assert_eq!(
        concern_risk("Automatic renewal is unusual", &terms),
        RiskLevel::Low
    );
}

#[test]
fn aggregate_any_high_makes_group_high() {
    let terms = sample_terms();
    let concerns = vec![
        "Automatic renewal is unusual".to_string(),
        "No reversion clause present".to_string(),
    ];
    assert_eq!(aggregate_concern_risk(&concerns, &terms), RiskLevel::High);
}

#[test]
fn aggregate_unmatched_never_suppresses_to_low() {
    let terms = sample_terms();
    // One low-matched concern, one untraceable one: the implicit medium
    // from the unmatched concern dominates.
    let concerns = vec![
        "Automatic renewal is unusual".to_string(),
        "Jurisdiction favors the publisher".to_string(),
    ];
    assert_eq!(aggregate_concern_risk(&concerns, &terms), RiskLevel::Medium);
}

#[test]
fn aggregate_all_low_is_low() {
    let terms = sample_terms();
    let concerns = vec!["Automatic renewal is unusual".to_string()];
    assert_eq!(aggregate_concern_risk(&concerns, &terms), RiskLevel::Low);
}

#[test]
fn aggregate_empty_group_is_low() {
    assert_eq!(aggregate_concern_risk(&[], &sample_terms()), RiskLevel::Low);
}
