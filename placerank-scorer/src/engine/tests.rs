//! Unit tests for `RankingEngine`.

use placerank_core::test_support::{
    FixedAttributeScorer, FixedSentimentScorer, TruncatingSentimentScorer, UnavailableScorer,
};
use placerank_core::{AttributeSet, BudgetLevel, GeoPoint, Place, Review, UserProfile};
use rstest::{fixture, rstest};

use super::*;
use crate::DefaultPolicy;

type FixedEngine = RankingEngine<FixedAttributeScorer, FixedSentimentScorer>;

fn level(raw: i64) -> BudgetLevel {
    BudgetLevel::try_from(raw).expect("valid level")
}

fn cairo() -> GeoPoint {
    GeoPoint::new(30.0444, 31.2357).expect("valid point")
}

fn alexandria() -> GeoPoint {
    GeoPoint::new(31.2001, 29.9187).expect("valid point")
}

#[fixture]
fn attributes() -> AttributeSet {
    AttributeSet::new(["A", "B"]).expect("valid set")
}

#[fixture]
fn engine(attributes: AttributeSet) -> FixedEngine {
    let attribute_scorer = FixedAttributeScorer::new()
        .with_review("great", [("A", 0.9), ("B", 0.1)])
        .with_review("awful", [("A", 0.7), ("B", 0.3)]);
    let sentiment_scorer = FixedSentimentScorer::new()
        .with_review("great", 1.0)
        .with_review("awful", 0.0);
    RankingEngine::new(
        RankingConfig::new(attributes),
        attribute_scorer,
        sentiment_scorer,
    )
    .expect("valid configuration")
}

#[fixture]
fn user() -> UserProfile {
    UserProfile::new()
        .with_preference("A", 1.0)
        .with_budget(level(1))
        .with_location(cairo())
}

fn reviewed_place(name: &str) -> Place {
    Place::new(name)
        .with_review(Review::new("great"))
        .with_review(Review::new("awful"))
        .with_budget(level(1))
        .with_location(cairo())
}

#[rstest]
fn scores_reference_place(engine: FixedEngine, user: UserProfile) {
    let score = engine.score_place(&user, &reviewed_place("Reference"), 10.0);

    assert_eq!(score.breakdown.sentiment_score, 0.5);
    assert_eq!(score.breakdown.preference_score, 0.8);
    assert_eq!(score.breakdown.proximity_score, 1.0);
    assert_eq!(score.breakdown.budget_score, 1.0);
    assert_eq!(score.breakdown.final_score, 0.815);
    assert!(score.warnings.is_empty());
}

#[rstest]
fn distant_place_without_reviews_scores_on_budget_alone(engine: FixedEngine, user: UserProfile) {
    let place = Place::new("Far")
        .with_budget(level(1))
        .with_location(alexandria());
    let score = engine.score_place(&user, &place, 10.0);

    assert_eq!(score.breakdown.sentiment_score, 0.5);
    assert_eq!(score.breakdown.preference_score, 0.0);
    assert_eq!(score.breakdown.proximity_score, 0.0);
    assert_eq!(score.breakdown.final_score, 0.275);
    assert!(score.profile.iter().all(|(_, value)| value == 0.0));
}

#[rstest]
fn missing_fields_use_default_policy(attributes: AttributeSet) {
    let policy = DefaultPolicy {
        neutral_sentiment: 0.4,
        default_budget: level(2),
        missing_location_proximity: 0.5,
    };
    let engine = RankingEngine::new(
        RankingConfig::new(attributes).with_defaults(policy),
        FixedAttributeScorer::new(),
        FixedSentimentScorer::new(),
    )
    .expect("valid configuration");
    let user = UserProfile::new().with_budget(level(2));
    let score = engine.score_place(&user, &Place::new("Bare"), 10.0);

    assert_eq!(score.breakdown.sentiment_score, 0.4);
    assert_eq!(score.breakdown.proximity_score, 0.5);
    assert_eq!(score.breakdown.budget_score, 1.0);
}

#[rstest]
fn rank_orders_by_descending_final_score(engine: FixedEngine, user: UserProfile) {
    let far = Place::new("Far").with_location(alexandria());
    let near = reviewed_place("Near");
    let request = RankRequest::new(user, vec![far, near]);

    let ranking = engine.rank(&request).expect("ranked");
    let names: Vec<&str> = ranking.places.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, ["Near", "Far"]);
    assert!(
        ranking
            .places
            .iter()
            .all(|place| place.scoring_details.is_some())
    );
}

#[rstest]
fn ties_keep_request_order(engine: FixedEngine, user: UserProfile) {
    let places = ["First", "Second", "Third"]
        .into_iter()
        .map(Place::new)
        .collect();
    let ranking = engine
        .rank(&RankRequest::new(user, places))
        .expect("ranked");
    let names: Vec<&str> = ranking.places.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, ["First", "Second", "Third"]);
}

#[rstest]
fn parallel_and_sequential_rankings_match(attributes: AttributeSet, user: UserProfile) {
    let places: Vec<Place> = (0..8_i64)
        .flat_map(|round| (0..4_i64).map(move |tier| (round, tier)))
        .map(|(round, tier)| {
            let text = if tier == 0 || tier == 2 { "great" } else { "awful" };
            Place::new(format!("Place {round}-{tier}"))
                .with_budget(level(tier))
                .with_review(Review::new(text))
        })
        .collect();
    let scorers = || {
        (
            FixedAttributeScorer::new().with_review("great", [("A", 0.9)]),
            FixedSentimentScorer::new().with_review("great", 1.0),
        )
    };
    let (parallel_attributes, parallel_sentiment) = scorers();
    let parallel = RankingEngine::new(
        RankingConfig::new(attributes.clone()),
        parallel_attributes,
        parallel_sentiment,
    )
    .expect("valid configuration");
    let (sequential_attributes, sequential_sentiment) = scorers();
    let sequential = RankingEngine::new(
        RankingConfig::new(attributes).sequential(),
        sequential_attributes,
        sequential_sentiment,
    )
    .expect("valid configuration");
    let request = RankRequest::new(user, places);

    assert_eq!(
        parallel.rank(&request).expect("ranked"),
        sequential.rank(&request).expect("ranked")
    );
}

#[rstest]
fn empty_request_has_no_candidates(engine: FixedEngine, user: UserProfile) {
    let err = engine
        .rank(&RankRequest::new(user, Vec::new()))
        .expect_err("empty request");
    assert_eq!(err, RankingError::NoCandidates);
}

#[rstest]
fn blank_place_name_is_rejected_with_index(engine: FixedEngine, user: UserProfile) {
    let request = RankRequest::new(user, vec![Place::new("Fine"), Place::new("  ")]);
    let err = engine.rank(&request).expect_err("invalid place");
    assert!(matches!(err, RankingError::InvalidPlace { index: 1, .. }));
}

#[rstest]
fn non_finite_preference_is_rejected(engine: FixedEngine) {
    let user = UserProfile::new().with_preference("A", f64::NAN);
    let err = engine
        .rank(&RankRequest::new(user, vec![Place::new("Fine")]))
        .expect_err("invalid user");
    assert!(matches!(err, RankingError::InvalidUser(_)));
}

#[rstest]
#[case(0.0)]
#[case(-5.0)]
#[case(f64::NAN)]
fn unusable_request_cutoff_is_rejected(
    engine: FixedEngine,
    user: UserProfile,
    #[case] max_distance_km: f64,
) {
    let request =
        RankRequest::new(user, vec![Place::new("Fine")]).with_max_distance_km(max_distance_km);
    let err = engine.rank(&request).expect_err("invalid cutoff");
    assert!(matches!(err, RankingError::InvalidMaxDistance(_)));
}

#[rstest]
fn request_cutoff_overrides_config(engine: FixedEngine, user: UserProfile) {
    let place = Place::new("Far").with_location(alexandria());
    let request = RankRequest::new(user, vec![place]).with_max_distance_km(500.0);

    let ranking = engine.rank(&request).expect("ranked");
    let proximity = ranking
        .places
        .first()
        .and_then(|place| place.scoring_details)
        .map(|details| details.proximity_score)
        .expect("scored place");
    assert!(proximity > 0.0);
}

#[rstest]
fn invalid_config_is_fatal(attributes: AttributeSet) {
    let err = RankingEngine::new(
        RankingConfig::new(attributes).with_max_distance_km(-1.0),
        FixedAttributeScorer::new(),
        FixedSentimentScorer::new(),
    )
    .expect_err("invalid configuration");
    assert_eq!(err, ConfigError::MaxDistance(-1.0));
}

#[rstest]
fn unavailable_collaborators_degrade_to_neutral(attributes: AttributeSet, user: UserProfile) {
    let engine = RankingEngine::new(
        RankingConfig::new(attributes),
        UnavailableScorer,
        UnavailableScorer,
    )
    .expect("valid configuration");
    let ranking = engine
        .rank(&RankRequest::new(user, vec![reviewed_place("Reviewed")]))
        .expect("ranking survives collaborator failure");

    let details = ranking
        .places
        .first()
        .and_then(|place| place.scoring_details)
        .expect("scored place");
    assert_eq!(details.sentiment_score, 0.5);
    assert_eq!(details.preference_score, 0.0);
    assert_eq!(ranking.warnings.len(), 3);
    assert!(matches!(
        ranking.warnings.last(),
        Some(RankingWarning::SentimentScoringFailed { .. })
    ));
}

#[rstest]
fn short_sentiment_answer_is_treated_as_neutral(attributes: AttributeSet, user: UserProfile) {
    let engine = RankingEngine::new(
        RankingConfig::new(attributes),
        FixedAttributeScorer::new(),
        TruncatingSentimentScorer,
    )
    .expect("valid configuration");
    let score = engine.score_place(&user, &reviewed_place("Short"), 10.0);

    assert_eq!(score.breakdown.sentiment_score, 0.5);
    assert_eq!(
        score.warnings,
        vec![RankingWarning::SentimentLengthMismatch {
            place: "Short".to_owned(),
            expected: 2,
            actual: 1,
        }]
    );
}

#[rstest]
fn ranking_preserves_pass_through_fields(engine: FixedEngine, user: UserProfile) {
    let mut place = Place::new("Cafe");
    place
        .extra
        .insert("address".to_owned(), serde_json::json!("Talaat Harb St"));
    let ranking = engine
        .rank(&RankRequest::new(user, vec![place]))
        .expect("ranked");

    let json = serde_json::to_value(&ranking).expect("serialise ranking");
    assert_eq!(
        json["recommendations"][0]["address"],
        serde_json::json!("Talaat Harb St")
    );
    assert!(json["recommendations"][0]["scoring_details"]["final_score"].is_number());
}

#[rstest]
fn free_function_ranks_with_given_cutoff(attributes: AttributeSet, user: UserProfile) {
    let ranking = rank_places(
        &user,
        &[reviewed_place("Reference")],
        FixedAttributeScorer::new().with_review("great", [("A", 0.9)]),
        FixedSentimentScorer::new(),
        attributes,
        10.0,
    )
    .expect("ranked");
    assert_eq!(ranking.places.len(), 1);
}

#[rstest]
fn free_function_rejects_bad_cutoff(attributes: AttributeSet, user: UserProfile) {
    let err = rank_places(
        &user,
        &[Place::new("Fine")],
        FixedAttributeScorer::new(),
        FixedSentimentScorer::new(),
        attributes,
        0.0,
    )
    .expect_err("invalid cutoff");
    assert!(matches!(err, RankingError::Config(ConfigError::MaxDistance(_))));
}
