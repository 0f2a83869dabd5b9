//! Integration tests for versa-domain
//!
//! These tests run whole training sequences through the public API and check
//! the resulting boundaries and predictions against hand-derived values.

use versa_domain::{
    build, Boundary, CandidateElimination, Classifier, Example, Hypothesis, Instance, Label,
    LearnError, MaterializeConfig, Query, Schema,
};

// Sky: Sunny=0 Cloudy=1 Rainy=2; AirTemp: Warm=0 Cold=1; Humidity: Normal=0 High=1;
// Wind: Strong=0 Weak=1; Water: Warm=0 Cool=1; Forecast: Same=0 Change=1
fn enjoy_sport_schema() -> Schema {
    Schema::categorical(vec![3, 2, 2, 2, 2, 2]).unwrap()
}

fn enjoy_sport_examples(schema: &Schema) -> Vec<Example> {
    [
        (vec![0, 0, 0, 0, 0, 0], 1),
        (vec![0, 0, 1, 0, 0, 0], 1),
        (vec![2, 1, 1, 0, 0, 1], 0),
        (vec![0, 0, 1, 0, 1, 1], 1),
    ]
    .into_iter()
    .map(|(values, label)| Example::from_raw(values, label, schema).unwrap())
    .collect()
}

fn boundary(items: &[&str]) -> Boundary {
    items.iter().map(|s| s.parse::<Hypothesis>().unwrap()).collect()
}

#[test]
fn test_enjoy_sport_boundaries() {
    let schema = enjoy_sport_schema();
    let examples = enjoy_sport_examples(&schema);
    let mut learner = CandidateElimination::new(schema);

    learner.train(&examples[..2]).unwrap();
    assert_eq!(learner.specific(), &boundary(&["<0, 0, ?, 0, 0, 0>"]));
    assert_eq!(learner.general(), &boundary(&["<?, ?, ?, ?, ?, ?>"]));

    learner.train(&examples[2..3]).unwrap();
    assert_eq!(
        learner.general(),
        &boundary(&[
            "<0, ?, ?, ?, ?, ?>",
            "<?, 0, ?, ?, ?, ?>",
            "<?, ?, ?, ?, ?, 0>",
        ])
    );

    learner.train(&examples[3..]).unwrap();
    // <Sunny, Warm, ?, Strong, ?, ?>
    assert_eq!(learner.specific(), &boundary(&["<0, 0, ?, 0, ?, ?>"]));
    // {<Sunny, ?, ?, ?, ?, ?>, <?, Warm, ?, ?, ?, ?>}
    assert_eq!(
        learner.general(),
        &boundary(&["<0, ?, ?, ?, ?, ?>", "<?, 0, ?, ?, ?, ?>"])
    );
}

#[test]
fn test_enjoy_sport_version_space() {
    let schema = enjoy_sport_schema();
    let examples = enjoy_sport_examples(&schema);

    let hybrid = build(schema.clone(), &examples, &MaterializeConfig::default()).unwrap();
    let exact = build(schema.clone(), &examples, &MaterializeConfig::exact()).unwrap();

    // the six textbook hypotheses; both strategies agree here
    assert_eq!(hybrid.len(), 6);
    assert_eq!(
        hybrid.iter().collect::<Vec<_>>(),
        exact.iter().collect::<Vec<_>>()
    );
    assert!(hybrid.contains(&"<0, 0, ?, ?, ?, ?>".parse().unwrap()));
    assert!(hybrid.contains(&"<0, ?, ?, 0, ?, ?>".parse().unwrap()));
    assert!(hybrid.contains(&"<?, 0, ?, 0, ?, ?>".parse().unwrap()));
}

#[test]
fn test_enjoy_sport_predictions() {
    let schema = enjoy_sport_schema();
    let examples = enjoy_sport_examples(&schema);
    let space = build(schema.clone(), &examples, &MaterializeConfig::default()).unwrap();

    // Sunny Warm Normal Strong Cool Change: every hypothesis agrees
    let query = Query::from_values(&[0, 0, 0, 0, 1, 1], &schema).unwrap();
    assert_eq!(space.votes(&query).yes, 6);
    assert_eq!(space.predict(&query), Label::Positive);

    // Rainy Cold Normal Weak Warm Same: nobody agrees
    let query = Query::from_values(&[2, 1, 0, 1, 0, 0], &schema).unwrap();
    assert_eq!(space.votes(&query).no, 6);
    assert_eq!(space.predict(&query), Label::Negative);

    // Sunny Cold Normal Strong Warm Same: two of six
    let query = Query::from_values(&[0, 1, 0, 0, 0, 0], &schema).unwrap();
    assert_eq!(space.votes(&query).yes, 2);
    assert_eq!(space.predict(&query), Label::Negative);
}

#[test]
fn test_three_attribute_scenario() {
    let schema = Schema::binary(3).unwrap();
    let examples = vec![
        Example::from_raw(vec![0, 0, 0], 1, &schema).unwrap(),
        Example::from_raw(vec![1, 0, 0], 0, &schema).unwrap(),
    ];

    let space = build(schema.clone(), &examples, &MaterializeConfig::default()).unwrap();
    assert_eq!(space.specific(), &boundary(&["000"]));
    assert_eq!(space.general(), &boundary(&["0??"]));
    assert_eq!(space.len(), 4);

    assert_eq!(space.predict_values(&[0, 0, 0]).unwrap(), Label::Positive);
    assert_eq!(space.predict_values(&[1, 0, 0]).unwrap(), Label::Negative);
    // only <0, ?, ?> accepts <0, 1, 1>
    assert_eq!(space.predict_values(&[0, 1, 1]).unwrap(), Label::Negative);
}

#[test]
fn test_tie_resolves_negative() {
    let schema = Schema::binary(2).unwrap();
    let examples = vec![Example::from_raw(vec![0, 0], 1, &schema).unwrap()];
    let space = build(schema.clone(), &examples, &MaterializeConfig::default()).unwrap();

    let query = Query::from_values(&[0, 1], &schema).unwrap();
    let votes = space.votes(&query);
    assert_eq!(votes.yes, votes.no);
    assert_eq!(space.predict(&query), Label::Negative);
}

#[test]
fn test_empty_training_set() {
    let schema = Schema::binary(3).unwrap();
    let space = build(schema.clone(), &[], &MaterializeConfig::default()).unwrap();

    assert_eq!(space.specific(), &boundary(&["***"]));
    assert_eq!(space.general(), &boundary(&["???"]));
    assert_eq!(space.len(), 5);
    assert_eq!(space.predict_values(&[0, 1, 0]).unwrap(), Label::Negative);

    // 27 hypotheses over {0, 1, ?} plus the single empty one
    let exact = build(schema, &[], &MaterializeConfig::exact()).unwrap();
    assert_eq!(exact.len(), 28);
    let query = Query::from_values(&[0, 1, 0], exact.schema()).unwrap();
    assert_eq!(exact.votes(&query).yes, 8);
    assert_eq!(exact.predict(&query), Label::Negative);
}

#[test]
fn test_retraining_rebuilds_version_space() {
    let schema = Schema::binary(2).unwrap();
    let mut learner = CandidateElimination::new(schema.clone());
    learner.observe_raw(vec![0, 0], 1).unwrap();
    let first = learner.materialize(&MaterializeConfig::default()).unwrap();

    learner.observe_raw(vec![0, 1], 1).unwrap();
    let second = learner.materialize(&MaterializeConfig::default()).unwrap();

    assert_eq!(first.specific(), &boundary(&["00"]));
    assert_eq!(second.specific(), &boundary(&["0?"]));
    // the earlier snapshot is unaffected by later training
    assert_eq!(first.len(), 4);
    assert_eq!(second.len(), 2);
    assert!(first.contains(&"?0".parse::<Hypothesis>().unwrap()));
    assert!(!second.contains(&"?0".parse::<Hypothesis>().unwrap()));
}

#[test]
fn test_invalid_input_is_rejected() {
    let schema = Schema::binary(2).unwrap();
    assert_eq!(
        Example::from_raw(vec![0, 1], 3, &schema),
        Err(LearnError::InvalidLabel(3))
    );

    let space = build(schema, &[], &MaterializeConfig::default()).unwrap();
    assert!(matches!(
        space.predict_values(&[0, 1, 1]),
        Err(LearnError::ArityMismatch { expected: 2, actual: 3 })
    ));
}

#[test]
fn test_version_space_as_classifier() {
    let schema = Schema::binary(3).unwrap();
    let examples = vec![
        Example::from_raw(vec![1, 1, 0], 1, &schema).unwrap(),
        Example::from_raw(vec![1, 1, 1], 1, &schema).unwrap(),
        Example::from_raw(vec![0, 0, 1], 0, &schema).unwrap(),
    ];
    let space = build(schema.clone(), &examples, &MaterializeConfig::default()).unwrap();

    let instances: Vec<Instance> = examples.iter().map(|e| e.instance.clone()).collect();
    let labels = space.classify_all(&instances).unwrap();
    assert_eq!(labels, vec![Label::Positive, Label::Positive, Label::Negative]);
}
