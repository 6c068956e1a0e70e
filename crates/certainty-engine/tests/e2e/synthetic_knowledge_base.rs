//! E2E: engines built from synthetic and file-backed knowledge bases.

use std::io::Write;

use certainty_engine::*;

fn two_rule_engine() -> CertaintyEngine {
    let kb = KnowledgeBase::builder()
        .with_trait("K01")
        .with_hypothesis("P01")
        .with_hypothesis("P02")
        .with_hypothesis("P03")
        .with_rule("K01", "P01", 0.8, 0.1)
        .with_rule("K01", "P02", 0.8, 0.2)
        .build()
        .unwrap();
    CertaintyEngine::new(kb)
}

#[test]
fn single_observation_gives_expert_cf_per_hypothesis() {
    let diagnosis = two_rule_engine()
        .calculate(&[Observation::new("K01", 1.0)])
        .unwrap();
    let rows: Vec<(&str, &str)> = diagnosis
        .results
        .iter()
        .map(|r| (r.hypothesis.id.as_str(), r.percentage.as_str()))
        .collect();
    assert_eq!(rows, vec![("P01", "70.00%"), ("P02", "60.00%"), ("P03", "0.00%")]);
}

#[test]
fn duplicate_rules_count_as_independent_evidence() {
    let kb = KnowledgeBase::builder()
        .with_trait("K01")
        .with_hypothesis("P01")
        .with_rule("K01", "P01", 0.5, 0.0)
        .with_rule("K01", "P01", 0.5, 0.0)
        .build()
        .unwrap();
    let diagnosis = CertaintyEngine::new(kb)
        .calculate(&[Observation::new("K01", 1.0)])
        .unwrap();
    assert!((diagnosis.results[0].aggregate_cf - 0.75).abs() < 1e-12);
}

#[test]
fn opposing_evidence_pulls_toward_zero() {
    let kb = KnowledgeBase::builder()
        .with_trait("K01")
        .with_trait("K02")
        .with_hypothesis("P01")
        .with_rule("K01", "P01", 0.6, 0.0)
        .with_rule("K02", "P01", 0.0, 0.6)
        .build()
        .unwrap();
    let diagnosis = CertaintyEngine::new(kb)
        .calculate(&[Observation::new("K01", 1.0), Observation::new("K02", 1.0)])
        .unwrap();
    assert_eq!(diagnosis.results[0].aggregate_cf, 0.0);
    assert_eq!(diagnosis.results[0].percentage, "0.00%");
    let branch = diagnosis.trace.steps().iter().find_map(|s| match s {
        TraceStep::Combined { branch, .. } => Some(*branch),
        _ => None,
    });
    assert_eq!(branch, Some(CombinationBranch::Conflicting));
}

#[test]
fn independent_knowledge_bases_coexist() {
    let a = two_rule_engine();
    let b = CertaintyEngine::new(builtin::quail_breeding());
    let obs = [Observation::new("K01", 1.0)];
    let ra = a.calculate(&obs).unwrap();
    let rb = b.calculate(&obs).unwrap();
    assert_eq!(ra.results[0].hypothesis.name, "P01");
    assert_eq!(rb.results[0].hypothesis.name, "Layer");
    assert_eq!(ra.aggregate_for(&"P03".into()), Some(0.0));
    assert!(rb.aggregate_for(&"P03".into()).unwrap() > 0.0);
}

#[test]
fn engine_from_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(
        file,
        "
traits:
  - id: A
    name: first
  - id: B
    name: second
hypotheses:
  - id: X
    name: ex
  - id: Y
    name: why
rules:
  - trait_id: A
    hypothesis_id: Y
    mb: 0.9
    md: 0.0
  - trait_id: B
    hypothesis_id: X
    mb: 0.4
    md: 0.0
"
    )
    .unwrap();

    let engine = CertaintyEngine::new(load_knowledge_base(file.path()).unwrap());
    let diagnosis = engine
        .calculate(&[Observation::new("A", 0.5), Observation::new("B", 1.0)])
        .unwrap();
    let order: Vec<&str> = diagnosis
        .results
        .iter()
        .map(|r| r.hypothesis.id.as_str())
        .collect();
    assert_eq!(order, vec!["Y", "X"]);
}
