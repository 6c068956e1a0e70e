//! E2E: diagnoses against the bundled quail breeding knowledge base.

use certainty_engine::builtin::quail_breeding;
use certainty_engine::*;

fn engine() -> CertaintyEngine {
    CertaintyEngine::new(quail_breeding())
}

fn top_id(diagnosis: &Diagnosis) -> &str {
    diagnosis.top().unwrap().hypothesis.id.as_str()
}

#[test]
fn healthy_agile_bird_with_wide_pubis_is_a_layer() {
    let diagnosis = engine()
        .calculate(&[
            Observation::new("K01", 1.0),
            Observation::new("K02", 0.8),
            Observation::new("K04", 1.0),
            Observation::new("K07", 0.8),
        ])
        .unwrap();
    assert_eq!(top_id(&diagnosis), "P01");
    assert_eq!(diagnosis.results[0].hypothesis.name, "Layer");
}

#[test]
fn heavy_broad_breasted_bird_is_a_broiler() {
    let diagnosis = engine()
        .calculate(&[
            Observation::new("K05", 1.0),
            Observation::new("K06", 1.0),
        ])
        .unwrap();
    assert_eq!(top_id(&diagnosis), "P02");
    // P01 only receives opposing evidence: -0.1 then -0.2.
    let layer = diagnosis.aggregate_for(&"P01".into()).unwrap();
    assert!((layer - (-0.1 + -0.2 * 0.9)).abs() < 1e-9);
    assert_eq!(diagnosis.results[2].hypothesis.id.as_str(), "P01");
}

#[test]
fn sick_bird_is_culled() {
    let diagnosis = engine()
        .calculate(&[
            Observation::new("K08", 1.0),
            Observation::new("K09", 0.8),
        ])
        .unwrap();
    assert_eq!(top_id(&diagnosis), "P03");
    // 0.8, then 0.8 * 0.7 = 0.56: 0.8 + 0.56 * 0.2
    let cull = diagnosis.aggregate_for(&"P03".into()).unwrap();
    assert!((cull - 0.912).abs() < 1e-9);
    assert_eq!(diagnosis.results[0].percentage, "91.20%");
}

#[test]
fn log_has_both_sections_in_order() {
    let diagnosis = engine()
        .calculate(&[Observation::new("K01", 1.0), Observation::new("K02", 1.0)])
        .unwrap();
    let log = &diagnosis.log;
    let matching = log.iter().position(|l| l == "=== 1. Rule Matching ===").unwrap();
    let combining = log.iter().position(|l| l == "=== 2. CF Combination ===").unwrap();
    assert!(matching < combining);
    assert!(log.contains(&"Trait [K01] (CF user: 1) matches [P01]".to_string()));
    assert!(log.contains(&"   MB: 0.8, MD: 0.1 => CF expert: 0.70".to_string()));
    assert!(log.contains(&"Combining CF for P01:".to_string()));
    assert!(log
        .iter()
        .any(|l| l.starts_with("   CF(2) [both-supporting] = 0.700 + 0.800 * (1 - 0.700)")));
    assert!(log.contains(&"-> Final result P01: 94.00%".to_string()));
}

#[test]
fn recommendation_and_supporting_traits_for_top_result() {
    let engine = engine();
    let observations = vec![
        Observation::new("K01", 0.8),
        Observation::new("K03", 0.4),
        Observation::new("K04", 1.0),
    ];
    let diagnosis = engine.calculate(&observations).unwrap();
    let top = diagnosis.top().unwrap();
    assert_eq!(top.hypothesis.id.as_str(), "P01");
    assert!(top.hypothesis.recommendation.contains("production cage"));

    let phrases: Vec<&str> = engine
        .supporting_traits(&diagnosis, &observations)
        .into_iter()
        .map(Trait::display_text)
        .collect();
    assert_eq!(
        phrases,
        vec!["has bright, clear eyes", "has wide, elastic pubic bones"]
    );
}
