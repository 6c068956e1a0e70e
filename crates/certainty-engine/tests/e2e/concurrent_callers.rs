//! E2E: one engine shared by many threads.

use std::sync::Arc;
use std::thread;

use certainty_engine::builtin::quail_breeding;
use certainty_engine::*;

#[test]
fn shared_engine_gives_identical_answers_across_threads() {
    let engine = Arc::new(CertaintyEngine::new(quail_breeding()));
    let observations = vec![
        Observation::new("K02", 0.6),
        Observation::new("K05", 1.0),
        Observation::new("K09", 0.2),
    ];
    let expected = engine.calculate(&observations).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let observations = observations.clone();
            thread::spawn(move || engine.calculate(&observations).unwrap())
        })
        .collect();

    for handle in handles {
        let diagnosis = handle.join().unwrap();
        assert_eq!(diagnosis, expected);
    }
}

#[test]
fn failures_do_not_affect_other_callers() {
    let engine = CertaintyEngine::new(quail_breeding());
    thread::scope(|s| {
        let bad = s.spawn(|| engine.calculate(&[Observation::new("K10", 0.5)]));
        let good = s.spawn(|| engine.calculate(&[Observation::new("K01", 0.5)]));
        assert!(matches!(
            bad.join().unwrap(),
            Err(CfError::InvalidInput { index: 0, .. })
        ));
        assert!(good.join().unwrap().is_ok());
    });
}
