//! Bundled knowledge base: breeding-stock selection for quail.
//!
//! Nine visual and tactile traits are weighed against three mutually
//! exclusive verdicts: layer, broiler, or unfit (cull).

use crate::knowledge::KnowledgeBase;
use crate::types::{Hypothesis, Rule, Trait};

const TRAITS: [(&str, &str, &str, &str); 9] = [
    (
        "K01",
        "Bright eyes",
        "Are the bird's eyes bright and clear rather than dull?",
        "has bright, clear eyes",
    ),
    (
        "K02",
        "Agile movement",
        "Does the bird move nimbly and react quickly when startled?",
        "moves nimbly and reacts quickly",
    ),
    (
        "K03",
        "Glossy feathers",
        "Are the feathers smooth, glossy and neatly arranged?",
        "has smooth, glossy, tidy feathers",
    ),
    (
        "K04",
        "Wide pubic bones",
        "Are the pubic bones near the vent wide (two to three fingers) and elastic?",
        "has wide, elastic pubic bones",
    ),
    (
        "K05",
        "Broad breast",
        "Is the breast broad, full and well muscled?",
        "has a broad, full breast",
    ),
    (
        "K06",
        "Heavy build",
        "Is the body large, weighing over 170 grams?",
        "has a large, heavy build",
    ),
    (
        "K07",
        "Soft abdomen",
        "Does the abdomen feel soft and smooth rather than hard or swollen?",
        "has a soft, smooth abdomen",
    ),
    (
        "K08",
        "Drooping wings",
        "Do the wings hang limply while the bird often closes its eyes?",
        "has limply drooping wings",
    ),
    (
        "K09",
        "Soiled vent",
        "Is the vent dirty, wet or crusted white or green?",
        "has a soiled or abnormal vent",
    ),
];

const RULES: [(&str, &str, f64, f64); 23] = [
    ("K01", "P01", 0.8, 0.1),
    ("K01", "P02", 0.8, 0.2),
    ("K01", "P03", 0.3, 0.2),
    ("K02", "P01", 0.9, 0.1),
    ("K02", "P02", 0.8, 0.2),
    ("K02", "P03", 0.3, 0.1),
    ("K03", "P01", 0.8, 0.2),
    ("K03", "P02", 0.8, 0.2),
    ("K03", "P03", 0.3, 0.2),
    ("K04", "P01", 0.9, 0.1),
    ("K04", "P02", 0.3, 0.5),
    ("K05", "P01", 0.6, 0.7),
    ("K05", "P02", 0.9, 0.1),
    ("K06", "P01", 0.4, 0.6),
    ("K06", "P02", 0.9, 0.2),
    ("K07", "P01", 0.8, 0.2),
    ("K07", "P02", 0.4, 0.6),
    ("K08", "P01", 0.3, 0.6),
    ("K08", "P02", 0.3, 0.6),
    ("K08", "P03", 0.9, 0.1),
    ("K09", "P01", 0.3, 0.6),
    ("K09", "P02", 0.3, 0.6),
    ("K09", "P03", 0.9, 0.2),
];

fn hypotheses() -> Vec<Hypothesis> {
    vec![
        Hypothesis::new("P01", "Layer")
            .with_description("This bird is diagnosed as a strong layer because it")
            .with_recommendation(
                "Highly recommended as primary breeding stock. Move it to the production \
                 cage, feed a high-protein layer ration (18-20%) and provide 16 hours of \
                 light to stimulate laying.",
            ),
        Hypothesis::new("P02", "Broiler")
            .with_description("This bird is better suited as a broiler because it")
            .with_recommendation(
                "Suitable as parent stock for meat birds or for direct harvest. If kept for \
                 breeding, limit feed so it does not grow too fat to breed well.",
            ),
        Hypothesis::new("P03", "Unfit / Cull")
            .with_description("This bird is considered unfit because it")
            .with_recommendation(
                "Keep it out of the colony cage. Isolate it immediately to stop disease \
                 spreading. Cull it if sick, or sell it as culled stock if the defect is \
                 physical only.",
            ),
    ]
}

/// The bundled quail breeding-selection knowledge base.
///
/// # Panics
///
/// Panics if the bundled tables fail knowledge base validation.
pub fn quail_breeding() -> KnowledgeBase {
    let traits = TRAITS
        .iter()
        .enumerate()
        .map(|(i, (id, name, question, description))| {
            Trait::new(*id, *name)
                .with_question(*question)
                .with_description(*description)
                .with_image(format!("images/question-{}.png", i + 1))
        })
        .collect();
    let rules = RULES
        .iter()
        .map(|&(t, h, mb, md)| Rule::new(t, h, mb, md))
        .collect();

    match KnowledgeBase::new(traits, hypotheses(), rules) {
        Ok(kb) => kb,
        Err(e) => unreachable!("bundled knowledge base is invalid: {e}"),
    }
}
