#[path = "property/combination_law.rs"]
mod combination_law;

#[path = "property/ranking_stability.rs"]
mod ranking_stability;

#[path = "property/calculation.rs"]
mod calculation;
