//! Aggregate score — sum of every consensus score in a candidate's skill taxonomy.
//!
//! The detail payload is treated as untrusted JSON:
//! `data.data.skillset[*].skills[*].pos[*].consensus_score`.
//! Any level may be missing or have the wrong type; such a level is read as
//! empty and contributes nothing. Nothing in here can fail.

use serde_json::Value;

/// Sums all truthy numeric consensus scores in a detail payload.
/// Returns 0.0 for an empty or fully-absent payload.
pub fn aggregate(detail: &Value) -> f64 {
    skill_groups(detail)
        .flat_map(skills)
        .map(skill_score)
        .sum()
}

/// Skill-groups under `data.data.skillset`, or nothing.
pub fn skill_groups(detail: &Value) -> impl Iterator<Item = &Value> {
    array_at(detail.get("data").and_then(|d| d.get("data")), "skillset")
}

/// Skills of one skill-group, or nothing.
pub fn skills(group: &Value) -> impl Iterator<Item = &Value> {
    array_at(Some(group), "skills")
}

/// Proficiency records ("pos") of one skill, or nothing.
pub fn proficiencies(skill: &Value) -> impl Iterator<Item = &Value> {
    array_at(Some(skill), "pos")
}

/// Sum of the truthy consensus scores of one skill.
pub fn skill_score(skill: &Value) -> f64 {
    proficiencies(skill).filter_map(consensus_score).sum()
}

/// The record's consensus score if it is a number other than zero or NaN.
/// Missing, zero, and non-numeric scores are all treated as absent.
pub fn consensus_score(proficiency: &Value) -> Option<f64> {
    proficiency
        .get("consensus_score")
        .and_then(Value::as_f64)
        .filter(|score| *score != 0.0 && !score.is_nan())
}

fn array_at<'a>(parent: Option<&'a Value>, key: &str) -> impl Iterator<Item = &'a Value> {
    parent
        .and_then(|p| p.get(key))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}
