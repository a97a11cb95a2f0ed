//! Comparison heatmap for the selected candidates.
//!
//! Rows are skills in first-seen order across the selected candidates,
//! columns are candidates in selection order. A cell is the candidate's
//! score for that skill, or `None` when their payload does not mention it.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::models::{Candidate, CandidateId};
use crate::scoring::aggregate::{skill_groups, skill_score, skills};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeatmapColumn {
    pub id: CandidateId,
    pub name: String,
    pub total_score: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeatmapRow {
    pub group: String,
    pub skill: String,
    /// One cell per column, same order as `Heatmap::columns`.
    pub cells: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Heatmap {
    pub columns: Vec<HeatmapColumn>,
    pub rows: Vec<HeatmapRow>,
    /// Selected ids with no loaded candidate behind them.
    pub missing: Vec<CandidateId>,
}

/// Builds the heatmap for `selected` (in that order) out of `candidates`.
pub fn build_heatmap(candidates: &[Candidate], selected: &[CandidateId]) -> Heatmap {
    let by_id: HashMap<&CandidateId, &Candidate> =
        candidates.iter().map(|c| (c.id(), c)).collect();

    let mut columns = Vec::new();
    let mut missing = Vec::new();
    let mut chosen = Vec::new();
    for id in selected {
        match by_id.get(id) {
            Some(candidate) => {
                columns.push(HeatmapColumn {
                    id: id.clone(),
                    name: candidate.name().to_string(),
                    total_score: candidate.total_score(),
                });
                chosen.push(*candidate);
            }
            None => missing.push(id.clone()),
        }
    }

    let mut rows: Vec<HeatmapRow> = Vec::new();
    let mut row_index: HashMap<(String, String), usize> = HashMap::new();

    for (col, candidate) in chosen.iter().enumerate() {
        for (key, score) in skill_scores(candidate.detail()) {
            let idx = *row_index.entry(key.clone()).or_insert_with(|| {
                rows.push(HeatmapRow {
                    group: key.0.clone(),
                    skill: key.1.clone(),
                    cells: vec![None; chosen.len()],
                });
                rows.len() - 1
            });
            // The same skill listed twice in one payload adds up.
            let cell = &mut rows[idx].cells[col];
            *cell = Some(cell.unwrap_or(0.0) + score);
        }
    }

    Heatmap {
        columns,
        rows,
        missing,
    }
}

/// Per-skill scores of one payload keyed by (group label, skill label).
fn skill_scores(detail: &Value) -> Vec<((String, String), f64)> {
    let mut out = Vec::new();
    for (g, group) in skill_groups(detail).enumerate() {
        let group_label = label(group, "group", g);
        for (s, skill) in skills(group).enumerate() {
            out.push(((group_label.clone(), label(skill, "skill", s)), skill_score(skill)));
        }
    }
    out
}

/// `name`, else `id`, else a positional label such as `skill 2`.
fn label(node: &Value, kind: &str, index: usize) -> String {
    let field = |key: &str| match node.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    field("name")
        .or_else(|| field("id"))
        .unwrap_or_else(|| format!("{kind} {}", index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonSummary;
    use serde_json::json;

    fn candidate(id: u64, name: &str, skillset: Value) -> Candidate {
        let summary: PersonSummary =
            serde_json::from_value(json!({"id": id, "name": name})).unwrap();
        Candidate::new(summary, json!({"data": {"data": {"skillset": skillset}}}))
    }

    #[test]
    fn test_columns_follow_selection_order() {
        let candidates = vec![
            candidate(1, "A", json!([])),
            candidate(2, "B", json!([])),
        ];
        let selected = vec![CandidateId::from(2), CandidateId::from(1)];
        let heatmap = build_heatmap(&candidates, &selected);
        let names: Vec<_> = heatmap.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert!(heatmap.rows.is_empty());
    }

    #[test]
    fn test_cells_are_none_for_absent_skills() {
        let candidates = vec![
            candidate(
                1,
                "A",
                json!([{"name": "Design", "skills": [
                    {"name": "Figma", "pos": [{"consensus_score": 3}]},
                    {"name": "Research", "pos": [{"consensus_score": 2}]}
                ]}]),
            ),
            candidate(
                2,
                "B",
                json!([{"name": "Design", "skills": [
                    {"name": "Research", "pos": [{"consensus_score": 4}, {"consensus_score": 0}]}
                ]}]),
            ),
        ];
        let selected = vec![CandidateId::from(1), CandidateId::from(2)];
        let heatmap = build_heatmap(&candidates, &selected);

        assert_eq!(heatmap.rows.len(), 2);
        assert_eq!(heatmap.rows[0].skill, "Figma");
        assert_eq!(heatmap.rows[0].cells, vec![Some(3.0), None]);
        assert_eq!(heatmap.rows[1].skill, "Research");
        assert_eq!(heatmap.rows[1].cells, vec![Some(2.0), Some(4.0)]);
    }

    #[test]
    fn test_unknown_selected_ids_are_missing() {
        let candidates = vec![candidate(1, "A", json!([]))];
        let selected = vec![CandidateId::from(9), CandidateId::from(1)];
        let heatmap = build_heatmap(&candidates, &selected);
        assert_eq!(heatmap.columns.len(), 1);
        assert_eq!(heatmap.missing, vec![CandidateId::from(9)]);
    }

    #[test]
    fn test_unnamed_nodes_get_positional_labels() {
        let candidates = vec![candidate(
            1,
            "A",
            json!([{"skills": [{"pos": [{"consensus_score": 1}]}, {"id": 42, "pos": []}]}]),
        )];
        let heatmap = build_heatmap(&candidates, &[CandidateId::from(1)]);
        assert_eq!(heatmap.rows[0].group, "group 1");
        assert_eq!(heatmap.rows[0].skill, "skill 1");
        assert_eq!(heatmap.rows[1].skill, "42");
        assert_eq!(heatmap.rows[1].cells, vec![Some(0.0)]);
    }
}
