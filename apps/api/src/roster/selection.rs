use serde::Serialize;

use crate::models::CandidateId;

/// The user's chosen candidates, keyed by id.
///
/// Behaves as a set; insertion order is kept because the comparison view lays
/// candidates out in the order they were picked. Ids are not validated
/// against the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<CandidateId>,
}

impl Selection {
    pub fn contains(&self, id: &CandidateId) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Returns a copy with `id` removed if it was selected, appended otherwise.
    pub fn toggled(&self, id: &CandidateId) -> Selection {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    /// Toggles `id` in place. Returns `true` if it is selected afterwards.
    pub fn toggle(&mut self, id: &CandidateId) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    pub fn ids(&self) -> &[CandidateId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Header label, e.g. "1 Candidate" / "3 Candidates".
pub fn candidate_count_label(count: usize) -> String {
    if count == 1 {
        "1 Candidate".to_string()
    } else {
        format!("{count} Candidates")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> CandidateId {
        CandidateId::from(n)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let empty = Selection::default();
        let one = empty.toggled(&id(1));
        assert!(one.contains(&id(1)));
        assert_eq!(one.len(), 1);

        let back = one.toggled(&id(1));
        assert!(!back.contains(&id(1)));
        assert_eq!(back, empty);
    }

    #[test]
    fn test_toggle_keys_on_id_not_instance() {
        let mut selection = Selection::default();
        assert!(selection.toggle(&CandidateId::new("42")));
        // a fresh value equal by id removes the entry
        let again: CandidateId = serde_json::from_str("42").unwrap();
        assert!(!selection.toggle(&again));
        assert!(selection.ids().is_empty());
    }

    #[test]
    fn test_toggle_changes_only_that_id() {
        let base = Selection::default().toggled(&id(1)).toggled(&id(3));

        let added = base.toggled(&id(2));
        assert_eq!(added.ids(), &[id(1), id(3), id(2)]);

        let removed = base.toggled(&id(1));
        assert_eq!(removed.ids(), &[id(3)]);
    }

    #[test]
    fn test_toggle_is_involution() {
        let base = Selection::default().toggled(&id(5)).toggled(&id(6));
        for n in [5, 6, 7] {
            let twice = base.toggled(&id(n)).toggled(&id(n));
            assert_eq!(twice.contains(&id(n)), base.contains(&id(n)));
        }
    }

    #[test]
    fn test_count_label() {
        assert_eq!(candidate_count_label(0), "0 Candidates");
        assert_eq!(candidate_count_label(1), "1 Candidate");
        assert_eq!(candidate_count_label(4), "4 Candidates");
    }
}
