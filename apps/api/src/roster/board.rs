use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Candidate, CandidateId};
use crate::people_client::LoadError;
use crate::roster::ranking::{ranked_entries, recommendation_break, RankedEntry};
use crate::roster::selection::{candidate_count_label, Selection};
use crate::roster::tabs::{tab_views, Tab, TabView, UNDER_DEVELOPMENT};
use crate::scoring::{build_heatmap, Heatmap};

pub const JOB_TITLE: &str = "Posk_UXdesigner_sr001";
pub const LOADING_MESSAGE: &str = "Loading candidates...";
pub const RECOMMENDATION_NOTE: &str =
    "Recommendations are based on your skill requirements and candidates' performance.";

/// In-memory dashboard state: load progress, the ranked candidates, the
/// user's selection and the active tab.
///
/// Candidates are only ever replaced wholesale by a finished load. Each load
/// carries an epoch so that a slow load cannot overwrite a newer one.
#[derive(Debug)]
pub struct Board {
    loading_people: bool,
    loading_details: bool,
    error: Option<String>,
    candidates: Vec<Candidate>,
    selection: Selection,
    active_tab: Tab,
    loaded_at: Option<DateTime<Utc>>,
    epoch: u64,
    recommended_count: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub selected_count: usize,
    pub selected_label: String,
    pub loading_people: bool,
    pub loading_details: bool,
    pub loading_message: Option<&'static str>,
    pub error: Option<String>,
    pub candidates: Vec<RankedEntry>,
    pub recommendation_break: Option<usize>,
    pub recommendation_note: &'static str,
    pub selection: Selection,
    pub active_tab: Tab,
    pub tabs: Vec<TabView>,
    pub loaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct SelectionView {
    pub selection: Selection,
    pub count: usize,
    pub label: String,
}

/// What the comparison pane shows for the active tab.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompareView {
    Heatmap(Heatmap),
    Placeholder { tab: Tab, message: &'static str },
}

impl Board {
    /// A board that has not loaded yet. Both loading flags start set.
    pub fn new(recommended_count: usize) -> Self {
        Self {
            loading_people: true,
            loading_details: true,
            error: None,
            candidates: Vec::new(),
            selection: Selection::default(),
            active_tab: Tab::default(),
            loaded_at: None,
            epoch: 0,
            recommended_count,
        }
    }

    /// Discards candidates and selection and enters the loading state.
    /// Returns the epoch of the new load.
    pub fn begin_load(&mut self) -> u64 {
        self.epoch += 1;
        self.loading_people = true;
        self.loading_details = true;
        self.error = None;
        self.candidates.clear();
        self.selection.clear();
        self.loaded_at = None;
        self.epoch
    }

    pub fn roster_loaded(&mut self, epoch: u64) {
        if epoch == self.epoch {
            self.loading_people = false;
        }
    }

    /// Publishes the outcome of load `epoch`. Loading flags are cleared either
    /// way; on failure the board holds no candidates and exactly one message.
    /// Returns `false` if the load was superseded and nothing changed.
    pub fn finish_load(&mut self, epoch: u64, result: Result<Vec<Candidate>, LoadError>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.loading_people = false;
        self.loading_details = false;
        match result {
            Ok(ranked) => {
                self.candidates = ranked;
                self.error = None;
                self.loaded_at = Some(Utc::now());
            }
            Err(e) => {
                self.candidates.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn loading_people(&self) -> bool {
        self.loading_people
    }

    pub fn loading_details(&self) -> bool {
        self.loading_details
    }

    pub fn is_loading(&self) -> bool {
        self.loading_people() || self.loading_details()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Candidates in ranked order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Toggles `id` in the selection. Returns `true` if now selected.
    pub fn toggle(&mut self, id: &CandidateId) -> bool {
        self.selection = self.selection.toggled(id);
        self.selection.contains(id)
    }

    /// Switches tab. Disabled tabs are refused and leave the board unchanged.
    pub fn set_tab(&mut self, tab: Tab) -> bool {
        if !tab.enabled() {
            return false;
        }
        self.active_tab = tab;
        true
    }

    pub fn ranked_entries(&self) -> Vec<RankedEntry> {
        ranked_entries(&self.candidates, &self.selection, self.recommended_count)
    }

    pub fn selection_view(&self) -> SelectionView {
        SelectionView {
            selection: self.selection.clone(),
            count: self.selection.len(),
            label: candidate_count_label(self.selection.len()),
        }
    }

    pub fn compare_view(&self) -> CompareView {
        match self.active_tab {
            Tab::Heatmap => {
                CompareView::Heatmap(build_heatmap(&self.candidates, self.selection.ids()))
            }
            tab => CompareView::Placeholder {
                tab,
                message: UNDER_DEVELOPMENT,
            },
        }
    }

    pub fn view(&self) -> DashboardView {
        let selection = self.selection();
        DashboardView {
            title: JOB_TITLE,
            selected_count: selection.len(),
            selected_label: candidate_count_label(selection.len()),
            loading_people: self.loading_people(),
            loading_details: self.loading_details(),
            loading_message: self.is_loading().then_some(LOADING_MESSAGE),
            error: self.error().map(str::to_string),
            candidates: self.ranked_entries(),
            recommendation_break: recommendation_break(
                self.candidates().len(),
                self.recommended_count,
            ),
            recommendation_note: RECOMMENDATION_NOTE,
            selection: selection.clone(),
            active_tab: self.active_tab(),
            tabs: tab_views(self.active_tab()),
            loaded_at: self.loaded_at(),
        }
    }
}
