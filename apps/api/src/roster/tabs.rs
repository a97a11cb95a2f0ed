use serde::{Deserialize, Serialize};

/// Content tabs of the comparison pane. Only the compare view is built;
/// the other two are shown disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Heatmap,
    Table,
    Graph,
}

pub const ALL_TABS: [Tab; 3] = [Tab::Heatmap, Tab::Table, Tab::Graph];

pub const UNDER_DEVELOPMENT: &str = "This view is under development.";

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Heatmap => "Compare View",
            Tab::Table => "Individual View",
            Tab::Graph => "Shortlisted Candidates",
        }
    }

    pub fn enabled(self) -> bool {
        matches!(self, Tab::Heatmap)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TabView {
    pub tab: Tab,
    pub label: &'static str,
    pub enabled: bool,
    pub active: bool,
}

pub fn tab_views(active: Tab) -> Vec<TabView> {
    ALL_TABS
        .iter()
        .map(|&tab| TabView {
            tab,
            label: tab.label(),
            enabled: tab.enabled(),
            active: tab == active,
        })
        .collect()
}
