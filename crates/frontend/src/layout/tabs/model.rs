//! Render model for the tab strip.
//!
//! Pure data: no signals, no DOM. `TabContainer` builds its markup from it.

use std::collections::HashSet;

/// Static `{id, label}` pair identifying one selectable tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    pub id: String,
    pub label: String,
}

impl TabDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Static attributes of one selector button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelector {
    pub id: String,
    pub label: String,
    /// `id` attribute of the button
    pub dom_id: String,
    /// `aria-controls` target, the panel element id
    pub controls: String,
}

pub fn tab_dom_id(tab_id: &str) -> String {
    format!("tab-{}", tab_id)
}

pub fn panel_dom_id(tab_id: &str) -> String {
    format!("tabpanel-{}", tab_id)
}

pub fn is_selected(tab_id: &str, active: &str) -> bool {
    tab_id == active
}

/// Panels are matched to the active tab by id equality, never by position.
pub fn is_panel_active(panel_tab_id: &str, active: &str) -> bool {
    panel_tab_id == active
}

/// Ordered set of tab descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStrip {
    tabs: Vec<TabDescriptor>,
}

impl TabStrip {
    pub fn new(tabs: Vec<TabDescriptor>) -> Self {
        Self { tabs }
    }

    pub fn selectors(&self) -> Vec<TabSelector> {
        self.tabs
            .iter()
            .map(|tab| TabSelector {
                id: tab.id.clone(),
                label: tab.label.clone(),
                dom_id: tab_dom_id(&tab.id),
                controls: panel_dom_id(&tab.id),
            })
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tabs.iter().any(|tab| tab.id == id)
    }

    /// Label of the first descriptor with this id.
    pub fn label_of(&self, id: &str) -> Option<&str> {
        self.tabs
            .iter()
            .find(|tab| tab.id == id)
            .map(|tab| tab.label.as_str())
    }

    /// Ids that occur more than once, in first-repeat order.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for tab in &self.tabs {
            if !seen.insert(tab.id.as_str()) && reported.insert(tab.id.as_str()) {
                duplicates.push(tab.id.clone());
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fight_tabs() -> TabStrip {
        TabStrip::new(vec![
            TabDescriptor::new("fight", "Fight"),
            TabDescriptor::new("history", "Fight History"),
        ])
    }

    #[test]
    fn test_selector_per_descriptor_in_order() {
        let selectors = fight_tabs().selectors();
        let labels: Vec<&str> = selectors.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Fight", "Fight History"]);
    }

    #[test]
    fn test_aria_ids() {
        let selectors = fight_tabs().selectors();
        assert_eq!(selectors[1].dom_id, "tab-history");
        assert_eq!(selectors[1].controls, "tabpanel-history");
        assert_eq!(panel_dom_id("fight"), "tabpanel-fight");
    }

    #[test]
    fn test_unknown_id() {
        let strip = fight_tabs();
        assert!(!strip.contains("villains"));
        assert_eq!(strip.label_of("villains"), None);
        assert_eq!(strip.label_of("history"), Some("Fight History"));
    }

    #[test]
    fn test_empty_strip() {
        let strip = TabStrip::default();
        assert!(strip.selectors().is_empty());
        assert!(strip.duplicate_ids().is_empty());
    }

    #[test]
    fn test_duplicates_are_reported_once() {
        let strip = TabStrip::new(vec![
            TabDescriptor::new("fight", "Fight"),
            TabDescriptor::new("fight", "Fight again"),
            TabDescriptor::new("fight", "And again"),
            TabDescriptor::new("history", "Fight History"),
        ]);
        assert_eq!(strip.duplicate_ids(), vec!["fight".to_string()]);
        assert_eq!(strip.label_of("fight"), Some("Fight"));
        assert_eq!(strip.selectors().len(), 4);
    }
}
