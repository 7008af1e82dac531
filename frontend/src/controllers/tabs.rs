//! Tab visibility.
//!
//! Selector controls are bound to panels by [`TabId`] when the set is built,
//! so activating a tab never inspects button text.

use crate::{TabId, UiError, UiResult};

/// A set of panels with at most one visible.
#[derive(Clone, Debug, PartialEq)]
pub struct TabSet {
    tabs: Vec<TabId>,
    active: Option<TabId>,
}

impl TabSet {
    /// Build a set over `tabs`; the first one starts active.
    pub fn new(tabs: impl IntoIterator<Item = TabId>) -> Self {
        let mut deduped: Vec<TabId> = Vec::new();
        for tab in tabs {
            if !deduped.contains(&tab) {
                deduped.push(tab);
            }
        }
        let active = deduped.first().copied();
        Self { tabs: deduped, active }
    }

    /// Tabs in display order.
    pub fn tabs(&self) -> &[TabId] {
        &self.tabs
    }

    /// Currently visible panel, if any.
    #[cfg(test)]
    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    /// Show `tab` and hide every other panel.
    pub fn activate(&mut self, tab: TabId) -> UiResult<()> {
        self.activate_by_name(tab.as_str()).map(|_| ())
    }

    /// Show the panel whose id equals `name`.
    ///
    /// An unknown id hides every panel and clears the active selector,
    /// then reports [`UiError::MissingElement`].
    pub fn activate_by_name(&mut self, name: &str) -> UiResult<TabId> {
        match self.tabs.iter().copied().find(|tab| tab.as_str() == name) {
            Some(tab) => {
                log::debug!("Tab activated: {}", tab);
                self.active = Some(tab);
                Ok(tab)
            }
            None => {
                self.active = None;
                Err(UiError::MissingElement(name.to_string()))
            }
        }
    }

    /// Whether the panel `tab` is shown.
    pub fn is_visible(&self, tab: TabId) -> bool {
        self.active == Some(tab)
    }

    /// Whether the selector control bound to `tab` is marked active.
    pub fn is_selector_active(&self, tab: TabId) -> bool {
        self.is_visible(tab)
    }
}

impl Default for TabSet {
    fn default() -> Self {
        Self::new(TabId::all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(set: &TabSet) -> Vec<TabId> {
        set.tabs().iter().copied().filter(|t| set.is_visible(*t)).collect()
    }

    #[test]
    fn test_first_tab_starts_active() {
        let set = TabSet::default();
        assert_eq!(set.active(), Some(TabId::Single));
        assert_eq!(visible(&set), vec![TabId::Single]);
    }

    #[test]
    fn test_activate_shows_exactly_one_panel() {
        let mut set = TabSet::default();
        for tab in TabId::all() {
            set.activate(tab).unwrap();
            assert_eq!(visible(&set), vec![tab]);
            let selectors: Vec<_> = set
                .tabs()
                .iter()
                .copied()
                .filter(|t| set.is_selector_active(*t))
                .collect();
            assert_eq!(selectors, vec![tab]);
        }
    }

    #[test]
    fn test_activate_by_name() {
        let mut set = TabSet::default();
        assert_eq!(set.activate_by_name("batch"), Ok(TabId::Batch));
        assert!(set.is_visible(TabId::Batch));
        assert!(!set.is_visible(TabId::Single));
    }

    #[test]
    fn test_unknown_name_shows_no_panel() {
        let mut set = TabSet::default();
        let err = set.activate_by_name("history").unwrap_err();
        assert_eq!(err, UiError::MissingElement("history".into()));
        assert!(visible(&set).is_empty());
        assert_eq!(set.active(), None);
    }

    #[test]
    fn test_label_text_is_not_matched() {
        // "Batch Prediction" contains "prediction" but that is not a panel id.
        let mut set = TabSet::default();
        assert!(set.activate_by_name("prediction").is_err());
    }

    #[test]
    fn test_tab_outside_set() {
        let mut set = TabSet::new([TabId::Single]);
        assert!(set.activate(TabId::Batch).is_err());
        assert!(!set.is_visible(TabId::Batch));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = TabSet::new([TabId::Batch, TabId::Batch, TabId::Single]);
        assert_eq!(set.tabs(), &[TabId::Batch, TabId::Single]);
        assert_eq!(set.active(), Some(TabId::Batch));
    }
}
