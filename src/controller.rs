/// View state for the grouped tab list.
///
/// Holds the current groups and the grouping on/off switch. Refreshes are
/// split into `begin_refresh` (before the async tab fetch) and
/// `complete_refresh` (after it); each refresh carries a generation number so
/// that only the most recently started fetch can update the groups.

use crate::classifier::Classifier;
use crate::config::GroupingConfig;
use crate::operations;
use crate::reconcile::reconcile;
use crate::tab_data::{GroupingStats, Tab, TabGroup};
use crate::tab_source::TabSourceError;
use log::{debug, info, warn};

/// Proof that a refresh was started; hand it back to `complete_refresh`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer refresh was started, or grouping was switched off, meanwhile
    Stale,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupingController {
    classifier: Classifier,
    grouping_enabled: bool,
    groups: Vec<TabGroup>,
    generation: u64,
    last_error: Option<TabSourceError>,
}

impl GroupingController {
    pub fn new(config: &GroupingConfig) -> Self {
        GroupingController {
            classifier: Classifier::from_config(config),
            grouping_enabled: config.enabled,
            groups: Vec::new(),
            generation: 0,
            last_error: None,
        }
    }

    pub fn groups(&self) -> &[TabGroup] {
        &self.groups
    }

    pub fn is_grouping_enabled(&self) -> bool {
        self.grouping_enabled
    }

    pub fn last_error(&self) -> Option<&TabSourceError> {
        self.last_error.as_ref()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Start a refresh. Returns `None` while grouping is disabled.
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        if !self.grouping_enabled {
            return None;
        }

        self.generation += 1;
        Some(RefreshTicket {
            generation: self.generation,
        })
    }

    /// Apply the result of the fetch started with `ticket`
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Tab>, TabSourceError>,
    ) -> RefreshOutcome {
        if !self.grouping_enabled || ticket.generation != self.generation {
            debug!(
                "Discarding stale refresh {} (current {})",
                ticket.generation, self.generation
            );
            return RefreshOutcome::Stale;
        }

        match result {
            Ok(tabs) => {
                let fresh = self.classifier.group_tabs(&tabs);
                self.groups = reconcile(&self.groups, fresh);
                self.last_error = None;
                RefreshOutcome::Applied
            }
            Err(e) => {
                warn!("Refresh failed: {}", e);
                self.last_error = Some(e);
                RefreshOutcome::Failed
            }
        }
    }

    /// Switch grouping on or off.
    ///
    /// Any fetch in flight becomes stale. Switching on returns the ticket for
    /// the fresh classification pass; held groups are kept while off so the
    /// next pass reconciles against them.
    pub fn set_grouping_enabled(&mut self, enabled: bool) -> Option<RefreshTicket> {
        info!("Grouping {}", if enabled { "enabled" } else { "disabled" });

        self.grouping_enabled = enabled;
        self.generation += 1;
        self.begin_refresh()
    }

    pub fn toggle_grouping(&mut self) -> Option<RefreshTicket> {
        self.set_grouping_enabled(!self.grouping_enabled)
    }

    pub fn toggle_group(&mut self, group_id: &str) {
        self.groups = operations::toggle_expansion(&self.groups, group_id);
    }

    pub fn expand_all(&mut self) {
        self.groups = operations::expand_all(&self.groups);
    }

    pub fn collapse_all(&mut self) {
        self.groups = operations::collapse_all(&self.groups);
    }

    pub fn find_group_by_tab(&self, tab_id: i32) -> Option<&TabGroup> {
        operations::find_group_by_tab(&self.groups, tab_id)
    }

    pub fn tabs_in_group(&self, group_id: &str) -> &[Tab] {
        operations::tabs_in_group(&self.groups, group_id)
    }

    pub fn stats(&self) -> GroupingStats {
        operations::stats(&self.groups)
    }
}

impl Default for GroupingController {
    fn default() -> Self {
        GroupingController::new(&GroupingConfig::default())
    }
}
