/// Group operations: expansion toggles, lookups, statistics.
///
/// Every function takes the current list and returns a new one; unknown ids
/// leave the list unchanged or yield an empty result.

use crate::tab_data::{GroupingStats, Tab, TabGroup};

/// Flip `is_expanded` on the group with `group_id`
pub fn toggle_expansion(groups: &[TabGroup], group_id: &str) -> Vec<TabGroup> {
    groups
        .iter()
        .map(|group| {
            if group.id == group_id {
                TabGroup {
                    is_expanded: !group.is_expanded,
                    ..group.clone()
                }
            } else {
                group.clone()
            }
        })
        .collect()
}

pub fn expand_all(groups: &[TabGroup]) -> Vec<TabGroup> {
    set_all_expanded(groups, true)
}

pub fn collapse_all(groups: &[TabGroup]) -> Vec<TabGroup> {
    set_all_expanded(groups, false)
}

fn set_all_expanded(groups: &[TabGroup], is_expanded: bool) -> Vec<TabGroup> {
    groups
        .iter()
        .map(|group| TabGroup {
            is_expanded,
            ..group.clone()
        })
        .collect()
}

/// First group (in list order) containing the tab
pub fn find_group_by_tab(groups: &[TabGroup], tab_id: i32) -> Option<&TabGroup> {
    groups
        .iter()
        .find(|group| group.tabs.iter().any(|tab| tab.id == tab_id))
}

pub fn tabs_in_group<'a>(groups: &'a [TabGroup], group_id: &str) -> &'a [Tab] {
    groups
        .iter()
        .find(|group| group.id == group_id)
        .map(|group| group.tabs.as_slice())
        .unwrap_or(&[])
}

pub fn stats(groups: &[TabGroup]) -> GroupingStats {
    groups.iter().fold(
        GroupingStats {
            total_groups: groups.len(),
            ..GroupingStats::default()
        },
        |mut stats, group| {
            stats.total_tabs += group.tabs.len();
            if group.is_expanded {
                stats.expanded_groups += 1;
            }
            *stats.category_counts.entry(group.category).or_insert(0) += group.tabs.len();
            stats
        },
    )
}
