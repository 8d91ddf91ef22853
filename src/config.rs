/// Grouping configuration passed into the classifier and controller
use crate::heuristics::RuleTable;
use crate::tab_data::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupingConfig {
    /// Whether grouping starts switched on
    pub enabled: bool,
    pub rules: RuleTable,
    /// Category for unmatched hosts and unparsable URLs
    pub default_category: Category,
    /// Background refresh period in milliseconds; `None` disables it
    pub refetch_interval: Option<u32>,
}

impl GroupingConfig {
    pub fn from_json(json: &str) -> Result<GroupingConfig, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        GroupingConfig {
            enabled: true,
            rules: RuleTable::default(),
            default_category: Category::Other,
            refetch_interval: Some(DEFAULT_REFETCH_INTERVAL_MS),
        }
    }
}

const DEFAULT_REFETCH_INTERVAL_MS: u32 = 5_000;
