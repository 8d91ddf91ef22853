/// Data structures for Tab Sorter
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Information about a browser tab, as reported by the tab source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub fav_icon_url: Option<String>,
    #[serde(default)]
    pub active: bool,
    pub window_id: i32,
    #[serde(default)]
    pub index: i32,
}

impl Tab {
    pub fn new(id: i32, url: String, title: String, window_id: i32, index: i32) -> Tab {
        Tab {
            id,
            title,
            url,
            fav_icon_url: None,
            active: false,
            window_id,
            index,
        }
    }
}

/// Subject category a tab is sorted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Development,
    Social,
    Media,
    Shopping,
    Productivity,
    Documentation,
    News,
    Entertainment,
    Education,
    Other,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 10] = [
        Category::Development,
        Category::Social,
        Category::Media,
        Category::Shopping,
        Category::Productivity,
        Category::Documentation,
        Category::News,
        Category::Entertainment,
        Category::Education,
        Category::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Development => "development",
            Category::Social => "social",
            Category::Media => "media",
            Category::Shopping => "shopping",
            Category::Productivity => "productivity",
            Category::Documentation => "documentation",
            Category::News => "news",
            Category::Entertainment => "entertainment",
            Category::Education => "education",
            Category::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Development => "Development",
            Category::Social => "Social",
            Category::Media => "Media",
            Category::Shopping => "Shopping",
            Category::Productivity => "Productivity",
            Category::Documentation => "Documentation",
            Category::News => "News",
            Category::Entertainment => "Entertainment",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }

    /// Badge class used by the popup for this category
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Development => "badge badge-blue",
            Category::Social => "badge badge-pink",
            Category::Media => "badge badge-purple",
            Category::Shopping => "badge badge-green",
            Category::Productivity => "badge badge-orange",
            Category::Documentation => "badge badge-indigo",
            Category::News => "badge badge-red",
            Category::Entertainment => "badge badge-yellow",
            Category::Education => "badge badge-teal",
            Category::Other => "badge badge-gray",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// All tabs of one category from a single classification pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabGroup {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub tabs: Vec<Tab>,
    pub is_expanded: bool,
}

/// Aggregate numbers over a list of groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingStats {
    pub total_groups: usize,
    pub total_tabs: usize,
    pub expanded_groups: usize,
    pub category_counts: BTreeMap<Category, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_creation() {
        let tab = Tab::new(
            1,
            "https://google.com".to_string(),
            "Google".to_string(),
            7,
            0,
        );

        assert_eq!(tab.id, 1);
        assert_eq!(tab.url, "https://google.com");
        assert_eq!(tab.title, "Google");
        assert_eq!(tab.window_id, 7);
        assert!(!tab.active);
        assert_eq!(tab.fav_icon_url, None);
    }

    #[test]
    fn test_tab_from_browser_json() {
        // Chrome omits title/url for some internal pages
        let json = r#"{"id": 42, "favIconUrl": "https://x/icon.png", "active": true, "windowId": 3, "index": 5}"#;
        let tab: Tab = serde_json::from_str(json).unwrap();

        assert_eq!(tab.id, 42);
        assert_eq!(tab.title, "");
        assert_eq!(tab.url, "");
        assert_eq!(tab.fav_icon_url.as_deref(), Some("https://x/icon.png"));
        assert!(tab.active);
        assert_eq!(tab.window_id, 3);
        assert_eq!(tab.index, 5);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Development.key(), "development");
        assert_eq!(Category::Other.display_name(), "Other");
        assert_eq!(Category::Media.to_string(), "media");
        assert_eq!(Category::ALL.first(), Some(&Category::Development));
        assert_eq!(Category::ALL.last(), Some(&Category::Other));
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Documentation).unwrap();
        assert_eq!(json, "\"documentation\"");

        let parsed: Category = serde_json::from_str("\"news\"").unwrap();
        assert_eq!(parsed, Category::News);
    }

    #[test]
    fn test_group_serialization() {
        let group = TabGroup {
            id: "group-media-1".to_string(),
            name: "Media".to_string(),
            category: Category::Media,
            tabs: vec![Tab::new(1, "https://youtube.com".to_string(), "YouTube".to_string(), 1, 0)],
            is_expanded: true,
        };

        let json = serde_json::to_string(&group).unwrap();
        assert!(json.contains("\"isExpanded\":true"));
        assert!(json.contains("\"windowId\":1"));

        let deserialized: TabGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, group);
    }
}
