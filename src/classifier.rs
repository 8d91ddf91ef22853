/// URL classification and the grouping pass built on it
use crate::config::GroupingConfig;
use crate::heuristics::RuleTable;
use crate::tab_data::{Category, Tab, TabGroup};
use log::debug;
use url::Url;
use uuid::Uuid;

/// Maps tabs to categories using a rule table
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    rules: RuleTable,
    default_category: Category,
}

impl Classifier {
    pub fn new(rules: RuleTable, default_category: Category) -> Self {
        Classifier {
            rules,
            default_category,
        }
    }

    pub fn from_config(config: &GroupingConfig) -> Self {
        Classifier::new(config.rules.clone(), config.default_category)
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn classify(&self, tab: &Tab) -> Category {
        self.classify_url(&tab.url)
    }

    /// Classify a URL by its hostname.
    ///
    /// The hostname is matched against each category's patterns in table
    /// declaration order; the first category with any pattern contained in
    /// the hostname wins. Unparsable URLs never reach the patterns.
    pub fn classify_url(&self, url: &str) -> Category {
        let hostname = match Url::parse(url) {
            Ok(parsed) => parsed.host_str().unwrap_or_default().to_lowercase(),
            Err(_) => return self.default_category,
        };

        self.rules
            .rules()
            .iter()
            .find(|rule| {
                rule.patterns
                    .iter()
                    .any(|pattern| hostname.contains(&pattern.to_lowercase()))
            })
            .map(|rule| rule.category)
            .unwrap_or(self.default_category)
    }

    /// Run one classification pass over `tabs`.
    ///
    /// Only non-empty categories produce a group. Groups come out in rule
    /// table order, followed by any remaining categories (the fallback) in
    /// enum order. Each group keeps its tabs in input order, starts
    /// expanded, and gets an id unique to this pass.
    pub fn group_tabs(&self, tabs: &[Tab]) -> Vec<TabGroup> {
        if tabs.is_empty() {
            return Vec::new();
        }

        let mut buckets: Vec<(Category, Vec<Tab>)> = self
            .rules
            .rules()
            .iter()
            .map(|rule| rule.category)
            .chain(Category::ALL)
            .fold(Vec::new(), |mut order, category| {
                if !order.contains(&category) {
                    order.push(category);
                }
                order
            })
            .into_iter()
            .map(|category| (category, Vec::new()))
            .collect();

        for tab in tabs {
            let category = self.classify(tab);
            if let Some((_, bucket)) = buckets.iter_mut().find(|(c, _)| *c == category) {
                bucket.push(tab.clone());
            }
        }

        let groups: Vec<TabGroup> = buckets
            .into_iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(category, bucket)| TabGroup {
                id: format!("group-{}-{}", category.key(), Uuid::new_v4().simple()),
                name: category.display_name().to_string(),
                category,
                tabs: bucket,
                is_expanded: true,
            })
            .collect();

        debug!("Classified {} tabs into {} groups", tabs.len(), groups.len());

        groups
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::from_config(&GroupingConfig::default())
    }
}
