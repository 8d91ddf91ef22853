/// Domain pattern rules used to classify tabs
use crate::tab_data::Category;
use serde::{Deserialize, Serialize};

/// One category and the hostname substrings that select it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    pub patterns: Vec<String>,
}

/// Ordered mapping of category -> domain patterns.
///
/// Declaration order is the tie-break: when a hostname matches patterns of
/// several categories, the category declared first wins. The separate
/// `priority_order` is exposed for callers layering their own rules and is
/// not consulted by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: Vec<CategoryRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        RuleTable { rules }
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn patterns_for(&self, category: Category) -> &[String] {
        self.rules
            .iter()
            .find(|rule| rule.category == category)
            .map(|rule| rule.patterns.as_slice())
            .unwrap_or(&[])
    }

    /// Categories from highest to lowest priority
    pub fn priority_order(&self) -> [Category; 10] {
        [
            Category::Development,
            Category::Productivity,
            Category::Documentation,
            Category::Education,
            Category::Social,
            Category::Media,
            Category::Shopping,
            Category::News,
            Category::Entertainment,
            Category::Other,
        ]
    }

    /// Returns a copy of the table with `pattern` added to `category`.
    /// A category not yet in the table is appended after the existing ones.
    pub fn with_pattern(&self, category: Category, pattern: &str) -> RuleTable {
        let mut rules = self.rules.clone();

        match rules.iter_mut().find(|rule| rule.category == category) {
            Some(rule) => {
                if !rule.patterns.iter().any(|p| p == pattern) {
                    rule.patterns.push(pattern.to_string());
                }
            }
            None => rules.push(CategoryRule {
                category,
                patterns: vec![pattern.to_string()],
            }),
        }

        RuleTable { rules }
    }

    /// Returns a copy of the table without `pattern` in `category`
    pub fn without_pattern(&self, category: Category, pattern: &str) -> RuleTable {
        let rules = self
            .rules
            .iter()
            .map(|rule| {
                if rule.category == category {
                    CategoryRule {
                        category,
                        patterns: rule
                            .patterns
                            .iter()
                            .filter(|p| p.as_str() != pattern)
                            .cloned()
                            .collect(),
                    }
                } else {
                    rule.clone()
                }
            })
            .collect();

        RuleTable { rules }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        let rules = DEFAULT_PATTERNS
            .iter()
            .map(|(category, patterns)| CategoryRule {
                category: *category,
                patterns: patterns.iter().map(|p| p.to_string()).collect(),
            })
            .collect();

        RuleTable { rules }
    }
}

// `Other` is deliberately absent: it is the fallback when nothing matches.
const DEFAULT_PATTERNS: &[(Category, &[&str])] = &[
    (
        Category::Development,
        &[
            "github.com",
            "gitlab.com",
            "stackoverflow.com",
            "stackexchange.com",
            "codepen.io",
            "jsfiddle.net",
            "codesandbox.io",
            "repl.it",
            "vercel.app",
            "netlify.app",
            "heroku.com",
            "dev.to",
            "medium.com/tag/programming",
            "hackernews.ycombinator.com",
            "npm.js.com",
            "packagephobia.com",
            "bundlephobia.com",
            "caniuse.com",
            "mdn.io",
            "developer.mozilla.org",
            "w3schools.com",
            "freecodecamp.org",
            "codecademy.com",
            "leetcode.com",
            "codewars.com",
            "atlassian.net",
            "bitbucket.org",
        ],
    ),
    (
        Category::Social,
        &[
            "facebook.com",
            "instagram.com",
            "twitter.com",
            "x.com",
            "linkedin.com",
            "tiktok.com",
            "snapchat.com",
            "reddit.com",
            "discord.com",
            "slack.com",
            "teams.microsoft.com",
            "zoom.us",
            "meet.google.com",
            "telegram.org",
            "whatsapp.com",
            "pinterest.com",
            "tumblr.com",
            "vk.com",
            "weibo.com",
        ],
    ),
    (
        Category::Media,
        &[
            "youtube.com",
            "youtu.be",
            "vimeo.com",
            "twitch.tv",
            "netflix.com",
            "hulu.com",
            "disneyplus.com",
            "primevideo.com",
            "spotify.com",
            "soundcloud.com",
            "apple.com/music",
            "music.google.com",
            "deezer.com",
            "pandora.com",
            "podcasts.google.com",
            "podcasts.apple.com",
            "anchor.fm",
            "imgur.com",
            "flickr.com",
            "unsplash.com",
            "pexels.com",
            "giphy.com",
        ],
    ),
    (
        Category::Shopping,
        &[
            "amazon.com",
            "amazon.fr",
            "amazon.co.uk",
            "ebay.com",
            "etsy.com",
            "shopify.com",
            "aliexpress.com",
            "alibaba.com",
            "walmart.com",
            "target.com",
            "bestbuy.com",
            "zalando.com",
            "asos.com",
            "zara.com",
            "h&m.com",
            "nike.com",
            "adidas.com",
            "booking.com",
            "airbnb.com",
            "expedia.com",
            "tripadvisor.com",
        ],
    ),
    (
        Category::Productivity,
        &[
            "google.com/docs",
            "docs.google.com",
            "drive.google.com",
            "sheets.google.com",
            "slides.google.com",
            "office.com",
            "outlook.com",
            "onedrive.com",
            "sharepoint.com",
            "notion.so",
            "airtable.com",
            "trello.com",
            "asana.com",
            "monday.com",
            "clickup.com",
            "todoist.com",
            "evernote.com",
            "onenote.com",
            "dropbox.com",
            "box.com",
            "figma.com",
            "canva.com",
            "miro.com",
            "lucidchart.com",
        ],
    ),
    (
        Category::Documentation,
        &[
            "docs.",
            "documentation.",
            "wiki.",
            "help.",
            "support.",
            "guides.",
            "manual.",
            "api.",
            "reference.",
            "confluence.atlassian.com",
            "gitbook.io",
            "readthedocs.io",
            "docusaurus.io",
            "mkdocs.org",
            "swagger.io",
            "postman.com",
        ],
    ),
    (
        Category::News,
        &[
            "bbc.com",
            "cnn.com",
            "nytimes.com",
            "theguardian.com",
            "reuters.com",
            "ap.org",
            "lemonde.fr",
            "lefigaro.fr",
            "liberation.fr",
            "franceinfo.fr",
            "rfi.fr",
            "france24.com",
            "techcrunch.com",
            "theverge.com",
            "wired.com",
            "arstechnica.com",
            "engadget.com",
            "cnet.com",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "imdb.com",
            "rottentomatoes.com",
            "metacritic.com",
            "goodreads.com",
            "letterboxd.com",
            "myanimelist.net",
            "crunchyroll.com",
            "funimation.com",
            "steam.com",
            "epicgames.com",
            "origin.com",
            "uplay.com",
            "gog.com",
            "9gag.com",
            "buzzfeed.com",
            "vice.com",
            "kotaku.com",
            "ign.com",
            "gamespot.com",
        ],
    ),
    (
        Category::Education,
        &[
            "coursera.org",
            "edx.org",
            "udemy.com",
            "udacity.com",
            "khanacademy.org",
            "pluralsight.com",
            "lynda.com",
            "skillshare.com",
            "masterclass.com",
            "duolingo.com",
            "babbel.com",
            "rosettastone.com",
            "wikipedia.org",
            "britannica.com",
            "scholar.google.com",
            "researchgate.net",
            "academia.edu",
            "jstor.org",
            "arxiv.org",
            "pubmed.ncbi.nlm.nih.gov",
            ".edu",
            "university",
            "college",
            "school",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_declaration_order() {
        let table = RuleTable::default();
        let categories: Vec<Category> = table.rules().iter().map(|r| r.category).collect();

        assert_eq!(categories.first(), Some(&Category::Development));
        assert_eq!(categories.last(), Some(&Category::Education));
        assert!(!categories.contains(&Category::Other));
        assert_eq!(categories.len(), 9);
    }

    #[test]
    fn test_patterns_for() {
        let table = RuleTable::default();

        assert!(table.patterns_for(Category::Development).iter().any(|p| p == "github.com"));
        assert!(table.patterns_for(Category::Documentation).iter().any(|p| p == "docs."));
        assert!(table.patterns_for(Category::Other).is_empty());
    }

    #[test]
    fn test_priority_order() {
        let order = RuleTable::default().priority_order();

        assert_eq!(order[0], Category::Development);
        assert_eq!(order[9], Category::Other);
        for category in Category::ALL {
            assert!(order.contains(&category));
        }
    }

    #[test]
    fn test_with_pattern_leaves_original_untouched() {
        let table = RuleTable::default();
        let extended = table.with_pattern(Category::Development, "crates.io");

        assert!(extended.patterns_for(Category::Development).iter().any(|p| p == "crates.io"));
        assert!(!table.patterns_for(Category::Development).iter().any(|p| p == "crates.io"));
    }

    #[test]
    fn test_with_pattern_duplicate_is_noop() {
        let table = RuleTable::default();
        let extended = table.with_pattern(Category::Media, "youtube.com");

        assert_eq!(extended, table);
    }

    #[test]
    fn test_with_pattern_new_category_appended() {
        let table = RuleTable::new(vec![CategoryRule {
            category: Category::News,
            patterns: vec!["bbc.com".to_string()],
        }]);

        let extended = table.with_pattern(Category::Other, "intranet");

        assert_eq!(extended.rules().len(), 2);
        assert_eq!(extended.rules()[1].category, Category::Other);
        assert_eq!(extended.patterns_for(Category::Other), &["intranet".to_string()]);
    }

    #[test]
    fn test_without_pattern() {
        let table = RuleTable::default();
        let reduced = table.without_pattern(Category::Social, "x.com");

        assert!(!reduced.patterns_for(Category::Social).iter().any(|p| p == "x.com"));
        assert_eq!(
            reduced.patterns_for(Category::Social).len(),
            table.patterns_for(Category::Social).len() - 1
        );
        assert_eq!(
            reduced.patterns_for(Category::Media),
            table.patterns_for(Category::Media)
        );
    }

    #[test]
    fn test_without_missing_pattern_is_noop() {
        let table = RuleTable::default();

        assert_eq!(table.without_pattern(Category::News, "nope.example"), table);
        assert_eq!(table.without_pattern(Category::Other, "anything"), table);
    }

    #[test]
    fn test_serialization_preserves_order() {
        let table = RuleTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let deserialized: RuleTable = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, table);
        assert!(json.starts_with("[{\"category\":\"development\""));
    }
}
