/// Carry expansion state from one classification pass to the next.
///
/// Group ids change on every pass, so groups are matched by category: there
/// is at most one group per category in a pass.

use crate::tab_data::TabGroup;

/// Merge `previous` expansion flags into `fresh`.
///
/// Categories new in `fresh` keep their default flag; categories missing from
/// `fresh` are dropped along with their state.
pub fn reconcile(previous: &[TabGroup], fresh: Vec<TabGroup>) -> Vec<TabGroup> {
    if previous.is_empty() {
        return fresh;
    }

    fresh
        .into_iter()
        .map(|group| {
            match previous.iter().find(|old| old.category == group.category) {
                Some(old) => TabGroup {
                    is_expanded: old.is_expanded,
                    ..group
                },
                None => group,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;
    use crate::operations::{collapse_all, toggle_expansion};
    use crate::tab_data::{Category, Tab};

    fn create_test_tab(id: i32, url: &str) -> Tab {
        Tab::new(id, url.to_string(), format!("Tab {}", id), 1, id)
    }

    fn flag_of(groups: &[TabGroup], category: Category) -> Option<bool> {
        groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.is_expanded)
    }

    #[test]
    fn test_reconcile_carries_flags_by_category() {
        let classifier = Classifier::default();
        let old_pass = classifier.group_tabs(&[
            create_test_tab(1, "https://github.com/a"),
            create_test_tab(2, "https://reddit.com/r/rust"),
        ]);
        let old_pass = toggle_expansion(&old_pass, &old_pass[0].id);
        assert_eq!(flag_of(&old_pass, Category::Development), Some(false));

        let new_pass = classifier.group_tabs(&[
            create_test_tab(3, "https://gitlab.com/b"),
            create_test_tab(4, "https://github.com/c"),
            create_test_tab(5, "https://twitter.com/d"),
            create_test_tab(6, "https://youtube.com/e"),
        ]);

        let merged = reconcile(&old_pass, new_pass.clone());

        assert_eq!(flag_of(&merged, Category::Development), Some(false));
        assert_eq!(flag_of(&merged, Category::Social), Some(true));
        assert_eq!(flag_of(&merged, Category::Media), Some(true));

        // Everything but the flag comes from the new pass
        let ids: Vec<&str> = merged.iter().map(|g| g.id.as_str()).collect();
        let new_ids: Vec<&str> = new_pass.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, new_ids);
        assert_eq!(merged[0].tabs, new_pass[0].tabs);
    }

    #[test]
    fn test_reconcile_first_pass() {
        let fresh = Classifier::default().group_tabs(&[create_test_tab(1, "https://github.com")]);

        assert_eq!(reconcile(&[], fresh.clone()), fresh);
    }

    #[test]
    fn test_reconcile_drops_vanished_categories() {
        let classifier = Classifier::default();
        let old_pass = collapse_all(&classifier.group_tabs(&[
            create_test_tab(1, "https://github.com"),
            create_test_tab(2, "https://youtube.com"),
        ]));

        let without_media = reconcile(
            &old_pass,
            classifier.group_tabs(&[create_test_tab(1, "https://github.com")]),
        );
        assert_eq!(flag_of(&without_media, Category::Media), None);

        // Media state is not remembered once it has disappeared
        let media_back = reconcile(
            &without_media,
            classifier.group_tabs(&[
                create_test_tab(1, "https://github.com"),
                create_test_tab(2, "https://youtube.com"),
            ]),
        );
        assert_eq!(flag_of(&media_back, Category::Development), Some(false));
        assert_eq!(flag_of(&media_back, Category::Media), Some(true));
    }

    #[test]
    fn test_reconcile_unchanged_tabs_is_stable() {
        let classifier = Classifier::default();
        let tabs = vec![
            create_test_tab(1, "https://github.com"),
            create_test_tab(2, "https://youtube.com"),
            create_test_tab(3, "not-a-url"),
        ];
        let mut current = classifier.group_tabs(&tabs);
        current = toggle_expansion(&current, &current[1].id);
        let expected: Vec<bool> = current.iter().map(|g| g.is_expanded).collect();

        for _ in 0..3 {
            current = reconcile(&current, classifier.group_tabs(&tabs));
            let flags: Vec<bool> = current.iter().map(|g| g.is_expanded).collect();
            assert_eq!(flags, expected);
        }
    }
}
