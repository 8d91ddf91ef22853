/// Popup UI for the Tab Sorter extension

use crate::ui::components::{Button, ButtonVariant, ErrorAlert, GroupSection, Spinner, TabRow};
use crate::ui::hooks::use_tab_grouping;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let grouping = use_tab_grouping();

    let on_toggle_grouping = {
        let toggle_grouping = grouping.toggle_grouping.clone();
        Callback::from(move |_: MouseEvent| toggle_grouping.emit(()))
    };

    let on_expand_all = {
        let expand_all = grouping.expand_all.clone();
        Callback::from(move |_: MouseEvent| expand_all.emit(()))
    };

    let on_collapse_all = {
        let collapse_all = grouping.collapse_all.clone();
        Callback::from(move |_: MouseEvent| collapse_all.emit(()))
    };

    let on_refresh = {
        let refresh = grouping.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let toggle_label = if grouping.grouping_enabled { "Ungroup" } else { "Group by category" };
    let tab_count = if grouping.grouping_enabled && !grouping.groups.is_empty() {
        grouping.stats.total_tabs
    } else {
        grouping.tabs.len()
    };
    let showing_spinner = grouping.loading && grouping.tabs.is_empty() && grouping.groups.is_empty();

    html! {
        <div class="popup">
            <header class="popup-header">
                <h1>{"Tab Sorter"}</h1>
                <span class="tab-count">{format!("{} tabs", tab_count)}</span>
            </header>

            <div class="toolbar">
                <Button onclick={on_toggle_grouping} variant={ButtonVariant::Secondary}>
                    {toggle_label}
                </Button>
                if grouping.grouping_enabled {
                    <>
                        <Button onclick={on_expand_all} variant={ButtonVariant::Secondary}>
                            {"Expand all"}
                        </Button>
                        <Button onclick={on_collapse_all} variant={ButtonVariant::Secondary}>
                            {"Collapse all"}
                        </Button>
                    </>
                }
                <Button onclick={on_refresh} disabled={grouping.loading}>
                    {"Refresh"}
                </Button>
            </div>

            if let Some(message) = &grouping.error {
                <ErrorAlert message={message.clone()} />
            }

            if showing_spinner {
                <Spinner message={"Loading tabs...".to_string()} />
            } else if grouping.grouping_enabled {
                <div class="group-list">
                    { for grouping.groups.iter().map(|group| html! {
                        <GroupSection
                            key={group.category.key()}
                            group={group.clone()}
                            on_toggle={grouping.toggle_group.clone()}
                            on_focus={grouping.focus_tab.clone()}
                            on_close={grouping.close_tab.clone()}
                        />
                    }) }
                </div>
            } else {
                <ul class="tab-list">
                    { for grouping.tabs.iter().map(|tab| html! {
                        <TabRow
                            key={tab.id.to_string()}
                            tab={tab.clone()}
                            on_focus={grouping.focus_tab.clone()}
                            on_close={grouping.close_tab.clone()}
                        />
                    }) }
                </ul>
            }
        </div>
    }
}
