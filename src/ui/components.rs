/// Reusable UI components

use crate::domain::display_domain;
use crate::tab_data::{Tab, TabGroup};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="loading-container">
            <div class="loading-spinner"></div>
            if let Some(msg) = &props.message {
                <p class="loading-message">{msg}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub variant: ButtonVariant,
}

#[derive(PartialEq, Clone, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let variant_class = match props.variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Secondary => "btn btn-secondary",
    };

    html! {
        <button
            class={variant_class}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            {props.children.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: String,
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    html! {
        <div class="alert alert-error" role="alert">
            <p class="message-paragraph">{&props.message}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabRowProps {
    pub tab: Tab,
    pub on_focus: Callback<(i32, i32)>,
    pub on_close: Callback<i32>,
}

/// One tab: click to switch to it, x to close it
#[function_component(TabRow)]
pub fn tab_row(props: &TabRowProps) -> Html {
    let tab_id = props.tab.id;
    let window_id = props.tab.window_id;

    let onclick = {
        let on_focus = props.on_focus.clone();
        Callback::from(move |_: MouseEvent| on_focus.emit((tab_id, window_id)))
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            // Don't also focus the tab being closed
            e.stop_propagation();
            on_close.emit(tab_id);
        })
    };

    let title = if props.tab.title.is_empty() {
        props.tab.url.clone()
    } else {
        props.tab.title.clone()
    };
    let row_class = if props.tab.active { "tab-row tab-row-active" } else { "tab-row" };

    html! {
        <li class={row_class} {onclick} title={props.tab.url.clone()}>
            if let Some(icon) = &props.tab.fav_icon_url {
                <img class="tab-favicon" src={icon.clone()} alt="" />
            }
            <div class="tab-text">
                <span class="tab-title">{title}</span>
                <span class="tab-domain">{display_domain(&props.tab.url)}</span>
            </div>
            <button class="tab-close" aria-label="Close tab" onclick={on_close_click}>{"×"}</button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct GroupSectionProps {
    pub group: TabGroup,
    pub on_toggle: Callback<String>,
    pub on_focus: Callback<(i32, i32)>,
    pub on_close: Callback<i32>,
}

#[function_component(GroupSection)]
pub fn group_section(props: &GroupSectionProps) -> Html {
    let on_header_click = {
        let on_toggle = props.on_toggle.clone();
        let group_id = props.group.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(group_id.clone()))
    };

    let chevron = if props.group.is_expanded { "▾" } else { "▸" };

    html! {
        <section class="tab-group">
            <div class="tab-group-header" onclick={on_header_click}>
                <span class="chevron">{chevron}</span>
                <span class={props.group.category.css_class()}>{&props.group.name}</span>
                <span class="tab-group-count">{props.group.tabs.len().to_string()}</span>
            </div>
            if props.group.is_expanded {
                <ul class="tab-group-list">
                    { for props.group.tabs.iter().map(|tab| html! {
                        <TabRow
                            key={tab.id.to_string()}
                            tab={tab.clone()}
                            on_focus={props.on_focus.clone()}
                            on_close={props.on_close.clone()}
                        />
                    }) }
                </ul>
            }
        </section>
    }
}
