/// Yew hook wiring the grouping controller to the browser's tabs

use crate::config::GroupingConfig;
use crate::controller::{GroupingController, RefreshTicket};
use crate::tab_data::{GroupingStats, Tab, TabGroup};
use crate::tab_source::{ChromeTabSource, TabSource, TabSourceError};
use gloo_timers::callback::Interval;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

struct PopupState {
    controller: GroupingController,
    /// Plain tab list, shown when grouping is off
    tabs: Vec<Tab>,
    fetch_seq: u64,
    loading: bool,
    /// Last failure of the plain list fetch
    fetch_error: Option<String>,
    /// Last failed close/focus; only a later successful action clears it
    action_error: Option<String>,
    refetch_interval: Option<u32>,
}

impl PopupState {
    fn new(config: &GroupingConfig) -> Self {
        PopupState {
            controller: GroupingController::new(config),
            tabs: Vec::new(),
            fetch_seq: 0,
            loading: true,
            fetch_error: None,
            action_error: None,
            refetch_interval: config.refetch_interval,
        }
    }

    fn start_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// The plain list keeps only the newest fetch; the grouped view goes
    /// through the controller's ticket check.
    fn finish_fetch(
        &mut self,
        seq: u64,
        ticket: Option<RefreshTicket>,
        result: Result<Vec<Tab>, TabSourceError>,
    ) {
        if seq == self.fetch_seq {
            self.loading = false;
            match &result {
                Ok(tabs) => {
                    self.tabs = tabs.clone();
                    self.fetch_error = None;
                }
                Err(e) => self.fetch_error = Some(e.to_string()),
            }
        }
        if let Some(ticket) = ticket {
            self.controller.complete_refresh(ticket, result);
        }
    }

    fn record_action(&mut self, result: &Result<(), TabSourceError>) {
        self.action_error = result.as_ref().err().map(|e| e.to_string());
    }

    fn visible_error(&self) -> Option<String> {
        let fetch_error = if self.controller.is_grouping_enabled() {
            self.controller.last_error().map(|e| e.to_string())
        } else {
            self.fetch_error.clone()
        };
        self.action_error.clone().or(fetch_error)
    }
}

/// Snapshot of the grouped view plus the actions that change it
pub struct UseTabGroupingHandle {
    pub groups: Vec<TabGroup>,
    pub tabs: Vec<Tab>,
    pub grouping_enabled: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub stats: GroupingStats,
    pub refresh: Callback<()>,
    pub toggle_grouping: Callback<()>,
    pub toggle_group: Callback<String>,
    pub expand_all: Callback<()>,
    pub collapse_all: Callback<()>,
    pub close_tab: Callback<i32>,
    pub focus_tab: Callback<(i32, i32)>,
}

#[hook]
pub fn use_tab_grouping() -> UseTabGroupingHandle {
    let state = use_mut_ref(|| PopupState::new(&GroupingConfig::default()));
    let update = use_force_update();

    // Load tabs on mount
    {
        let state = state.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            refresh_now(state, update);
            || ()
        });
    }

    // Background refresh; dropping the interval on cleanup stops it
    {
        let refetch_interval = state.borrow().refetch_interval;
        let state = state.clone();
        let update = update.clone();
        use_effect_with(refetch_interval, move |interval| {
            let timer = interval.map(|millis| {
                Interval::new(millis, move || refresh_now(state.clone(), update.clone()))
            });
            move || drop(timer)
        });
    }

    let refresh = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |_: ()| refresh_now(state.clone(), update.clone()))
    };

    let toggle_grouping = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            let ticket = state.borrow_mut().controller.toggle_grouping();
            spawn_fetch(state.clone(), update.clone(), ticket);
        })
    };

    let toggle_group = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |group_id: String| {
            state.borrow_mut().controller.toggle_group(&group_id);
            update.force_update();
        })
    };

    let expand_all = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            state.borrow_mut().controller.expand_all();
            update.force_update();
        })
    };

    let collapse_all = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            state.borrow_mut().controller.collapse_all();
            update.force_update();
        })
    };

    let close_tab = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |tab_id: i32| {
            let state = state.clone();
            let update = update.clone();
            spawn_local(async move {
                let result = ChromeTabSource.close_tab(tab_id).await;
                state.borrow_mut().record_action(&result);
                match result {
                    Ok(()) => refresh_now(state, update),
                    Err(e) => {
                        warn!("Could not close tab {}: {}", tab_id, e);
                        update.force_update();
                    }
                }
            });
        })
    };

    let focus_tab = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |(tab_id, window_id): (i32, i32)| {
            let state = state.clone();
            let update = update.clone();
            spawn_local(async move {
                let result = ChromeTabSource.focus_tab(tab_id, window_id).await;
                if let Err(e) = &result {
                    warn!("Could not focus tab {}: {}", tab_id, e);
                }
                state.borrow_mut().record_action(&result);
                update.force_update();
            });
        })
    };

    let current = state.borrow();
    UseTabGroupingHandle {
        groups: current.controller.groups().to_vec(),
        tabs: current.tabs.clone(),
        grouping_enabled: current.controller.is_grouping_enabled(),
        loading: current.loading,
        error: current.visible_error(),
        stats: current.controller.stats(),
        refresh,
        toggle_grouping,
        toggle_group,
        expand_all,
        collapse_all,
        close_tab,
        focus_tab,
    }
}

fn refresh_now(state: Rc<RefCell<PopupState>>, update: UseForceUpdateHandle) {
    let ticket = state.borrow_mut().controller.begin_refresh();
    spawn_fetch(state, update, ticket);
}

/// Fetch the tab list once and hand the result to `finish_fetch`
fn spawn_fetch(
    state: Rc<RefCell<PopupState>>,
    update: UseForceUpdateHandle,
    ticket: Option<RefreshTicket>,
) {
    let seq = state.borrow_mut().start_fetch();
    update.force_update();

    spawn_local(async move {
        let result = ChromeTabSource.list_tabs().await;
        state.borrow_mut().finish_fetch(seq, ticket, result);
        update.force_update();
    });
}
