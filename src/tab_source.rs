/// Access to the browser's open tabs
use crate::tab_data::Tab;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/tabs.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn listAllTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeTab(tab_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn focusTab(tab_id: i32, window_id: i32) -> Result<JsValue, JsValue>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TabSourceError {
    #[error("Failed to fetch tabs: {0}")]
    Fetch(String),

    #[error("Tab action failed: {0}")]
    Action(String),

    #[error("Unexpected tab data: {0}")]
    Decode(String),
}

pub type Result<T, E = TabSourceError> = std::result::Result<T, E>;

/// Lists tabs and performs tab lifecycle actions.
///
/// Tab ids returned by `list_tabs` are passed back unchanged to
/// `close_tab` and `focus_tab`.
#[allow(async_fn_in_trait)]
pub trait TabSource {
    async fn list_tabs(&self) -> Result<Vec<Tab>>;

    async fn close_tab(&self, tab_id: i32) -> Result<()>;

    /// Activate the tab and bring its window to the front
    async fn focus_tab(&self, tab_id: i32, window_id: i32) -> Result<()>;
}

/// Tab source backed by the `chrome.tabs` extension API
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChromeTabSource;

impl TabSource for ChromeTabSource {
    async fn list_tabs(&self) -> Result<Vec<Tab>> {
        let tabs_js = listAllTabs()
            .await
            .map_err(|e| TabSourceError::Fetch(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(tabs_js).map_err(|e| TabSourceError::Decode(e.to_string()))
    }

    async fn close_tab(&self, tab_id: i32) -> Result<()> {
        removeTab(tab_id)
            .await
            .map(|_| ())
            .map_err(|e| TabSourceError::Action(js_error_message(&e)))
    }

    async fn focus_tab(&self, tab_id: i32, window_id: i32) -> Result<()> {
        focusTab(tab_id, window_id)
            .await
            .map(|_| ())
            .map_err(|e| TabSourceError::Action(js_error_message(&e)))
    }
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Unknown error occurred".to_string())
}
