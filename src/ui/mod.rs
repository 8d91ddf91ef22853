/// UI module exports
pub mod components;
pub mod hooks;
pub mod popup;
