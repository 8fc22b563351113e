//! Shared UI crate for the academy site: catalog, navigation, and every view.
//!
//! Platform crates (`web`, `desktop`) pick a history backend, call
//! [`use_app_state`] once at the root, and render [`Shell`].

pub mod catalog;
pub mod core;
pub mod i18n;
pub mod routing;
pub mod views;

mod app;
pub use app::{change_language, use_app_state};

mod shell;
pub use shell::Shell;

pub mod components;
