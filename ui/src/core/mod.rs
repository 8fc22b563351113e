//! Platform glue and small shared utilities used across views.

pub mod format;
pub mod platform;
pub mod settings;
pub mod storage;
pub mod timing;
