// Library for tests to access modules

pub mod cli;
pub mod config;
pub mod errors;
#[cfg(feature = "gui")]
pub mod gui;
pub mod models;
pub mod monitor;
pub mod notify;
pub mod presenter;
pub mod rate;
pub mod source;
pub mod thresholds;
pub mod version;
