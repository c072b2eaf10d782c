pub mod analytics;
pub mod banner;
pub mod commands;
pub mod config;
pub mod consts;
pub mod demo;
pub mod engine;
pub mod events;
pub mod picker;
pub mod report;
pub mod session;
pub mod spinner;
pub mod submission;
pub mod templates;
