pub mod auth;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod integrations;
pub mod jobs;
pub mod reports;
pub mod telemetry;
pub mod tokens;
pub mod ui;
