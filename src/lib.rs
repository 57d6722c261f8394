//! campus-profile - view the signed-in user's campus account profile
//!
//! This library exposes modules for use by the binary and integration tests.

pub mod adapters;
pub mod app;
pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod inspector;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
