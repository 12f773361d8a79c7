//! SpaceX demo site - Rust implementation
//!
//! A single-page application built with Dioxus:
//! - Home view with the next scheduled launch
//! - Historical events list with a detail pane
//! - Responsive top/side navigation (600px breakpoint)
//! - Light/dark theme persisted in browser storage

pub mod app;
pub mod config;
