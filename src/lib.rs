//! SGA Board Frontend
//!
//! Client-side layer of the sprint board: typed page data, the lane movement
//! rules, the board controller and the Leptos components rendering it.

pub mod api;
pub mod app;
pub mod board;
pub mod boot;
pub mod capacity;
pub mod check_all;
pub mod columns;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod items;
pub mod logger;
pub mod models;
pub mod rules;
pub mod store;
