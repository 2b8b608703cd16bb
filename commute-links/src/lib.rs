//! Commute link server.
//!
//! Serves a single page of train and bus timetable links for a fixed
//! commute, with the current date and time baked into each URL. The page
//! refreshes its links whenever the browser tab becomes visible again.

pub mod clock;
pub mod config;
pub mod domain;
pub mod links;
pub mod refresh;
pub mod web;
