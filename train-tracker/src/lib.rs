//! Train voyage tracker.
//!
//! Answers "where is train N right now?" by scraping each carrier's
//! public train-position pages, with results cached per voyage.

pub mod cache;
pub mod clock;
pub mod config;
pub mod domain;
pub mod fetcher;
pub mod transport;
pub mod web;
